use crate::controllers::interactive::data::telemetry::Telemetry;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::util::screen_to_complex_coords::visible_bounds;

/// What the overlay shows for one frame.
#[derive(Debug, Clone, Copy)]
pub struct OverlayData {
    pub viewport: Viewport,
    pub surface: SurfaceSize,
    pub telemetry: Option<Telemetry>,
}

/// Draws the readout window. Returns true when Reset was clicked.
pub fn draw_overlay(ctx: &egui::Context, data: &OverlayData) -> bool {
    let mut reset_clicked = false;
    let viewport = data.viewport;

    egui::Window::new("Mandelbrot")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Scale: {:.4e}", viewport.scale()));
            ui.label(format!(
                "Center: {:.12}, {:.12}i",
                viewport.center().real,
                viewport.center().imag
            ));
            ui.label(format!("Iterations: {}", viewport.max_iterations()));

            let fps = data.telemetry.map_or(0, |telemetry| telemetry.fps);
            ui.label(format!("FPS: {}", fps));

            if !data.surface.is_empty() {
                let (top_left, bottom_right) = visible_bounds(data.surface, &viewport);
                ui.separator();
                ui.label(format!(
                    "Real: [{:.6}, {:.6}]",
                    top_left.real, bottom_right.real
                ));
                ui.label(format!(
                    "Imag: [{:.6}, {:.6}]",
                    bottom_right.imag, top_left.imag
                ));
            }

            ui.separator();
            if ui.button("Reset").clicked() {
                reset_clicked = true;
            }
            ui.small("Drag to pan, wheel to zoom, WASD/arrows, +/- and R");
        });

    reset_clicked
}
