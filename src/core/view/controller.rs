use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::util::screen_to_complex_coords::screen_to_uv;
use crate::core::view::input_event::InputEvent;
use crate::core::view::iteration_budget::iterations_for_scale;
use crate::core::view::pan_hold::PanHoldState;
use crate::core::view::settings::ViewSettings;
use crate::core::view::zoom_factor::ZoomFactor;

/// Owns the interactive [`Viewport`] and applies the pan, zoom and reset
/// transitions to it.
///
/// Every transition keeps `scale` finite and inside the configured scale
/// range, and recomputes the iteration budget whenever the scale changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    settings: ViewSettings,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            viewport: Viewport::default(),
            settings,
        }
    }

    #[must_use]
    pub fn with_viewport(viewport: Viewport, settings: ViewSettings) -> Self {
        Self { viewport, settings }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Drags the view by `(dx, dy)` screen pixels so the content follows the
    /// cursor. No-op on an empty surface.
    pub fn pan(&mut self, dx: f64, dy: f64, surface: SurfaceSize) {
        if surface.is_empty() {
            return;
        }

        let height = f64::from(surface.height);
        let pixel_size = 2.0 / (height * self.viewport.scale());
        let center = self.viewport.center();

        self.viewport.set_center(Complex {
            real: center.real - dx * pixel_size * surface.aspect_ratio(),
            imag: center.imag + dy * pixel_size,
        });
    }

    /// Zooms by `factor` keeping the complex point under `point` fixed on
    /// screen. Falls back to a centre zoom on an empty surface.
    pub fn zoom_at_point(&mut self, point: ScreenPoint, surface: SurfaceSize, factor: ZoomFactor) {
        if surface.is_empty() {
            self.zoom_at_center(factor);
            return;
        }

        self.zoom_about_uv(screen_to_uv(point, surface), factor);
    }

    pub fn zoom_at_center(&mut self, factor: ZoomFactor) {
        self.zoom_about_uv(Complex::ZERO, factor);
    }

    pub fn reset(&mut self) {
        self.viewport = Viewport::default();
    }

    /// Moves the center one tick along the held direction. Returns whether
    /// anything moved.
    pub fn pan_hold_step(&mut self, state: PanHoldState) -> bool {
        let Some([x, y]) = state.direction() else {
            return false;
        };

        let step = self.settings.base_pan_speed / self.viewport.scale();
        if step == 0.0 {
            return false;
        }

        let center = self.viewport.center();
        self.viewport.set_center(Complex {
            real: center.real + x * step,
            imag: center.imag + y * step,
        });

        true
    }

    /// Applies a discrete input event. Pan-hold events carry state that
    /// outlives a single call, so they are left to the caller and ignored
    /// here.
    pub fn apply(&mut self, event: InputEvent, surface: SurfaceSize) {
        match event {
            InputEvent::PanDelta { dx, dy } => self.pan(dx, dy, surface),
            InputEvent::ZoomAtPoint { point, factor } => {
                self.zoom_at_point(point, surface, factor);
            }
            InputEvent::ZoomAtCenter { factor } => self.zoom_at_center(factor),
            InputEvent::Reset => self.reset(),
            InputEvent::PanHold(_) => {}
        }
    }

    fn zoom_about_uv(&mut self, uv: Complex, factor: ZoomFactor) {
        let scale = self.viewport.scale();
        let anchor = self.viewport.center() + uv / scale;
        let new_scale = self.settings.clamp_scale(scale * factor.get());

        if !new_scale.is_finite() || new_scale <= 0.0 {
            log::warn!("ignoring zoom to unusable scale {}", new_scale);
            return;
        }

        self.viewport.set_center(anchor - uv / new_scale);
        self.viewport
            .set_scale_and_iterations(new_scale, iterations_for_scale(new_scale));

        log::debug!(
            "zoom x{} -> scale {:e}, {} iterations",
            factor.get(),
            new_scale,
            self.viewport.max_iterations()
        );
    }
}
