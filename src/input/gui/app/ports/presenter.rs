use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use egui::Context as EguiContext;

/// A display surface that lives in a window and can draw the egui overlay
/// over the last presented frame.
pub trait GuiPresenterPort: DisplaySurface {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    /// Zero sizes are allowed and make the surface report itself as empty.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
