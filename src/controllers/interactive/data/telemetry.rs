use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Readout published after every presented frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub frame_number: u64,
    pub scale: f64,
    pub center: Complex,
    pub max_iterations: u32,
    pub fps: u32,
    /// Set on the frame that closed an fps window.
    pub fps_refreshed: bool,
}

impl Telemetry {
    #[must_use]
    pub fn from_viewport(
        viewport: &Viewport,
        frame_number: u64,
        fps: u32,
        fps_refreshed: bool,
    ) -> Self {
        Self {
            frame_number,
            scale: viewport.scale(),
            center: viewport.center(),
            max_iterations: viewport.max_iterations(),
            fps,
            fps_refreshed,
        }
    }
}
