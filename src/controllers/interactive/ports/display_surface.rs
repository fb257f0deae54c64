use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;

/// What a surface did with a frame it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Shown,
    /// The frame no longer fits the surface, e.g. after a resize race.
    Dropped,
}

/// Where finished frames go.
pub trait DisplaySurface {
    type Error: Error + 'static;

    /// Current size in pixels. May be zero-area while minimised.
    fn surface_size(&self) -> SurfaceSize;

    fn present(&mut self, frame: FrameData) -> Result<Presentation, Self::Error>;
}
