use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotError {
    PixelOutsideSurface { pixel: Point, surface: SurfaceSize },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideSurface { pixel, surface } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} surface",
                    pixel.x, pixel.y, surface.width, surface.height
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
