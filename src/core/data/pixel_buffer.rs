use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn surface_to_buffer_size(surface: SurfaceSize) -> usize {
    surface.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        surface: SurfaceSize,
    },
    BoundsMismatch {
        surface_buffer_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                surface_buffer_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "surface needs {} bytes but buffer holds {}",
                    surface_buffer_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, surface } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    pixel.x, pixel.y, surface.width, surface.height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Tightly packed RGB framebuffer, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    surface: SurfaceSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            buffer: vec![0; surface_to_buffer_size(surface)],
        }
    }

    pub fn from_data(
        surface: SurfaceSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let surface_buffer_size = surface_to_buffer_size(surface);

        if surface_buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                surface_buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { surface, buffer })
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.surface.contains_pixel(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                surface: self.surface,
            });
        }

        let row_start = pixel.y as usize * self.surface.width as usize;
        Ok((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
