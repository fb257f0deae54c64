use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Maps row-major input values to colours and packs them into a buffer for
/// `surface`.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    surface: SurfaceSize,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    PixelBuffer::from_data(surface, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}
