use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::sample::Sample;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::palettes::cosine_palette::CosinePalette;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    Algorithm(MandelbrotError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError<Infallible>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<Infallible>) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(never) => match never {},
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Rayon,
}

/// Evaluates and colours one full frame for `viewport`.
///
/// An empty surface produces an empty buffer without evaluating anything.
pub fn render_frame(
    surface: SurfaceSize,
    viewport: &Viewport,
    parallelism: Parallelism,
) -> Result<PixelBuffer, RenderFrameError> {
    if surface.is_empty() {
        return Ok(PixelBuffer::new(surface));
    }

    let algorithm = MandelbrotAlgorithm::new(surface, *viewport);
    let samples: Vec<Sample> = match parallelism {
        Parallelism::Sequential => generate_fractal(surface, &algorithm)?,
        Parallelism::Rayon => generate_fractal_parallel_rayon(surface, &algorithm)?,
    };

    let palette = CosinePalette::new(viewport.max_iterations());

    Ok(generate_pixel_buffer(samples, &palette, surface)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;

    #[test]
    fn sequential_and_rayon_frames_are_identical() {
        let surface = SurfaceSize::new(64, 48);
        let viewport = Viewport::new(Complex::new(-0.745, 0.113), 60.0, 600).unwrap();

        let sequential = render_frame(surface, &viewport, Parallelism::Sequential).unwrap();
        let parallel = render_frame(surface, &viewport, Parallelism::Rayon).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_surface_renders_empty_buffer() {
        let surface = SurfaceSize::new(0, 600);

        let buffer = render_frame(surface, &Viewport::default(), Parallelism::Rayon).unwrap();

        assert_eq!(buffer.buffer_size(), 0);
        assert_eq!(buffer.surface(), surface);
    }

    #[test]
    fn centre_of_default_view_is_black_and_far_corner_is_not() {
        let surface = SurfaceSize::new(81, 61);

        let buffer = render_frame(surface, &Viewport::default(), Parallelism::Rayon).unwrap();

        assert_eq!(buffer.pixel(Point { x: 40, y: 30 }).unwrap(), Colour::BLACK);
        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn rendering_is_deterministic() {
        let surface = SurfaceSize::new(32, 32);
        let viewport = Viewport::new(Complex::new(-1.25, 0.02), 8.0, 300).unwrap();

        let first = render_frame(surface, &viewport, Parallelism::Rayon).unwrap();
        let second = render_frame(surface, &viewport, Parallelism::Rayon).unwrap();

        assert_eq!(first, second);
    }
}
