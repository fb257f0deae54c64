use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::sample::Sample;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::screen_to_complex_coords::screen_to_complex_coords;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Upper bound on iterations regardless of the requested budget.
pub const HARD_ITERATION_LIMIT: u32 = 100_000;

/// Iterates `z = z² + c` from `z = 0` until `|z| > 2` or the budget runs out.
///
/// A squared magnitude that fails `<= 4` counts as an escape, which also
/// covers orbits that overflowed to infinity or NaN.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> Sample {
    let budget = max_iterations.min(HARD_ITERATION_LIMIT);
    let mut z = Complex::ZERO;

    for iteration in 0..budget {
        z = z * z + c;

        let magnitude_squared = z.magnitude_squared();
        if !(magnitude_squared <= ESCAPE_RADIUS_SQUARED) {
            return Sample {
                c,
                iterations: iteration,
                final_magnitude: z.magnitude(),
                escaped: true,
            };
        }
    }

    Sample {
        c,
        iterations: budget,
        final_magnitude: z.magnitude(),
        escaped: false,
    }
}

/// Per-frame evaluation snapshot: every pixel of `surface` against one
/// read-only `viewport`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    surface: SurfaceSize,
    viewport: Viewport,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Sample;
    type Failure = MandelbrotError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.surface.contains_pixel(pixel) {
            return Err(MandelbrotError::PixelOutsideSurface {
                pixel,
                surface: self.surface,
            });
        }

        let c = screen_to_complex_coords(
            ScreenPoint::pixel_centre(pixel),
            self.surface,
            &self.viewport,
        );

        Ok(escape_time(c, self.viewport.max_iterations()))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(surface: SurfaceSize, viewport: Viewport) -> Self {
        Self { surface, viewport }
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
