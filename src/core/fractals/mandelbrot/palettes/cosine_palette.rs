use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::sample::Sample;
use std::convert::Infallible;
use std::f64::consts::TAU;

/// Coefficients of `a + b * cos(2π(c * t + d))`, one entry per RGB channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteCoefficients {
    pub a: [f64; 3],
    pub b: [f64; 3],
    pub c: [f64; 3],
    pub d: [f64; 3],
}

// Changing these changes how every frame looks.
pub const DEFAULT_COEFFICIENTS: PaletteCoefficients = PaletteCoefficients {
    a: [0.5, 0.5, 0.5],
    b: [0.5, 0.5, 0.5],
    c: [1.0, 1.0, 1.0],
    d: [0.0, 0.33, 0.67],
};

impl Default for PaletteCoefficients {
    fn default() -> Self {
        DEFAULT_COEFFICIENTS
    }
}

impl PaletteCoefficients {
    /// Linear RGB at `t`. Periodic in `t`, so any finite value is valid.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> [f64; 3] {
        std::array::from_fn(|channel| {
            self.a[channel]
                + self.b[channel] * (TAU * (self.c[channel] * t + self.d[channel])).cos()
        })
    }
}

/// Colours samples by their smooth escape count normalised to the budget.
/// Interior samples are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosinePalette {
    coefficients: PaletteCoefficients,
    max_iterations: u32,
}

impl ColourMap for CosinePalette {
    type T = Sample;
    type Failure = Infallible;

    fn map(&self, sample: Sample) -> Result<Colour, Self::Failure> {
        let Some(smooth) = sample.smooth_iterations() else {
            return Ok(Colour::BLACK);
        };

        let t = smooth / f64::from(self.max_iterations.max(1));

        Ok(Colour::from_unit_rgb(self.coefficients.evaluate(t)))
    }
}

impl CosinePalette {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self::with_coefficients(DEFAULT_COEFFICIENTS, max_iterations)
    }

    #[must_use]
    pub fn with_coefficients(coefficients: PaletteCoefficients, max_iterations: u32) -> Self {
        Self {
            coefficients,
            max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn escaped(iterations: u32, final_magnitude: f64) -> Sample {
        Sample {
            c: Complex::ZERO,
            iterations,
            final_magnitude,
            escaped: true,
        }
    }

    #[test]
    fn interior_is_black_regardless_of_count() {
        let palette = CosinePalette::new(100);
        let sample = Sample {
            escaped: false,
            ..escaped(37, 1.5)
        };

        assert_eq!(palette.map(sample).unwrap(), Colour::BLACK);
    }

    #[test]
    fn t_zero_matches_closed_form() {
        // smooth = 0 when i = 0 and |z| = 2
        let palette = CosinePalette::new(100);

        let colour = palette.map(escaped(0, 2.0)).unwrap();
        let expected = Colour::from_unit_rgb([
            1.0,
            0.5 + 0.5 * (TAU * 0.33).cos(),
            0.5 + 0.5 * (TAU * 0.67).cos(),
        ]);

        assert_eq!(colour, expected);
        assert_eq!(colour.r, 255);
    }

    #[test]
    fn t_is_periodic_with_period_one() {
        let coefficients = DEFAULT_COEFFICIENTS;

        for t in [0.1, 0.42, 0.9] {
            let base = coefficients.evaluate(t);
            let shifted = coefficients.evaluate(t + 3.0);

            for channel in 0..3 {
                assert!((base[channel] - shifted[channel]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn values_above_one_still_produce_colours() {
        let palette = CosinePalette::new(10);

        // smooth = 1000 - 0, far above the budget
        let colour = palette.map(escaped(1000, 2.0)).unwrap();

        assert_eq!(colour, palette.map(escaped(0, 2.0)).unwrap());
    }

    #[test]
    fn evaluate_stays_in_unit_range() {
        let coefficients = DEFAULT_COEFFICIENTS;

        for step in -50..50 {
            let rgb = coefficients.evaluate(f64::from(step) * 0.37);

            assert!(rgb.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }

    #[test]
    fn mapping_is_deterministic() {
        let palette = CosinePalette::new(2000);
        let sample = escaped(517, 3.7);

        assert_eq!(palette.map(sample).unwrap(), palette.map(sample).unwrap());
    }
}
