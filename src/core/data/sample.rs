use crate::core::data::complex::Complex;

/// Result of evaluating one point. Built and thrown away every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub c: Complex,
    /// Zero-based step at which the orbit escaped, or the spent budget for
    /// interior points.
    pub iterations: u32,
    /// `|z|` at the escape step. Meaningless for interior points.
    pub final_magnitude: f64,
    pub escaped: bool,
}

impl Sample {
    /// Fractional escape count `i - log2(log2(|z|))`, or `None` for points
    /// classified as interior.
    ///
    /// Falls back to the integer count when `|z|` overflowed, so an escaped
    /// sample always yields a finite value.
    #[must_use]
    pub fn smooth_iterations(&self) -> Option<f64> {
        if !self.escaped {
            return None;
        }

        let iterations = f64::from(self.iterations);
        let smooth = iterations - self.final_magnitude.log2().log2();

        if smooth.is_finite() {
            Some(smooth)
        } else {
            Some(iterations)
        }
    }
}
