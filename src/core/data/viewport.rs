use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 2000;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    InvalidCenter { center: Complex },
    ZeroMaxIterations,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be finite and positive: {}", scale)
            }
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ViewportError {}

/// Region of the complex plane on screen and the iteration budget used to
/// render it.
///
/// `scale` is always finite and strictly positive and `max_iterations` is at
/// least one. Only [`Viewport::new`] and the viewport controller can produce
/// or change a viewport, and both uphold that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale: f64,
    max_iterations: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Viewport {
    pub fn new(center: Complex, scale: f64, max_iterations: u32) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::InvalidCenter { center });
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            center,
            scale,
            max_iterations,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub(crate) fn set_center(&mut self, center: Complex) {
        if center.is_finite() {
            self.center = center;
        }
    }

    pub(crate) fn set_scale_and_iterations(&mut self, scale: f64, max_iterations: u32) {
        debug_assert!(scale.is_finite() && scale > 0.0);
        self.scale = scale;
        self.max_iterations = max_iterations.max(1);
    }
}
