use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomFactorError {
    NotPositive { factor: f64 },
    NotFinite { factor: f64 },
}

impl fmt::Display for ZoomFactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { factor } => {
                write!(f, "zoom factor must be greater than zero: {}", factor)
            }
            Self::NotFinite { factor } => write!(f, "zoom factor must be finite: {}", factor),
        }
    }
}

impl Error for ZoomFactorError {}

/// Multiplier applied to the viewport scale. Greater than one zooms in.
///
/// Always finite and strictly positive, so no zoom can drive the scale to
/// zero or flip its sign.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    pub const IN: Self = Self(1.1);
    pub const OUT: Self = Self(0.9);

    pub fn new(factor: f64) -> Result<Self, ZoomFactorError> {
        if !factor.is_finite() {
            return Err(ZoomFactorError::NotFinite { factor });
        }

        if factor <= 0.0 {
            return Err(ZoomFactorError::NotPositive { factor });
        }

        Ok(Self(factor))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ZoomFactor {
    type Error = ZoomFactorError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::new(factor)
    }
}
