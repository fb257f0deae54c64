use crate::core::view::zoom_factor::{ZoomFactor, ZoomFactorError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewSettingsError {
    InvalidPanSpeed { speed: f64 },
    InvalidZoomFactor(ZoomFactorError),
    InvalidScaleRange { min_scale: f64, max_scale: f64 },
}

impl fmt::Display for ViewSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPanSpeed { speed } => {
                write!(f, "pan speed must be finite and non-negative: {}", speed)
            }
            Self::InvalidZoomFactor(err) => write!(f, "invalid zoom factor: {}", err),
            Self::InvalidScaleRange {
                min_scale,
                max_scale,
            } => write!(
                f,
                "scale range must satisfy 0 < min <= max < inf, got [{}, {}]",
                min_scale, max_scale
            ),
        }
    }
}

impl Error for ViewSettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidZoomFactor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ZoomFactorError> for ViewSettingsError {
    fn from(err: ZoomFactorError) -> Self {
        Self::InvalidZoomFactor(err)
    }
}

/// Tunables for the viewport controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewSettings {
    /// Complex-plane distance covered by one pan-hold step at scale 1.
    pub base_pan_speed: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            base_pan_speed: 0.02,
            zoom_in_factor: ZoomFactor::IN.get(),
            zoom_out_factor: ZoomFactor::OUT.get(),
            min_scale: 1e-3,
            max_scale: 1e13,
        }
    }
}

impl ViewSettings {
    pub fn validate(&self) -> Result<(), ViewSettingsError> {
        if !self.base_pan_speed.is_finite() || self.base_pan_speed < 0.0 {
            return Err(ViewSettingsError::InvalidPanSpeed {
                speed: self.base_pan_speed,
            });
        }

        ZoomFactor::new(self.zoom_in_factor)?;
        ZoomFactor::new(self.zoom_out_factor)?;

        let range_ok = self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= self.max_scale;

        if !range_ok {
            return Err(ViewSettingsError::InvalidScaleRange {
                min_scale: self.min_scale,
                max_scale: self.max_scale,
            });
        }

        Ok(())
    }

    /// Falls back to [`ZoomFactor::IN`] when the configured value is invalid.
    #[must_use]
    pub fn zoom_in(&self) -> ZoomFactor {
        ZoomFactor::new(self.zoom_in_factor).unwrap_or(ZoomFactor::IN)
    }

    /// Falls back to [`ZoomFactor::OUT`] when the configured value is invalid.
    #[must_use]
    pub fn zoom_out(&self) -> ZoomFactor {
        ZoomFactor::new(self.zoom_out_factor).unwrap_or(ZoomFactor::OUT)
    }

    /// Clamps `scale` to `[min_scale, max_scale]`. Does not panic on an
    /// inverted range.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}
