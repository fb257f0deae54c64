//! Runtime configuration, read from a JSON file.
//!
//! Every section falls back to its defaults, so a config file only needs the
//! keys it changes:
//!
//! ```json
//! { "window": { "width": 1280 }, "view": { "base_pan_speed": 0.05 } }
//! ```
//!
//! Unknown keys are rejected so that a misspelt setting fails loudly.

use crate::core::data::complex::Complex;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::view::iteration_budget::iterations_for_scale;
use crate::core::view::settings::{ViewSettings, ViewSettingsError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "MANDELBROT_EXPLORER_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    EmptyWindow,
    EmptySnapshot,
    ZeroThreads,
    View(ViewSettingsError),
    SnapshotView(ViewportError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
            Self::EmptyWindow => write!(f, "window width and height must be greater than zero"),
            Self::EmptySnapshot => {
                write!(f, "snapshot width and height must be greater than zero")
            }
            Self::ZeroThreads => write!(f, "compute.threads must be greater than zero"),
            Self::View(err) => write!(f, "invalid view settings: {}", err),
            Self::SnapshotView(err) => write!(f, "invalid snapshot view: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::View(err) => Some(err),
            Self::SnapshotView(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewSettingsError> for ConfigError {
    fn from(err: ViewSettingsError) -> Self {
        Self::View(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Mandelbrot Explorer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComputeConfig {
    /// Worker threads for the render pool. `None` uses every core.
    pub threads: Option<usize>,
}

impl ComputeConfig {
    #[must_use]
    pub fn thread_count(&self) -> Option<NonZeroUsize> {
        self.threads.and_then(NonZeroUsize::new)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
    pub center: Complex,
    pub scale: f64,
    /// Overrides the budget derived from `scale`.
    pub max_iterations: Option<u32>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        let view = Viewport::default();

        Self {
            width: 800,
            height: 600,
            output_path: PathBuf::from("output/mandelbrot.ppm"),
            center: view.center(),
            scale: view.scale(),
            max_iterations: None,
        }
    }
}

impl SnapshotConfig {
    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    /// The view to render, with the iteration budget following the scale
    /// unless `max_iterations` pins it.
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        let max_iterations = match self.max_iterations {
            Some(iterations) => iterations,
            None if self.scale.is_finite() && self.scale > 0.0 => {
                iterations_for_scale(self.scale)
            }
            None => 1,
        };

        Viewport::new(self.center, self.scale, max_iterations)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub window: WindowConfig,
    pub view: ViewSettings,
    pub compute: ComputeConfig,
    pub snapshot: SnapshotConfig,
}

impl ExplorerConfig {
    /// Reads and validates the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `MANDELBROT_EXPLORER_CONFIG`, or defaults when
    /// the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                log::info!("loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => {
                log::info!("{} not set, using default config", CONFIG_PATH_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::EmptyWindow);
        }

        if self.snapshot.surface().is_empty() {
            return Err(ConfigError::EmptySnapshot);
        }

        self.snapshot.viewport().map_err(ConfigError::SnapshotView)?;

        if self.compute.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }

        self.view.validate()?;

        Ok(())
    }
}
