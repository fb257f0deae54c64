//! Interactive Mandelbrot set explorer.
//!
//! The core maps pixels to the complex plane, runs the escape-time iteration
//! and colours each sample with a cosine palette. A viewport controller owns
//! pan and zoom state, and a single-stepped frame driver pushes frames to a
//! display surface. The windowed front end lives behind the `gui` feature.

pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
mod logging;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig};
pub use controllers::interactive::{
    DisplaySurface, FrameData, FrameDriver, FrameDriverError, InputEvent, Presentation, Telemetry,
    TelemetrySink, TickOutcome,
};
pub use crate::core::actions::render_frame::backend::{
    BackendError, ComputeBackend, RayonBackend, SequentialBackend,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::screen_point::ScreenPoint;
pub use crate::core::data::surface_size::SurfaceSize;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::view::controller::ViewportController;
pub use crate::core::view::pan_hold::PanHoldState;
pub use crate::core::view::settings::ViewSettings;
pub use crate::core::view::zoom_factor::ZoomFactor;
pub use logging::init_logging;
pub use presenters::file::ppm::PpmFileSurface;
pub use presenters::telemetry::latest::LatestTelemetry;
pub use presenters::telemetry::log_sink::LogTelemetrySink;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
