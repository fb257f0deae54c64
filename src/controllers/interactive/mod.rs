//! Frame driver for interactive exploration.
//!
//! The driver owns the viewport controller, the held-pan input snapshot and
//! the frame statistics, and single-steps the render loop: one call to
//! [`FrameDriver::tick`] renders and presents exactly one frame.
//!
//! # Architecture
//!
//! Ports and adapters, like the rest of the crate:
//! - **Input**: [`InputEvent`]s decoded by whichever device adapter is active
//! - **Output**: [`DisplaySurface`] for pixels, [`TelemetrySink`] for readouts
//! - **Core**: the viewport controller and a compute backend from `core/`

pub mod data;
mod driver;
pub mod errors;
pub mod ports;

pub use crate::core::view::input_event::InputEvent;
pub use data::frame_data::FrameData;
pub use data::telemetry::Telemetry;
pub use driver::{FrameDriver, TickOutcome};
pub use errors::frame_driver::FrameDriverError;
pub use ports::display_surface::{DisplaySurface, Presentation};
pub use ports::telemetry_sink::TelemetrySink;
