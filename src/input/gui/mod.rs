//! Windowed front end.
//!
//! winit owns the window and event loop, `pixels` owns the framebuffer and
//! egui draws the readout overlay on top of it. Everything here only decodes
//! device input into [`InputEvent`](crate::core::view::input_event::InputEvent)s
//! and single-steps the frame driver once per redraw.

pub mod app;
pub mod commands;
pub mod errors;
