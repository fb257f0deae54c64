//! Input adapters: translate device input into viewport events.

pub mod gui;
