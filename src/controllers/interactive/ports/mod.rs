pub mod display_surface;
pub mod telemetry_sink;
