pub mod frame_data;
pub mod telemetry;
