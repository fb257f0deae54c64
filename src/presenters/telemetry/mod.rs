pub mod latest;
pub mod log_sink;
