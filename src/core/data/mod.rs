pub mod colour;
pub mod complex;
pub mod frame_stats;
pub mod pixel_buffer;
pub mod point;
pub mod sample;
pub mod screen_point;
pub mod surface_size;
pub mod viewport;
