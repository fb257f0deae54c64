pub mod backend;
pub mod render_frame;
