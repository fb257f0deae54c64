pub mod frame_driver;
