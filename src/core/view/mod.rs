pub mod controller;
pub mod input_event;
pub mod iteration_budget;
pub mod pan_hold;
pub mod settings;
pub mod zoom_factor;
