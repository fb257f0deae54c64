pub mod algorithm;
pub mod errors;
pub mod palettes;
