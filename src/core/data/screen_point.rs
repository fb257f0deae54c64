use crate::core::data::point::Point;

/// Continuous position on a display surface.
///
/// Origin is the top-left corner and `y` grows downward, matching window
/// cursor coordinates. Pixel `(i, j)` covers `[i, i + 1) x [j, j + 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sample position used when evaluating pixel `pixel`.
    #[must_use]
    pub fn pixel_centre(pixel: Point) -> Self {
        Self {
            x: f64::from(pixel.x) + 0.5,
            y: f64::from(pixel.y) + 0.5,
        }
    }
}
