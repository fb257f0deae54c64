use crate::core::data::point::Point;
use crate::core::data::screen_point::ScreenPoint;

/// Size in pixels of the surface being rendered to.
///
/// A zero-area size is valid: minimised windows report one, and rendering
/// treats it as "nothing to do" rather than an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Width over height. Only meaningful for non-empty surfaces.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn centre(&self) -> ScreenPoint {
        ScreenPoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }
}
