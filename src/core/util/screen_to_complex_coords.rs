use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;

/// Normalises a surface position to view space.
///
/// The vertical axis spans `[-1, 1]` bottom to top, the horizontal axis is
/// stretched by the aspect ratio so that one unit is the same length on screen
/// along both axes. The surface centre maps to exactly `(0, 0)`.
#[must_use]
pub fn screen_to_uv(point: ScreenPoint, surface: SurfaceSize) -> Complex {
    let width = f64::from(surface.width);
    let height = f64::from(surface.height);

    Complex {
        real: (2.0 * point.x - width) / height,
        imag: (height - 2.0 * point.y) / height,
    }
}

/// Complex coordinate shown at `point`: `center + uv / scale`.
#[must_use]
pub fn screen_to_complex_coords(
    point: ScreenPoint,
    surface: SurfaceSize,
    viewport: &Viewport,
) -> Complex {
    viewport.center() + screen_to_uv(point, surface) / viewport.scale()
}

#[must_use]
pub fn complex_to_screen_coords(
    c: Complex,
    surface: SurfaceSize,
    viewport: &Viewport,
) -> ScreenPoint {
    let width = f64::from(surface.width);
    let height = f64::from(surface.height);
    let uv_real = (c.real - viewport.center().real) * viewport.scale();
    let uv_imag = (c.imag - viewport.center().imag) * viewport.scale();

    ScreenPoint {
        x: (uv_real * height + width) / 2.0,
        y: (height - uv_imag * height) / 2.0,
    }
}

/// Complex coordinates of the top-left and bottom-right surface corners.
#[must_use]
pub fn visible_bounds(surface: SurfaceSize, viewport: &Viewport) -> (Complex, Complex) {
    let top_left = screen_to_complex_coords(ScreenPoint::new(0.0, 0.0), surface, viewport);
    let bottom_right = screen_to_complex_coords(
        ScreenPoint::new(f64::from(surface.width), f64::from(surface.height)),
        surface,
        viewport,
    );

    (top_left, bottom_right)
}
