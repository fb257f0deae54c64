use crate::core::data::screen_point::ScreenPoint;
use crate::core::view::pan_hold::PanHoldState;
use crate::core::view::zoom_factor::ZoomFactor;

/// A user intent, already decoded from whatever device produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Drag by `(dx, dy)` pixels, screen y pointing down.
    PanDelta { dx: f64, dy: f64 },
    ZoomAtPoint { point: ScreenPoint, factor: ZoomFactor },
    ZoomAtCenter { factor: ZoomFactor },
    Reset,
    /// Replaces the set of held pan directions.
    PanHold(PanHoldState),
}
