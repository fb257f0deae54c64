use crate::core::data::screen_point::ScreenPoint;
use crate::core::view::input_event::InputEvent;
use crate::core::view::zoom_factor::ZoomFactor;

/// Turns cursor motion, left-drag and the wheel into viewport input.
///
/// Positions are physical pixels, the same units as the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    cursor: Option<ScreenPoint>,
    dragging: bool,
    zoom_in: ZoomFactor,
    zoom_out: ZoomFactor,
}

impl PointerInput {
    #[must_use]
    pub fn new(zoom_in: ZoomFactor, zoom_out: ZoomFactor) -> Self {
        Self {
            cursor: None,
            dragging: false,
            zoom_in,
            zoom_out,
        }
    }

    /// Tracks the cursor and emits a pan while the left button is held.
    pub fn cursor_moved(&mut self, position: ScreenPoint) -> Option<InputEvent> {
        let previous = self.cursor.replace(position);

        match previous {
            Some(previous) if self.dragging => Some(InputEvent::PanDelta {
                dx: position.x - previous.x,
                dy: position.y - previous.y,
            }),
            _ => None,
        }
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Zooms at the cursor; positive `scroll` is away from the user.
    #[must_use]
    pub fn wheel(&self, scroll: f64) -> Option<InputEvent> {
        let point = self.cursor?;

        let factor = if scroll > 0.0 {
            self.zoom_in
        } else if scroll < 0.0 {
            self.zoom_out
        } else {
            return None;
        };

        Some(InputEvent::ZoomAtPoint { point, factor })
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.dragging = false;
    }
}
