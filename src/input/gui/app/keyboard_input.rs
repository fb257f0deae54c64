use crate::core::view::input_event::InputEvent;
use crate::core::view::pan_hold::PanHoldState;
use crate::core::view::zoom_factor::ZoomFactor;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Turns raw key presses into viewport input.
///
/// WASD and the arrow keys are held-pan keys. `+`/`=`/E and `-`/Q zoom at
/// the centre, R resets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardInput {
    held: PanHoldState,
    zoom_in: ZoomFactor,
    zoom_out: ZoomFactor,
}

impl KeyboardInput {
    #[must_use]
    pub fn new(zoom_in: ZoomFactor, zoom_out: ZoomFactor) -> Self {
        Self {
            held: PanHoldState::default(),
            zoom_in,
            zoom_out,
        }
    }

    pub fn handle_key_event(
        &mut self,
        key_code: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        let pressed = state == ElementState::Pressed;

        if let Some(held) = self.held_slot(key_code) {
            if *held == pressed {
                return None;
            }
            *held = pressed;
            return Some(InputEvent::PanHold(self.held));
        }

        if !pressed {
            return None;
        }

        match key_code {
            KeyCode::Equal | KeyCode::NumpadAdd | KeyCode::KeyE => Some(InputEvent::ZoomAtCenter {
                factor: self.zoom_in,
            }),
            KeyCode::Minus | KeyCode::NumpadSubtract | KeyCode::KeyQ => {
                Some(InputEvent::ZoomAtCenter {
                    factor: self.zoom_out,
                })
            }
            KeyCode::KeyR if !repeat => Some(InputEvent::Reset),
            _ => None,
        }
    }

    #[must_use]
    pub fn held(&self) -> PanHoldState {
        self.held
    }

    /// Releases every held key. Returns the event to send when something was
    /// actually held.
    pub fn release_all(&mut self) -> Option<InputEvent> {
        if self.held == PanHoldState::default() {
            return None;
        }

        self.held = PanHoldState::default();
        Some(InputEvent::PanHold(self.held))
    }

    fn held_slot(&mut self, key_code: KeyCode) -> Option<&mut bool> {
        match key_code {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(&mut self.held.up),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(&mut self.held.down),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(&mut self.held.left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(&mut self.held.right),
            _ => None,
        }
    }
}
