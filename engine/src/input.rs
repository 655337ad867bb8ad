//! Input events handed to a [`crate::Mode`].

use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
use winit::keyboard::PhysicalKey;

/// A window input event, reduced to what modes care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { code: KeyCode, repeat: bool },
    KeyUp { code: KeyCode },
    MouseDown { button: MouseButton },
    MouseUp { button: MouseButton },
}

impl InputEvent {
    /// Builds a key event. Keys without a physical code are dropped.
    pub fn from_key(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<Self> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        Some(match state {
            ElementState::Pressed => Self::KeyDown { code, repeat },
            ElementState::Released => Self::KeyUp { code },
        })
    }

    pub fn from_mouse(button: MouseButton, state: ElementState) -> Self {
        match state {
            ElementState::Pressed => Self::MouseDown { button },
            ElementState::Released => Self::MouseUp { button },
        }
    }

    pub fn key_down(code: KeyCode) -> Self {
        Self::KeyDown {
            code,
            repeat: false,
        }
    }

    pub fn key_up(code: KeyCode) -> Self {
        Self::KeyUp { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn pressed_key_becomes_key_down() {
        let event = InputEvent::from_key(PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed, true);
        assert_eq!(
            event,
            Some(InputEvent::KeyDown {
                code: KeyCode::KeyW,
                repeat: true
            })
        );
    }

    #[test]
    fn released_key_becomes_key_up() {
        let event = InputEvent::from_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Released, false);
        assert_eq!(event, Some(InputEvent::key_up(KeyCode::Escape)));
    }

    #[test]
    fn unidentified_key_is_dropped() {
        let key = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);
        assert_eq!(InputEvent::from_key(key, ElementState::Pressed, false), None);
    }

    #[test]
    fn mouse_buttons_map_by_state() {
        assert_eq!(
            InputEvent::from_mouse(MouseButton::Left, ElementState::Pressed),
            InputEvent::MouseDown {
                button: MouseButton::Left
            }
        );
    }
}
