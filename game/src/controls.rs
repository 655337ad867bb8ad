//! Movement keys and the intent they produce.

use engine::KeyCode;
use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    /// Presses seen since the last update.
    pub downs: u8,
    pub pressed: bool,
}

impl Button {
    fn press(&mut self) {
        self.downs = self.downs.saturating_add(1);
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }
}

/// WASD state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
}

impl Controls {
    fn button_mut(&mut self, code: KeyCode) -> Option<&mut Button> {
        match code {
            KeyCode::KeyA => Some(&mut self.left),
            KeyCode::KeyD => Some(&mut self.right),
            KeyCode::KeyW => Some(&mut self.up),
            KeyCode::KeyS => Some(&mut self.down),
            _ => None,
        }
    }

    /// Returns `false` for keys that are not movement keys.
    pub fn key_down(&mut self, code: KeyCode) -> bool {
        self.button_mut(code).map(Button::press).is_some()
    }

    pub fn key_up(&mut self, code: KeyCode) -> bool {
        self.button_mut(code).map(Button::release).is_some()
    }

    pub fn reset_downs(&mut self) {
        for button in [&mut self.left, &mut self.right, &mut self.up, &mut self.down] {
            button.downs = 0;
        }
    }

    /// Unit-length direction on each axis, in the cat's local frame.
    ///
    /// Each axis is gated on the cat's position *before* the move, so a cat
    /// sitting just inside the bound can still step slightly past it.
    pub fn intent(&self, position: Vec3, bound: f32) -> Vec2 {
        let mut intent = Vec2::ZERO;
        if self.left.pressed && !self.right.pressed && position.y >= -bound {
            intent.x = 1.0;
        }
        if !self.left.pressed && self.right.pressed && position.y <= bound {
            intent.x = -1.0;
        }
        if self.down.pressed && !self.up.pressed && position.x <= bound {
            intent.y = 1.0;
        }
        if !self.down.pressed && self.up.pressed && position.x >= -bound {
            intent.y = -1.0;
        }
        intent
    }
}

/// Scales an intent to a displacement. Diagonals are normalized so they are
/// no faster than a single axis.
pub fn displacement(intent: Vec2, speed: f32, elapsed: f32) -> Vec2 {
    if intent == Vec2::ZERO {
        Vec2::ZERO
    } else {
        intent.normalize() * speed * elapsed
    }
}
