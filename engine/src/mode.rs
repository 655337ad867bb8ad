use glam::UVec2;

use crate::input::InputEvent;
use crate::render::RenderFrame;

/// Window operations a mode may request while handling input.
pub trait WindowControl {
    /// Gives the pointer back to the desktop.
    fn release_pointer(&mut self);
}

/// A screen of the application: receives input, advances, and draws.
pub trait Mode {
    /// Returns `true` if the event was consumed.
    fn handle_event(&mut self, event: &InputEvent, window: &mut dyn WindowControl) -> bool;

    /// Advances state by `elapsed` seconds.
    fn update(&mut self, elapsed: f32);

    fn draw(&mut self, drawable_size: UVec2, frame: &mut RenderFrame);
}
