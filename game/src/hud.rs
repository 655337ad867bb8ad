//! Score line drawn over the scene.

use engine::render::Rgba8;
use engine::DrawLines;
use glam::{Mat4, UVec2, Vec3, Vec4};

/// Glyph cell height in clip units.
const H: f32 = 0.09;
const SHADOW: Rgba8 = [0x00, 0x00, 0x00, 0x00];
const HIGHLIGHT: Rgba8 = [0xff, 0xff, 0xff, 0x00];

pub fn status_text(score: u32, game_over: bool) -> String {
    if game_over {
        format!("GAME OVER, ALL MICE SPAWNED; score: {score}")
    } else {
        format!("WASD moves cat; score: {score}")
    }
}

/// Builds the overlay: a dark pass, then a light pass nudged up and right by
/// two pixels.
pub fn overlay(score: u32, game_over: bool, drawable_size: UVec2) -> DrawLines {
    let aspect = drawable_size.x as f32 / drawable_size.y as f32;
    let mut lines = DrawLines::new(Mat4::from_cols(
        Vec4::new(1.0 / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    ));

    let text = status_text(score, game_over);
    let anchor = Vec3::new(-aspect + 0.1 * H, -1.0 + 0.1 * H, 0.0);
    let x = Vec3::new(H, 0.0, 0.0);
    let y = Vec3::new(0.0, H, 0.0);
    lines.draw_text(text.clone(), anchor, x, y, SHADOW);

    let ofs = 2.0 / drawable_size.y as f32;
    lines.draw_text(text, anchor + Vec3::new(ofs, ofs, 0.0), x, y, HIGHLIGHT);
    lines
}
