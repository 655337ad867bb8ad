use glam::{Mat4, Vec3};

pub type Rgba8 = [u8; 4];

/// A string laid out along two basis vectors starting at `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub anchor: Vec3,
    pub x: Vec3,
    pub y: Vec3,
    pub color: Rgba8,
}

/// Batches line-drawn text under a single projection.
#[derive(Debug, Clone)]
pub struct DrawLines {
    clip_from_local: Mat4,
    text: Vec<TextRun>,
}

impl DrawLines {
    pub fn new(clip_from_local: Mat4) -> Self {
        Self {
            clip_from_local,
            text: Vec::new(),
        }
    }

    /// `x` and `y` span one glyph cell; their lengths set the text size.
    pub fn draw_text(&mut self, text: impl Into<String>, anchor: Vec3, x: Vec3, y: Vec3, color: Rgba8) {
        self.text.push(TextRun {
            text: text.into(),
            anchor,
            x,
            y,
            color,
        });
    }

    pub fn finish(self) -> (Mat4, Vec<TextRun>) {
        (self.clip_from_local, self.text)
    }
}
