//! Frame recording. Modes describe a frame as a list of commands and a
//! [`Presenter`] turns it into pixels.

mod lines;

pub use lines::{DrawLines, Rgba8, TextRun};

use glam::{Mat4, UVec2, Vec3, Vec4};

use crate::scene::Pipeline;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Directional { direction: Vec3, energy: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthTest {
    #[default]
    Disabled,
    Less,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { color: Vec4, depth: f32 },
    DepthTest(DepthTest),
    Mesh {
        pipeline: Pipeline,
        clip_from_local: Mat4,
        world_from_local: Mat4,
    },
    Lines {
        clip_from_local: Mat4,
        text: Vec<TextRun>,
    },
}

/// One frame's worth of draw commands, in submission order.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    drawable_size: UVec2,
    light: Option<Light>,
    commands: Vec<DrawCommand>,
}

impl RenderFrame {
    pub fn new(drawable_size: UVec2) -> Self {
        Self {
            drawable_size,
            light: None,
            commands: Vec::new(),
        }
    }

    pub fn drawable_size(&self) -> UVec2 {
        self.drawable_size
    }

    pub fn set_light(&mut self, light: Light) {
        self.light = Some(light);
    }

    pub fn light(&self) -> Option<Light> {
        self.light
    }

    pub fn clear(&mut self, color: Vec4, depth: f32) {
        self.push(DrawCommand::Clear { color, depth });
    }

    pub fn set_depth_test(&mut self, test: DepthTest) {
        self.push(DrawCommand::DepthTest(test));
    }

    pub fn push_lines(&mut self, lines: DrawLines) {
        let (clip_from_local, text) = lines.finish();
        self.push(DrawCommand::Lines {
            clip_from_local,
            text,
        });
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn mesh_draws(&self) -> impl Iterator<Item = &Pipeline> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Mesh { pipeline, .. } => Some(pipeline),
            _ => None,
        })
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Lines { text, .. } => Some(text.iter()),
                _ => None,
            })
            .flatten()
    }
}

/// Consumes finished frames. The GPU backend lives behind this trait.
pub trait Presenter {
    fn present(&mut self, frame: &RenderFrame);
}

/// Presenter that only reports what would have been drawn.
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl LogPresenter {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        log::trace!(
            "frame {} ({}x{}): {} commands, {} meshes",
            self.frames,
            frame.drawable_size.x,
            frame.drawable_size.y,
            frame.commands.len(),
            frame.mesh_draws().count()
        );
        for run in frame.text_runs() {
            log::trace!("  text {:?} at {}", run.text, run.anchor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_keeps_submission_order() {
        let mut frame = RenderFrame::new(UVec2::new(800, 600));
        frame.clear(Vec4::new(0.5, 0.5, 0.5, 1.0), 1.0);
        frame.set_depth_test(DepthTest::Less);
        let mut lines = DrawLines::new(Mat4::IDENTITY);
        lines.draw_text("hi", Vec3::ZERO, Vec3::X, Vec3::Y, [0xff; 4]);
        frame.push_lines(lines);

        assert!(matches!(frame.commands()[0], DrawCommand::Clear { depth, .. } if depth == 1.0));
        assert_eq!(frame.commands()[1], DrawCommand::DepthTest(DepthTest::Less));
        let runs: Vec<_> = frame.text_runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "hi");
    }

    #[test]
    fn log_presenter_counts_frames() {
        let mut presenter = LogPresenter::default();
        let frame = RenderFrame::new(UVec2::new(1, 1));
        presenter.present(&frame);
        presenter.present(&frame);
        assert_eq!(presenter.frames(), 2);
    }
}
