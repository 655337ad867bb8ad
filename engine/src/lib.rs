//! Minimal engine layer: scene graph, mesh table, input events, frame
//! recording and the windowed host loop that drives a [`Mode`].

pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod mesh;
pub mod mode;
pub mod render;
pub mod scene;

pub use glam;

pub use config::{data_path, EngineConfig};
pub use context::{init_logging, EngineContext};
pub use error::EngineError;
pub use input::{InputEvent, KeyCode};
pub use mesh::{Mesh, MeshBuffer, Primitive};
pub use mode::{Mode, WindowControl};
pub use render::{DrawLines, LogPresenter, Presenter, RenderFrame};
pub use scene::{Camera, Scene, Transform, TransformId};
