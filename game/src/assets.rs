//! Scene and mesh files shipped with the game.

use std::path::{Path, PathBuf};

use engine::scene::{Drawable, Pipeline};
use engine::{EngineError, MeshBuffer, Scene, TransformId};

pub const SCENE_FILE: &str = "cat_chase.scene.toml";
pub const MESH_FILE: &str = "cat_chase.meshes.toml";
pub const CONFIG_FILE: &str = "cat_chase.toml";

/// Program every scene drawable is rendered with.
pub const PROGRAM: &str = "lit_color_texture";

/// Looks next to the executable (or in `ENGINE_DATA_DIR`) first, then in
/// this crate's `assets/` directory.
pub fn asset_path(name: &str) -> PathBuf {
    let path = engine::data_path(name);
    if path.exists() {
        path
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
    }
}

/// Scene-loading callback that attaches the named mesh to each transform.
pub fn bind_meshes(
    meshes: &MeshBuffer,
) -> impl FnMut(&mut Scene, TransformId, &str) -> Result<(), EngineError> + '_ {
    move |scene: &mut Scene, transform: TransformId, mesh_name: &str| {
        let mesh = meshes.lookup(mesh_name)?;
        scene.add_drawable(Drawable {
            transform,
            pipeline: Pipeline::new(PROGRAM, mesh),
        });
        Ok(())
    }
}

pub fn load_meshes() -> Result<MeshBuffer, EngineError> {
    MeshBuffer::load(asset_path(MESH_FILE))
}

pub fn load_scene(meshes: &MeshBuffer) -> Result<Scene, EngineError> {
    Scene::load(asset_path(SCENE_FILE), bind_meshes(meshes))
}

pub fn scene_from_str(text: &str, meshes: &MeshBuffer) -> Result<Scene, EngineError> {
    Scene::from_toml_str(text, bind_meshes(meshes))
}
