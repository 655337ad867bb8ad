//! Scene graph: named transforms, cameras and the drawables attached to them.

use std::path::Path;

use glam::{Mat4, Quat, Vec3};
use serde::Deserialize;

use crate::error::EngineError;
use crate::mesh::{Mesh, Primitive};
use crate::render::{DrawCommand, RenderFrame};

/// Stable handle to a transform inside one [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub name: String,
    pub parent: Option<TransformId>,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Scale, then rotate, then translate.
    pub fn make_local_to_parent(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub transform: TransformId,
    /// Vertical field of view, radians.
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
}

impl Camera {
    pub fn make_projection(&self) -> Mat4 {
        Mat4::perspective_infinite_rh(self.fovy, self.aspect, self.near)
    }
}

/// Everything the renderer needs to issue one draw for a drawable.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub program: String,
    pub primitive: Primitive,
    pub start: u32,
    pub count: u32,
}

impl Pipeline {
    pub fn new(program: impl Into<String>, mesh: &Mesh) -> Self {
        Self {
            program: program.into(),
            primitive: mesh.primitive,
            start: mesh.start,
            count: mesh.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub transform: TransformId,
    pub pipeline: Pipeline,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    transforms: Vec<Transform>,
    cameras: Vec<Camera>,
    drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transform(&mut self, transform: Transform) -> TransformId {
        self.transforms.push(transform);
        TransformId(self.transforms.len() - 1)
    }

    /// Panics if `id` came from a different scene.
    pub fn transform(&self, id: TransformId) -> &Transform {
        &self.transforms[id.0]
    }

    pub fn transform_mut(&mut self, id: TransformId) -> &mut Transform {
        &mut self.transforms[id.0]
    }

    pub fn transforms(&self) -> impl Iterator<Item = (TransformId, &Transform)> {
        self.transforms
            .iter()
            .enumerate()
            .map(|(i, t)| (TransformId(i), t))
    }

    /// First transform whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<TransformId> {
        self.transforms()
            .find(|(_, t)| t.name == name)
            .map(|(id, _)| id)
    }

    /// All transforms whose names start with `prefix`, in scene order.
    pub fn find_prefixed(&self, prefix: &str) -> Vec<TransformId> {
        self.transforms()
            .filter(|(_, t)| t.name.starts_with(prefix))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn make_local_to_world(&self, id: TransformId) -> Mat4 {
        let transform = self.transform(id);
        let local = transform.make_local_to_parent();
        match transform.parent {
            Some(parent) => self.make_local_to_world(parent) * local,
            None => local,
        }
    }

    pub fn make_world_to_local(&self, id: TransformId) -> Mat4 {
        self.make_local_to_world(id).inverse()
    }

    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn cameras_mut(&mut self) -> &mut [Camera] {
        &mut self.cameras
    }

    pub fn add_drawable(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Records one mesh draw per drawable, as seen through `camera`.
    pub fn draw(&self, camera: &Camera, frame: &mut RenderFrame) {
        let clip_from_world = camera.make_projection() * self.make_world_to_local(camera.transform);
        for drawable in &self.drawables {
            let world_from_local = self.make_local_to_world(drawable.transform);
            frame.push(DrawCommand::Mesh {
                pipeline: drawable.pipeline.clone(),
                clip_from_local: clip_from_world * world_from_local,
                world_from_local,
            });
        }
    }

    /// Loads a scene description. `on_drawable` runs for every transform that
    /// names a mesh and is expected to attach a [`Drawable`].
    pub fn load<F>(path: impl AsRef<Path>, on_drawable: F) -> Result<Self, EngineError>
    where
        F: FnMut(&mut Scene, TransformId, &str) -> Result<(), EngineError>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        let desc: SceneDesc = toml::from_str(&text)
            .map_err(|e| EngineError::parse(path.display().to_string(), e))?;
        let scene = Self::from_desc(desc, on_drawable)?;
        log::info!(
            "loaded scene {} ({} transforms, {} drawables)",
            path.display(),
            scene.transforms.len(),
            scene.drawables.len()
        );
        Ok(scene)
    }

    pub fn from_toml_str<F>(text: &str, on_drawable: F) -> Result<Self, EngineError>
    where
        F: FnMut(&mut Scene, TransformId, &str) -> Result<(), EngineError>,
    {
        let desc: SceneDesc = toml::from_str(text).map_err(|e| EngineError::parse("scene", e))?;
        Self::from_desc(desc, on_drawable)
    }

    fn from_desc<F>(desc: SceneDesc, mut on_drawable: F) -> Result<Self, EngineError>
    where
        F: FnMut(&mut Scene, TransformId, &str) -> Result<(), EngineError>,
    {
        let mut scene = Scene::new();
        for t in desc.transforms {
            // Parents must be declared first, which keeps the hierarchy acyclic.
            let parent = match &t.parent {
                Some(name) => Some(scene.find(name).ok_or_else(|| EngineError::UnknownParent {
                    transform: t.name.clone(),
                    parent: name.clone(),
                })?),
                None => None,
            };
            let id = scene.add_transform(Transform {
                name: t.name,
                parent,
                position: t.position,
                rotation: t.rotation,
                scale: t.scale,
            });
            if let Some(mesh) = &t.mesh {
                on_drawable(&mut scene, id, mesh.as_str())?;
            }
        }
        for c in desc.cameras {
            let transform = scene
                .find(&c.transform)
                .ok_or_else(|| EngineError::UnknownCameraTransform(c.transform.clone()))?;
            scene.add_camera(Camera {
                transform,
                fovy: c.fovy_degrees.to_radians(),
                aspect: 1.0,
                near: c.near,
            });
        }
        Ok(scene)
    }
}

#[derive(Debug, Deserialize)]
struct SceneDesc {
    #[serde(default)]
    transforms: Vec<TransformDesc>,
    #[serde(default)]
    cameras: Vec<CameraDesc>,
}

#[derive(Debug, Deserialize)]
struct TransformDesc {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    position: Vec3,
    #[serde(default = "identity")]
    rotation: Quat,
    #[serde(default = "unit_scale")]
    scale: Vec3,
    #[serde(default)]
    mesh: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CameraDesc {
    transform: String,
    #[serde(default = "default_fovy")]
    fovy_degrees: f32,
    #[serde(default = "default_near")]
    near: f32,
}

fn identity() -> Quat {
    Quat::IDENTITY
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

fn default_fovy() -> f32 {
    60.0
}

fn default_near() -> f32 {
    0.01
}
