//! Mesh table: named vertex ranges inside a shared vertex buffer.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    #[default]
    Triangles,
    Lines,
}

/// A contiguous run of vertices in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Mesh {
    #[serde(default)]
    pub primitive: Primitive,
    pub start: u32,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
struct MeshTable {
    #[serde(default)]
    meshes: HashMap<String, Mesh>,
}

/// Meshes keyed by name.
#[derive(Debug, Default)]
pub struct MeshBuffer {
    meshes: HashMap<String, Mesh>,
}

impl MeshBuffer {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        let buffer = Self::from_toml_str(&text)
            .map_err(|e| EngineError::parse(path.display().to_string(), e))?;
        log::info!("loaded {} meshes from {}", buffer.len(), path.display());
        Ok(buffer)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let table: MeshTable = toml::from_str(text)?;
        Ok(Self {
            meshes: table.meshes,
        })
    }

    pub fn lookup(&self, name: &str) -> Result<&Mesh, EngineError> {
        self.meshes
            .get(name)
            .ok_or_else(|| EngineError::UnknownMesh(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
