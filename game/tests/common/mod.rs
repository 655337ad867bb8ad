#![allow(dead_code)]

use std::collections::VecDeque;

use cat_chase::assets;
use cat_chase::SpawnSource;
use engine::{MeshBuffer, Scene, WindowControl};
use glam::IVec2;

pub const SCENE: &str = include_str!("../../assets/cat_chase.scene.toml");
pub const MESHES: &str = include_str!("../../assets/cat_chase.meshes.toml");

pub fn shipped_scene() -> Scene {
    let meshes = MeshBuffer::from_toml_str(MESHES).unwrap();
    assets::scene_from_str(SCENE, &meshes).unwrap()
}

/// Hands out queued positions and delays, then repeats the fallbacks.
pub struct ScriptedSpawner {
    pub positions: VecDeque<IVec2>,
    pub delays: VecDeque<f32>,
    pub fallback_position: IVec2,
    pub fallback_delay: f32,
}

impl ScriptedSpawner {
    pub fn always(position: IVec2, delay: f32) -> Self {
        Self {
            positions: VecDeque::new(),
            delays: VecDeque::new(),
            fallback_position: position,
            fallback_delay: delay,
        }
    }
}

impl SpawnSource for ScriptedSpawner {
    fn next_position(&mut self) -> IVec2 {
        self.positions.pop_front().unwrap_or(self.fallback_position)
    }

    fn next_delay(&mut self) -> f32 {
        self.delays.pop_front().unwrap_or(self.fallback_delay)
    }
}

#[derive(Default)]
pub struct HeadlessWindow {
    pub releases: u32,
}

impl WindowControl for HeadlessWindow {
    fn release_pointer(&mut self) {
        self.releases += 1;
    }
}
