//! The cat-and-mice play mode.

use engine::render::{DepthTest, Light};
use engine::{InputEvent, KeyCode, Mode, RenderFrame, Scene, Transform, TransformId, WindowControl};
use glam::{UVec2, Vec3, Vec4};
use thiserror::Error;

use crate::collision::Aabb2;
use crate::config::{ConfigError, PlayConfig};
use crate::controls::{self, Controls};
use crate::hud;
use crate::session::{MouseId, RespawnCheck, Session};
use crate::spawn::{RandomSpawner, SpawnSource};

pub const MOUSE_COUNT: usize = 8;

/// Depth of a mouse that is waiting to respawn, tucked under the plane.
const HIDDEN_DEPTH: f32 = -1.0;
const SPAWN_DEPTH: f32 = 1.0;

#[derive(Debug, Error)]
pub enum PlayModeError {
    #[error("{0} not found in scene")]
    MissingTransform(&'static str),

    #[error("expected {expected} mice in scene, found {found}")]
    MouseCount { expected: usize, found: usize },

    #[error("expecting scene to have exactly one camera, but it has {0}")]
    CameraCount(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct PlayMode<S = RandomSpawner> {
    // Local copy of the scene, so gameplay can move things around.
    scene: Scene,
    cat: TransformId,
    plane: TransformId,
    /// Indexed by [`MouseId`].
    mice: Vec<TransformId>,
    controls: Controls,
    session: Session,
    spawner: S,
    config: PlayConfig,
}

impl<S: SpawnSource> PlayMode<S> {
    pub fn new(mut scene: Scene, config: PlayConfig, spawner: S) -> Result<Self, PlayModeError> {
        config.validate()?;
        let cat = scene
            .find("Cat")
            .ok_or(PlayModeError::MissingTransform("Cat"))?;
        let mice = scene.find_prefixed("Mouse");
        if mice.len() != MOUSE_COUNT {
            return Err(PlayModeError::MouseCount {
                expected: MOUSE_COUNT,
                found: mice.len(),
            });
        }
        let plane = scene
            .find("Plane")
            .ok_or(PlayModeError::MissingTransform("Plane"))?;
        if scene.cameras().len() != 1 {
            return Err(PlayModeError::CameraCount(scene.cameras().len()));
        }

        for &mouse in &mice {
            scene.transform_mut(mouse).position.z = HIDDEN_DEPTH;
        }
        let session = Session::new(mice.len(), config.initial_respawn_delay);
        log::info!("cat chase started: {} mice hidden", mice.len());

        Ok(Self {
            scene,
            cat,
            plane,
            mice,
            controls: Controls::default(),
            session,
            spawner,
            config,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn cat(&self) -> &Transform {
        self.scene.transform(self.cat)
    }

    pub fn plane(&self) -> &Transform {
        self.scene.transform(self.plane)
    }

    pub fn camera(&self) -> &Transform {
        self.scene.transform(self.scene.cameras()[0].transform)
    }

    pub fn mouse_ids(&self) -> impl Iterator<Item = MouseId> {
        (0..self.mice.len()).map(MouseId::new)
    }

    pub fn mouse(&self, id: MouseId) -> &Transform {
        self.scene.transform(self.mice[id.index()])
    }

    pub fn is_visible(&self, id: MouseId) -> bool {
        self.mouse(id).position.z >= 0.0
    }

    pub fn visible_count(&self) -> usize {
        self.mouse_ids().filter(|&id| self.is_visible(id)).count()
    }

    fn move_cat(&mut self, elapsed: f32) {
        let cat = self.scene.transform(self.cat);
        let intent = self.controls.intent(cat.position, self.config.bound);
        let step = controls::displacement(intent, self.config.player_speed, elapsed);

        let frame = cat.make_local_to_parent();
        let frame_right = frame.x_axis.truncate();
        let frame_forward = -frame.z_axis.truncate();
        let position = cat.position + step.x * frame_right + step.y * frame_forward;
        self.scene.transform_mut(self.cat).position = position;

        let camera = self.scene.cameras()[0].transform;
        let camera = self.scene.transform_mut(camera);
        camera.position.x = position.x;
        camera.position.y = position.y;
    }

    fn catch_mice(&mut self) {
        let radius = self.config.radius;
        let cat_box = Aabb2::around(self.scene.transform(self.cat).position.truncate(), radius);
        for (index, &id) in self.mice.iter().enumerate() {
            let mouse = self.scene.transform_mut(id);
            if mouse.position.z >= 0.0
                && Aabb2::around(mouse.position.truncate(), radius).overlaps(&cat_box)
            {
                mouse.position.z = HIDDEN_DEPTH;
                self.session.retire(MouseId::new(index));
                log::debug!("caught {}, score {}", mouse.name, self.session.score());
            }
        }
    }

    fn respawn(&mut self, elapsed: f32) {
        if let RespawnCheck::Respawn { mouse, at } = self.session.advance(elapsed, &mut self.spawner) {
            let transform = self.scene.transform_mut(self.mice[mouse.index()]);
            transform.position = Vec3::new(at.x as f32, at.y as f32, SPAWN_DEPTH);
            log::debug!(
                "{} respawned at ({}, {}), next in {}s",
                transform.name,
                at.x,
                at.y,
                self.session.time_to_respawn()
            );
        }
    }
}

impl<S: SpawnSource> Mode for PlayMode<S> {
    fn handle_event(&mut self, event: &InputEvent, window: &mut dyn WindowControl) -> bool {
        match *event {
            InputEvent::KeyDown {
                code: KeyCode::Escape,
                ..
            } => {
                window.release_pointer();
                true
            }
            InputEvent::KeyDown { code, .. } => self.controls.key_down(code),
            InputEvent::KeyUp { code } => self.controls.key_up(code),
            _ => false,
        }
    }

    fn update(&mut self, elapsed: f32) {
        if self.session.is_over() {
            self.scene.transform_mut(self.plane).position.z = self.config.game_over_plane_depth;
            return;
        }

        self.move_cat(elapsed);
        self.catch_mice();
        self.respawn(elapsed);
        self.controls.reset_downs();
    }

    fn draw(&mut self, drawable_size: UVec2, frame: &mut RenderFrame) {
        self.scene.cameras_mut()[0].aspect = drawable_size.x as f32 / drawable_size.y as f32;

        frame.set_light(Light::Directional {
            direction: Vec3::new(0.0, 0.0, -1.0),
            energy: Vec3::new(1.0, 1.0, 0.95),
        });
        frame.clear(Vec4::new(0.5, 0.5, 0.5, 1.0), 1.0);
        frame.set_depth_test(DepthTest::Less);

        self.scene.draw(&self.scene.cameras()[0], frame);

        frame.set_depth_test(DepthTest::Disabled);
        frame.push_lines(hud::overlay(
            self.session.score(),
            self.session.is_over(),
            drawable_size,
        ));
    }
}
