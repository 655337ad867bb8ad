//! Score, retired mice and the respawn timer. Knows nothing about the scene.

use std::collections::VecDeque;

use glam::IVec2;

use crate::spawn::SpawnSource;

/// Stable handle to one of the mice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MouseId(usize);

impl MouseId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Outcome of one respawn check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnCheck {
    Waiting,
    Respawn { mouse: MouseId, at: IVec2 },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Session {
    score: u32,
    game_over: bool,
    retired: VecDeque<MouseId>,
    time_since_respawn: f32,
    time_to_respawn: f32,
}

impl Session {
    /// Every mouse starts retired, queued in index order.
    pub fn new(mouse_count: usize, initial_delay: f32) -> Self {
        Self {
            score: 0,
            game_over: false,
            retired: (0..mouse_count).map(MouseId).collect(),
            time_since_respawn: 0.0,
            time_to_respawn: initial_delay,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Retired mice, oldest first.
    pub fn retired(&self) -> impl Iterator<Item = MouseId> + '_ {
        self.retired.iter().copied()
    }

    pub fn retired_count(&self) -> usize {
        self.retired.len()
    }

    pub fn is_retired(&self, mouse: MouseId) -> bool {
        self.retired.contains(&mouse)
    }

    pub fn time_to_respawn(&self) -> f32 {
        self.time_to_respawn
    }

    /// Scores a caught mouse and queues it for respawn.
    pub fn retire(&mut self, mouse: MouseId) {
        debug_assert!(!self.is_retired(mouse), "{mouse:?} retired twice");
        self.score += 1;
        self.retired.push_back(mouse);
    }

    /// Advances the respawn timer. At most one mouse comes back per call.
    /// Finding the queue empty ends the session for good.
    pub fn advance<S: SpawnSource + ?Sized>(&mut self, elapsed: f32, spawner: &mut S) -> RespawnCheck {
        if self.game_over {
            return RespawnCheck::GameOver;
        }

        self.time_since_respawn += elapsed;
        match self.retired.front().copied() {
            None => {
                self.game_over = true;
                log::info!("all mice spawned, final score {}", self.score);
                RespawnCheck::GameOver
            }
            Some(_) if self.time_since_respawn < self.time_to_respawn => RespawnCheck::Waiting,
            Some(mouse) => {
                self.retired.pop_front();
                self.time_since_respawn -= self.time_to_respawn;
                let at = spawner.next_position();
                self.time_to_respawn = spawner.next_delay();
                RespawnCheck::Respawn { mouse, at }
            }
        }
    }
}
