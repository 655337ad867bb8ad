//! Where and when retired mice come back.

use std::ops::RangeInclusive;

use glam::IVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::PlayConfig;

/// Source of respawn timing and placement.
pub trait SpawnSource {
    /// Next grid cell for a respawning mouse.
    fn next_position(&mut self) -> IVec2;

    /// Seconds until the following respawn.
    fn next_delay(&mut self) -> f32;
}

/// Uniform integer positions and whole-second delays drawn from `R`.
#[derive(Debug, Clone)]
pub struct RandomSpawner<R = StdRng> {
    rng: R,
    extent: i32,
    delay_secs: RangeInclusive<u32>,
}

impl RandomSpawner<StdRng> {
    pub fn from_entropy(config: &PlayConfig) -> Self {
        Self::new(StdRng::from_entropy(), config)
    }

    pub fn seeded(seed: u64, config: &PlayConfig) -> Self {
        Self::new(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> RandomSpawner<R> {
    pub fn new(rng: R, config: &PlayConfig) -> Self {
        Self {
            rng,
            extent: config.spawn_extent,
            delay_secs: config.respawn_delay_min..=config.respawn_delay_max,
        }
    }
}

impl<R: Rng> SpawnSource for RandomSpawner<R> {
    fn next_position(&mut self) -> IVec2 {
        let x = self.rng.gen_range(-self.extent..=self.extent);
        let y = self.rng.gen_range(-self.extent..=self.extent);
        IVec2::new(x, y)
    }

    fn next_delay(&mut self) -> f32 {
        self.rng.gen_range(self.delay_secs.clone()) as f32
    }
}
