//! Random shell placement for each round's batch

use std::f32::consts::PI;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::object::{Collectible, ShellKind};
use crate::config::IslandConfig;

/// How a batch enters the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnMode {
    /// Placed on the sand, immediately collectible
    AtRest,
    /// Released from the configured drop height
    Dropped,
}

/// Scatters shells over the island
pub struct ShellSpawner {
    rng: StdRng,
    count: u32,
    /// Exclusive upper bound of the spawn radius
    max_radius: f32,
    rest_height: f32,
    drop_height: Range<f32>,
}

impl ShellSpawner {
    pub fn from_config(config: &IslandConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rng,
            count: config.items_per_round,
            max_radius: config.island_radius - 1.0,
            rest_height: config.rest_height,
            drop_height: config.drop_height.clone(),
        }
    }

    /// Produce one round's worth of shells
    pub fn spawn_batch(&mut self, mode: SpawnMode) -> Vec<Collectible> {
        (0..self.count).map(|_| self.spawn_one(mode)).collect()
    }

    fn spawn_one(&mut self, mode: SpawnMode) -> Collectible {
        let kind = ShellKind::ALL[self.rng.random_range(0..ShellKind::ALL.len())];

        let angle = self.rng.random_range(0.0..PI * 2.0);
        let radius = self.rng.random_range(0.0..self.max_radius);
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;

        let mut shell = match mode {
            SpawnMode::AtRest => Collectible::at_rest(kind, x, z, self.rest_height),
            SpawnMode::Dropped => {
                let height = self.rng.random_range(self.drop_height.clone());
                Collectible::dropped(kind, x, z, height, self.rest_height)
            }
        };

        shell.rotation.y = self.rng.random_range(0.0..PI * 2.0);
        shell.rotation.z = self.rng.random_range(0.0..PI / 4.0);
        shell.scale = kind.base_scale() * self.rng.random_range(0.8..1.2);
        shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner() -> ShellSpawner {
        ShellSpawner::from_config(&IslandConfig::new().with_seed(9))
    }

    #[test]
    fn test_batch_size_and_placement() {
        let shells = spawner().spawn_batch(SpawnMode::AtRest);
        assert_eq!(shells.len(), 10);

        for shell in &shells {
            let radius = (shell.position.x.powi(2) + shell.position.z.powi(2)).sqrt();
            assert!(radius < 4.0 + 1e-4);
            assert!(shell.is_pickable());
            assert!(shell.visible);
            let base = shell.kind.base_scale();
            assert!(shell.scale >= base * 0.8 - 1e-6 && shell.scale < base * 1.2 + 1e-6);
        }
    }

    #[test]
    fn test_dropped_batch_starts_falling() {
        let shells = spawner().spawn_batch(SpawnMode::Dropped);
        for shell in &shells {
            assert!(!shell.is_pickable());
            assert!(shell.position.y >= 20.0 && shell.position.y < 25.0);
            assert_eq!(shell.fall_velocity, 0.0);
        }
    }

    #[test]
    fn test_seeded_spawns_repeat() {
        let a = spawner().spawn_batch(SpawnMode::AtRest);
        let b = spawner().spawn_batch(SpawnMode::AtRest);
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.position, right.position);
            assert_eq!(left.kind, right.kind);
        }
    }
}
