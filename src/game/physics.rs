//! Per-frame fall of freshly dropped shells

use crate::gfx::scene::IslandScene;
use crate::simulation::traits::{FrameTime, Simulation};

/// Integrates every unsettled shell down onto the sand.
///
/// The step is per frame, not per second, and shells never collide with
/// each other.
pub struct FallingItems {
    gravity_step: f32,
}

impl FallingItems {
    pub fn new(gravity_step: f32) -> Self {
        Self { gravity_step }
    }
}

impl Simulation for FallingItems {
    fn update(&mut self, _frame: FrameTime, scene: &mut IslandScene) {
        for shell in scene.collectibles.iter_mut().filter(|s| !s.is_settled()) {
            shell.fall_step(self.gravity_step);
            if shell.is_settled() {
                log::trace!("Shell landed at ({:.2}, {:.2})", shell.position.x, shell.position.z);
            }
        }
    }

    fn name(&self) -> &str {
        "Falling Items"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IslandConfig;

    #[test]
    fn test_dropped_batch_lands() {
        let config = IslandConfig::new().with_seed(5);
        let mut scene = IslandScene::new(&config, 1.0);
        scene.respawn_collectibles();
        let mut physics = FallingItems::new(config.gravity_step);

        let frame = FrameTime::new(0.0, 1.0 / 60.0);
        physics.update(frame, &mut scene);
        assert_eq!(scene.falling_count(), 10);
        for shell in &scene.collectibles {
            assert!(shell.position.y < 25.0);
        }

        // 25 units at 0.01 per frame squared lands well within 100 frames
        for _ in 0..100 {
            physics.update(frame, &mut scene);
        }
        assert_eq!(scene.falling_count(), 0);
        for shell in &scene.collectibles {
            assert_eq!(shell.position.y, config.rest_height);
            assert!(shell.is_pickable());
        }

        let settled: Vec<_> = scene.collectibles.iter().map(|s| s.position).collect();
        physics.update(frame, &mut scene);
        let after: Vec<_> = scene.collectibles.iter().map(|s| s.position).collect();
        assert_eq!(settled, after);
    }
}
