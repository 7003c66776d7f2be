use crate::{
    config::IslandConfig,
    gfx::camera::{camera_utils::CameraManager, CameraUniform},
};

use super::{
    character::Character,
    object::{Collectible, ShellInstance},
    spawn::{ShellSpawner, SpawnMode},
};

/// Everything a frame reads or writes: camera, shells and the character.
///
/// The renderer samples this once per frame; game systems receive it by
/// mutable reference instead of reaching for globals.
pub struct IslandScene {
    pub camera_manager: CameraManager,
    pub collectibles: Vec<Collectible>,
    pub character: Character,
    spawner: ShellSpawner,
}

impl IslandScene {
    /// Build the opening scene with the first batch of shells at rest
    pub fn new(config: &IslandConfig, aspect: f32) -> Self {
        let mut spawner = ShellSpawner::from_config(config);
        let collectibles = spawner.spawn_batch(SpawnMode::AtRest);
        log::info!("Placed {} shells on the island", collectibles.len());

        Self {
            camera_manager: CameraManager::from_config(config, aspect),
            collectibles,
            character: Character::new(config.character_position, config.character_facing),
            spawner,
        }
    }

    /// Drop every shell and rain a fresh batch from the sky
    pub fn respawn_collectibles(&mut self) {
        self.collectibles = self.spawner.spawn_batch(SpawnMode::Dropped);
        log::info!("Dropped {} new shells", self.collectibles.len());
    }

    /// Per-frame camera work (free-look damping and the GPU uniform)
    pub fn update(&mut self) {
        self.camera_manager.update();
    }

    pub fn visible_count(&self) -> usize {
        self.collectibles.iter().filter(|shell| shell.visible).count()
    }

    pub fn falling_count(&self) -> usize {
        self.collectibles
            .iter()
            .filter(|shell| !shell.is_settled())
            .count()
    }

    /// Instance records for every shell, hidden ones included
    pub fn shell_instances(&self) -> Vec<ShellInstance> {
        self.collectibles.iter().map(Collectible::instance).collect()
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera_manager.camera.uniform
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            shell_count: self.collectibles.len(),
            visible_shells: self.visible_count(),
            falling_shells: self.falling_count(),
        }
    }
}

/// Scene statistics for debugging and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub shell_count: usize,
    pub visible_shells: usize,
    pub falling_shells: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> IslandScene {
        IslandScene::new(&IslandConfig::new().with_seed(3), 1.0)
    }

    #[test]
    fn test_opening_scene() {
        let scene = scene();
        assert_eq!(
            scene.get_statistics(),
            SceneStatistics {
                shell_count: 10,
                visible_shells: 10,
                falling_shells: 0,
            }
        );
        assert!(scene.camera_manager.free_look_enabled());
    }

    #[test]
    fn test_respawn_replaces_batch() {
        let mut scene = scene();
        for shell in &mut scene.collectibles {
            shell.visible = false;
        }

        scene.respawn_collectibles();
        assert_eq!(scene.collectibles.len(), 10);
        assert_eq!(scene.visible_count(), 10);
        assert_eq!(scene.falling_count(), 10);
    }

    #[test]
    fn test_instances_track_visibility() {
        let mut scene = scene();
        scene.collectibles[2].visible = false;

        let instances = scene.shell_instances();
        assert_eq!(instances.len(), 10);
        assert_eq!(instances[2].visible, 0);
        assert_eq!(instances[0].visible, 1);
    }

    #[test]
    fn test_update_refreshes_camera_uniform() {
        let mut scene = scene();
        scene.update();
        assert_eq!(scene.camera_uniform().view_position, [0.0, 8.0, 12.0, 1.0]);
    }
}
