//! # Scene Module
//!
//! The island's mutable world state, shared by every per-frame system.
//!
//! ## Key Components
//!
//! - [`IslandScene`] - The owned context holding camera, shells and character
//! - [`Collectible`] - A shell with its fall state, visibility and transform
//! - [`Character`] - The character's placement, pose angles and animation mode
//! - [`ShellSpawner`] - Seeded random placement of each round's shells
//!
//! Rendering is not done here. A renderer samples [`IslandScene::shell_instances`]
//! and [`IslandScene::camera_uniform`] once per frame.

pub mod character;
pub mod object;
pub mod scene;
pub mod spawn;

// Re-export main types
pub use character::{AnimationMode, Character, CharacterPose};
pub use object::{Collectible, ShellInstance, ShellKind};
pub use scene::{IslandScene, SceneStatistics};
pub use spawn::{ShellSpawner, SpawnMode};
