//! # Shell Island Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use shell_island::prelude::*;
//!
//! let mut game = IslandGame::new(IslandConfig::new().with_seed(5), 1.5).unwrap();
//! game.frame(FrameTime::new(0.016, 0.016));
//! assert_eq!(game.rounds().phase(), RoundPhase::Playing);
//! ```

// Application and configuration
pub use crate::app::IslandApp;
pub use crate::config::{ConfigError, IslandConfig};

// Game flow
pub use crate::game::{IslandGame, PickOutcome, RoundPhase, SequenceStep};

// Scene and picking
pub use crate::gfx::picking::{screen_to_ndc, PickResolver, RayPicker};
pub use crate::gfx::scene::{Collectible, IslandScene, ShellKind};

// Simulation framework
pub use crate::simulation::{Clock, FrameTime, Simulation};

// Common external dependencies
pub use cgmath::{Vector2, Vector3};
