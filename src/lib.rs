// src/lib.rs
//! Shell Island
//!
//! A small island scene: an orbit camera, a shell-collecting mini-game and a
//! scripted celebration flight between rounds, all advanced by one
//! per-frame update.

pub mod app;
pub mod config;
pub mod game;
pub mod gfx;
pub mod prelude;
pub mod simulation;

// Re-export main types for convenience
pub use app::IslandApp;
pub use config::{ConfigError, IslandConfig};
pub use game::IslandGame;
