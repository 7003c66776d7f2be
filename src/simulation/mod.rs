// src/simulation/mod.rs
//! Simulation system
//!
//! The frame clock, the per-frame [`Simulation`] trait and the manager that
//! steps the attached systems in order.

pub mod clock;
pub mod manager;
pub mod traits;

pub use clock::Clock;
pub use manager::SimulationManager;
pub use traits::{FrameTime, Simulation};
