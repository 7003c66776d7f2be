//! Core per-frame system trait
//!
//! Defines the interface the island's frame loop calls on each system that
//! animates the scene.

use crate::gfx::scene::IslandScene;

/// Timing of the frame being simulated, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Elapsed time since the clock started
    pub now: f32,
    /// Time since the previous frame
    pub delta: f32,
}

impl FrameTime {
    pub fn new(now: f32, delta: f32) -> Self {
        Self { now, delta }
    }
}

/// A system advanced once per rendered frame
pub trait Simulation {
    /// Advance by one frame
    ///
    /// # Arguments
    /// * `frame` - Clock reading for this frame
    /// * `scene` - Mutable reference to the scene to animate
    fn update(&mut self, frame: FrameTime, scene: &mut IslandScene);

    /// Name used in log output
    fn name(&self) -> &str;
}
