//! Runs the attached per-frame systems in attachment order

use super::traits::{FrameTime, Simulation};
use crate::gfx::scene::IslandScene;

/// Owns the per-frame systems and steps them every frame
#[derive(Default)]
pub struct SimulationManager {
    simulations: Vec<Box<dyn Simulation>>,
}

impl SimulationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a system; it is updated after any previously attached ones
    pub fn attach(&mut self, simulation: Box<dyn Simulation>) {
        log::debug!("Attached simulation '{}'", simulation.name());
        self.simulations.push(simulation);
    }

    /// Update every system (called every frame)
    pub fn update(&mut self, frame: FrameTime, scene: &mut IslandScene) {
        for simulation in &mut self.simulations {
            simulation.update(frame, scene);
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.simulations.iter().map(|sim| sim.name()).collect()
    }
}
