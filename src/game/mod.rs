//! # Island Game
//!
//! The shell-collecting game assembled from the scene and its per-frame
//! systems. [`IslandGame`] is the owned context the window shell talks to:
//! it takes clicks and clock readings and nothing else.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector2;
//! use shell_island::config::IslandConfig;
//! use shell_island::game::IslandGame;
//! use shell_island::simulation::FrameTime;
//!
//! let mut game = IslandGame::new(IslandConfig::new().with_seed(1), 16.0 / 9.0)?;
//! game.click(Vector2::new(0.0, 0.0), 0.0);
//! game.frame(FrameTime::new(0.016, 0.016));
//! println!("{}", game.status().text());
//! # Ok::<(), shell_island::config::ConfigError>(())
//! ```

pub mod animator;
pub mod physics;
pub mod round;
pub mod sequencer;

use cgmath::Vector2;

use crate::config::{ConfigError, IslandConfig};
use crate::gfx::picking::{PickResolver, RayPicker};
use crate::gfx::scene::IslandScene;
use crate::simulation::{FrameTime, SimulationManager};

pub use animator::CharacterAnimator;
pub use physics::FallingItems;
pub use round::{PickOutcome, RoundMachine, RoundPhase, RoundState, ScoreReadout, SequenceStep};
pub use sequencer::{CameraSequencer, SequencerStatus};

/// Scene, round flow and per-frame systems under one owner
pub struct IslandGame<R: PickResolver = RayPicker> {
    scene: IslandScene,
    rounds: RoundMachine,
    simulations: SimulationManager,
    resolver: R,
}

impl IslandGame<RayPicker> {
    /// Build the game with ray-cast picking
    pub fn new(config: IslandConfig, aspect: f32) -> Result<Self, ConfigError> {
        Self::with_resolver(config, aspect, RayPicker::new())
    }
}

impl<R: PickResolver> IslandGame<R> {
    pub fn with_resolver(
        config: IslandConfig,
        aspect: f32,
        resolver: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let scene = IslandScene::new(&config, aspect);
        let mut simulations = SimulationManager::new();
        simulations.attach(Box::new(FallingItems::new(config.gravity_step)));
        simulations.attach(Box::new(CharacterAnimator::new()));

        log::info!(
            "Island ready: {:?}, systems {:?}",
            scene.get_statistics(),
            simulations.names()
        );

        Ok(Self {
            scene,
            rounds: RoundMachine::new(&config),
            simulations,
            resolver,
        })
    }

    /// A click at `ndc` (normalized device coordinates) at clock time `now`
    pub fn click(&mut self, ndc: Vector2<f32>, now: f32) -> PickOutcome {
        self.rounds
            .handle_pick(ndc, now, &mut self.scene, &self.resolver)
    }

    /// Advance everything by one rendered frame
    pub fn frame(&mut self, frame: FrameTime) {
        self.rounds.update(frame.now, &mut self.scene);
        self.simulations.update(frame, &mut self.scene);
        self.scene.update();
    }

    pub fn scene(&self) -> &IslandScene {
        &self.scene
    }

    /// Mutable scene access for input plumbing such as free-look events
    pub fn scene_mut(&mut self) -> &mut IslandScene {
        &mut self.scene
    }

    pub fn rounds(&self) -> &RoundMachine {
        &self.rounds
    }

    pub fn status(&self) -> &ScoreReadout {
        self.rounds.readout()
    }
}
