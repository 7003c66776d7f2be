//! # Round Flow
//!
//! Scoring, round completion and the celebration that follows it.
//!
//! A round ends when the last shell is collected. The camera then flies
//! behind the character, lingers while the character cheers, flies home,
//! and a fresh batch of shells rains down. Every step of that sequence is a
//! phase compared against the frame clock, so nothing waits or schedules.
//!
//! ```text
//! Playing --last shell--> RoundComplete --next frame--> FlyOut
//!    ^                                                    |
//!    |                                          flight done
//!    |                                                    v
//!    +--flight done, new shells-- FlyBack <--hold over-- Hold
//! ```

use cgmath::{Vector2, Vector3};

use super::sequencer::{CameraSequencer, SequencerStatus};
use crate::config::IslandConfig;
use crate::gfx::picking::PickResolver;
use crate::gfx::scene::IslandScene;

/// Score bookkeeping for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    round: u32,
    score: u32,
    total: u32,
}

impl RoundState {
    pub fn new(total: u32) -> Self {
        Self {
            round: 1,
            score: 0,
            total,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.score >= self.total
    }

    fn collect(&mut self) {
        self.score = (self.score + 1).min(self.total);
    }

    fn advance(&mut self) {
        self.round += 1;
        self.score = 0;
    }
}

/// The status line shown to the player, with a revision bumped on refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReadout {
    text: String,
    revision: u64,
}

impl ScoreReadout {
    fn new(state: &RoundState) -> Self {
        Self {
            text: Self::format(state),
            revision: 0,
        }
    }

    pub fn format(state: &RoundState) -> String {
        format!(
            "Round {} | Items collected: {}/{}",
            state.round, state.score, state.total
        )
    }

    fn refresh(&mut self, state: &RoundState) {
        self.text = Self::format(state);
        self.revision += 1;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Steps of the celebration sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceStep {
    /// Camera flying from its free-look eye to the vantage point
    FlyOut,
    /// Camera parked at the vantage point until `until`
    Hold { until: f32 },
    /// Camera flying back to where free-look left it
    FlyBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    Playing,
    /// The last shell was just collected; the sequence starts next frame
    RoundComplete,
    Sequencing(SequenceStep),
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing under the pointer
    Missed,
    /// Hit a shell that is still falling
    NotSettled,
    /// Hit a shell that is already gone
    AlreadyCollected,
    Collected { score: u32 },
    /// Collected the last shell; `next_round` is the round now starting
    RoundComplete { next_round: u32 },
}

/// Owns the round state and the camera sequencer, and drives the
/// celebration through the scene
pub struct RoundMachine {
    state: RoundState,
    phase: RoundPhase,
    readout: ScoreReadout,
    sequencer: CameraSequencer,
    hold: f32,
    vantage_offset: f32,
    vantage_height: f32,
    /// Eye captured when the round completed
    home_eye: Vector3<f32>,
    vantage: Vector3<f32>,
}

impl RoundMachine {
    pub fn new(config: &IslandConfig) -> Self {
        let state = RoundState::new(config.items_per_round);
        Self {
            state,
            phase: RoundPhase::Playing,
            readout: ScoreReadout::new(&state),
            sequencer: CameraSequencer::new(config.camera_animation_duration),
            hold: config.celebration_hold,
            vantage_offset: config.celebration_offset,
            vantage_height: config.celebration_height,
            home_eye: config.camera_eye,
            vantage: config.camera_eye,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn readout(&self) -> &ScoreReadout {
        &self.readout
    }

    pub fn sequencer(&self) -> &CameraSequencer {
        &self.sequencer
    }

    pub fn is_sequencing(&self) -> bool {
        self.phase != RoundPhase::Playing
    }

    /// Resolve a click at `ndc` and collect the shell under it, if any.
    ///
    /// Misses, falling shells and already collected shells are ignored.
    pub fn handle_pick<R: PickResolver + ?Sized>(
        &mut self,
        ndc: Vector2<f32>,
        now: f32,
        scene: &mut IslandScene,
        resolver: &R,
    ) -> PickOutcome {
        let hit = resolver.resolve(ndc, &scene.camera_manager.camera, &scene.collectibles);
        let Some(shell) = hit.and_then(|hit| scene.collectibles.get_mut(hit.index)) else {
            log::debug!("Click at ({:.2}, {:.2}) hit nothing", ndc.x, ndc.y);
            return PickOutcome::Missed;
        };

        if !shell.visible {
            log::debug!("Ignoring click on a collected shell");
            return PickOutcome::AlreadyCollected;
        }
        if !shell.is_pickable() {
            log::debug!("Ignoring click on a falling shell");
            return PickOutcome::NotSettled;
        }

        shell.visible = false;
        self.state.collect();
        self.readout.refresh(&self.state);
        log::debug!("{}", self.readout.text());

        if self.state.is_complete() {
            self.complete_round(now, scene);
            PickOutcome::RoundComplete {
                next_round: self.state.round,
            }
        } else {
            PickOutcome::Collected {
                score: self.state.score,
            }
        }
    }

    fn complete_round(&mut self, now: f32, scene: &mut IslandScene) {
        self.state.advance();

        self.home_eye = scene.camera_manager.camera.eye;
        self.vantage = scene
            .character
            .camera_vantage(self.vantage_offset, self.vantage_height);
        self.sequencer.arm(self.home_eye, self.vantage, now);

        scene.camera_manager.set_free_look(false);
        scene.character.start_victory(now);
        self.phase = RoundPhase::RoundComplete;

        log::info!("Round complete, starting round {}", self.state.round);
    }

    /// Advance the celebration sequence to `now`
    pub fn update(&mut self, now: f32, scene: &mut IslandScene) {
        if self.phase == RoundPhase::RoundComplete {
            self.set_phase(RoundPhase::Sequencing(SequenceStep::FlyOut));
        }

        let RoundPhase::Sequencing(step) = self.phase else {
            return;
        };
        match step {
            SequenceStep::FlyOut => {
                let look_at = scene.character.world_position();
                let camera = &mut scene.camera_manager.camera;
                if self.sequencer.tick(now, camera, look_at) == SequencerStatus::Completed {
                    self.set_phase(RoundPhase::Sequencing(SequenceStep::Hold {
                        until: now + self.hold,
                    }));
                }
            }
            SequenceStep::Hold { until } => {
                if now >= until {
                    self.sequencer.arm(self.vantage, self.home_eye, now);
                    self.set_phase(RoundPhase::Sequencing(SequenceStep::FlyBack));
                    self.fly_back(now, scene);
                }
            }
            SequenceStep::FlyBack => self.fly_back(now, scene),
        }
    }

    fn fly_back(&mut self, now: f32, scene: &mut IslandScene) {
        let look_at = scene.character.world_position();
        if self.sequencer.tick(now, &mut scene.camera_manager.camera, look_at)
            == SequencerStatus::Completed
        {
            self.finish_round(scene);
        }
    }

    fn finish_round(&mut self, scene: &mut IslandScene) {
        scene.character.stop_victory();
        scene.camera_manager.set_free_look(true);
        scene.respawn_collectibles();
        self.readout.refresh(&self.state);
        self.set_phase(RoundPhase::Playing);
        log::info!("{}", self.readout.text());
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        log::debug!("Round phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::OrbitCamera;
    use crate::gfx::picking::PickResult;
    use crate::gfx::scene::Collectible;

    /// Picks the shell whose index is `ndc.x`
    struct IndexResolver;

    impl PickResolver for IndexResolver {
        fn resolve(
            &self,
            ndc: Vector2<f32>,
            _camera: &OrbitCamera,
            collectibles: &[Collectible],
        ) -> Option<PickResult> {
            let index = ndc.x as usize;
            (ndc.x >= 0.0 && index < collectibles.len()).then(|| PickResult {
                index,
                distance: 1.0,
                intersection_point: collectibles[index].position,
            })
        }
    }

    fn click(index: f32) -> Vector2<f32> {
        Vector2::new(index, 0.0)
    }

    fn setup() -> (RoundMachine, IslandScene) {
        let config = IslandConfig::new().with_seed(11);
        (RoundMachine::new(&config), IslandScene::new(&config, 1.0))
    }

    #[test]
    fn test_readout_format() {
        let (rounds, _) = setup();
        assert_eq!(rounds.readout().text(), "Round 1 | Items collected: 0/10");
        assert_eq!(rounds.readout().revision(), 0);
    }

    #[test]
    fn test_pick_collects_once() {
        let (mut rounds, mut scene) = setup();

        let outcome = rounds.handle_pick(click(3.0), 0.0, &mut scene, &IndexResolver);
        assert_eq!(outcome, PickOutcome::Collected { score: 1 });
        assert!(!scene.collectibles[3].visible);
        assert_eq!(rounds.readout().text(), "Round 1 | Items collected: 1/10");

        let again = rounds.handle_pick(click(3.0), 0.1, &mut scene, &IndexResolver);
        assert_eq!(again, PickOutcome::AlreadyCollected);
        assert_eq!(rounds.state().score(), 1);
        assert_eq!(rounds.readout().revision(), 1);
    }

    #[test]
    fn test_missed_click_is_noop() {
        let (mut rounds, mut scene) = setup();
        let outcome = rounds.handle_pick(click(-1.0), 0.0, &mut scene, &IndexResolver);
        assert_eq!(outcome, PickOutcome::Missed);
        assert_eq!(rounds.state().score(), 0);
        assert_eq!(scene.visible_count(), 10);
    }

    #[test]
    fn test_falling_shell_is_not_collectible() {
        let (mut rounds, mut scene) = setup();
        scene.respawn_collectibles();

        let before = scene.collectibles[0].clone();
        let outcome = rounds.handle_pick(click(0.0), 0.0, &mut scene, &IndexResolver);

        assert_eq!(outcome, PickOutcome::NotSettled);
        assert_eq!(rounds.state().score(), 0);
        assert!(scene.collectibles[0].visible);
        assert_eq!(scene.collectibles[0].position, before.position);
    }

    #[test]
    fn test_last_pick_completes_round() {
        let (mut rounds, mut scene) = setup();
        for index in 0..9 {
            rounds.handle_pick(click(index as f32), 0.0, &mut scene, &IndexResolver);
        }
        assert_eq!(rounds.state().round(), 1);
        assert_eq!(rounds.state().score(), 9);
        assert_eq!(rounds.phase(), RoundPhase::Playing);

        let eye = scene.camera_manager.camera.eye;
        let outcome = rounds.handle_pick(click(9.0), 5.0, &mut scene, &IndexResolver);

        assert_eq!(outcome, PickOutcome::RoundComplete { next_round: 2 });
        assert_eq!(rounds.state().round(), 2);
        assert_eq!(rounds.state().score(), 0);
        assert_eq!(rounds.phase(), RoundPhase::RoundComplete);
        assert!(!scene.camera_manager.free_look_enabled());
        assert!(scene.character.is_celebrating());
        // The completing pickup still reads N/N until the sequence ends
        assert_eq!(rounds.readout().text(), "Round 1 | Items collected: 10/10");

        assert_eq!(rounds.sequencer().source(), eye);
        let vantage = rounds.sequencer().target();
        assert!((vantage.x - 4.0).abs() < 1e-5);
        assert_eq!(vantage.y, 8.0);
        assert!((vantage.z - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_celebration_sequence_order() {
        let (mut rounds, mut scene) = setup();
        for index in 0..10 {
            rounds.handle_pick(click(index as f32), 10.0, &mut scene, &IndexResolver);
        }
        let home = scene.camera_manager.camera.eye;
        let vantage = rounds.sequencer().target();

        rounds.update(10.0, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Sequencing(SequenceStep::FlyOut));
        assert_eq!(scene.camera_manager.camera.eye, home);

        rounds.update(10.5, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Sequencing(SequenceStep::FlyOut));

        rounds.update(11.0, &mut scene);
        assert_eq!(
            rounds.phase(),
            RoundPhase::Sequencing(SequenceStep::Hold { until: 13.0 })
        );
        assert_eq!(scene.camera_manager.camera.eye, vantage);
        assert_eq!(scene.camera_manager.camera.target, scene.character.world_position());

        rounds.update(12.9, &mut scene);
        assert_eq!(scene.camera_manager.camera.eye, vantage);
        assert!(scene.character.is_celebrating());

        rounds.update(13.0, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Sequencing(SequenceStep::FlyBack));

        rounds.update(13.5, &mut scene);
        assert!(!scene.camera_manager.free_look_enabled());
        assert_eq!(scene.visible_count(), 0);

        rounds.update(14.0, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Playing);
        assert_eq!(scene.camera_manager.camera.eye, home);
        assert!(scene.camera_manager.free_look_enabled());
        assert!(!scene.character.is_celebrating());
        assert_eq!(scene.collectibles.len(), 10);
        assert_eq!(scene.falling_count(), 10);
        assert_eq!(rounds.readout().text(), "Round 2 | Items collected: 0/10");
    }

    #[test]
    fn test_late_frames_keep_order() {
        let (mut rounds, mut scene) = setup();
        for index in 0..10 {
            rounds.handle_pick(click(index as f32), 0.0, &mut scene, &IndexResolver);
        }

        let vantage = rounds.sequencer().target();

        // Each step waits for the frame that notices the previous one
        rounds.update(50.0, &mut scene);
        assert_eq!(
            rounds.phase(),
            RoundPhase::Sequencing(SequenceStep::Hold { until: 52.0 })
        );
        assert_eq!(scene.camera_manager.camera.eye, vantage);

        rounds.update(100.0, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Sequencing(SequenceStep::FlyBack));
        assert_eq!(scene.camera_manager.camera.eye, vantage);
        assert!(!scene.camera_manager.free_look_enabled());

        rounds.update(100.5, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Sequencing(SequenceStep::FlyBack));
        assert_ne!(scene.camera_manager.camera.eye, vantage);

        rounds.update(101.0, &mut scene);
        assert_eq!(rounds.phase(), RoundPhase::Playing);
        assert!(scene.camera_manager.free_look_enabled());
    }
}
