//! Character pose loops: idle sway and the arms-up victory cycle

use std::f32::consts::PI;

use crate::gfx::scene::{AnimationMode, CharacterPose, IslandScene};
use crate::simulation::traits::{FrameTime, Simulation};

const SWAY_RATE: f32 = 1.5;
const SWAY_AMPLITUDE: f32 = 0.1;

/// Seconds per raise-hold-lower cycle
pub const VICTORY_CYCLE: f32 = 3.0;
/// Shoulder angle at the top of the cheer
pub const VICTORY_RAISE: f32 = PI * 0.8;
const RAISE_END: f32 = 0.3;
const LOWER_START: f32 = 0.7;

/// Idle sway at `time`: body bob and mirrored shoulder swing
pub fn idle_pose(time: f32, pose: &mut CharacterPose) {
    let sway = (time * SWAY_RATE).sin() * SWAY_AMPLITUDE;
    pose.root_bob = sway;
    pose.left_arm_swing = sway;
    pose.right_arm_swing = -sway;
}

/// Magnitude of the arm raise `elapsed` seconds into the victory loop.
///
/// Linear raise over the first 30 % of each cycle, hold, then a linear
/// lowering over the last 30 %.
pub fn victory_raise(elapsed: f32) -> f32 {
    let progress = elapsed.rem_euclid(VICTORY_CYCLE) / VICTORY_CYCLE;

    if progress < RAISE_END {
        VICTORY_RAISE * (progress / RAISE_END)
    } else if progress > LOWER_START {
        let t = (progress - LOWER_START) / (1.0 - LOWER_START);
        (VICTORY_RAISE * (1.0 - t)).max(0.0)
    } else {
        VICTORY_RAISE
    }
}

/// Drives the character pose every frame from its current [`AnimationMode`]
#[derive(Debug, Default)]
pub struct CharacterAnimator;

impl CharacterAnimator {
    pub fn new() -> Self {
        Self
    }
}

impl Simulation for CharacterAnimator {
    fn update(&mut self, frame: FrameTime, scene: &mut IslandScene) {
        let character = &mut scene.character;
        match character.mode() {
            AnimationMode::Idle => idle_pose(frame.now, &mut character.pose),
            // Bob and swing freeze where they were while cheering
            AnimationMode::Victory { started_at } => {
                let raise = victory_raise(frame.now - started_at);
                character.pose.left_arm_raise = raise;
                character.pose.right_arm_raise = -raise;
            }
        }
    }

    fn name(&self) -> &str {
        "Character Animator"
    }
}
