//! Scripted camera flights between two eye positions

use cgmath::Vector3;

use crate::gfx::camera::OrbitCamera;

/// Ease-out cubic: fast start, gentle arrival
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// `source` at 0, `target` at 1, exact at both ends
pub fn lerp(source: Vector3<f32>, target: Vector3<f32>, s: f32) -> Vector3<f32> {
    source * (1.0 - s) + target * s
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequencerStatus {
    /// Not armed; the camera was left alone
    Idle,
    /// Mid-flight at normalized progress `t`
    Running { t: f32 },
    /// This tick reached the end pose; the sequencer is idle again
    Completed,
}

/// A single eased flight of the camera eye, re-aimed at a point every tick
#[derive(Debug, Clone)]
pub struct CameraSequencer {
    duration: f32,
    active: bool,
    start_time: f32,
    source: Vector3<f32>,
    target: Vector3<f32>,
}

impl CameraSequencer {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            active: false,
            start_time: 0.0,
            source: Vector3::new(0.0, 0.0, 0.0),
            target: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn source(&self) -> Vector3<f32> {
        self.source
    }

    pub fn target(&self) -> Vector3<f32> {
        self.target
    }

    /// Start a flight from `source` to `target` at `start_time`
    pub fn arm(&mut self, source: Vector3<f32>, target: Vector3<f32>, start_time: f32) {
        self.source = source;
        self.target = target;
        self.start_time = start_time;
        self.active = true;
        log::debug!("Camera flight armed at {start_time:.2}s: {source:?} -> {target:?}");
    }

    /// Normalized progress at `now`, clamped to 0..=1
    pub fn progress(&self, now: f32) -> f32 {
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Eye position at `now`
    pub fn eye_at(&self, now: f32) -> Vector3<f32> {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        lerp(self.source, self.target, ease_out_cubic(t))
    }

    /// Move the camera for this frame and face `look_at`
    pub fn tick(
        &mut self,
        now: f32,
        camera: &mut OrbitCamera,
        look_at: Vector3<f32>,
    ) -> SequencerStatus {
        if !self.active {
            return SequencerStatus::Idle;
        }

        let t = self.progress(now);
        camera.place(self.eye_at(now), look_at);

        if t >= 1.0 {
            self.active = false;
            SequencerStatus::Completed
        } else {
            SequencerStatus::Running { t }
        }
    }
}
