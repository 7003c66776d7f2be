use cgmath::Vector3;

/// Which pose loop drives the character
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationMode {
    Idle,
    /// Arms-up celebration; `started_at` anchors the repeating cycle
    Victory { started_at: f32 },
}

/// Joint angles of the blocky beach-goer, in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharacterPose {
    /// Vertical offset of the whole body
    pub root_bob: f32,
    /// Forward/back swing of each shoulder (rotation about X)
    pub left_arm_swing: f32,
    pub right_arm_swing: f32,
    /// Sideways raise of each shoulder (rotation about Z)
    pub left_arm_raise: f32,
    pub right_arm_raise: f32,
}

/// The character standing on the shore
#[derive(Debug, Clone)]
pub struct Character {
    /// Ground position of the character root
    pub position: Vector3<f32>,
    /// Yaw in radians
    pub facing: f32,
    pub pose: CharacterPose,
    mode: AnimationMode,
}

impl Character {
    pub fn new(position: Vector3<f32>, facing: f32) -> Self {
        Self {
            position,
            facing,
            pose: CharacterPose::default(),
            mode: AnimationMode::Idle,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self.mode, AnimationMode::Victory { .. })
    }

    pub fn start_victory(&mut self, now: f32) {
        self.mode = AnimationMode::Victory { started_at: now };
    }

    /// Back to idle; raised arms drop straight to rest
    pub fn stop_victory(&mut self) {
        self.mode = AnimationMode::Idle;
        self.pose.left_arm_raise = 0.0;
        self.pose.right_arm_raise = 0.0;
    }

    /// Root position including the idle bob
    pub fn world_position(&self) -> Vector3<f32> {
        self.position + Vector3::new(0.0, self.pose.root_bob, 0.0)
    }

    /// Where the celebration camera parks: `offset` units opposite the
    /// facing direction, at an absolute `height`
    pub fn camera_vantage(&self, offset: f32, height: f32) -> Vector3<f32> {
        Vector3::new(
            self.position.x - offset * self.facing.cos(),
            height,
            self.position.z - offset * self.facing.sin(),
        )
    }
}
