use std::f32::consts::PI;

use cgmath::{Matrix4, Rad, Vector3};

use crate::gfx::picking::Aabb;

/// Half extent of a unit-scale shell's pick box
const PICK_HALF_EXTENT: f32 = 0.25;

/// The four shell shapes scattered on the beach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Cone,
    Torus,
    HalfSphere,
    Dodecahedron,
}

impl ShellKind {
    pub const ALL: [ShellKind; 4] = [
        ShellKind::Cone,
        ShellKind::Torus,
        ShellKind::HalfSphere,
        ShellKind::Dodecahedron,
    ];

    /// Tilt around X that lays the shape flat on the sand
    pub fn base_tilt(self) -> f32 {
        match self {
            ShellKind::Cone => PI / 2.0,
            ShellKind::Torus => PI / 3.0,
            ShellKind::HalfSphere => -PI / 4.0,
            ShellKind::Dodecahedron => 0.0,
        }
    }

    pub fn base_scale(self) -> f32 {
        match self {
            ShellKind::Cone => 1.0,
            ShellKind::Torus => 1.2,
            ShellKind::HalfSphere => 1.1,
            ShellKind::Dodecahedron => 1.3,
        }
    }
}

/// A collectible shell.
///
/// `settled` flips to true once the shell rests at `rest_height`, and only
/// settled, visible shells can be collected.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub kind: ShellKind,
    pub position: Vector3<f32>,
    pub rest_height: f32,
    pub fall_velocity: f32,
    pub visible: bool,
    settled: bool,
    /// Euler angles (x, y, z) in radians
    pub rotation: Vector3<f32>,
    pub scale: f32,
}

impl Collectible {
    /// A shell already lying on the sand
    pub fn at_rest(kind: ShellKind, x: f32, z: f32, rest_height: f32) -> Self {
        Self {
            kind,
            position: Vector3::new(x, rest_height, z),
            rest_height,
            fall_velocity: 0.0,
            visible: true,
            settled: true,
            rotation: Vector3::new(kind.base_tilt(), 0.0, 0.0),
            scale: kind.base_scale(),
        }
    }

    /// A shell released from `height`, falling onto `rest_height`
    pub fn dropped(kind: ShellKind, x: f32, z: f32, height: f32, rest_height: f32) -> Self {
        let mut shell = Self::at_rest(kind, x, z, rest_height);
        if height > rest_height {
            shell.position.y = height;
            shell.settled = false;
        }
        shell
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Settled shells are the only ones a click can collect
    pub fn is_pickable(&self) -> bool {
        self.settled
    }

    /// One frame of fall: accelerate, descend, clamp onto the rest height.
    ///
    /// Does nothing once the shell has settled.
    pub fn fall_step(&mut self, gravity_step: f32) {
        if self.settled {
            return;
        }

        if self.position.y > self.rest_height {
            self.fall_velocity += gravity_step;
            self.position.y -= self.fall_velocity;
        }

        if self.position.y <= self.rest_height {
            self.position.y = self.rest_height;
            self.fall_velocity = 0.0;
            self.settled = true;
        }
    }

    /// World-space box used for ray picking
    pub fn bounds(&self) -> Aabb {
        let half = Vector3::new(1.0, 1.0, 1.0) * (PICK_HALF_EXTENT * self.scale);
        Aabb::new(self.position - half, self.position + half)
    }

    /// Model matrix: translate, then rotate X, Y, Z, then scale
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_scale(self.scale)
    }

    pub fn instance(&self) -> ShellInstance {
        ShellInstance {
            transform: self.transform().into(),
            kind: self.kind as u32,
            visible: self.visible as u32,
            _padding: [0; 2],
        }
    }
}

/// Per-shell record a renderer uploads into an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShellInstance {
    pub transform: [[f32; 4]; 4],
    pub kind: u32,
    /// 1 when the shell should be drawn
    pub visible: u32,
    _padding: [u32; 2],
}
