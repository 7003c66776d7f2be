use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use crate::config::IslandConfig;
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Perspective camera orbiting a focus point.
///
/// `distance`, `pitch` and `yaw` describe the eye relative to `target` while
/// free-look drives the camera. Scripted flights place the eye directly with
/// [`OrbitCamera::place`] and leave the spherical coordinates stale until
/// [`OrbitCamera::retarget`] re-derives them.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    /// Elevation above the horizon in radians
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    /// Point the view faces
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.build_gl_view_projection()
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Will be auto-calculted in `update()` nevertheless.
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    /// Build the island camera: eye at `camera_eye`, orbiting `orbit_focus`
    pub fn from_config(config: &IslandConfig, aspect: f32) -> Self {
        let mut camera = Self::new(1.0, 0.0, 0.0, config.orbit_focus, aspect);
        camera.bounds = OrbitCameraBounds {
            min_distance: Some(config.min_distance),
            max_distance: Some(config.max_distance),
            min_pitch: config.min_pitch,
            max_pitch: config.max_pitch,
        };
        camera.fovy = Deg(config.fovy_degrees).into();
        camera.znear = config.znear;
        camera.zfar = config.zfar;

        // Keep the configured eye exactly; bounds apply once free-look moves it
        camera.eye = config.camera_eye;
        let (distance, pitch, yaw) = spherical_from_offset(camera.eye - camera.target);
        camera.distance = distance;
        camera.pitch = pitch;
        camera.yaw = yaw;
        camera
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.distance) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Put the eye at `eye` and face `look_at`, bypassing the orbit bounds
    pub fn place(&mut self, eye: Vector3<f32>, look_at: Vector3<f32>) {
        self.eye = eye;
        self.target = look_at;
    }

    /// Resume orbiting `focus` from wherever the eye currently is.
    ///
    /// The spherical coordinates are re-derived from the eye and clamped to
    /// the bounds, so the eye may snap onto the nearest allowed position.
    pub fn retarget(&mut self, focus: Vector3<f32>) {
        self.target = focus;
        let (distance, pitch, yaw) = spherical_from_offset(self.eye - focus);
        self.yaw = yaw;
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.set_distance(distance);
    }

    /// Updates the camera after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    /// View-projection in OpenGL clip space (z in -1..1), as used for picking
    pub fn build_gl_view_projection(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj = perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: Some(16.0),
            min_pitch: -std::f32::consts::PI / 2.0 + f32::EPSILON,
            max_pitch: std::f32::consts::PI / 2.0 - f32::EPSILON,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

/// Inverse of [`calculate_cartesian_eye_position`]: (distance, pitch, yaw)
fn spherical_from_offset(offset: Vector3<f32>) -> (f32, f32, f32) {
    let distance = offset.magnitude();
    if distance <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
    let yaw = offset.x.atan2(offset.z);
    (distance, pitch, yaw)
}
