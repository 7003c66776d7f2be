use cgmath::{Matrix4, SquareMatrix};
use winit::event::DeviceEvent;

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};
use crate::config::IslandConfig;

/// The scene camera together with the free-look controls that drive it
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    pub fn from_config(config: &IslandConfig, aspect: f32) -> Self {
        Self::new(
            OrbitCamera::from_config(config, aspect),
            CameraController::from_config(config),
        )
    }

    pub fn process_event(&mut self, event: &DeviceEvent) {
        self.controller.process_events(event, &mut self.camera);
    }

    pub fn free_look_enabled(&self) -> bool {
        self.controller.is_enabled()
    }

    pub fn set_free_look(&mut self, enabled: bool) {
        self.controller.set_enabled(enabled);
    }

    /// Per-frame camera work: damped free-look, then the GPU uniform
    pub fn update(&mut self) {
        self.controller.update(&mut self.camera);
        self.camera.update_view_proj();
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}
