use cgmath::Vector3;
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, MouseScrollDelta},
};

use super::orbit_camera::OrbitCamera;
use crate::config::IslandConfig;

/// Free-look controls: drag to orbit, wheel to zoom.
///
/// Input accumulates as pending deltas which [`CameraController::update`]
/// bleeds into the camera a `damping_factor` share at a time. While disabled
/// the controller ignores input and leaves the camera untouched.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    /// Point the camera orbits while free-look is active
    pub focus: Vector3<f32>,
    enabled: bool,
    is_mouse_pressed: bool,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            damping_factor: 0.05,
            focus: Vector3::new(0.0, 0.0, 0.0),
            enabled: true,
            is_mouse_pressed: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }

    pub fn from_config(config: &IslandConfig) -> Self {
        let mut controller = Self::new(config.rotate_speed, config.zoom_speed);
        controller.damping_factor = config.damping_factor;
        controller.focus = config.orbit_focus;
        controller
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn free-look on or off; pending motion is dropped either way
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Free-look {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
        self.is_mouse_pressed = false;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut OrbitCamera) {
        if !self.enabled {
            return;
        }

        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
            }
            DeviceEvent::MouseWheel { delta } => {
                let scroll_amount = -match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                        *scroll as f32
                    }
                };
                camera.add_distance(scroll_amount * self.zoom_speed);
            }
            DeviceEvent::MouseMotion { delta } => {
                if self.is_mouse_pressed {
                    self.add_rotation(-delta.0 as f32, delta.1 as f32);
                }
            }
            _ => (),
        }
    }

    /// Queue an orbit of `dx`/`dy` pixels worth of motion
    pub fn add_rotation(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.pending_yaw += dx * self.rotate_speed;
        self.pending_pitch += dy * self.rotate_speed;
    }

    /// Apply one frame of damped motion around `focus`
    pub fn update(&mut self, camera: &mut OrbitCamera) {
        if !self.enabled {
            return;
        }

        if camera.target != self.focus {
            camera.retarget(self.focus);
        }

        let yaw_step = self.pending_yaw * self.damping_factor;
        let pitch_step = self.pending_pitch * self.damping_factor;
        if yaw_step != 0.0 {
            camera.add_yaw(yaw_step);
        }
        if pitch_step != 0.0 {
            camera.add_pitch(pitch_step);
        }
        self.pending_yaw -= yaw_step;
        self.pending_pitch -= pitch_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CameraController, OrbitCamera) {
        let config = IslandConfig::default();
        (
            CameraController::from_config(&config),
            OrbitCamera::from_config(&config, 1.0),
        )
    }

    #[test]
    fn test_damped_rotation() {
        let (mut controller, mut camera) = setup();
        let start_yaw = camera.yaw;

        controller.add_rotation(100.0, 0.0);
        controller.update(&mut camera);
        let first_step = camera.yaw - start_yaw;
        controller.update(&mut camera);
        let second_step = camera.yaw - start_yaw - first_step;

        assert!(first_step > 0.0);
        assert!(second_step > 0.0 && second_step < first_step);
    }

    #[test]
    fn test_disabled_controller_ignores_input() {
        let (mut controller, mut camera) = setup();
        let eye = camera.eye;

        controller.set_enabled(false);
        controller.add_rotation(100.0, 100.0);
        controller.process_events(
            &DeviceEvent::MouseWheel {
                delta: MouseScrollDelta::LineDelta(0.0, 3.0),
            },
            &mut camera,
        );
        controller.update(&mut camera);

        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn test_wheel_zooms_within_bounds() {
        let (mut controller, mut camera) = setup();
        let before = camera.distance;

        controller.process_events(
            &DeviceEvent::MouseWheel {
                delta: MouseScrollDelta::LineDelta(0.0, 1.0),
            },
            &mut camera,
        );
        assert!(camera.distance < before);
        assert!(camera.distance >= 8.0);
    }

    #[test]
    fn test_reenabling_faces_focus_again() {
        let (mut controller, mut camera) = setup();
        controller.set_enabled(false);
        camera.place(Vector3::new(4.0, 8.0, 6.0), Vector3::new(4.0, 0.0, 0.0));

        controller.set_enabled(true);
        controller.update(&mut camera);
        assert_eq!(camera.target, controller.focus);
    }
}
