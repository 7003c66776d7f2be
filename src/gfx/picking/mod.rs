//! # Shell Picking
//!
//! Turns a click into a world-space ray and finds the nearest visible shell
//! under it.
//!
//! ## How it works
//!
//! 1. **Pixels to NDC**: [`screen_to_ndc`] normalizes window coordinates to -1..1
//! 2. **NDC to Ray**: the inverse view-projection unprojects the near and far planes
//! 3. **Ray-Box Intersection**: every visible shell's [`Aabb`] is tested
//! 4. **Selection**: the closest hit wins
//!
//! The round logic only sees the [`PickResolver`] trait, so tests can swap
//! the ray caster for a scripted resolver.

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::gfx::{camera::orbit_camera::OrbitCamera, scene::object::Collectible};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Slab test. Returns the distance to the entry point, or to the exit
    /// point when the origin is inside the box.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }
}

/// Result of a pick
#[derive(Debug, Clone)]
pub struct PickResult {
    /// Index of the shell in the scene's collectible list
    pub index: usize,
    /// Distance from the ray origin to the hit
    pub distance: f32,
    pub intersection_point: Vector3<f32>,
}

/// Anything that can answer "which shell is under this point?"
pub trait PickResolver {
    fn resolve(
        &self,
        ndc: Vector2<f32>,
        camera: &OrbitCamera,
        collectibles: &[Collectible],
    ) -> Option<PickResult>;
}

/// Convert window pixel coordinates into normalized device coordinates
pub fn screen_to_ndc(screen_pos: (f32, f32), screen_size: (f32, f32)) -> Vector2<f32> {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;

    Vector2::new(
        (mouse_x / screen_width) * 2.0 - 1.0,
        -(mouse_y / screen_height) * 2.0 + 1.0, // Flip Y axis
    )
}

/// Ray caster against shell bounding boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct RayPicker;

impl RayPicker {
    pub fn new() -> Self {
        Self
    }

    /// Unproject an NDC point into a world-space ray
    pub fn ndc_to_ray(&self, ndc: Vector2<f32>, camera: &OrbitCamera) -> Ray {
        let view_proj = camera.build_gl_view_projection();
        let inv_view_proj = view_proj.invert().unwrap_or(Matrix4::from_scale(1.0));

        let near_point = Vector4::new(ndc.x, ndc.y, -1.0, 1.0);
        let far_point = Vector4::new(ndc.x, ndc.y, 1.0, 1.0);

        let world_near = inv_view_proj * near_point;
        let world_far = inv_view_proj * far_point;

        let near_3d = world_near.truncate() / world_near.w;
        let far_3d = world_far.truncate() / world_far.w;

        Ray::new(near_3d, far_3d - near_3d)
    }

    /// Closest visible shell hit by `ray`
    pub fn pick_along(&self, ray: &Ray, collectibles: &[Collectible]) -> Option<PickResult> {
        let mut closest_result: Option<PickResult> = None;

        for (index, shell) in collectibles.iter().enumerate() {
            if !shell.visible {
                continue;
            }

            if let Some(distance) = shell.bounds().intersect_ray(ray) {
                if closest_result
                    .as_ref()
                    .map_or(true, |result| distance < result.distance)
                {
                    closest_result = Some(PickResult {
                        index,
                        distance,
                        intersection_point: ray.point_at(distance),
                    });
                }
            }
        }

        closest_result
    }
}

impl PickResolver for RayPicker {
    fn resolve(
        &self,
        ndc: Vector2<f32>,
        camera: &OrbitCamera,
        collectibles: &[Collectible],
    ) -> Option<PickResult> {
        let ray = self.ndc_to_ray(ndc, camera);
        self.pick_along(&ray, collectibles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IslandConfig;
    use crate::gfx::scene::object::ShellKind;
    use cgmath::Zero;

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = Aabb::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(aabb.intersect_ray(&ray), Some(4.0));

        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());
    }

    #[test]
    fn test_screen_to_ndc() {
        let center = screen_to_ndc((400.0, 300.0), (800.0, 600.0));
        assert_eq!(center, Vector2::new(0.0, 0.0));

        let top_left = screen_to_ndc((0.0, 0.0), (800.0, 600.0));
        assert_eq!(top_left, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn test_pick_nearest_visible_shell() {
        let picker = RayPicker::new();
        let ray = Ray::new(Vector3::new(0.0, 0.5, -10.0), Vector3::new(0.0, 0.0, 1.0));

        let shells = vec![
            Collectible::at_rest(ShellKind::Cone, 0.0, 2.0, 0.5),
            Collectible::at_rest(ShellKind::Cone, 0.0, -2.0, 0.5),
            Collectible::at_rest(ShellKind::Cone, 3.0, 0.0, 0.5),
        ];
        assert_eq!(picker.pick_along(&ray, &shells).map(|hit| hit.index), Some(1));

        let mut hidden = shells.clone();
        hidden[1].visible = false;
        assert_eq!(picker.pick_along(&ray, &hidden).map(|hit| hit.index), Some(0));
    }

    #[test]
    fn test_center_click_hits_shell_in_view() {
        let config = IslandConfig::default();
        let mut camera = OrbitCamera::from_config(&config, 1.0);
        camera.target = Vector3::zero();

        // Shell straight down the view axis, at the orbit focus
        let shells = vec![Collectible::at_rest(ShellKind::Torus, 0.0, 0.0, 0.0)];
        let hit = RayPicker::new().resolve(Vector2::new(0.0, 0.0), &camera, &shells);
        assert_eq!(hit.map(|hit| hit.index), Some(0));

        let miss = RayPicker::new().resolve(Vector2::new(0.9, 0.9), &camera, &shells);
        assert!(miss.is_none());
    }
}
