//! # Graphics Module
//!
//! Scene-side state for the island: camera, picking and the scene context.
//!
//! - **Camera System** ([`camera`]) - Orbit camera with damped free-look controls
//! - **Picking** ([`picking`]) - Click-to-shell ray casting
//! - **Scene Management** ([`scene`]) - Shells, character and spawning

pub mod camera;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use scene::IslandScene;
