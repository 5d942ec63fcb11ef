//! Camera description shared with the web frontend.
//!
//! The pose is the only part the gesture logic writes; the projection is owned
//! by the renderer and only follows the canvas aspect.

use crate::constants::DEFAULT_CAMERA_POSITION;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DEFAULT_CAMERA_POSITION,
            look_at: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    /// Place the camera on the `(1, 1, 1)` diagonal through `target`, `distance` away.
    pub fn on_diagonal(target: Vec3, distance: f32) -> Self {
        let dir = Vec3::ONE.normalize();
        Self {
            position: target + dir * distance,
            look_at: target,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.look_at)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }

    /// World to view space, right-handed with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }
}

/// Right-handed perspective projection.
#[derive(Clone, Debug)]
pub struct Projection {
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_proj(&self, pose: &CameraPose) -> Mat4 {
        self.matrix() * pose.view_matrix()
    }
}
