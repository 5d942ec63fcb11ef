//! Auto-framing: fit an arbitrary asset into the canonical viewing box.
//!
//! Every asset, whatever its native size, is centered on the origin and
//! uniformly scaled so its bounding diagonal spans `target_span` world units.

use crate::bounds::BoundingVolume;
use crate::camera::CameraPose;
use crate::constants::SEED_HEIGHT_RATIO;
use crate::error::{Result, ViewerError};
use glam::{Mat4, Vec3};

/// Output of [`frame`]; applied once to the asset root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransform {
    /// Applied before `scale`, puts the bounding-volume center at the origin.
    pub translation: Vec3,
    pub scale: f32,
    /// Native diagonal times the camera distance multiplier; seeds the camera.
    pub reference_distance: f32,
}

impl FrameTransform {
    /// Transform used when an asset cannot be framed.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        scale: 1.0,
        reference_distance: 0.0,
    };

    /// `p -> scale * (p + translation)`
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_translation(self.translation)
    }

    /// Initial camera placement: `(d, d/3, d)` looking at the origin.
    pub fn seed_pose(&self) -> CameraPose {
        let d = self.reference_distance;
        CameraPose {
            position: Vec3::new(d, d * SEED_HEIGHT_RATIO, d),
            look_at: Vec3::ZERO,
        }
    }

    /// [`seed_pose`](Self::seed_pose) with its distance from the origin clamped
    /// into `[min_distance, max_distance]`, the range the gestures move within.
    ///
    /// `reference_distance` follows the native extent while the asset is drawn
    /// at the framed scale, so the raw seed can land inside the model or past
    /// the far plane.
    pub fn seed_pose_within(&self, min_distance: f32, max_distance: f32) -> CameraPose {
        let pose = self.seed_pose();
        let distance = pose.distance();
        if !(distance.is_finite() && distance > 0.0) {
            return CameraPose {
                position: Vec3::new(1.0, SEED_HEIGHT_RATIO, 1.0).normalize() * min_distance,
                look_at: Vec3::ZERO,
            };
        }
        let clamped = distance.clamp(min_distance, max_distance);
        CameraPose {
            position: pose.position * (clamped / distance),
            look_at: Vec3::ZERO,
        }
    }
}

pub fn frame(
    bounds: &BoundingVolume,
    target_span: f32,
    camera_distance_multiplier: f32,
) -> Result<FrameTransform> {
    if !(target_span.is_finite() && target_span > 0.0) {
        return Err(ViewerError::Configuration(format!(
            "target span must be positive, got {target_span}"
        )));
    }
    if !(camera_distance_multiplier.is_finite() && camera_distance_multiplier > 0.0) {
        return Err(ViewerError::Configuration(format!(
            "camera distance multiplier must be positive, got {camera_distance_multiplier}"
        )));
    }
    let diagonal = bounds.diagonal_length();
    if !bounds.is_finite() || !diagonal.is_finite() || diagonal <= 0.0 {
        return Err(ViewerError::DegenerateAsset {
            min: bounds.min,
            max: bounds.max,
        });
    }
    let scale = target_span / diagonal;
    let reference_distance = diagonal * camera_distance_multiplier;
    // A vanishingly small box can still overflow the scale.
    if !scale.is_finite() || !reference_distance.is_finite() {
        return Err(ViewerError::DegenerateAsset {
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(FrameTransform {
        translation: -bounds.center(),
        scale,
        reference_distance,
    })
}
