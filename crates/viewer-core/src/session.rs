//! Explicit viewer context passed to every input handler and read by the
//! render loop.
//!
//! A session starts idle (no asset). Until an asset is attached every
//! gesture is a no-op, which is how a stalled or failed load leaves the viewer.

use crate::bounds::BoundingVolume;
use crate::camera::CameraPose;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::framing::{frame, FrameTransform};
use crate::gesture::{Choreographer, GestureEvent, GestureMode, GestureState};
use glam::{Mat4, Vec3};

/// Transform fields of the loaded scene root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asset {
    pub native_bounds: BoundingVolume,
    pub frame: FrameTransform,
    pub rotation_y: f32,
    /// World-space displacement applied after framing and rotation.
    pub offset: Vec3,
}

impl Asset {
    pub fn new(native_bounds: BoundingVolume, frame: FrameTransform) -> Self {
        Self {
            native_bounds,
            frame,
            rotation_y: 0.0,
            offset: Vec3::ZERO,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset) * Mat4::from_rotation_y(self.rotation_y) * self.frame.matrix()
    }

    /// Bounds in world space under the current transform; never cached.
    pub fn world_bounds(&self) -> BoundingVolume {
        self.native_bounds.transformed(&self.model_matrix())
    }

    /// Live bounding-volume center, or the origin if the transform went non-finite.
    pub fn live_center(&self) -> Vec3 {
        let c = self.world_bounds().center();
        if c.is_finite() {
            c
        } else {
            Vec3::ZERO
        }
    }
}

pub struct Session {
    config: ViewerConfig,
    choreographer: Choreographer,
    gesture: GestureState,
    asset: Option<Asset>,
    camera: CameraPose,
}

impl Session {
    /// Fails with a configuration error before any handler can be wired.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let choreographer = Choreographer::new(&config)?;
        let gesture = choreographer.initial_state();
        Ok(Self {
            config,
            choreographer,
            gesture,
            asset: None,
            camera: CameraPose::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> GestureMode {
        self.choreographer.mode()
    }

    #[inline]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    #[inline]
    pub fn asset(&self) -> Option<&Asset> {
        self.asset.as_ref()
    }

    #[inline]
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    pub fn is_loaded(&self) -> bool {
        self.asset.is_some()
    }

    /// Frame a freshly loaded asset and seed the camera from its extent.
    ///
    /// A degenerate asset is still attached, unframed, with the default camera
    /// pose; the error is returned so the caller can report it.
    pub fn attach_asset(&mut self, bounds: BoundingVolume) -> Result<FrameTransform> {
        self.gesture = self.choreographer.initial_state();
        match frame(
            &bounds,
            self.config.target_span,
            self.config.camera_distance_multiplier,
        ) {
            Ok(transform) => {
                self.asset = Some(Asset::new(bounds, transform));
                self.camera = transform
                    .seed_pose_within(self.config.min_distance, self.config.max_distance);
                log::info!(
                    "[frame] scale={:.4} reference_distance={:.3} center=({:.3},{:.3},{:.3})",
                    transform.scale,
                    transform.reference_distance,
                    -transform.translation.x,
                    -transform.translation.y,
                    -transform.translation.z
                );
                Ok(transform)
            }
            Err(e) => {
                self.asset = Some(Asset::new(bounds, FrameTransform::IDENTITY));
                self.camera = CameraPose::default();
                Err(e)
            }
        }
    }

    /// Move the framed asset in world space, e.g. from a host layout step.
    pub fn set_asset_offset(&mut self, offset: Vec3) {
        if let Some(asset) = self.asset.as_mut() {
            if offset.is_finite() {
                asset.offset = offset;
            }
        }
    }

    /// Apply one input event. Returns `true` if the view changed.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        let Some(asset) = self.asset.as_mut() else {
            return false;
        };
        if event.mode() != self.choreographer.mode() {
            return false;
        }
        let next = self.choreographer.step(self.gesture, &event);
        // Scroll re-derives the camera from the live document every event, even
        // when progress is unchanged; drag and wheel no-ops leave the view alone.
        if next == self.gesture && self.choreographer.mode() != GestureMode::Scroll {
            return false;
        }
        let mut changed = next != self.gesture;
        self.gesture = next;
        asset.rotation_y = next.rotation_y;
        if let Some(distance) = self.choreographer.distance(&next) {
            let pose = CameraPose::on_diagonal(asset.live_center(), distance);
            if !pose.is_finite() {
                log::warn!("[gesture] dropped non-finite camera pose for {:?}", event);
            } else if pose != self.camera {
                self.camera = pose;
                changed = true;
            }
        }
        if !changed {
            return false;
        }
        log::debug!(
            "[gesture] {:?} -> progress={:.3} step={} rotation_y={:.4}",
            event,
            next.progress,
            next.step,
            next.rotation_y
        );
        true
    }
}
