// Host-side tests for the session context: framing + gestures wired together.

use glam::Vec3;
use std::f32::consts::PI;
use viewer_core::{
    BoundingVolume, CameraPose, GestureEvent, GestureMode, Session, ViewerConfig, ViewerError,
};

fn session(mode: GestureMode) -> Session {
    Session::new(ViewerConfig::with_mode(mode)).unwrap()
}

fn chair_bounds() -> BoundingVolume {
    BoundingVolume::new(Vec3::new(-40.0, 0.0, -35.0), Vec3::new(40.0, 110.0, 35.0))
}

#[test]
fn invalid_config_fails_before_session_exists() {
    let config = ViewerConfig {
        min_distance: 20.0,
        max_distance: 5.0,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        Session::new(config),
        Err(ViewerError::Configuration(_))
    ));
}

#[test]
fn gestures_are_inert_before_load() {
    for mode in [GestureMode::Drag, GestureMode::Wheel, GestureMode::Scroll] {
        let mut s = session(mode);
        let before_camera = *s.camera();
        let before_state = *s.gesture();
        for ev in [
            GestureEvent::PointerDown { x: 0.0 },
            GestureEvent::PointerMove { x: 100.0 },
            GestureEvent::PointerUp,
            GestureEvent::Wheel { delta_y: 1.0 },
            GestureEvent::Scroll {
                offset: 500.0,
                document_height: 2000.0,
                viewport_height: 1000.0,
            },
        ] {
            assert!(!s.handle(ev));
        }
        assert!(!s.is_loaded());
        assert_eq!(*s.camera(), before_camera);
        assert_eq!(*s.gesture(), before_state);
    }
}

#[test]
fn attach_frames_asset_and_seeds_camera() {
    let mut s = session(GestureMode::Drag);
    let b = chair_bounds();
    let t = s.attach_asset(b).unwrap();
    let asset = s.asset().unwrap();
    let world = asset.world_bounds();
    assert!(world.center().length() < 1e-4);
    assert!((world.diagonal_length() - s.config().target_span).abs() < 1e-4);
    let cfg = s.config().clone();
    assert_eq!(
        *s.camera(),
        t.seed_pose_within(cfg.min_distance, cfg.max_distance)
    );
    assert_eq!(s.camera().look_at, Vec3::ZERO);
}

#[test]
fn seeded_camera_is_outside_framed_box_and_inside_far_plane() {
    const Z_FAR: f32 = 1000.0;
    for half in [0.01_f32, 1.0, 100.0, 5000.0] {
        let mut s = session(GestureMode::Drag);
        s.attach_asset(BoundingVolume::new(Vec3::splat(-half), Vec3::splat(half)))
            .unwrap();
        let world = s.asset().unwrap().world_bounds();
        let cam = *s.camera();
        let d = cam.distance();
        assert!(
            d > world.diagonal_length() * 0.5,
            "camera at {d} inside framed box of half-size {half}"
        );
        assert!(d + world.diagonal_length() * 0.5 < Z_FAR, "camera at {d}");
        assert!(d >= s.config().min_distance - 1e-4);
        assert!(d <= s.config().max_distance + 1e-4);
    }
}

#[test]
fn degenerate_asset_falls_back_to_unframed_default_pose() {
    let mut s = session(GestureMode::Wheel);
    let p = Vec3::new(1.0, 2.0, 3.0);
    let err = s.attach_asset(BoundingVolume::new(p, p)).unwrap_err();
    assert!(matches!(err, ViewerError::DegenerateAsset { .. }));
    let asset = s.asset().unwrap();
    assert_eq!(asset.frame.scale, 1.0);
    assert_eq!(asset.frame.translation, Vec3::ZERO);
    assert_eq!(*s.camera(), CameraPose::default());

    // Gestures still produce a finite camera around the unframed asset.
    assert!(s.handle(GestureEvent::Wheel { delta_y: 1.0 }));
    assert!(s.camera().is_finite());
    assert_eq!(s.camera().look_at, s.asset().unwrap().live_center());
}

#[test]
fn drag_rotates_asset_but_not_camera() {
    let mut s = session(GestureMode::Drag);
    s.attach_asset(chair_bounds()).unwrap();
    let seeded = *s.camera();
    assert!(s.handle(GestureEvent::PointerDown { x: 10.0 }));
    assert!(s.handle(GestureEvent::PointerMove { x: 60.0 }));
    assert!(s.handle(GestureEvent::PointerUp));
    assert!((s.asset().unwrap().rotation_y - 0.5).abs() < 1e-6);
    assert_eq!(*s.camera(), seeded);
}

#[test]
fn wheel_positions_camera_on_diagonal_around_live_center() {
    let mut s = session(GestureMode::Wheel);
    s.attach_asset(chair_bounds()).unwrap();
    for _ in 0..25 {
        assert!(s.handle(GestureEvent::Wheel { delta_y: 100.0 }));
    }
    let cam = *s.camera();
    assert!((cam.distance() - 16.25).abs() < 1e-4);
    assert!(cam.look_at.length() < 1e-4);
    assert!((s.asset().unwrap().rotation_y - 1.5708).abs() < 1e-4);

    // Moving the asset after load moves the look-at target with it.
    let offset = Vec3::new(3.0, -1.0, 2.0);
    s.set_asset_offset(offset);
    assert!(s.handle(GestureEvent::Wheel { delta_y: 100.0 }));
    assert!((s.camera().look_at - offset).length() < 1e-4);
}

#[test]
fn wheel_at_boundary_leaves_view_unchanged() {
    let mut s = session(GestureMode::Wheel);
    s.attach_asset(chair_bounds()).unwrap();
    let seeded = *s.camera();
    assert!(!s.handle(GestureEvent::Wheel { delta_y: -1.0 }));
    assert_eq!(*s.camera(), seeded);
    assert_eq!(s.gesture().step, 0);
}

#[test]
fn scroll_half_way_and_back_is_reproducible() {
    let mut s = session(GestureMode::Scroll);
    s.attach_asset(chair_bounds()).unwrap();
    let half = GestureEvent::Scroll {
        offset: 500.0,
        document_height: 2000.0,
        viewport_height: 1000.0,
    };
    assert!(s.handle(half));
    let first = *s.camera();
    assert!((first.distance() - 12.5).abs() < 1e-4);
    assert!((s.asset().unwrap().rotation_y - PI).abs() < 1e-5);

    s.handle(GestureEvent::Scroll {
        offset: 900.0,
        document_height: 2000.0,
        viewport_height: 1000.0,
    });
    s.handle(half);
    assert_eq!(*s.camera(), first);
}

#[test]
fn scroll_at_top_replaces_seed_pose() {
    let mut s = session(GestureMode::Scroll);
    s.attach_asset(chair_bounds()).unwrap();
    let top = GestureEvent::Scroll {
        offset: 0.0,
        document_height: 2000.0,
        viewport_height: 1000.0,
    };
    assert!(s.handle(top));
    assert!((s.camera().distance() - 5.0).abs() < 1e-4);
    // Same offset again: nothing left to change.
    assert!(!s.handle(top));
}

#[test]
fn scroll_range_change_at_same_offset_moves_camera() {
    let mut s = session(GestureMode::Scroll);
    s.attach_asset(chair_bounds()).unwrap();
    assert!(s.handle(GestureEvent::Scroll {
        offset: 500.0,
        document_height: 2000.0,
        viewport_height: 1000.0,
    }));
    // Viewport grew: same offset, smaller scrollable range.
    assert!(s.handle(GestureEvent::Scroll {
        offset: 500.0,
        document_height: 2000.0,
        viewport_height: 1500.0,
    }));
    assert_eq!(s.gesture().progress, 1.0);
    assert!((s.camera().distance() - 20.0).abs() < 1e-4);
}

#[test]
fn scroll_without_range_never_produces_nan() {
    let mut s = session(GestureMode::Scroll);
    s.attach_asset(chair_bounds()).unwrap();
    s.handle(GestureEvent::Scroll {
        offset: 120.0,
        document_height: 1000.0,
        viewport_height: 1000.0,
    });
    assert_eq!(s.gesture().progress, 0.0);
    assert!(s.camera().is_finite());
    assert!(s.asset().unwrap().rotation_y.is_finite());
}

#[test]
fn reattach_resets_gesture_state() {
    let mut s = session(GestureMode::Wheel);
    s.attach_asset(chair_bounds()).unwrap();
    for _ in 0..10 {
        s.handle(GestureEvent::Wheel { delta_y: 1.0 });
    }
    assert_eq!(s.gesture().step, 10);
    s.attach_asset(BoundingVolume::new(Vec3::ZERO, Vec3::ONE))
        .unwrap();
    assert_eq!(s.gesture().step, 0);
    assert_eq!(s.asset().unwrap().rotation_y, 0.0);
}
