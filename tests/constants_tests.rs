// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use viewer_core::{
    CAMERA_DISTANCE_MULTIPLIER, DEFAULT_CAMERA_POSITION, DRAG_SENSITIVITY, MAX_DISTANCE,
    MIN_DISTANCE, TARGET_SPAN, TOTAL_STEPS,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_positive() {
    assert!(TARGET_SPAN > 0.0);
    assert!(CAMERA_DISTANCE_MULTIPLIER > 0.0);
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(MIN_DISTANCE > 0.0);
    assert!(TOTAL_STEPS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(MIN_DISTANCE < MAX_DISTANCE);

    // The whole framed asset fits between the camera and the far plane
    assert!(MAX_DISTANCE + TARGET_SPAN < Z_FAR);
    assert!(Z_NEAR < MIN_DISTANCE - TARGET_SPAN * 0.5);

    // The fallback camera does not sit inside the canonical box
    assert!(DEFAULT_CAMERA_POSITION.length() > TARGET_SPAN * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_constants_are_within_reasonable_bounds() {
    assert!(FOV_Y_DEGREES > 0.0 && FOV_Y_DEGREES < 180.0);
    assert!(Z_NEAR > 0.0 && Z_NEAR < Z_FAR);
    assert!(AMBIENT_INTENSITY >= 0.0);
    assert!(DIRECTIONAL_INTENSITY >= 0.0);
    assert!(BASE_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(DEFAULT_MODEL_URL.ends_with(".glb"));
}
