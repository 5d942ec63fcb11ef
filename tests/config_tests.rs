// Host-side tests for viewer configuration and override parsing.

use viewer_core::{GestureMode, ViewerConfig, ViewerError, OVERRIDE_KEYS};

#[test]
fn defaults_are_valid() {
    let config = ViewerConfig::default();
    config.validate().unwrap();
    assert_eq!(config.mode, GestureMode::Drag);
    assert!(config.min_distance < config.max_distance);
}

#[test]
fn distance_ordering_is_enforced() {
    for (min, max) in [(20.0, 5.0), (10.0, 10.0)] {
        let config = ViewerConfig {
            min_distance: min,
            max_distance: max,
            ..ViewerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ViewerError::Configuration(_))
        ));
    }
}

#[test]
fn non_positive_or_non_finite_values_are_rejected() {
    let base = ViewerConfig::default();
    let bad = [
        ViewerConfig {
            target_span: 0.0,
            ..base.clone()
        },
        ViewerConfig {
            target_span: -5.0,
            ..base.clone()
        },
        ViewerConfig {
            camera_distance_multiplier: f32::NAN,
            ..base.clone()
        },
        ViewerConfig {
            drag_sensitivity: f32::INFINITY,
            ..base.clone()
        },
        ViewerConfig {
            min_distance: 0.0,
            ..base.clone()
        },
        ViewerConfig {
            total_steps: 0,
            ..base.clone()
        },
    ];
    for config in bad {
        assert!(config.validate().is_err(), "accepted {:?}", config);
    }
}

#[test]
fn overrides_apply_by_attribute_key() {
    let mut config = ViewerConfig::default();
    config.apply_override("mode", "scroll").unwrap();
    config.apply_override("target-span", " 10 ").unwrap();
    config.apply_override("camera-distance-multiplier", "6.5").unwrap();
    config.apply_override("drag-sensitivity", "0.02").unwrap();
    config.apply_override("min-distance", "2").unwrap();
    config.apply_override("max-distance", "40").unwrap();
    config.apply_override("total-steps", "50").unwrap();
    assert_eq!(
        config,
        ViewerConfig {
            mode: GestureMode::Scroll,
            target_span: 10.0,
            camera_distance_multiplier: 6.5,
            drag_sensitivity: 0.02,
            min_distance: 2.0,
            max_distance: 40.0,
            total_steps: 50,
        }
    );
    config.validate().unwrap();
}

#[test]
fn every_listed_key_is_recognized() {
    let samples = ["wheel", "5", "3", "0.01", "5", "20", "100"];
    let mut config = ViewerConfig::default();
    for (key, value) in OVERRIDE_KEYS.iter().zip(samples) {
        config.apply_override(key, value).unwrap();
    }
    config.validate().unwrap();
}

#[test]
fn bad_overrides_are_configuration_errors() {
    let mut config = ViewerConfig::default();
    assert!(matches!(
        config.apply_override("zoom", "1"),
        Err(ViewerError::Configuration(_))
    ));
    assert!(config.apply_override("total-steps", "-3").is_err());
    assert!(config.apply_override("min-distance", "near").is_err());
    assert!(config.apply_override("mode", "pinch").is_err());
    assert_eq!(config, ViewerConfig::default());
}
