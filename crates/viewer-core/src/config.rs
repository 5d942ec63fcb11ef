use crate::constants::*;
use crate::error::{Result, ViewerError};
use crate::gesture::GestureMode;
use std::str::FromStr;

/// Recognized viewer options. Validate before wiring any input.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub mode: GestureMode,
    pub target_span: f32,
    pub camera_distance_multiplier: f32,
    pub drag_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub total_steps: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mode: GestureMode::Drag,
            target_span: TARGET_SPAN,
            camera_distance_multiplier: CAMERA_DISTANCE_MULTIPLIER,
            drag_sensitivity: DRAG_SENSITIVITY,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            total_steps: TOTAL_STEPS,
        }
    }
}

impl ViewerConfig {
    pub fn with_mode(mode: GestureMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("target-span", self.target_span)?;
        positive("camera-distance-multiplier", self.camera_distance_multiplier)?;
        positive("drag-sensitivity", self.drag_sensitivity)?;
        positive("min-distance", self.min_distance)?;
        positive("max-distance", self.max_distance)?;
        if self.min_distance >= self.max_distance {
            return Err(ViewerError::Configuration(format!(
                "min-distance ({}) must be less than max-distance ({})",
                self.min_distance, self.max_distance
            )));
        }
        if self.total_steps == 0 {
            return Err(ViewerError::Configuration(
                "total-steps must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Apply one `key=value` override, keys as written in `data-*` attributes.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "mode" => self.mode = parse(key, value)?,
            "target-span" => self.target_span = parse(key, value)?,
            "camera-distance-multiplier" => self.camera_distance_multiplier = parse(key, value)?,
            "drag-sensitivity" => self.drag_sensitivity = parse(key, value)?,
            "min-distance" => self.min_distance = parse(key, value)?,
            "max-distance" => self.max_distance = parse(key, value)?,
            "total-steps" => self.total_steps = parse(key, value)?,
            _ => {
                return Err(ViewerError::Configuration(format!(
                    "unknown option '{key}'"
                )))
            }
        }
        log::debug!("[config] {} = {}", key, value);
        Ok(())
    }
}

pub const OVERRIDE_KEYS: [&str; 7] = [
    "mode",
    "target-span",
    "camera-distance-multiplier",
    "drag-sensitivity",
    "min-distance",
    "max-distance",
    "total-steps",
];

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| ViewerError::Configuration(format!("cannot parse {key} from '{value}'")))
}

fn positive(key: &str, v: f32) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ViewerError::Configuration(format!(
            "{key} must be a positive finite number, got {v}"
        )))
    }
}
