//! Gesture choreography: map one 1-D input signal onto camera distance and
//! model rotation.
//!
//! Exactly one [`GestureMode`] is active per session. Events that belong to a
//! different mode pass through [`Choreographer::step`] unchanged, so wiring
//! extra listeners never disturbs the active one.
//!
//! - Drag accumulates rotation from horizontal pointer motion, incrementally
//!   (the anchor follows the pointer), with no bound.
//! - Wheel counts discrete notches in `[0, total_steps]`; only the sign of a
//!   wheel delta matters. The host must suppress the wheel's native scrolling,
//!   otherwise the step counter and the page scroll position drift apart.
//! - Scroll reads the document position on every event; nothing accumulates,
//!   so returning to an offset always reproduces the same view.

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use std::f32::consts::TAU;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    #[default]
    Drag,
    Wheel,
    Scroll,
}

impl FromStr for GestureMode {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drag" => Ok(Self::Drag),
            "wheel" => Ok(Self::Wheel),
            "scroll" => Ok(Self::Scroll),
            other => Err(ViewerError::Configuration(format!(
                "unknown gesture mode '{other}' (expected drag, wheel or scroll)"
            ))),
        }
    }
}

/// Normalized input delivered by the host's listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    PointerDown {
        x: f32,
    },
    PointerMove {
        x: f32,
    },
    PointerUp,
    Wheel {
        delta_y: f32,
    },
    Scroll {
        offset: f32,
        document_height: f32,
        viewport_height: f32,
    },
}

impl GestureEvent {
    pub fn mode(&self) -> GestureMode {
        match self {
            Self::PointerDown { .. } | Self::PointerMove { .. } | Self::PointerUp => {
                GestureMode::Drag
            }
            Self::Wheel { .. } => GestureMode::Wheel,
            Self::Scroll { .. } => GestureMode::Scroll,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        anchor_x: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub mode: GestureMode,
    /// Normalized position in `[0, 1]`. Unused by drag.
    pub progress: f32,
    /// Wheel notch counter; `progress == step / total_steps` in wheel mode.
    pub step: u32,
    pub rotation_y: f32,
    pub drag: DragPhase,
}

impl GestureState {
    pub fn new(mode: GestureMode) -> Self {
        Self {
            mode,
            progress: 0.0,
            step: 0,
            rotation_y: 0.0,
            drag: DragPhase::Idle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Choreographer {
    mode: GestureMode,
    drag_sensitivity: f32,
    min_distance: f32,
    max_distance: f32,
    total_steps: u32,
}

impl Choreographer {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mode: config.mode,
            drag_sensitivity: config.drag_sensitivity,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            total_steps: config.total_steps,
        })
    }

    #[inline]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn initial_state(&self) -> GestureState {
        GestureState::new(self.mode)
    }

    /// Single dispatch point: the state after `event`, or `state` unchanged.
    pub fn step(&self, state: GestureState, event: &GestureEvent) -> GestureState {
        if event.mode() != self.mode {
            return state;
        }
        match *event {
            GestureEvent::PointerDown { x } => self.press(state, x),
            GestureEvent::PointerMove { x } => self.drag_to(state, x),
            GestureEvent::PointerUp => GestureState {
                drag: DragPhase::Idle,
                ..state
            },
            GestureEvent::Wheel { delta_y } => self.wheel(state, delta_y),
            GestureEvent::Scroll {
                offset,
                document_height,
                viewport_height,
            } => self.scroll(state, offset, document_height, viewport_height),
        }
    }

    /// Camera distance implied by `state`; `None` in drag mode, which never moves the camera.
    pub fn distance(&self, state: &GestureState) -> Option<f32> {
        match self.mode {
            GestureMode::Drag => None,
            GestureMode::Wheel => Some(lerp(self.max_distance, self.min_distance, state.progress)),
            GestureMode::Scroll => Some(lerp(
                self.max_distance,
                self.min_distance,
                1.0 - state.progress,
            )),
        }
    }

    fn press(&self, state: GestureState, x: f32) -> GestureState {
        if !x.is_finite() {
            return state;
        }
        GestureState {
            drag: DragPhase::Dragging { anchor_x: x },
            ..state
        }
    }

    fn drag_to(&self, state: GestureState, x: f32) -> GestureState {
        let DragPhase::Dragging { anchor_x } = state.drag else {
            return state;
        };
        if !x.is_finite() {
            return state;
        }
        let rotation_y = state.rotation_y + (x - anchor_x) * self.drag_sensitivity;
        GestureState {
            rotation_y: if rotation_y.is_finite() {
                rotation_y
            } else {
                state.rotation_y
            },
            drag: DragPhase::Dragging { anchor_x: x },
            ..state
        }
    }

    fn wheel(&self, state: GestureState, delta_y: f32) -> GestureState {
        let step = match wheel_direction(delta_y) {
            Some(WheelDirection::Forward) => (state.step + 1).min(self.total_steps),
            Some(WheelDirection::Backward) => state.step.saturating_sub(1),
            None => return state,
        };
        if step == state.step {
            return state;
        }
        let progress = step as f32 / self.total_steps as f32;
        GestureState {
            progress,
            step,
            rotation_y: progress * TAU,
            ..state
        }
    }

    fn scroll(
        &self,
        state: GestureState,
        offset: f32,
        document_height: f32,
        viewport_height: f32,
    ) -> GestureState {
        let progress = match scroll_progress(offset, document_height, viewport_height) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("[gesture] {e}; treating progress as 0");
                0.0
            }
        };
        GestureState {
            progress,
            rotation_y: progress * TAU,
            ..state
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Forward,
    Backward,
}

/// Only the sign of a wheel delta counts; zero (or NaN) is no notch at all.
#[inline]
pub fn wheel_direction(delta_y: f32) -> Option<WheelDirection> {
    if delta_y > 0.0 {
        Some(WheelDirection::Forward)
    } else if delta_y < 0.0 {
        Some(WheelDirection::Backward)
    } else {
        None
    }
}

/// Fraction of the scrollable range already scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(offset: f32, document_height: f32, viewport_height: f32) -> Result<f32> {
    let range = document_height - viewport_height;
    if !(range.is_finite() && range > 0.0 && offset.is_finite()) {
        return Err(ViewerError::UndefinedProgress { range });
    }
    Ok((offset / range).clamp(0.0, 1.0))
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
