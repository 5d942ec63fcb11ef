use glam::Vec3;

// Shared framing/interaction tuning constants. `ViewerConfig::default` is built from these.

// Framing
pub const TARGET_SPAN: f32 = 5.0; // world-space diagonal every asset is scaled to
pub const CAMERA_DISTANCE_MULTIPLIER: f32 = 3.0; // reference distance per unit of native diagonal

// Interaction
pub const DRAG_SENSITIVITY: f32 = 0.01; // radians per CSS pixel of horizontal drag
pub const MIN_DISTANCE: f32 = 5.0; // closest camera distance reachable by wheel/scroll
pub const MAX_DISTANCE: f32 = 20.0; // farthest camera distance reachable by wheel/scroll
pub const TOTAL_STEPS: u32 = 100; // wheel notches from far to near

// Camera used before an asset is framed, or when framing fails
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

// Seed pose height relative to the reference distance
pub const SEED_HEIGHT_RATIO: f32 = 1.0 / 3.0;
