// Page wiring and rendering constants for the web frontend.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const DEFAULT_MODEL_URL: &str = "/model.glb";
pub const MODEL_URL_ATTR: &str = "data-model";

// Projection
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_INTENSITY: f32 = 1.5;
pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 10.0, 10.0]; // light shines from here toward the origin
pub const BASE_COLOR: [f32; 3] = [0.8, 0.8, 0.82]; // surface albedo, glTF materials are not read

// Clear color
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
