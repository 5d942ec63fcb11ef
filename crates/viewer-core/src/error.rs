use glam::Vec3;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("degenerate asset: bounding volume has no extent (min={min}, max={max})")]
    DegenerateAsset { min: Vec3, max: Vec3 },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("undefined scroll progress: scrollable range is {range}")]
    UndefinedProgress { range: f32 },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
