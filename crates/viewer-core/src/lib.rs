pub mod bounds;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod framing;
pub mod gesture;
pub mod session;

pub use bounds::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::{Result, ViewerError};
pub use framing::*;
pub use gesture::*;
pub use session::*;
