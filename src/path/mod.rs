pub mod config;
mod driver;
mod error;
pub mod tangent;

pub use config::{CameraPath, PathConfig, DEFAULT_REFERENCE_FORWARD};
pub use driver::{PathDriver, PathSample};
pub use error::PathError;
pub use tangent::TangentParams;
