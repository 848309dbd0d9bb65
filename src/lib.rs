pub mod camera;
pub mod cli;
pub mod frame;
pub mod math;
pub mod path;
pub mod renderer;
pub mod scenes;
pub mod types;

pub use scenes::{create_flythrough_scene, create_ring_scene};
