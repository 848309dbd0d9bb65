use glam::Vec3;

use super::{CubeConfig, LightConfig, SceneConfig};
use crate::path::{PathConfig, TangentParams, DEFAULT_REFERENCE_FORWARD};

/// The default flythrough: a loose field of cubes with the camera weaving
/// between the columns, looking around as it goes.
pub fn create_flythrough_scene() -> SceneConfig {
    let cube_positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 3.0),
        Vec3::new(0.0, 0.0, 6.0),
        Vec3::new(0.0, 1.0, 8.0),
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, -3.0, 12.0),
        Vec3::new(5.0, 0.0, 3.0),
        Vec3::new(5.0, 0.0, 6.0),
        Vec3::new(5.0, 5.0, 8.0),
        Vec3::new(5.0, 0.0, 10.0),
        Vec3::new(7.0, 0.0, 12.0),
        Vec3::new(-5.0, 0.0, 3.0),
        Vec3::new(-8.0, 0.0, 6.0),
        Vec3::new(-6.0, 3.0, 8.0),
        Vec3::new(-5.0, 0.0, 10.0),
        Vec3::new(-6.0, 0.0, 12.0),
        Vec3::new(-1.0, 2.0, -1.0),
    ];

    let waypoints = vec![
        Vec3::new(0.0, 5.0, -3.0),
        Vec3::new(1.0, 3.0, -1.0),
        Vec3::new(2.0, 3.0, 1.0),
        Vec3::new(2.0, 3.0, 0.0),
        Vec3::new(4.0, 3.0, 4.0),
        Vec3::new(3.0, 2.0, 8.0),
        Vec3::new(2.0, 1.0, 10.0),
        Vec3::new(1.0, 1.0, 12.0),
        Vec3::new(4.0, 0.0, 14.0),
        Vec3::new(2.0, 2.0, 20.0),
        Vec3::new(0.0, 3.0, 14.0),
        Vec3::new(-2.0, 5.0, 12.0),
        Vec3::new(-2.0, 4.0, 10.0),
        Vec3::new(-2.0, 3.0, 8.0),
        Vec3::new(-2.0, 2.0, 6.0),
        Vec3::new(-2.0, 0.0, 4.0),
        Vec3::new(-2.0, 0.0, 2.0),
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(-2.0, 0.0, -2.0),
        Vec3::new(-1.0, 0.0, -2.0),
    ];

    let look_dirs = vec![
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.3, 0.0, 1.0),
        Vec3::new(0.1, 0.0, 1.0),
        Vec3::new(0.1, 0.0, 0.7),
        Vec3::new(0.3, 0.0, 0.5),
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(-0.4, 0.0, 0.0),
        Vec3::new(-0.7, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, -0.8),
        Vec3::new(-1.0, 0.0, -0.5),
        Vec3::new(-1.0, 0.0, -0.3),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.1),
        Vec3::new(-1.0, 0.0, 0.5),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];

    let cubes = cube_positions
        .iter()
        .map(|&position| CubeConfig {
            position,
            scale: 1.0,
            color: [1.0, 0.5, 0.31],
        })
        .collect();

    SceneConfig {
        cubes,
        path: PathConfig {
            waypoints,
            look_dirs,
            step: 0.005,
            reference_forward: DEFAULT_REFERENCE_FORWARD,
            tangent_params: TangentParams::NEUTRAL,
        },
        lights: vec![LightConfig {
            position: Vec3::new(0.0, 2.0, -1.0),
            color: Vec3::ONE,
        }],
    }
}
