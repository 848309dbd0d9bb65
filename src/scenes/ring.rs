use glam::Vec3;
use std::f32::consts::TAU;

use super::{CubeConfig, LightConfig, SceneConfig};
use crate::path::{PathConfig, TangentParams, DEFAULT_REFERENCE_FORWARD};

const PALETTE: [[f32; 3]; 5] = [
    [0.9, 0.35, 0.3],
    [0.95, 0.7, 0.25],
    [0.4, 0.75, 0.45],
    [0.3, 0.55, 0.9],
    [0.65, 0.4, 0.85],
];

/// Procedural variant: two concentric rings of cubes with the camera
/// circling between them, always looking across the center.
pub fn create_ring_scene() -> SceneConfig {
    let mut cubes = Vec::new();

    for (ring, (radius, height, count)) in
        [(6.0, 0.0, 12), (10.0, 1.5, 16)].into_iter().enumerate()
    {
        for i in 0..count {
            let angle = i as f32 / count as f32 * TAU;
            let bob = (angle * 3.0).sin() * 0.8;
            cubes.push(CubeConfig {
                position: Vec3::new(angle.cos() * radius, height + bob, angle.sin() * radius),
                scale: 1.0 - ring as f32 * 0.3,
                color: PALETTE[(i + ring) % PALETTE.len()],
            });
        }
    }

    let path_radius = 8.0;
    let path_count = 12;
    let mut waypoints = Vec::with_capacity(path_count);
    let mut look_dirs = Vec::with_capacity(path_count);

    for i in 0..path_count {
        let angle = i as f32 / path_count as f32 * TAU;
        let pos = Vec3::new(
            angle.cos() * path_radius,
            2.0 + (angle * 2.0).sin(),
            angle.sin() * path_radius,
        );
        waypoints.push(pos);
        // look through the middle of the ring
        look_dirs.push(Vec3::new(0.0, 0.5, 0.0) - pos);
    }

    SceneConfig {
        cubes,
        path: PathConfig {
            waypoints,
            look_dirs,
            step: 0.004,
            reference_forward: DEFAULT_REFERENCE_FORWARD,
            tangent_params: TangentParams::NEUTRAL,
        },
        lights: vec![
            LightConfig {
                position: Vec3::new(0.0, 8.0, 0.0),
                color: Vec3::ONE,
            },
            LightConfig {
                position: Vec3::new(12.0, 4.0, -12.0),
                color: Vec3::new(0.4, 0.45, 0.6),
            },
        ],
    }
}
