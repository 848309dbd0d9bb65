use flyby::path::{CameraPath, PathDriver};
use flyby::scenes::{create_flythrough_scene, create_ring_scene, SceneConfig};

#[cfg(test)]
mod scene_config_tests {
    use super::*;

    #[test]
    fn test_flythrough_scene_validates() {
        let scene = create_flythrough_scene();
        scene.validate().unwrap();
        assert_eq!(scene.cubes.len(), 17);
        assert_eq!(scene.path.waypoints.len(), 20);
        assert_eq!(scene.path.look_dirs.len(), 20);
        assert_eq!(scene.lights.len(), 1);
    }

    #[test]
    fn test_ring_scene_validates() {
        let scene = create_ring_scene();
        scene.validate().unwrap();
        assert_eq!(scene.lights.len(), 2);
    }

    #[test]
    fn test_builtin_scenes_produce_working_drivers() {
        for scene in [create_flythrough_scene(), create_ring_scene()] {
            let path = CameraPath::from_config(&scene.path).unwrap();
            let mut driver = PathDriver::with_params(path, scene.path.tangent_params);
            for _ in 0..100 {
                let sample = driver.tick(scene.path.step);
                assert!(sample.position.is_finite());
                assert!((sample.orientation.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_resolve_finds_builtins() {
        assert!(SceneConfig::resolve("flythrough").is_ok());
        assert!(SceneConfig::resolve("ring").is_ok());
        assert!(SceneConfig::resolve("/nonexistent/scene.json").is_err());
    }

    #[test]
    fn test_scene_json_round_trip() {
        let scene = create_flythrough_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.cubes.len(), scene.cubes.len());
        assert_eq!(back.path.waypoints, scene.path.waypoints);
        assert_eq!(back.path.look_dirs, scene.path.look_dirs);
        assert_eq!(back.path.step, scene.path.step);
        assert_eq!(back.path.tangent_params, scene.path.tangent_params);
    }

    #[test]
    fn test_scene_json_defaults_apply() {
        // A minimal hand-written scene file: missing fields fall back to
        // defaults (cube scale/color, reference forward, tangent params).
        let json = r#"{
            "cubes": [{ "position": [0.0, 0.0, 0.0] }],
            "path": {
                "waypoints": [
                    [0.0, 0.0, 0.0], [1.0, 0.0, 0.0],
                    [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]
                ],
                "look_dirs": [
                    [0.0, 0.0, 1.0], [0.0, 0.0, 1.0],
                    [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]
                ],
                "step": 0.01
            },
            "lights": [{ "position": [0.0, 2.0, -1.0] }]
        }"#;

        let scene: SceneConfig = serde_json::from_str(json).unwrap();
        scene.validate().unwrap();
        assert_eq!(scene.cubes[0].scale, 1.0);
        assert_eq!(scene.path.reference_forward, glam::Vec3::new(0.0, 0.0, -1.0));
        assert!(CameraPath::from_config(&scene.path).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_overfull() {
        let mut scene = create_flythrough_scene();
        scene.cubes.clear();
        assert!(scene.validate().is_err());

        let mut scene = create_ring_scene();
        let extra = scene.lights[0].clone();
        scene.lights.push(extra);
        assert!(scene.validate().is_err());
    }
}
