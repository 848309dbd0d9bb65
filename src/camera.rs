use glam::{Mat4, Vec3};

use crate::path::{CameraPath, PathDriver, PathSample, TangentParams};
use crate::types::CameraUniform;

pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Camera that flies along a path. Owns the path driver; `update` advances
/// it one tick per frame, everything else reads the latest sample.
pub struct FlightCamera {
    driver: PathDriver,
    step: f32,
    sample: PathSample,
}

impl FlightCamera {
    pub fn new(path: CameraPath, params: TangentParams, step: f32) -> Self {
        let driver = PathDriver::with_params(path, params);
        let sample = driver.current();
        Self {
            driver,
            step,
            sample,
        }
    }

    /// Advance along the path by one tick.
    pub fn update(&mut self) {
        self.sample = self.driver.tick(self.step);
    }

    /// Restart the flight from the first segment.
    pub fn reset(&mut self) {
        self.driver.reset();
        self.sample = self.driver.current();
    }

    pub fn position(&self) -> Vec3 {
        self.sample.position
    }

    pub fn forward(&self) -> Vec3 {
        (self.sample.orientation * self.driver.path().reference_forward()).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    pub fn segment(&self) -> usize {
        self.driver.segment()
    }

    pub fn t(&self) -> f32 {
        self.driver.t()
    }

    /// Standard look-at view transform from the current sample: eye at the
    /// interpolated position, looking along the rotated reference forward.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.position();
        Mat4::look_at_rh(eye, eye + self.forward(), self.up())
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        let proj = Mat4::perspective_rh(DEFAULT_FOV_Y, aspect, Z_NEAR, Z_FAR);
        CameraUniform::new(proj * self.view_matrix(), self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::DEFAULT_REFERENCE_FORWARD;

    fn camera() -> FlightCamera {
        let path = CameraPath::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
            ],
            vec![Vec3::Z; 4],
            DEFAULT_REFERENCE_FORWARD,
        )
        .unwrap();
        FlightCamera::new(path, TangentParams::NEUTRAL, 0.25)
    }

    #[test]
    fn forward_follows_the_look_direction() {
        let cam = camera();
        assert!(cam.forward().distance(Vec3::Z) < 1e-5);
    }

    #[test]
    fn update_advances_the_driver() {
        let mut cam = camera();
        let start = cam.position();
        cam.update();
        assert!(cam.position().distance(start) > 0.0);
        assert!((cam.t() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_places_the_eye_at_the_sample() {
        let mut cam = camera();
        cam.update();
        let view = cam.view_matrix();
        // The view transform maps the eye position to the origin.
        let eye = view.transform_point3(cam.position());
        assert!(eye.length() < 1e-5);
    }

    #[test]
    fn reset_returns_to_the_first_waypoint() {
        let mut cam = camera();
        for _ in 0..7 {
            cam.update();
        }
        cam.reset();
        assert_eq!(cam.segment(), 0);
        assert_eq!(cam.t(), 0.0);
        assert!(cam.position().distance(Vec3::ZERO) < 1e-6);
    }
}
