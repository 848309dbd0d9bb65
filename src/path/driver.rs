use glam::{Quat, Vec3};

use crate::math::{hermite_point, quat};
use crate::path::tangent::{tangents, TangentParams};
use crate::path::CameraPath;

/// One interpolated instant on the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Advances the animation state once per frame and samples the path.
///
/// State is the active segment index and the local parameter t in [0, 1).
/// A tick that reaches t = 1 emits the segment endpoint exactly, then rolls
/// over to the next segment (wrapping at the end of the cyclic path) with
/// t = 0, so the invariant `0 <= t < 1` holds after every tick.
#[derive(Debug, Clone)]
pub struct PathDriver {
    path: CameraPath,
    params: TangentParams,
    segment: usize,
    t: f32,
}

impl PathDriver {
    pub fn new(path: CameraPath) -> Self {
        Self::with_params(path, TangentParams::NEUTRAL)
    }

    pub fn with_params(path: CameraPath, params: TangentParams) -> Self {
        Self {
            path,
            params,
            segment: 0,
            t: 0.0,
        }
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn segment(&self) -> usize {
        self.segment
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    /// Advances the local parameter by `step` and samples the path at the
    /// new instant. Reaching the end of a segment emits its endpoint and
    /// wraps the state onto the next segment. Never fails for a validly
    /// constructed path.
    pub fn tick(&mut self, step: f32) -> PathSample {
        let advanced = self.t + step;

        if advanced >= 1.0 {
            let sample = self.sample_at(self.segment, 1.0);
            self.segment = (self.segment + 1) % self.path.len();
            self.t = 0.0;
            sample
        } else {
            self.t = advanced;
            self.sample_at(self.segment, self.t)
        }
    }

    /// Samples the current state without advancing it.
    pub fn current(&self) -> PathSample {
        self.sample_at(self.segment, self.t)
    }

    /// Returns to the start of the path: segment 0, t = 0.
    pub fn reset(&mut self) {
        self.segment = 0;
        self.t = 0.0;
    }

    fn sample_at(&self, segment: usize, t: f32) -> PathSample {
        debug_assert!(segment < self.path.len());
        debug_assert!((0.0..=1.0).contains(&t));

        let [p0, p1, p2, p3] = self.path.segment_points(segment);
        let (tang1, tang2) = tangents(self.params, p0, p1, p2, p3);
        let position = hermite_point(t, p1, p2, tang1, tang2);

        let [q0, q1, q2, q3] = self.path.segment_orientations(segment);
        let s1 = quat::inner_quadrangle_point(q0, q1, q2);
        let s2 = quat::inner_quadrangle_point(q1, q2, q3);
        let orientation = quat::squad(q1, q2, s1, s2, t);

        PathSample {
            position,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::config::DEFAULT_REFERENCE_FORWARD;

    fn line_path() -> CameraPath {
        CameraPath::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
            ],
            vec![Vec3::Z; 4],
            DEFAULT_REFERENCE_FORWARD,
        )
        .unwrap()
    }

    #[test]
    fn first_tick_moves_off_the_start() {
        let mut driver = PathDriver::new(line_path());
        let before = driver.current();
        let after = driver.tick(0.25);

        assert_eq!(driver.segment(), 0);
        assert!((driver.t() - 0.25).abs() < 1e-6);
        assert!(before.position.distance(after.position) > 0.0);
    }

    #[test]
    fn segment_completion_emits_endpoint_and_wraps_state() {
        let mut driver = PathDriver::new(line_path());

        driver.tick(0.5);
        let boundary = driver.tick(0.5);

        assert!(boundary.position.distance(Vec3::new(1.0, 0.0, 0.0)) < 1e-5);
        assert_eq!(driver.segment(), 1);
        assert_eq!(driver.t(), 0.0);
    }

    #[test]
    fn t_invariant_holds_across_many_ticks() {
        let mut driver = PathDriver::new(line_path());
        for _ in 0..1000 {
            driver.tick(0.37);
            assert!(driver.t() >= 0.0 && driver.t() < 1.0);
            assert!(driver.segment() < driver.path().len());
        }
    }

    #[test]
    fn reset_restarts_deterministically() {
        let mut driver = PathDriver::new(line_path());
        let initial = driver.current();

        driver.tick(0.3);
        driver.tick(0.9);
        driver.reset();

        assert_eq!(driver.segment(), 0);
        assert_eq!(driver.t(), 0.0);
        let a = driver.current();
        let b = driver.current();
        assert_eq!(a, b);
        assert!(a.position.distance(initial.position) < 1e-6);
    }
}
