use glam::Vec3;

/// Cubic Hermite basis functions evaluated at t.
/// Returns (h00, h10, h01, h11) weighting start point, start tangent,
/// end point and end tangent respectively.
pub fn hermite_basis(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    (h00, h10, h01, h11)
}

/// Interpolates between p0 and p1 at parameter t with endpoint tangents
/// tang1 and tang2. Exact at both endpoints: t=0 yields p0, t=1 yields p1.
pub fn hermite_point(t: f32, p0: Vec3, p1: Vec3, tang1: Vec3, tang2: Vec3) -> Vec3 {
    let (h00, h10, h01, h11) = hermite_basis(t);

    h00 * p0 + h10 * tang1 + h01 * p1 + h11 * tang2
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn basis_at_zero_selects_start() {
        let (h00, h10, h01, h11) = hermite_basis(0.0);
        assert_eq!(h00, 1.0);
        assert_eq!(h10, 0.0);
        assert_eq!(h01, 0.0);
        assert_eq!(h11, 0.0);
    }

    #[test]
    fn basis_at_one_selects_end() {
        let (h00, h10, h01, h11) = hermite_basis(1.0);
        assert_eq!(h00, 0.0);
        assert_eq!(h10, 0.0);
        assert_eq!(h01, 1.0);
        assert_eq!(h11, 0.0);
    }

    #[test]
    fn point_basis_is_a_partition_of_unity() {
        // h00 + h01 must sum to 1 everywhere, otherwise interior samples
        // would not be translation invariant.
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let (h00, _, h01, _) = hermite_basis(t);
            assert!((h00 + h01 - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn point_hits_endpoints() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::new(-4.0, 0.5, 9.0);
        let tang1 = Vec3::new(1.0, 0.0, 0.0);
        let tang2 = Vec3::new(0.0, 1.0, 0.0);

        assert!(hermite_point(0.0, p0, p1, tang1, tang2).distance(p0) < EPS);
        assert!(hermite_point(1.0, p0, p1, tang1, tang2).distance(p1) < EPS);
    }

    #[test]
    fn straight_segment_stays_on_the_line() {
        // Collinear points with matching tangents degenerate to a straight
        // line traversed at constant velocity.
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(2.0, 0.0, 0.0);
        let tang = Vec3::new(2.0, 0.0, 0.0);

        let mid = hermite_point(0.5, p0, p1, tang, tang);
        assert!(mid.distance(Vec3::new(1.0, 0.0, 0.0)) < EPS);

        let quarter = hermite_point(0.25, p0, p1, tang, tang);
        assert!(quarter.distance(Vec3::new(0.5, 0.0, 0.0)) < EPS);
    }
}
