use glam::{Quat, Vec3};

const SMALL_ANGLE: f32 = 1e-6;

/// Logarithm of a unit quaternion: a pure quaternion whose vector part is
/// axis * half-angle. Near identity the vector part collapses to zero.
pub fn log(q: Quat) -> Quat {
    let v = Vec3::new(q.x, q.y, q.z);
    let len = v.length();

    if len < SMALL_ANGLE {
        return Quat::from_xyzw(0.0, 0.0, 0.0, 0.0);
    }

    let angle = q.w.clamp(-1.0, 1.0).acos();
    let scaled = v * (angle / len);
    Quat::from_xyzw(scaled.x, scaled.y, scaled.z, 0.0)
}

/// Exponential of a pure quaternion, inverse of [`log`]. exp(0) is identity.
pub fn exp(q: Quat) -> Quat {
    let v = Vec3::new(q.x, q.y, q.z);
    let angle = v.length();

    if angle < SMALL_ANGLE {
        return Quat::IDENTITY;
    }

    let axis = v / angle;
    let sin = angle.sin();
    Quat::from_xyzw(axis.x * sin, axis.y * sin, axis.z * sin, angle.cos())
}

/// Inner quadrangle control point for `curr` given its temporal neighbors.
/// Geometric mean of the log-space relative rotations, the standard SQUAD
/// auxiliary quaternion.
pub fn inner_quadrangle_point(prev: Quat, curr: Quat, next: Quat) -> Quat {
    let inv = curr.inverse();
    let arg = scale(add(log(next * inv), log(prev * inv)), -0.25);
    (exp(arg) * curr).normalize()
}

/// Spherical quadrangle interpolation between q1 and q2 with inner control
/// points s1 and s2. Endpoints are exact; the blend parameter 2t(1-t)
/// vanishes at both ends so the inner curve only shapes the interior.
pub fn squad(q1: Quat, q2: Quat, s1: Quat, s2: Quat, t: f32) -> Quat {
    let outer = q1.slerp(q2, t);
    let inner = s1.slerp(s2, t);
    outer.slerp(inner, 2.0 * t * (1.0 - t)).normalize()
}

fn add(a: Quat, b: Quat) -> Quat {
    Quat::from_xyzw(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
}

fn scale(q: Quat, s: f32) -> Quat {
    Quat::from_xyzw(q.x * s, q.y * s, q.z * s, q.w * s)
}
