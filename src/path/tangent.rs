use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kochanek-Bartels shape parameters. Tension stiffens or loosens the curve,
/// bias skews it toward the predecessor or successor, continuity trades
/// derivative matching at shared points for corner sharpness. All zero is
/// the Catmull-Rom case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TangentParams {
    #[serde(default)]
    pub tension: f32,
    #[serde(default)]
    pub bias: f32,
    #[serde(default)]
    pub continuity: f32,
}

impl TangentParams {
    pub const NEUTRAL: Self = Self {
        tension: 0.0,
        bias: 0.0,
        continuity: 0.0,
    };
}

/// Endpoint tangents for the segment p1 -> p2, with p0 the predecessor and
/// p3 the successor waypoint. Pure function of its inputs; recomputed per
/// tick, never stored.
pub fn tangents(params: TangentParams, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> (Vec3, Vec3) {
    let TangentParams {
        tension: t,
        bias: b,
        continuity: c,
    } = params;

    let coef1 = ((1.0 - t) * (1.0 + b) * (1.0 + c)) / 2.0;
    let coef2 = ((1.0 - t) * (1.0 - b) * (1.0 - c)) / 2.0;
    let coef3 = ((1.0 - t) * (1.0 + b) * (1.0 - c)) / 2.0;
    let coef4 = ((1.0 - t) * (1.0 - b) * (1.0 + c)) / 2.0;

    let tang1 = coef1 * (p1 - p0) + coef2 * (p2 - p1);
    let tang2 = coef3 * (p2 - p1) + coef4 * (p3 - p2);

    (tang1, tang2)
}
