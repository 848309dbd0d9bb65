use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::PathError;
use crate::path::tangent::TangentParams;

/// Forward axis look directions are measured against when no other is
/// configured. Matches the -Z camera convention of the view transform.
pub const DEFAULT_REFERENCE_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

const MIN_WAYPOINTS: usize = 4;

/// Serializable description of a camera path, as it appears in scene files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub waypoints: Vec<Vec3>,
    pub look_dirs: Vec<Vec3>,
    /// Parameter advance per tick.
    pub step: f32,
    #[serde(default = "default_reference_forward")]
    pub reference_forward: Vec3,
    #[serde(default)]
    pub tangent_params: TangentParams,
}

fn default_reference_forward() -> Vec3 {
    DEFAULT_REFERENCE_FORWARD
}

/// Validated, immutable waypoint store. Positions and look directions come in
/// pairs; look directions are converted to orientation quaternions once, at
/// construction. The sequence is cyclic: neighbor lookups wrap.
#[derive(Debug, Clone)]
pub struct CameraPath {
    waypoints: Vec<Vec3>,
    orientations: Vec<Quat>,
    reference_forward: Vec3,
}

impl CameraPath {
    /// Builds a path from waypoint positions and per-waypoint look
    /// directions. Rejects mismatched lengths, paths shorter than the
    /// 4-point neighborhood needed for tangents, and zero-length vectors.
    /// No partial state is produced on failure.
    pub fn new(
        waypoints: Vec<Vec3>,
        look_dirs: Vec<Vec3>,
        reference_forward: Vec3,
    ) -> Result<Self, PathError> {
        if waypoints.len() != look_dirs.len() {
            return Err(PathError::LengthMismatch {
                waypoints: waypoints.len(),
                look_dirs: look_dirs.len(),
            });
        }
        if waypoints.len() < MIN_WAYPOINTS {
            return Err(PathError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        if reference_forward.length_squared() == 0.0 {
            return Err(PathError::ZeroReferenceForward);
        }
        if let Some(index) = look_dirs.iter().position(|d| d.length_squared() == 0.0) {
            return Err(PathError::ZeroLookDirection { index });
        }

        let forward = reference_forward.normalize();
        let orientations = look_dirs
            .iter()
            .map(|dir| Quat::from_rotation_arc(forward, dir.normalize()))
            .collect();

        Ok(Self {
            waypoints,
            orientations,
            reference_forward: forward,
        })
    }

    pub fn from_config(config: &PathConfig) -> Result<Self, PathError> {
        Self::new(
            config.waypoints.clone(),
            config.look_dirs.clone(),
            config.reference_forward,
        )
    }

    /// Number of waypoints, which is also the number of segments: the path
    /// is fully cyclic, so the last waypoint connects back to the first.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn reference_forward(&self) -> Vec3 {
        self.reference_forward
    }

    pub fn waypoint(&self, index: usize) -> Vec3 {
        self.waypoints[self.wrap(index as isize)]
    }

    pub fn orientation(&self, index: usize) -> Quat {
        self.orientations[self.wrap(index as isize)]
    }

    /// The four consecutive waypoints around segment `segment` -> `segment+1`:
    /// predecessor, segment start, segment end, successor.
    pub fn segment_points(&self, segment: usize) -> [Vec3; 4] {
        let s = segment as isize;
        [
            self.waypoints[self.wrap(s - 1)],
            self.waypoints[self.wrap(s)],
            self.waypoints[self.wrap(s + 1)],
            self.waypoints[self.wrap(s + 2)],
        ]
    }

    /// The orientation quaternions at the same four indices.
    pub fn segment_orientations(&self, segment: usize) -> [Quat; 4] {
        let s = segment as isize;
        [
            self.orientations[self.wrap(s - 1)],
            self.orientations[self.wrap(s)],
            self.orientations[self.wrap(s + 1)],
            self.orientations[self.wrap(s + 2)],
        ]
    }

    /// Circular index: any offset, including negative ones, resolves to a
    /// valid waypoint.
    fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.waypoints.len() as isize) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_path() -> CameraPath {
        CameraPath::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            vec![Vec3::Z; 4],
            DEFAULT_REFERENCE_FORWARD,
        )
        .unwrap()
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = CameraPath::new(
            vec![Vec3::ZERO; 4],
            vec![Vec3::Z; 3],
            DEFAULT_REFERENCE_FORWARD,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PathError::LengthMismatch {
                waypoints: 4,
                look_dirs: 3
            }
        );
    }

    #[test]
    fn rejects_short_paths() {
        let err = CameraPath::new(
            vec![Vec3::ZERO; 3],
            vec![Vec3::Z; 3],
            DEFAULT_REFERENCE_FORWARD,
        )
        .unwrap_err();
        assert_eq!(err, PathError::TooFewWaypoints { count: 3 });
    }

    #[test]
    fn rejects_zero_look_direction() {
        let mut dirs = vec![Vec3::Z; 4];
        dirs[2] = Vec3::ZERO;
        let err = CameraPath::new(vec![Vec3::ZERO; 4], dirs, DEFAULT_REFERENCE_FORWARD)
            .unwrap_err();
        assert_eq!(err, PathError::ZeroLookDirection { index: 2 });
    }

    #[test]
    fn rejects_zero_reference_forward() {
        let err =
            CameraPath::new(vec![Vec3::ZERO; 4], vec![Vec3::Z; 4], Vec3::ZERO).unwrap_err();
        assert_eq!(err, PathError::ZeroReferenceForward);
    }

    #[test]
    fn orientations_rotate_forward_onto_look_dirs() {
        let look_dirs = vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.3, 0.0, 1.0),
        ];
        let path = CameraPath::new(
            vec![Vec3::ZERO; 4],
            look_dirs.clone(),
            DEFAULT_REFERENCE_FORWARD,
        )
        .unwrap();

        for (i, dir) in look_dirs.iter().enumerate() {
            let rotated = path.orientation(i) * DEFAULT_REFERENCE_FORWARD;
            assert!(rotated.distance(dir.normalize()) < 1e-5);
        }
    }

    #[test]
    fn neighbor_lookup_wraps_at_the_seam() {
        let path = square_path();

        // Segment 3 runs from the last waypoint back to the first.
        let [p0, p1, p2, p3] = path.segment_points(3);
        assert_eq!(p0, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(p1, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(p2, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(p3, Vec3::new(1.0, 0.0, 0.0));

        // Segment 0 reaches backwards across the seam for its predecessor.
        let [p0, ..] = path.segment_points(0);
        assert_eq!(p0, Vec3::new(0.0, 0.0, 1.0));
    }
}
