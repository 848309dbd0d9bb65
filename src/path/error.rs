use thiserror::Error;

/// Construction-time validation failures. The per-tick path is error-free by
/// construction once a [`crate::path::CameraPath`] exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("waypoint and look-direction counts differ ({waypoints} vs {look_dirs})")]
    LengthMismatch { waypoints: usize, look_dirs: usize },

    #[error("camera path needs at least 4 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    #[error("look direction at waypoint {index} has zero length")]
    ZeroLookDirection { index: usize },

    #[error("reference forward vector has zero length")]
    ZeroReferenceForward,
}
