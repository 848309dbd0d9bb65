mod hermite;
pub mod quat;

pub use hermite::{hermite_basis, hermite_point};
