//! Periodic-boundary geometry: minimum-image distance matrices and
//! per-molecule position reduction.

mod distance;
mod positions;

pub use distance::periodic_distance_matrix;
pub use positions::{GeometryError, molecular_positions};
