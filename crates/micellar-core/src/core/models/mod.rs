//! Data models consumed by the clustering engine: trajectories, fragments,
//! formulations, and the molecule-label conventions that tie them together.

pub mod formulation;
pub mod fragment;
pub mod labels;
pub mod trajectory;
