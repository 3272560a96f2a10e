//! # Micellar Core Library
//!
//! A library for detecting micelle aggregates in surfactant molecular-dynamics
//! trajectories and estimating their aggregation numbers over time.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Trajectory`,
//!   `Fragment`, `Formulation`), pure numeric primitives (block-matrix utilities),
//!   and periodic-boundary geometry (minimum-image distance matrices, molecular
//!   position reduction).
//!
//! - **[`engine`]: The Logic Core.** Implements the clustering pipeline: thresholding
//!   distance matrices into adjacency graphs, escalating atom-level adjacency to
//!   molecule-level adjacency, and labeling connected components with noise and
//!   cluster-size filtering.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It drives
//!   the engine frame-by-frame over a trajectory to produce the aggregation-number
//!   time series, providing a simple and powerful entry point for end-users of the
//!   library.

pub mod core;
pub mod engine;
pub mod workflows;
