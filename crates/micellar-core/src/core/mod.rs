//! # Core Module
//!
//! This module provides the fundamental building blocks for micelle cluster
//! analysis, serving as the computational foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the stateless data structures and numeric
//! primitives required for particle clustering: dense block-matrix operations,
//! periodic-boundary distance computation, and the trajectory/fragment data
//! models consumed by the clustering engine.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the analysis:
//!
//! - **Matrix Primitives** ([`matrix`]) - Block partitioning, block summation, and
//!   threshold masking over dense 2D arrays
//! - **Periodic Geometry** ([`geometry`]) - Minimum-image distance matrices and
//!   per-molecule position reduction
//! - **Data Models** ([`models`]) - Trajectories, fragments, formulations, and
//!   molecule-label conventions

pub mod geometry;
pub mod matrix;
pub mod models;
