//! # Engine Module
//!
//! This module implements the clustering pipeline that turns raw frame
//! coordinates into cluster labels.
//!
//! ## Overview
//!
//! Given one frame's point cloud and periodic cell, the engine computes a
//! minimum-image distance matrix, thresholds it into a binary adjacency graph
//! (optionally escalating atom-level adjacency to molecule-level adjacency via
//! a vote-counting rule), extracts connected components with noise and
//! cluster-size filtering, and assigns integer cluster labels.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Clustering thresholds, method selection, and
//!   TOML loading
//! - **Adjacency Construction** ([`adjacency`]) - Distance thresholding and the
//!   molecular escalation criteria
//! - **Component Labeling** ([`components`]) - Connected-component extraction over
//!   dense or sparse adjacency, noise pruning, and background relabeling
//! - **Frame Clustering** ([`clusterer`]) - The per-frame entry point tying the
//!   stages together
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod adjacency;
pub mod clusterer;
pub mod components;
pub mod config;
pub mod error;
pub mod progress;
