//! # Workflows Module
//!
//! High-level entry points that tie the engine and core together into
//! complete analyses.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. Each one drives the
//! clustering engine over a full multi-frame trajectory, handles progress
//! reporting, and organizes results for the caller.
//!
//! - **Aggregation Workflow** ([`aggregation`]) - Per-frame micelle clustering and
//!   the cumulative mean aggregation-number time series.

pub mod aggregation;
