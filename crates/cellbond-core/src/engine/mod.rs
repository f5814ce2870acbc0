//! # Engine Module
//!
//! Turns decoded inputs into measured cells and convergence verdicts.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Geometry tunables, the on-disk data layout and the
//!   report builder
//! - **Geometry** ([`geometry`]) - Cell reconstruction and the fixed bond recipe
//! - **Energy Analysis** ([`energy`]) - Minimum search and the curve-shape check
//! - **Progress Monitoring** ([`progress`]) - Callback hooks for front ends
//! - **Error Handling** ([`error`]) - Geometry and engine error types

pub mod config;
pub mod energy;
pub mod error;
pub mod geometry;
pub mod progress;
