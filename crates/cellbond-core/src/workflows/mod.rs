//! # Workflows Module
//!
//! Entry points for applications. Workflows own all file access: they resolve paths
//! through the configured [`crate::engine::config::DataLayout`], feed the decoded
//! inputs to the engine and render the results.
//!
//! - **Cell Analysis** ([`cell`]) - Geometry and convergence results for one structure code
//! - **Batch Report** ([`report`]) - The plain-text report over an entry list, plus the
//!   optional CSV summary

pub mod cell;
pub mod report;

#[cfg(test)]
pub(crate) mod fixtures;
