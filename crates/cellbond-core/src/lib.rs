//! # cellbond
//!
//! Post-processing for lattice-parameter convergence studies of hydrogenated graphene
//! (graphane) cells: reconstructs each converged cell in Cartesian space, measures its
//! C-C and C-H bonds, checks that the total-energy curve has a single well-behaved
//! minimum, and renders everything into one plain-text report.
//!
//! ## Layers
//!
//! - **[`core`]** holds the stateless pieces: whitespace-token file readers, the data
//!   models (`StructureCode`, `Lattice`, `Cell`, `ConvergenceLog`) and the geometric
//!   primitives.
//!
//! - **[`engine`]** composes them into cell reconstruction and energy analysis, and owns
//!   configuration, errors and progress reporting.
//!
//! - **[`workflows`]** is the entry point for applications: a single cell analysis and
//!   the batch report over an entries list.

pub mod core;
pub mod engine;
pub mod workflows;
