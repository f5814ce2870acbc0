//! Immutable data models: structure codes, lattices, reconstructed cells and
//! convergence logs.

pub mod cell;
pub mod code;
pub mod convergence;
pub mod lattice;
