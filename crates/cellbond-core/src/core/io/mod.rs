//! Provides input functionality for the text files written by the simulation runs.
//!
//! Every format is tokenized by [`tokens`] first and then decoded by a fixed row/column
//! layout: converged structures ([`poscar`]), total-energy convergence logs ([`etot`])
//! and the batch entry list ([`entries`]).

pub mod entries;
pub mod etot;
pub mod poscar;
pub mod tokens;
pub mod traits;
