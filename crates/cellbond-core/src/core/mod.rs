//! # Core Module
//!
//! Stateless building blocks of the library: the text-file readers, the immutable data
//! models and the geometric primitives the engine composes.
//!
//! ## Architecture
//!
//! - **File Input** ([`io`]) - Tokenizer and fixed-layout decoders for structure files,
//!   convergence logs and batch entry lists
//! - **Data Models** ([`models`]) - Structure codes, lattices, reconstructed cells and
//!   convergence samples
//! - **Geometry** ([`utils`]) - Fractional wrapping, Cartesian projection, periodic
//!   re-centering and distances
//!
//! Nothing in this module touches the filesystem except the provided
//! [`io::traits::SimulationFile::read_from_path`].

pub mod io;
pub mod models;
pub mod utils;
