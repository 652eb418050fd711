//! # Core Module
//!
//! The stateless building blocks shared by every swarm initializer.
//!
//! ## Architecture
//!
//! - **Value Types** ([`models`]) - Coordinate vectors and receptor/ligand docking models
//! - **File I/O** ([`io`]) - Reading initial-population coordinate files
//! - **Scoring Collaborators** ([`scoring`]) - Objective, scoring-function and adapter traits
//! - **Utilities** ([`utils`]) - The seeded deterministic random stream

pub mod io;
pub mod models;
pub mod scoring;
pub mod utils;
