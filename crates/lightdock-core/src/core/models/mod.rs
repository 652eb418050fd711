//! # Core Models Module
//!
//! Value types describing positions in the search space and the molecules being docked.
//!
//! - [`coordinates`] - An ordered coordinate vector with its textual rendering
//! - [`docking`] - Receptor and ligand models prepared for a scoring function

pub mod coordinates;
pub mod docking;
