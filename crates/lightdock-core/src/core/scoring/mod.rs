//! # Scoring Collaborators
//!
//! The initializers pair every landscape position with the function that will
//! later score it. This module defines those collaborators at their boundary:
//!
//! - [`ObjectiveFunction`] - A function over a plain coordinate vector, used by the
//!   benchmark landscapes ([`benchmark`]).
//! - [`ScoringFunction`] - A docking scoring function over receptor and ligand atoms.
//! - [`ScoringAdapter`] - Receptor and ligand models prepared for one scoring function.
//!
//! The energy models themselves live outside this crate.

pub mod benchmark;

use crate::core::models::coordinates::Coordinates;
use crate::core::models::docking::DockingModel;
use nalgebra::Point3;
use std::fmt::Debug;

/// A function evaluated directly on a coordinate vector.
pub trait ObjectiveFunction: Debug + Send + Sync {
    /// Evaluates the function at `coordinates`. Higher values are better.
    fn evaluate(&self, coordinates: &Coordinates) -> f64;
}

/// A scoring function for a receptor-ligand pose.
pub trait ScoringFunction: Debug + Send + Sync {
    /// Scores a pose given the models and the current atom coordinates of both partners.
    ///
    /// # Arguments
    ///
    /// * `receptor` - The receptor model as prepared by the paired adapter.
    /// * `receptor_coordinates` - The receptor atom coordinates of the pose.
    /// * `ligand` - The ligand model as prepared by the paired adapter.
    /// * `ligand_coordinates` - The ligand atom coordinates of the pose.
    ///
    /// # Return
    ///
    /// The score of the pose; higher values are better.
    fn energy(
        &self,
        receptor: &DockingModel,
        receptor_coordinates: &[Point3<f64>],
        ligand: &DockingModel,
        ligand_coordinates: &[Point3<f64>],
    ) -> f64;
}

/// Exposes receptor and ligand data prepared for a specific scoring function.
pub trait ScoringAdapter: Debug + Send + Sync {
    fn receptor_model(&self) -> &DockingModel;
    fn ligand_model(&self) -> &DockingModel;
}
