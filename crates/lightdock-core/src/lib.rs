//! # LightDock Core Library
//!
//! Swarm initialization for protein-protein docking driven by glowworm swarm
//! optimization (GSO).
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless value types (`Coordinates`, `DockingModel`),
//!   the coordinate-file reader, the scoring collaborator traits, and the seeded
//!   `RandomStream` that makes experiments reproducible.
//!
//! - **[`gso`]: The Swarm.** The glowworm and swarm data types together with the
//!   initializers that build a starting population, either by sampling a bounding
//!   box or by reading poses from a coordinate file.
//!
//! A setup driver picks one initializer, configures it, and calls
//! [`gso::initializer::Initializer::generate_glowworms`] exactly once. The returned
//! [`gso::swarm::Swarm`] is owned by the caller from then on.

pub mod core;
pub mod gso;
