//! # GSO Module
//!
//! The glowworm swarm and the initializers that build its starting population.
//!
//! ## Architecture
//!
//! - **Search Space** ([`boundaries`]) - Per-dimension sampling ranges
//! - **Configuration** ([`parameters`]) - Algorithm constants loaded from TOML
//! - **Population** ([`landscape`], [`glowworm`], [`swarm`]) - Positions, particles and the swarm
//! - **Initialization** ([`initializer`]) - Random, file-based and docking-specific strategies
//! - **Error Handling** ([`error`]) - Configuration and initialization errors
//!
//! Initialization is single-threaded and one-shot. Any initializer that draws
//! random numbers borrows the caller's [`RandomStream`](crate::core::utils::random::RandomStream)
//! mutably for the duration of the call, so draws on a shared stream are
//! serialized by construction.

pub mod boundaries;
pub mod error;
pub mod glowworm;
pub mod initializer;
pub mod landscape;
pub mod parameters;
pub mod swarm;
