//! Utility types supporting the swarm initializers.

pub mod random;
