//! Provides input functionality for initial-population coordinate files.
//!
//! A coordinate file holds one record per line, each record being the coordinate
//! vector of one glowworm. Tokens are separated by whitespace or commas.

pub mod coordinates;
