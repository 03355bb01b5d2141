//! Key schedule: 256-bit key to the six real seed parameters.
//!
//! The eight key words are XOR-mixed into sixteen cross terms
//! ([`MixedWords`]) and paired products of those terms are normalized by
//! `2^32` into initial conditions and map parameters
//! ([`SeedParameters`]).

pub mod key_scheduler;
pub mod mixer;

pub use key_scheduler::{initialize_from_hex, initialize_from_key, SeedParameters};
pub use mixer::MixedWords;
