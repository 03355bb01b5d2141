//! 2D-HSM chaotic map and trajectories.
//!
//! Provides the map transition as a pure function, a [`ChaoticMap`] trait
//! for parameterized maps, and a [`Trajectory`] iterator that owns the
//! evolving state.

pub mod map;
pub mod trajectory;

pub use map::{step, ChaoticMap, Hsm2d, B2, OMEGA};
pub use trajectory::Trajectory;
