//! The 2D-HSM map.
//!
//! ```text
//! x' = 0.5 * (1 - sin(1 - ω·b1·x² - ω·B2·y))   mod 1
//! y' = sin(ω·B2·x)                              mod 1
//! ```
//!
//! `y'` is computed from the input `x`, not from `x'`. Both coordinates
//! are wrapped into `[0, 1)` with [`real_mod`].

use crate::utils::real::real_mod;

/// Frequency factor ω of the map.
pub const OMEGA: f64 = 10.0;

/// Fixed second map parameter.
pub const B2: f64 = 1.57;

/// Trait for two-dimensional discrete chaotic maps.
pub trait ChaoticMap {
    /// Computes the successor of `(x, y)`.
    fn step(&self, x: f64, y: f64) -> (f64, f64);
}

/// Advances the 2D-HSM map by one step with parameter `b1`.
///
/// Operand order follows the reference evaluation: `((ω·b1)·x)·x` and
/// `(ω·B2)·y`. Reordering changes the last bit and, after a few hundred
/// steps, the whole trajectory.
///
/// # Examples
///
/// ```
/// use hsmatrix::chaos::step;
///
/// let (x, y) = step(0.0, 0.0, 4.9);
/// assert_eq!(y, 0.0);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[inline]
pub fn step(x: f64, y: f64, b1: f64) -> (f64, f64) {
    let x_next = 0.5 * (1.0 - (1.0 - OMEGA * b1 * x * x - OMEGA * B2 * y).sin());
    let y_next = (OMEGA * B2 * x).sin();
    (real_mod(x_next, 1.0), real_mod(y_next, 1.0))
}

/// The 2D-HSM map with its key-derived parameter `b1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsm2d {
    b1: f64,
}

impl Hsm2d {
    /// Creates the map for parameter `b1`.
    pub fn new(b1: f64) -> Self {
        Hsm2d { b1 }
    }

    /// Returns the map parameter.
    pub fn b1(&self) -> f64 {
        self.b1
    }
}

impl ChaoticMap for Hsm2d {
    #[inline]
    fn step(&self, x: f64, y: f64) -> (f64, f64) {
        step(x, y, self.b1)
    }
}
