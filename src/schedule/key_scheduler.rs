//! Seed derivation from the mixed key words.
//!
//! Each seed is the sum of two products of cross terms, scaled down by
//! `2^32` and reduced with [`real_mod`]. Products are summed in `u128`:
//! two full 64-bit products can exceed `u64::MAX`.

use crate::error::HsmatrixError;
use crate::key::Key;
use crate::utils::real::real_mod;

use super::mixer::MixedWords;

/// `2^32` as a real divisor.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Lower bound of the map parameters `b11`, `b21`.
pub const B1_BASE: f64 = 4.9;

/// Width of the interval the map parameters are drawn from.
pub const B1_SPAN: f64 = 0.1;

/// The six real values derived from a key.
///
/// `(x10, y10, b11)` seed the first trajectory (matrix `S1`) and
/// `(x20, y20, b21)` the second (matrix `S2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedParameters {
    /// Initial x of the first trajectory, in `[0, 1)`.
    pub x10: f64,
    /// Initial y of the first trajectory, in `[0, 1)`.
    pub y10: f64,
    /// Initial x of the second trajectory, in `[0, 1)`.
    pub x20: f64,
    /// Initial y of the second trajectory, in `[0, 1)`.
    pub y20: f64,
    /// Map parameter of the first trajectory, in `[4.9, 5.0)`.
    pub b11: f64,
    /// Map parameter of the second trajectory, in `[4.9, 5.0)`.
    pub b21: f64,
}

impl SeedParameters {
    /// `(x0, y0, b1)` for matrix `S1`.
    pub fn first(&self) -> (f64, f64, f64) {
        (self.x10, self.y10, self.b11)
    }

    /// `(x0, y0, b1)` for matrix `S2`.
    pub fn second(&self) -> (f64, f64, f64) {
        (self.x20, self.y20, self.b21)
    }

    /// The six values in derivation order `x10, y10, x20, y20, b11, b21`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.x10, self.y10, self.x20, self.y20, self.b11, self.b21]
    }
}

/// Derives the seed parameters of a key.
///
/// ```text
/// x10 = (k15*k26 + k17*k28) / 2^32  mod 1
/// y10 = (k25*k36 + k27*k38) / 2^32  mod 1
/// x20 = (k25*k36 + k27*k28) / 2^32  mod 1
/// y20 = (k35*k46 + k37*k48) / 2^32  mod 1
/// b11 = 4.9 + (k35*k46 + k37*k48) / 2^32  mod 0.1
/// b21 = 4.9 + (k45*k16 + k47*k18) / 2^32  mod 0.1
/// ```
///
/// `x20` pairs `k27` with `k28`, not `k38`.
///
/// # Examples
///
/// ```
/// use hsmatrix::{initialize_from_key, Key};
///
/// let seeds = initialize_from_key(&Key::from_words([0; 8]));
/// assert_eq!(seeds.x10, 0.0);
/// assert_eq!(seeds.b21, 4.9);
/// ```
pub fn initialize_from_key(key: &Key) -> SeedParameters {
    let k = MixedWords::mix(key);

    let x1_sum = k.product((1, 5), (2, 6)) + k.product((1, 7), (2, 8));
    let y1_sum = k.product((2, 5), (3, 6)) + k.product((2, 7), (3, 8));
    let x2_sum = k.product((2, 5), (3, 6)) + k.product((2, 7), (2, 8));
    let y2_sum = k.product((3, 5), (4, 6)) + k.product((3, 7), (4, 8));
    let b2_sum = k.product((4, 5), (1, 6)) + k.product((4, 7), (1, 8));

    SeedParameters {
        x10: real_mod(normalize(x1_sum), 1.0),
        y10: real_mod(normalize(y1_sum), 1.0),
        x20: real_mod(normalize(x2_sum), 1.0),
        y20: real_mod(normalize(y2_sum), 1.0),
        b11: B1_BASE + real_mod(normalize(y2_sum), B1_SPAN),
        b21: B1_BASE + real_mod(normalize(b2_sum), B1_SPAN),
    }
}

/// Parses a hex key and derives its seed parameters.
///
/// # Errors
/// Returns [`HsmatrixError::InvalidKey`] if `key_hex` is malformed.
pub fn initialize_from_hex(key_hex: &str) -> Result<SeedParameters, HsmatrixError> {
    let key = Key::from_hex(key_hex)?;
    Ok(initialize_from_key(&key))
}

/// Rounds the integer sum to the nearest `f64`, then scales by `2^-32`
/// (exact, a power of two).
#[inline]
fn normalize(sum: u128) -> f64 {
    sum as f64 / TWO_POW_32
}
