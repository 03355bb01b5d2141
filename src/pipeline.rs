//! Key to S-matrix pipeline.
//!
//! Derives the seed parameters of a key once and samples two independent
//! trajectories from them: `S1` from `(x10, y10, b11)` and `S2` from
//! `(x20, y20, b21)`.

use tracing::{debug, instrument};

use crate::error::HsmatrixError;
use crate::key::Key;
use crate::matrix::{generate, MatrixConfig, SMatrix};
use crate::schedule::{initialize_from_key, SeedParameters};

/// Seed parameters of a key together with the two matrices they seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaoticMatrices {
    /// The six seed values derived from the key.
    pub seeds: SeedParameters,
    /// Matrix sampled from the first trajectory.
    pub s1: SMatrix,
    /// Matrix sampled from the second trajectory.
    pub s2: SMatrix,
}

/// Parses `key_hex` and generates both 256×256 matrices with a burn-in
/// of 1000.
///
/// # Errors
/// Returns [`HsmatrixError::InvalidKey`] if `key_hex` is malformed.
///
/// # Examples
///
/// ```
/// use hsmatrix::derive_matrices;
///
/// let out = derive_matrices(&"0".repeat(64)).unwrap();
/// assert_eq!(out.seeds.b11, 4.9);
/// assert_eq!(out.s1.size(), 256);
/// // Zero key: both trajectories start from the same point.
/// assert_eq!(out.s1, out.s2);
/// ```
pub fn derive_matrices(key_hex: &str) -> Result<ChaoticMatrices, HsmatrixError> {
    let key = Key::from_hex(key_hex)?;
    Ok(derive_matrices_with(&key, &MatrixConfig::default()))
}

/// Generates both matrices of `key` with the given configuration.
#[instrument(level = "debug", skip_all, fields(size = config.size, burn_in = config.burn_in))]
pub fn derive_matrices_with(key: &Key, config: &MatrixConfig) -> ChaoticMatrices {
    let seeds = initialize_from_key(key);
    let (s1, s2) = generate_pair(&seeds, config);
    debug!("derived S1 and S2");
    ChaoticMatrices { seeds, s1, s2 }
}

/// Generates `S1` and `S2` from already-derived seeds.
pub fn generate_pair(seeds: &SeedParameters, config: &MatrixConfig) -> (SMatrix, SMatrix) {
    let (x10, y10, b11) = seeds.first();
    let (x20, y20, b21) = seeds.second();
    join(
        || generate(x10, y10, b11, config),
        || generate(x20, y20, b21, config),
    )
}

#[cfg(feature = "parallel")]
fn join<A, B>(a: impl FnOnce() -> A + Send, b: impl FnOnce() -> B + Send) -> (A, B)
where
    A: Send,
    B: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B>(a: impl FnOnce() -> A, b: impl FnOnce() -> B) -> (A, B) {
    (a(), b())
}
