//! XOR mixing stage of the key schedule.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::key::Key;

/// The sixteen cross terms `k_{i,j} = k_i ^ k_j` for `i` in `1..=4` and
/// `j` in `5..=8`.
///
/// Stored as a 4×4 table: row `i - 1`, column `j - 5`. Lives only for the
/// duration of seed derivation and is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MixedWords {
    table: [[u32; 4]; 4],
}

impl MixedWords {
    /// Mixes the upper half of the key with the lower half.
    pub fn mix(key: &Key) -> Self {
        let k = key.words();
        let mut table = [[0u32; 4]; 4];
        for (i, row) in table.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = k[i] ^ k[4 + j];
            }
        }
        MixedWords { table }
    }

    /// Returns `k_{i,j}` using the 1-based word numbering of the key
    /// (`i` in `1..=4`, `j` in `5..=8`).
    ///
    /// # Panics
    /// Panics if `i` or `j` is outside its range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!((1..=4).contains(&i), "row word index {} not in 1..=4", i);
        assert!((5..=8).contains(&j), "column word index {} not in 5..=8", j);
        self.table[i - 1][j - 5]
    }

    /// Widened product `k_{a} * k_{b}` of two cross terms, each given as
    /// an `(i, j)` pair.
    #[inline]
    pub(crate) fn product(&self, a: (usize, usize), b: (usize, usize)) -> u128 {
        self.get(a.0, a.1) as u128 * self.get(b.0, b.1) as u128
    }
}
