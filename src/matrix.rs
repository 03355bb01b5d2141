//! S-matrix generation.
//!
//! Runs a chaotic trajectory past its burn-in, quantizes `size * size`
//! successive x-coordinates to bytes with `floor(x * 256) mod 256`, and
//! lays them out row-major.

use std::fmt;
use std::ops::Index;

use tracing::{debug, instrument};
use zeroize::Zeroize;

use crate::chaos::{ChaoticMap, Hsm2d, Trajectory};

/// Default matrix dimension.
pub const DEFAULT_SIZE: usize = 256;

/// Default number of discarded transient iterations.
pub const DEFAULT_BURN_IN: usize = 1000;

/// Quantization levels of one matrix cell.
const LEVELS: f64 = 256.0;

/// Shape and transient length of a generated matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixConfig {
    /// Matrix dimension; the matrix holds `size * size` bytes.
    pub size: usize,
    /// Iterations run and discarded before sampling.
    pub burn_in: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            size: DEFAULT_SIZE,
            burn_in: DEFAULT_BURN_IN,
        }
    }
}

impl MatrixConfig {
    /// Creates a configuration with the given dimension and burn-in.
    pub fn new(size: usize, burn_in: usize) -> Self {
        MatrixConfig { size, burn_in }
    }

    /// Returns a copy with a different dimension.
    pub fn with_size(self, size: usize) -> Self {
        MatrixConfig { size, ..self }
    }

    /// Returns a copy with a different burn-in.
    pub fn with_burn_in(self, burn_in: usize) -> Self {
        MatrixConfig { burn_in, ..self }
    }

    /// Number of cells in the matrix.
    pub fn cells(&self) -> usize {
        self.size * self.size
    }
}

/// Square byte matrix sampled from a chaotic trajectory.
///
/// Cell `(r, c)` holds the `(r * size + c)`-th sampled value. The buffer
/// is zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SMatrix {
    size: usize,
    data: Vec<u8>,
}

impl SMatrix {
    /// Dimension of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns cell `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    /// Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.size, "row {} out of bounds for size {}", row, self.size);
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Iterates the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0; an empty matrix has no rows anyway.
        self.data.chunks_exact(self.size.max(1))
    }

    /// All cells in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }

    /// Smallest cell value, `None` for an empty matrix.
    pub fn min(&self) -> Option<u8> {
        self.data.iter().copied().min()
    }

    /// Largest cell value, `None` for an empty matrix.
    pub fn max(&self) -> Option<u8> {
        self.data.iter().copied().max()
    }
}

impl Index<(usize, usize)> for SMatrix {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &u8 {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for size {}",
            row,
            col,
            self.size
        );
        &self.data[row * self.size + col]
    }
}

impl fmt::Debug for SMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMatrix")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl Drop for SMatrix {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

/// Maps an x-coordinate to a byte: `floor(x * 256) mod 256`.
#[inline]
pub fn quantize(x: f64) -> u8 {
    ((x * LEVELS).floor() as i64).rem_euclid(256) as u8
}

/// Generates an S-matrix from the 2D-HSM map with parameter `b1`.
///
/// # Examples
///
/// ```
/// use hsmatrix::{generate, MatrixConfig};
///
/// let s = generate(0.25, 0.5, 4.95, &MatrixConfig::new(16, 100));
/// assert_eq!(s.size(), 16);
/// assert_eq!(s.as_bytes().len(), 256);
/// ```
pub fn generate(x0: f64, y0: f64, b1: f64, config: &MatrixConfig) -> SMatrix {
    generate_with_map(Hsm2d::new(b1), x0, y0, config)
}

/// Generates an S-matrix with explicit dimension and burn-in.
pub fn generate_s_matrix(x0: f64, y0: f64, b1: f64, size: usize, burn_in: usize) -> SMatrix {
    generate(x0, y0, b1, &MatrixConfig::new(size, burn_in))
}

/// Generates an S-matrix by sampling any [`ChaoticMap`].
///
/// Runs `config.burn_in` discarded steps, then records one quantized
/// x-coordinate per step for `config.cells()` steps.
#[instrument(level = "debug", skip_all, fields(size = config.size, burn_in = config.burn_in))]
pub fn generate_with_map<M: ChaoticMap>(map: M, x0: f64, y0: f64, config: &MatrixConfig) -> SMatrix {
    let mut orbit = Trajectory::new(map, x0, y0);
    orbit.skip_transient(config.burn_in);

    let cells = config.cells();
    let mut data = Vec::with_capacity(cells);
    data.extend(orbit.take(cells).map(|(x, _)| quantize(x)));

    debug!(iterations = cells + config.burn_in, "matrix assembled");
    SMatrix {
        size: config.size,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaos::step;

    #[test]
    fn test_default_config() {
        let config = MatrixConfig::default();
        assert_eq!(config.size, 256);
        assert_eq!(config.burn_in, 1000);
        assert_eq!(config.cells(), 65536);
    }

    #[test]
    fn test_config_builders() {
        let config = MatrixConfig::default().with_size(8).with_burn_in(3);
        assert_eq!(config, MatrixConfig::new(8, 3));
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(0.999_999), 255);
        assert_eq!(quantize(1.0 / 256.0), 1);
        assert_eq!(quantize(1.0), 0);
    }

    #[test]
    fn test_frozen_small_matrices() {
        // Sequential key 000102...1f: first trajectory, no burn-in.
        let s1 = generate_s_matrix(
            f64::from_bits(0x3fa3_8d06_8000_0000),
            f64::from_bits(0x3fe1_a518_9000_0000),
            f64::from_bits(0x4013_c0b3_a699_999a),
            4,
            0,
        );
        assert_eq!(
            s1.as_bytes(),
            &[255, 166, 232, 153, 221, 11, 118, 236, 20, 255, 157, 110, 248, 167, 243, 43]
        );

        // Second trajectory with a short burn-in.
        let s2 = generate_s_matrix(
            f64::from_bits(0x3fd3_9e69_3000_0000),
            f64::from_bits(0x3fa3_8d06_8000_0000),
            f64::from_bits(0x4013_ce3c_ab99_999a),
            4,
            10,
        );
        assert_eq!(
            s2.as_bytes(),
            &[167, 3, 187, 46, 176, 220, 0, 53, 249, 211, 255, 5, 33, 2, 190, 15]
        );
    }

    #[test]
    fn test_row_major_generation_order() {
        let (x0, y0, b1) = (0.31, 0.62, 4.97);
        let s = generate_s_matrix(x0, y0, b1, 3, 5);

        let (mut x, mut y) = (x0, y0);
        let mut expected = Vec::new();
        for i in 0..(9 + 5) {
            (x, y) = step(x, y, b1);
            if i >= 5 {
                expected.push(quantize(x));
            }
        }
        assert_eq!(s.as_bytes(), expected.as_slice());
        assert_eq!(s[(1, 0)], expected[3]);
        assert_eq!(s.get(2, 2), Some(expected[8]));
        assert_eq!(s.row(2), &expected[6..9]);
    }

    #[test]
    fn test_burn_in_shifts_sequence() {
        let long = generate_s_matrix(0.2, 0.3, 4.92, 4, 0);
        let shifted = generate_s_matrix(0.2, 0.3, 4.92, 3, 7);
        assert_eq!(&long.as_bytes()[7..16], shifted.as_bytes());
    }

    #[test]
    fn test_deterministic() {
        let a = generate(0.77, 0.11, 4.99, &MatrixConfig::new(32, 200));
        let b = generate(0.77, 0.11, 4.99, &MatrixConfig::new(32, 200));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_size_shape() {
        let s = generate(0.5, 0.5, 4.95, &MatrixConfig::default());
        assert_eq!(s.size(), 256);
        assert_eq!(s.as_bytes().len(), 256 * 256);
        assert_eq!(s.rows().count(), 256);
        assert!(s.rows().all(|r| r.len() == 256));
    }

    #[test]
    fn test_empty_matrix() {
        let s = generate_s_matrix(0.1, 0.2, 4.9, 0, 10);
        assert_eq!(s.size(), 0);
        assert!(s.as_bytes().is_empty());
        assert_eq!(s.rows().count(), 0);
        assert_eq!(s.min(), None);
        assert_eq!(s.get(0, 0), None);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let s = generate_s_matrix(0.1, 0.2, 4.9, 2, 0);
        assert_eq!(s.get(2, 0), None);
        assert_eq!(s.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let s = generate_s_matrix(0.1, 0.2, 4.9, 2, 0);
        let _ = s[(0, 2)];
    }

    #[test]
    fn test_into_bytes_and_range() {
        let s = generate_s_matrix(0.4, 0.6, 4.94, 16, 50);
        let min = s.min().unwrap();
        let max = s.max().unwrap();
        let bytes = s.clone().into_bytes();
        assert_eq!(bytes.len(), 256);
        assert_eq!(bytes.iter().copied().min(), Some(min));
        assert_eq!(bytes.iter().copied().max(), Some(max));
    }

    #[test]
    fn test_debug_hides_cells() {
        let s = generate_s_matrix(0.4, 0.6, 4.94, 2, 0);
        assert_eq!(format!("{:?}", s), "SMatrix { size: 2, .. }");
    }
}
