//! Key-dependent substitution matrices from the 2D-HSM chaotic map.
//!
//! A 256-bit key is split into eight 32-bit words, XOR-mixed, and turned
//! into six real seed parameters. Each half of the seeds drives one
//! trajectory of the two-dimensional 2D-HSM map; after a burn-in the
//! trajectory's x-coordinates are quantized to bytes and laid out as a
//! square matrix. The whole pipeline is deterministic: the same key
//! always yields the same matrices, bit for bit.
//!
//! # Architecture
//!
//! ```text
//! Key          (64 hex chars → eight u32 words k1..k8)
//!     ↓
//! MixedWords   (k_ij = k_i ^ k_j, i in 1..=4, j in 5..=8)
//!     ↓
//! SeedParameters (x10, y10, b11) / (x20, y20, b21)
//!     ↓ two independent trajectories
//! Trajectory<Hsm2d> → burn-in → floor(x * 256) mod 256
//!     ↓
//! SMatrix S1, S2 (256 × 256 bytes)
//! ```
//!
//! # Examples
//!
//! Derive both matrices of a key:
//!
//! ```
//! use hsmatrix::derive_matrices;
//!
//! let key = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
//! let out = derive_matrices(key).unwrap();
//!
//! assert_eq!(out.s1.size(), 256);
//! assert!((0.0..1.0).contains(&out.seeds.x10));
//! assert!((4.9..5.0).contains(&out.seeds.b21));
//! ```
//!
//! Use a smaller matrix and burn-in:
//!
//! ```
//! use hsmatrix::{derive_matrices_with, Key, MatrixConfig};
//!
//! let key = Key::from_hex(&"ab".repeat(32)).unwrap();
//! let out = derive_matrices_with(&key, &MatrixConfig::new(16, 100));
//! assert_eq!(out.s2.as_bytes().len(), 16 * 16);
//! ```

#![deny(clippy::all)]

pub mod chaos;
pub mod error;
pub mod key;
pub mod matrix;
pub mod pipeline;
pub mod schedule;
pub mod utils;

pub use error::{HsmatrixError, KeyDefect};
pub use key::Key;
pub use matrix::{generate, generate_s_matrix, MatrixConfig, SMatrix};
pub use pipeline::{derive_matrices, derive_matrices_with, ChaoticMatrices};
pub use schedule::{initialize_from_hex, initialize_from_key, SeedParameters};
