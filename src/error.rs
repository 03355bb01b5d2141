//! Error types for the hsmatrix library.

use std::fmt;

/// Reason a key string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefect {
    /// Key length (after stripping an optional `0x` prefix) is not 64.
    WrongLength(usize),
    /// Key contains a character that is not a hexadecimal digit.
    NonHexCharacter,
}

/// Errors produced by the hsmatrix library.
///
/// Only key parsing can fail; everything downstream of a valid key is
/// total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HsmatrixError {
    /// Key is not a 256-bit value written as 64 hexadecimal characters.
    InvalidKey(KeyDefect),
}

impl fmt::Display for KeyDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDefect::WrongLength(len) => {
                write!(f, "expected 64 hex characters, found {}", len)
            }
            KeyDefect::NonHexCharacter => {
                write!(f, "key contains a non-hexadecimal character")
            }
        }
    }
}

impl fmt::Display for HsmatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HsmatrixError::InvalidKey(defect) => {
                write!(f, "Invalid 256-bit key: {}", defect)
            }
        }
    }
}

impl std::error::Error for HsmatrixError {}
