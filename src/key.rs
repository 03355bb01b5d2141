//! 256-bit secret key.
//!
//! Parses the canonical 64-character hexadecimal form (optionally
//! prefixed with `0x`) and exposes the eight 32-bit words `k1..k8`,
//! most significant first. Key material is zeroized on drop and never
//! printed by `Debug`.

use std::fmt;

use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{HsmatrixError, KeyDefect};
use crate::utils::converter::{self, KEY_BYTES, KEY_WORDS};

/// Number of hexadecimal characters in a 256-bit key.
pub const KEY_HEX_LEN: usize = 2 * KEY_BYTES;

/// A 256-bit secret key split into eight big-endian 32-bit words.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    words: [u32; KEY_WORDS],
}

impl Key {
    /// Parses a key from 64 hexadecimal characters.
    ///
    /// One leading `0x` or `0X` prefix is stripped. Hex digits are accepted
    /// in either case. No other leniency is applied.
    ///
    /// # Errors
    /// Returns [`HsmatrixError::InvalidKey`] if the stripped string is not
    /// exactly 64 characters long or contains a non-hexadecimal character.
    ///
    /// # Examples
    ///
    /// ```
    /// use hsmatrix::Key;
    ///
    /// let key = Key::from_hex(&"0".repeat(64)).unwrap();
    /// assert_eq!(key.words(), &[0u32; 8]);
    ///
    /// assert!(Key::from_hex("0xabc").is_err());
    /// ```
    pub fn from_hex(key_hex: &str) -> Result<Self, HsmatrixError> {
        let digits = strip_prefix(key_hex);
        if digits.len() != KEY_HEX_LEN {
            let defect = KeyDefect::WrongLength(digits.len());
            warn!(%defect, "rejected key");
            return Err(HsmatrixError::InvalidKey(defect));
        }

        let mut bytes = [0u8; KEY_BYTES];
        if hex::decode_to_slice(digits, &mut bytes).is_err() {
            bytes.zeroize();
            let defect = KeyDefect::NonHexCharacter;
            warn!(%defect, "rejected key");
            return Err(HsmatrixError::InvalidKey(defect));
        }

        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Builds a key from 32 raw bytes, first byte most significant.
    pub fn from_bytes(bytes: &[u8; KEY_BYTES]) -> Self {
        Key {
            words: converter::bytes_to_words(bytes),
        }
    }

    /// Builds a key directly from its words `k1..k8`.
    pub fn from_words(words: [u32; KEY_WORDS]) -> Self {
        Key { words }
    }

    /// Returns the words `k1..k8`.
    pub fn words(&self) -> &[u32; KEY_WORDS] {
        &self.words
    }

    /// Returns the 32 big-endian key bytes.
    pub fn to_bytes(&self) -> [u8; KEY_BYTES] {
        converter::words_to_bytes(&self.words)
    }

    /// Returns the canonical lowercase hex form, without prefix.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.to_bytes();
        let out = hex::encode(bytes);
        bytes.zeroize();
        out
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

impl std::str::FromStr for Key {
    type Err = HsmatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Removes a single leading `0x`/`0X`.
fn strip_prefix(key_hex: &str) -> &str {
    key_hex
        .strip_prefix("0x")
        .or_else(|| key_hex.strip_prefix("0X"))
        .unwrap_or(key_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[test]
    fn test_split_order_most_significant_first() {
        let key = Key::from_hex(SEQ_KEY).unwrap();
        assert_eq!(
            key.words(),
            &[
                0x0001_0203,
                0x0405_0607,
                0x0809_0a0b,
                0x0c0d_0e0f,
                0x1011_1213,
                0x1415_1617,
                0x1819_1a1b,
                0x1c1d_1e1f,
            ]
        );
    }

    #[test]
    fn test_prefix_and_case_accepted() {
        let lower = Key::from_hex(SEQ_KEY).unwrap();
        let upper = Key::from_hex(&SEQ_KEY.to_uppercase()).unwrap();
        let prefixed = Key::from_hex(&format!("0x{}", SEQ_KEY)).unwrap();
        let prefixed_upper = Key::from_hex(&format!("0X{}", SEQ_KEY)).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, prefixed);
        assert_eq!(lower, prefixed_upper);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            Key::from_hex(&SEQ_KEY[..63]),
            Err(HsmatrixError::InvalidKey(KeyDefect::WrongLength(63)))
        );
        assert_eq!(
            Key::from_hex(&format!("{}0", SEQ_KEY)),
            Err(HsmatrixError::InvalidKey(KeyDefect::WrongLength(65)))
        );
        assert_eq!(
            Key::from_hex(""),
            Err(HsmatrixError::InvalidKey(KeyDefect::WrongLength(0)))
        );
        assert_eq!(
            Key::from_hex("0x"),
            Err(HsmatrixError::InvalidKey(KeyDefect::WrongLength(0)))
        );
    }

    #[test]
    fn test_double_prefix_is_not_stripped_twice() {
        let doubled = format!("0x0x{}", &SEQ_KEY[2..]);
        assert_eq!(
            Key::from_hex(&doubled),
            Err(HsmatrixError::InvalidKey(KeyDefect::NonHexCharacter))
        );
    }

    #[test]
    fn test_non_hex_characters() {
        let mut bad = SEQ_KEY.to_string();
        bad.replace_range(10..11, "g");
        assert_eq!(
            Key::from_hex(&bad),
            Err(HsmatrixError::InvalidKey(KeyDefect::NonHexCharacter))
        );
        let spaced = format!(" {}", &SEQ_KEY[1..]);
        assert_eq!(
            Key::from_hex(&spaced),
            Err(HsmatrixError::InvalidKey(KeyDefect::NonHexCharacter))
        );
    }

    #[test]
    fn test_multibyte_character_is_rejected() {
        // "é" is two bytes; total byte length stays 64.
        let bad = format!("é{}", &SEQ_KEY[2..]);
        assert_eq!(bad.len(), 64);
        assert!(matches!(
            Key::from_hex(&bad),
            Err(HsmatrixError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = Key::from_hex(&SEQ_KEY.to_uppercase()).unwrap();
        assert_eq!(key.to_hex(), SEQ_KEY);
        assert_eq!(Key::from_bytes(&key.to_bytes()), key);
    }

    #[test]
    fn test_from_str() {
        let key: Key = SEQ_KEY.parse().unwrap();
        assert_eq!(key.words()[7], 0x1c1d_1e1f);
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = Key::from_words([0xDEAD_BEEF; 8]);
        let shown = format!("{:?}", key);
        assert_eq!(shown, "Key(<redacted>)");
        assert!(!shown.to_lowercase().contains("dead"));
    }
}
