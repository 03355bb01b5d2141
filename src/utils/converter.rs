//! Byte/word conversion for 256-bit keys.
//!
//! A key is handled as 32 big-endian bytes or as eight `u32` words with
//! the most significant word first, matching the order in which the hex
//! string is read (`k1` = first 8 hex characters).

/// Number of 32-bit words in a 256-bit key.
pub const KEY_WORDS: usize = 8;

/// Number of bytes in a 256-bit key.
pub const KEY_BYTES: usize = 32;

/// Converts 32 bytes to eight `u32` words using big-endian byte ordering.
///
/// Each group of 4 bytes becomes one word, the first byte occupying the
/// most significant position.
pub fn bytes_to_words(input: &[u8; KEY_BYTES]) -> [u32; KEY_WORDS] {
    let mut output = [0u32; KEY_WORDS];
    for (word, chunk) in output.iter_mut().zip(input.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    output
}

/// Converts eight `u32` words to 32 bytes using big-endian byte ordering.
pub fn words_to_bytes(input: &[u32; KEY_WORDS]) -> [u8; KEY_BYTES] {
    let mut output = [0u8; KEY_BYTES];
    for (chunk, word) in output.chunks_exact_mut(4).zip(input.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    output
}
