//! Conversion of key and nonce material into state words.
//!
//! Key and nonce bytes are packed four to a word, little-endian, as in
//! RFC 8439 Section 2.3. Text input is accepted only when every character
//! is a single byte, so that the character count and the byte count agree.

use crate::{Error, KEY_WORDS, NONCE_WORDS};

/// Encode `4 * N` single-byte characters of `text` into `N` little-endian words.
///
/// The width check runs first: any multi-byte character is reported as
/// [`Error::InvalidCharacterWidth`] whatever the length of `text`.
///
/// # Errors
/// - [`Error::InvalidCharacterWidth`] if a character is not ASCII.
/// - [`Error::LengthMismatch`] if `text` is not exactly `4 * N` characters.
pub fn encode<const N: usize>(text: &str) -> Result<[u32; N], Error> {
    if let Some((position, c)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(Error::InvalidCharacterWidth {
            position,
            width: c.len_utf8(),
        });
    }

    // all characters are ASCII here, so bytes and characters coincide
    let bytes = text.as_bytes();
    let expected = N * 4;
    if bytes.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(words_from_le_bytes(bytes))
}

/// Encode a 32-character key into [`KEY_WORDS`] words.
///
/// # Errors
/// See [`encode`].
pub fn encode_key(text: &str) -> Result<[u32; KEY_WORDS], Error> {
    encode(text)
}

/// Encode a 12-character nonce into [`NONCE_WORDS`] words.
///
/// # Errors
/// See [`encode`].
pub fn encode_nonce(text: &str) -> Result<[u32; NONCE_WORDS], Error> {
    encode(text)
}

/// Pack a raw 256-bit key into state words.
#[must_use]
pub fn key_words(key: &[u8; 32]) -> [u32; KEY_WORDS] {
    words_from_le_bytes(key)
}

/// Pack a raw 96-bit nonce into state words.
#[must_use]
pub fn nonce_words(nonce: &[u8; 12]) -> [u32; NONCE_WORDS] {
    words_from_le_bytes(nonce)
}

/// Callers guarantee `bytes.len() == 4 * N`; trailing bytes are ignored.
#[inline]
pub(crate) fn words_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}
