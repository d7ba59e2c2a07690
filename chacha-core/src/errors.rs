//! Error types.
use core::fmt;

/// Errors returned while encoding key material or building a state.
///
/// Every variant indicates malformed input from the caller; none of them are
/// transient.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Text handed to the encoder has the wrong number of characters.
    LengthMismatch {
        /// Required number of characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
    /// A character encodes to more than one byte.
    InvalidCharacterWidth {
        /// Character index of the first offending character.
        position: usize,
        /// Encoded width of that character in bytes.
        width: usize,
    },
    /// Key is not exactly [`KEY_WORDS`](crate::KEY_WORDS) words long.
    InvalidKeyLength {
        /// Number of words supplied.
        actual: usize,
    },
    /// Nonce is not exactly [`NONCE_WORDS`](crate::NONCE_WORDS) words long.
    InvalidNonceLength {
        /// Number of words supplied.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "invalid text length ({actual} != {expected})")
            }
            Self::InvalidCharacterWidth { position, width } => write!(
                f,
                "character at position {position} is {width} bytes wide (expected 1)"
            ),
            Self::InvalidKeyLength { actual } => {
                write!(f, "invalid length of key ({actual} != {})", crate::KEY_WORDS)
            }
            Self::InvalidNonceLength { actual } => write!(
                f,
                "invalid length of nonce ({actual} != {})",
                crate::NONCE_WORDS
            ),
        }
    }
}

impl core::error::Error for Error {}
