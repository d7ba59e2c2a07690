//! The ChaCha permutation core.
//!
//! This crate provides the parts of a ChaCha-family stream cipher that are
//! pure bit manipulation:
//!
//! - [`encode_key`] / [`encode_nonce`]: turn single-byte text into the
//!   little-endian 32-bit words the cipher state is built from.
//! - [`build_state`]: lay out the 16-word state from the constants, an
//!   8-word key, a 32-bit block counter and a 3-word nonce.
//! - [`quarter_round`], [`double_round`] and the [`block()`] function (ten
//!   double rounds plus feed-forward for ChaCha20).
//!
//! With the `cipher` feature (on by default) the core is also wrapped into
//! [`ChaCha20`] and its reduced-round siblings, which implement the traits
//! from the RustCrypto [`cipher`] crate and handle counter increments and
//! keystream XOR across arbitrary buffer lengths.
//!
//! # Usage
//!
//! ```
//! use chacha_core::{R20, block, build_state, encode_key, encode_nonce};
//!
//! let key = encode_key("my 32 byte key, exactly 32 bytes")?;
//! let nonce = encode_nonce("twelve bytes")?;
//! let state = build_state(&key, &nonce, 0)?;
//!
//! let keystream = block::<R20>(&state);
//! assert_ne!(keystream, state);
//! # Ok::<(), chacha_core::Error>(())
//! ```
//!
//! # Security
//!
//! The nonce must never repeat for a given key. Nothing in this crate can
//! check that; it is an obligation of the caller.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "cipher")]
pub use cipher;
#[cfg(feature = "cipher")]
pub use cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};

mod block;
mod encoding;
mod errors;
mod state;

#[cfg(feature = "cipher")]
mod chacha;
#[cfg(feature = "xchacha")]
mod xchacha;

pub use crate::block::{block, double_round, keystream_block, permute, quarter_round};
pub use crate::encoding::{encode, encode_key, encode_nonce, key_words, nonce_words};
pub use crate::errors::Error;
pub use crate::state::{State, build_state, init_state};

#[cfg(feature = "cipher")]
pub use crate::chacha::{ChaCha8, ChaCha12, ChaCha20, ChaChaCore, Key, Nonce};
#[cfg(feature = "xchacha")]
pub use crate::xchacha::{XChaCha8, XChaCha12, XChaCha20, XChaChaCore, XNonce, hchacha};

/// Initialization constants: `"expand 32-byte k"` as four little-endian words.
pub const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Number of 32-bit words in the ChaCha state.
pub const STATE_WORDS: usize = 16;

/// Number of 32-bit words in a key.
pub const KEY_WORDS: usize = 8;

/// Number of 32-bit words in a nonce.
pub const NONCE_WORDS: usize = 3;

/// Position of the block counter within the state.
pub const COUNTER_INDEX: usize = 12;

/// Size of a keystream block in bytes.
pub const BLOCK_SIZE: usize = STATE_WORDS * 4;

/// Number of double rounds applied by a ChaCha variant.
pub trait Rounds: Copy {
    /// Double rounds per block; half the nominal round count.
    const COUNT: usize;
}

/// 8-rounds
#[derive(Copy, Clone, Debug)]
pub struct R8;

impl Rounds for R8 {
    const COUNT: usize = 4;
}

/// 12-rounds
#[derive(Copy, Clone, Debug)]
pub struct R12;

impl Rounds for R12 {
    const COUNT: usize = 6;
}

/// 20-rounds
#[derive(Copy, Clone, Debug)]
pub struct R20;

impl Rounds for R20 {
    const COUNT: usize = 10;
}
