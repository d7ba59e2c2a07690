//! Construction of the 16-word cipher state.
//!
//! ```text
//! cccccccc  cccccccc  cccccccc  cccccccc
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! bbbbbbbb  nnnnnnnn  nnnnnnnn  nnnnnnnn
//! ```
//!
//! c=constant k=key b=blockcount n=nonce

use crate::{CONSTANTS, COUNTER_INDEX, Error, KEY_WORDS, NONCE_WORDS, STATE_WORDS};

/// The ChaCha state: a 4x4 row-major matrix of 32-bit words.
pub type State = [u32; STATE_WORDS];

/// Build a state from key and nonce words of unchecked length.
///
/// # Errors
/// - [`Error::InvalidKeyLength`] unless `key` holds exactly [`KEY_WORDS`] words.
/// - [`Error::InvalidNonceLength`] unless `nonce` holds exactly [`NONCE_WORDS`] words.
pub fn build_state(key: &[u32], nonce: &[u32], counter: u32) -> Result<State, Error> {
    let key: &[u32; KEY_WORDS] = key
        .try_into()
        .map_err(|_| Error::InvalidKeyLength { actual: key.len() })?;
    let nonce: &[u32; NONCE_WORDS] = nonce
        .try_into()
        .map_err(|_| Error::InvalidNonceLength {
            actual: nonce.len(),
        })?;

    Ok(init_state(key, nonce, counter))
}

/// Lay out constants, key, block counter and nonce.
#[must_use]
pub fn init_state(key: &[u32; KEY_WORDS], nonce: &[u32; NONCE_WORDS], counter: u32) -> State {
    let mut state = [0u32; STATE_WORDS];
    state[..4].copy_from_slice(&CONSTANTS);
    state[4..COUNTER_INDEX].copy_from_slice(key);
    state[COUNTER_INDEX] = counter;
    state[COUNTER_INDEX + 1..].copy_from_slice(nonce);
    state
}
