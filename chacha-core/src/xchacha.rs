//! XChaCha is an extended nonce variant of ChaCha

use cipher::{
    BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, StreamCipherCore, StreamCipherCoreWrapper,
    StreamCipherSeekCore, StreamClosure,
    consts::{U24, U32, U64},
    generic_array::GenericArray,
};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    CONSTANTS, ChaChaCore, KEY_WORDS, Key, R8, R12, R20, Rounds, STATE_WORDS,
    block::permute,
    encoding::{key_words, nonce_words, words_from_le_bytes},
    init_state,
};

/// Nonce type used by XChaCha variants.
pub type XNonce = GenericArray<u8, U24>;

/// XChaCha is a ChaCha20 variant with an extended 192-bit (24-byte) nonce.
///
/// The first 16 nonce bytes and the key are fed through [`hchacha`] to
/// derive a subkey; the remaining 8 nonce bytes, prefixed with 4 zero
/// bytes, become the nonce of an ordinary ChaCha20 instance under that
/// subkey. Documented in an (expired) IETF draft:
///
/// <https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-xchacha>
pub type XChaCha20 = StreamCipherCoreWrapper<XChaChaCore<R20>>;
/// XChaCha12 stream cipher (reduced-round variant of [`XChaCha20`] with 12 rounds)
pub type XChaCha12 = StreamCipherCoreWrapper<XChaChaCore<R12>>;
/// XChaCha8 stream cipher (reduced-round variant of [`XChaCha20`] with 8 rounds)
pub type XChaCha8 = StreamCipherCoreWrapper<XChaChaCore<R8>>;

/// The XChaCha core function.
#[derive(Debug)]
pub struct XChaChaCore<R: Rounds>(ChaChaCore<R>);

impl<R: Rounds> KeySizeUser for XChaChaCore<R> {
    type KeySize = U32;
}

impl<R: Rounds> IvSizeUser for XChaChaCore<R> {
    type IvSize = U24;
}

impl<R: Rounds> BlockSizeUser for XChaChaCore<R> {
    type BlockSize = U64;
}

impl<R: Rounds> KeyIvInit for XChaChaCore<R> {
    fn new(key: &Key, iv: &XNonce) -> Self {
        let mut raw_key = [0u8; 32];
        raw_key.copy_from_slice(key);
        let mut input = [0u8; 16];
        input.copy_from_slice(&iv[..16]);

        #[allow(unused_mut)]
        let mut subkey = hchacha::<R>(&raw_key, &input);

        // first 4 bytes are 0, last 8 bytes are last 8 from the iv
        // according to draft-arciszewski-xchacha-03
        let mut nonce = [0u8; 12];
        nonce[4..].copy_from_slice(&iv[16..]);
        let state = init_state(&key_words(&subkey), &nonce_words(&nonce), 0);

        #[cfg(feature = "zeroize")]
        {
            raw_key.zeroize();
            subkey.zeroize();
        }

        Self(ChaChaCore::from_state(state))
    }
}

impl<R: Rounds> StreamCipherCore for XChaChaCore<R> {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        self.0.remaining_blocks()
    }

    #[inline(always)]
    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        self.0.process_with_backend(f);
    }
}

impl<R: Rounds> StreamCipherSeekCore for XChaChaCore<R> {
    type Counter = u32;

    #[inline(always)]
    fn get_block_pos(&self) -> u32 {
        self.0.get_block_pos()
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u32) {
        self.0.set_block_pos(pos);
    }
}

#[cfg(feature = "zeroize")]
impl<R: Rounds> ZeroizeOnDrop for XChaChaCore<R> {}

/// The HChaCha function: adapts the ChaCha core function in the same
/// manner that HSalsa adapts the Salsa function.
///
/// HChaCha takes 512-bits of input:
///
/// - Constants: `u32` x 4
/// - Key: `u32` x 8
/// - Nonce: `u32` x 4
///
/// It produces 256-bits of output suitable for use as a ChaCha key. There is
/// no feed-forward: the output is words 0-3 and 12-15 of the permuted state.
///
/// For more information on HSalsa on which HChaCha is based, see:
///
/// <http://cr.yp.to/snuffle/xsalsa-20110204.pdf>
#[must_use]
pub fn hchacha<R: Rounds>(key: &[u8; 32], input: &[u8; 16]) -> [u8; 32] {
    let mut state = [0u32; STATE_WORDS];
    state[..4].copy_from_slice(&CONSTANTS);
    state[4..4 + KEY_WORDS].copy_from_slice(&key_words(key));
    state[4 + KEY_WORDS..].copy_from_slice(&words_from_le_bytes::<4>(input));

    permute::<R>(&mut state);

    let mut output = [0u8; 32];
    let words = state[..4].iter().chain(&state[12..]);
    for (chunk, val) in output.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&val.to_le_bytes());
    }

    #[cfg(feature = "zeroize")]
    state.zeroize();

    output
}
