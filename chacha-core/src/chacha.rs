//! ChaCha stream ciphers built on the permutation core.

use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use cipher::{
    BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, ParBlocksSizeUser, StreamBackend,
    StreamCipherCore, StreamCipherCoreWrapper, StreamCipherSeekCore, StreamClosure,
    consts::{U1, U12, U32, U64},
    generic_array::GenericArray,
};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    COUNTER_INDEX, R8, R12, R20, Rounds, State, block::keystream_block,
    encoding::words_from_le_bytes, init_state,
};

/// Block type used by all ChaCha variants.
type Block = GenericArray<u8, U64>;

/// Key type used by all ChaCha variants.
pub type Key = GenericArray<u8, U32>;

/// Nonce type used by ChaCha variants.
pub type Nonce = GenericArray<u8, U12>;

/// ChaCha8 stream cipher (reduced-round variant of [`ChaCha20`] with 8 rounds)
pub type ChaCha8 = StreamCipherCoreWrapper<ChaChaCore<R8>>;

/// ChaCha12 stream cipher (reduced-round variant of [`ChaCha20`] with 12 rounds)
pub type ChaCha12 = StreamCipherCoreWrapper<ChaChaCore<R12>>;

/// ChaCha20 stream cipher (RFC 8439 version with 96-bit nonce)
///
/// ```
/// use chacha_core::{ChaCha20, KeyIvInit, StreamCipher, StreamCipherSeek};
///
/// let key = [0x42u8; 32];
/// let nonce = [0x24u8; 12];
/// let plaintext = *b"hello world";
///
/// let mut buffer = plaintext;
/// let mut cipher = ChaCha20::new(&key.into(), &nonce.into());
/// cipher.apply_keystream(&mut buffer);
/// assert_ne!(buffer, plaintext);
///
/// // decryption is the same operation from the same position
/// cipher.seek(0u32);
/// cipher.apply_keystream(&mut buffer);
/// assert_eq!(buffer, plaintext);
/// ```
pub type ChaCha20 = StreamCipherCoreWrapper<ChaChaCore<R20>>;

/// The ChaCha core function.
///
/// Owns one [`State`]; the block counter at position 12 advances by one
/// after each keystream block.
pub struct ChaChaCore<R: Rounds> {
    state: State,
    rounds: PhantomData<R>,
}

impl<R: Rounds> ChaChaCore<R> {
    pub(crate) fn from_state(state: State) -> Self {
        Self {
            state,
            rounds: PhantomData,
        }
    }
}

impl<R: Rounds> KeySizeUser for ChaChaCore<R> {
    type KeySize = U32;
}

impl<R: Rounds> IvSizeUser for ChaChaCore<R> {
    type IvSize = U12;
}

impl<R: Rounds> BlockSizeUser for ChaChaCore<R> {
    type BlockSize = U64;
}

impl<R: Rounds> KeyIvInit for ChaChaCore<R> {
    #[inline]
    fn new(key: &Key, iv: &Nonce) -> Self {
        #[allow(unused_mut)]
        let mut key = words_from_le_bytes(key);
        let state = init_state(&key, &words_from_le_bytes(iv), 0);

        #[cfg(feature = "zeroize")]
        key.zeroize();

        Self::from_state(state)
    }
}

impl<R: Rounds> StreamCipherCore for ChaChaCore<R> {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        let rem = u32::MAX - self.get_block_pos();
        rem.try_into().ok()
    }

    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut Backend(self));
    }
}

impl<R: Rounds> StreamCipherSeekCore for ChaChaCore<R> {
    type Counter = u32;

    #[inline(always)]
    fn get_block_pos(&self) -> u32 {
        self.state[COUNTER_INDEX]
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u32) {
        self.state[COUNTER_INDEX] = pos;
    }
}

impl<R: Rounds> Debug for ChaChaCore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChaChaCore { .. }")
    }
}

#[cfg(feature = "zeroize")]
impl<R: Rounds> Drop for ChaChaCore<R> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<R: Rounds> ZeroizeOnDrop for ChaChaCore<R> {}

struct Backend<'a, R: Rounds>(&'a mut ChaChaCore<R>);

impl<R: Rounds> BlockSizeUser for Backend<'_, R> {
    type BlockSize = U64;
}

impl<R: Rounds> ParBlocksSizeUser for Backend<'_, R> {
    type ParBlocksSize = U1;
}

impl<R: Rounds> StreamBackend for Backend<'_, R> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block) {
        block.copy_from_slice(&keystream_block::<R>(&self.0.state));

        let ctr = &mut self.0.state[COUNTER_INDEX];
        *ctr = ctr.wrapping_add(1);
    }
}
