//! The ChaCha block function. Defined in RFC 8439 Section 2.3.
//!
//! <https://tools.ietf.org/html/rfc8439#section-2.3>
//!
//! Portable implementation which does not rely on architecture-specific
//! intrinsics.

use crate::{BLOCK_SIZE, Rounds, State};

/// The ChaCha quarter round function.
///
/// Mixes the four words at positions `a`, `b`, `c` and `d` of `state` in
/// place. Defined in RFC 8439 Section 2.1.
///
/// # Panics
/// If any index is not below [`STATE_WORDS`](crate::STATE_WORDS).
#[inline]
pub fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut State) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// One column round followed by one diagonal round.
#[inline]
pub fn double_round(state: &mut State) {
    // column rounds
    quarter_round(0, 4, 8, 12, state);
    quarter_round(1, 5, 9, 13, state);
    quarter_round(2, 6, 10, 14, state);
    quarter_round(3, 7, 11, 15, state);

    // diagonal rounds
    quarter_round(0, 5, 10, 15, state);
    quarter_round(1, 6, 11, 12, state);
    quarter_round(2, 7, 8, 13, state);
    quarter_round(3, 4, 9, 14, state);
}

/// Apply `R::COUNT` double rounds in place, without the feed-forward.
#[inline]
pub fn permute<R: Rounds>(state: &mut State) {
    for _ in 0..R::COUNT {
        double_round(state);
    }
}

/// The ChaCha block function: permute a copy of `state`, then add the
/// original state back in word by word.
///
/// The input is left untouched; advancing the block counter is up to the
/// caller.
#[inline]
#[must_use]
pub fn block<R: Rounds>(state: &State) -> State {
    let mut res = *state;
    permute::<R>(&mut res);

    for (s1, s0) in res.iter_mut().zip(state.iter()) {
        *s1 = s1.wrapping_add(*s0);
    }
    res
}

/// Run the block function and serialize its output little-endian.
#[must_use]
pub fn keystream_block<R: Rounds>(state: &State) -> [u8; BLOCK_SIZE] {
    let res = block::<R>(state);

    let mut out = [0u8; BLOCK_SIZE];
    for (chunk, val) in out.chunks_exact_mut(4).zip(res.iter()) {
        chunk.copy_from_slice(&val.to_le_bytes());
    }
    out
}
