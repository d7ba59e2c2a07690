//! Encrypt-then-decrypt round trips over buffers of assorted lengths.

use chacha_core::{
    BLOCK_SIZE, COUNTER_INDEX, R20, State, build_state, encode_key, encode_nonce, keystream_block,
};

const LENGTHS: [usize; 9] = [0, 1, 4, 63, 64, 65, 127, 128, 300];

fn message(len: usize) -> [u8; 300] {
    let mut buf = [0u8; 300];
    for (i, b) in buf[..len].iter_mut().enumerate() {
        *b = (i * 7 + 3) as u8;
    }
    buf
}

/// XOR keystream into `data` block by block, advancing the counter between blocks.
fn xor_keystream(mut state: State, data: &mut [u8]) {
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let ks = keystream_block::<R20>(&state);
        for (b, k) in chunk.iter_mut().zip(ks.iter()) {
            *b ^= k;
        }
        state[COUNTER_INDEX] = state[COUNTER_INDEX].wrapping_add(1);
    }
}

#[test]
fn core_round_trip() {
    let key = encode_key("an example very very secret key.").unwrap();
    let nonce = encode_nonce("unique nonce").unwrap();
    let state = build_state(&key, &nonce, 0).unwrap();

    for len in LENGTHS {
        let plaintext = message(len);
        let mut buf = plaintext;

        xor_keystream(state, &mut buf[..len]);
        if len >= 16 {
            assert_ne!(buf[..len], plaintext[..len], "len {len}");
        }

        xor_keystream(state, &mut buf[..len]);
        assert_eq!(buf[..len], plaintext[..len], "len {len}");
    }
}

#[cfg(feature = "cipher")]
mod cipher_round_trip {
    use super::{LENGTHS, message, xor_keystream};
    use chacha_core::{
        ChaCha8, ChaCha12, ChaCha20, KeyIvInit, StreamCipher, StreamCipherSeek, build_state,
        key_words, nonce_words,
    };

    const KEY: [u8; 32] = [0x42; 32];
    const NONCE: [u8; 12] = [0x24; 12];

    #[test]
    fn chacha20_round_trip() {
        for len in LENGTHS {
            let plaintext = message(len);
            let mut buf = plaintext;

            let mut cipher = ChaCha20::new(&KEY.into(), &NONCE.into());
            cipher.apply_keystream(&mut buf[..len]);
            assert_eq!(cipher.current_pos::<usize>(), len);

            let mut cipher = ChaCha20::new(&KEY.into(), &NONCE.into());
            cipher.apply_keystream(&mut buf[..len]);
            assert_eq!(buf[..len], plaintext[..len], "len {len}");
        }
    }

    #[test]
    fn cipher_matches_core_driver() {
        let state = build_state(&key_words(&KEY), &nonce_words(&NONCE), 0).unwrap();

        let mut expected = message(300);
        xor_keystream(state, &mut expected);

        let mut actual = message(300);
        ChaCha20::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut actual);
        assert_eq!(actual, expected);
    }

    #[test]
    fn seek_into_middle() {
        let mut full = [0u8; 300];
        ChaCha20::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut full);

        let mut cipher = ChaCha20::new(&KEY.into(), &NONCE.into());
        cipher.seek(100u64);
        let mut tail = [0u8; 200];
        cipher.apply_keystream(&mut tail);
        assert_eq!(tail[..], full[100..]);
    }

    #[test]
    fn reduced_rounds_differ() {
        let mut r8 = [0u8; 64];
        let mut r12 = [0u8; 64];
        let mut r20 = [0u8; 64];
        ChaCha8::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut r8);
        ChaCha12::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut r12);
        ChaCha20::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut r20);
        assert_ne!(r8, r12);
        assert_ne!(r8, r20);
        assert_ne!(r12, r20);

        for len in LENGTHS {
            let plaintext = message(len);
            let mut buf = plaintext;
            ChaCha8::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut buf[..len]);
            ChaCha8::new(&KEY.into(), &NONCE.into()).apply_keystream(&mut buf[..len]);
            assert_eq!(buf[..len], plaintext[..len]);
        }
    }
}

#[cfg(feature = "xchacha")]
mod xchacha_round_trip {
    use super::{LENGTHS, message};
    use chacha_core::{KeyIvInit, StreamCipher, XChaCha20};

    #[test]
    fn xchacha20_round_trip() {
        let key = [0x11u8; 32];
        let nonce = [0x22u8; 24];
        for len in LENGTHS {
            let plaintext = message(len);
            let mut buf = plaintext;
            XChaCha20::new(&key.into(), &nonce.into()).apply_keystream(&mut buf[..len]);
            XChaCha20::new(&key.into(), &nonce.into()).apply_keystream(&mut buf[..len]);
            assert_eq!(buf[..len], plaintext[..len]);
        }
    }
}
