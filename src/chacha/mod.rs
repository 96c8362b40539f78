//! ChaCha20 core permutation (RFC 8439).
//!
//! This module provides a low-level, dependency-free implementation of the
//! ChaCha20 block function. It is shared by the CSPRNG (as a deterministic
//! random bit generator) and the XChaCha20-Poly1305 AEAD construction (as the
//! actual stream cipher), plus the HChaCha20 subkey-derivation function used
//! to extend ChaCha20's 12-byte nonce to 24 bytes.
//!
//! It does **not** implement authenticated encryption by itself; callers are
//! responsible for key and nonce management.

/// ChaCha20 constant words: `"expand 32-byte k"` encoded as little-endian
/// `u32` words, as defined in RFC 8439.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
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

/// Applies the full 20-round (10 double-round) ChaCha20 permutation in place.
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

fn init_state(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| *s = u32::from_le_bytes(k.try_into().unwrap()));

    state[12] = counter;

    state[13..16]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| *s = u32::from_le_bytes(n.try_into().unwrap()));

    state
}

/// Generates a single 64-byte ChaCha20 keystream block for the IETF
/// (96-bit nonce, 32-bit counter) variant.
///
/// Reusing the same `(key, nonce, counter)` tuple across two different
/// keystream requests is catastrophic for confidentiality and must be
/// prevented by the caller.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let original = init_state(key, counter, nonce);
    let mut state = original;

    rounds(&mut state);

    state.iter_mut().zip(&original).for_each(|(s, o)| {
        *s = s.wrapping_add(*o);
    });

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// XORs a ChaCha20 keystream (96-bit nonce, starting at `counter`) into
/// `buf` in place.
pub(crate) fn xor(key: &[u8; 32], nonce: &[u8; 12], counter: u32, buf: &mut [u8]) {
    for (i, chunk) in buf.chunks_mut(64).enumerate() {
        let ks = block(key, counter.wrapping_add(i as u32), nonce);
        crate::utils::xor_in_place(chunk, &ks[..chunk.len()]);
    }
}

/// HChaCha20: derives a 32-byte subkey from a 256-bit key and a 128-bit
/// nonce, as specified for XChaCha20's extended-nonce construction.
///
/// Unlike the full ChaCha20 block function, HChaCha20 returns the permuted
/// state directly — there is no feed-forward addition of the initial state,
/// and the output is the four constant-position words followed by the four
/// words that held the nonce.
pub(crate) fn hchacha20(key: &[u8; 32], nonce: &[u8; 16]) -> [u8; 32] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| *s = u32::from_le_bytes(k.try_into().unwrap()));

    state[12..16]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| *s = u32::from_le_bytes(n.try_into().unwrap()));

    rounds(&mut state);

    let mut out = [0u8; 32];
    out[0..4].copy_from_slice(&state[0].to_le_bytes());
    out[4..8].copy_from_slice(&state[1].to_le_bytes());
    out[8..12].copy_from_slice(&state[2].to_le_bytes());
    out[12..16].copy_from_slice(&state[3].to_le_bytes());
    out[16..20].copy_from_slice(&state[12].to_le_bytes());
    out[20..24].copy_from_slice(&state[13].to_le_bytes());
    out[24..28].copy_from_slice(&state[14].to_le_bytes());
    out[28..32].copy_from_slice(&state[15].to_le_bytes());

    out
}

/// XChaCha20: encrypts/decrypts (the operation is its own inverse) `buf` in
/// place using a 256-bit key, a 24-byte extended nonce, and a starting block
/// counter.
pub(crate) fn xchacha20_xor(key: &[u8; 32], nonce: &[u8; 24], counter: u32, buf: &mut [u8]) {
    let hnonce: [u8; 16] = nonce[0..16].try_into().unwrap();
    let subkey = hchacha20(key, &hnonce);

    let mut inner_nonce = [0u8; 12];
    inner_nonce[4..12].copy_from_slice(&nonce[16..24]);

    xor(&subkey, &inner_nonce, counter, buf);
}
