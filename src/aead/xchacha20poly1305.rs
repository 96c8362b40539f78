//! XChaCha20-Poly1305 authenticated encryption with associated data.
//!
//! Combines XChaCha20 (extended-nonce ChaCha20, via HChaCha20 subkey
//! derivation) for confidentiality with Poly1305 for integrity, following
//! the construction used by ChaCha20-Poly1305 (RFC 8439) but with a 24-byte
//! nonce, which removes the need for careful nonce-counter coordination
//! across senders.

use crate::aead::poly1305::poly1305_mac;
use crate::chacha;
use crate::rng::Csprng;
use crate::utils::{ct_eq, pad16_len};

pub const NONCE_LEN: usize = 24;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;

/// Errors produced by the XChaCha20-Poly1305 AEAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    /// The ciphertext was shorter than `nonce || tag`, or otherwise
    /// structurally too short to have been produced by `encrypt`.
    CiphertextTooShort,
    /// Poly1305 tag verification failed.
    AuthenticationFailed,
}

fn poly1305_key(key: &[u8; 32], nonce: &[u8; NONCE_LEN]) -> [u8; 32] {
    let mut block = [0u8; 32];
    chacha::xchacha20_xor(key, nonce, 0, &mut block);
    block
}

fn mac_input(aad: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut input = Vec::with_capacity(
        aad.len() + pad16_len(aad.len()) + ciphertext.len() + pad16_len(ciphertext.len()) + 16,
    );

    input.extend_from_slice(aad);
    input.resize(input.len() + pad16_len(aad.len()), 0);

    input.extend_from_slice(ciphertext);
    input.resize(input.len() + pad16_len(ciphertext.len()), 0);

    input.extend_from_slice(&(aad.len() as u64).to_le_bytes());
    input.extend_from_slice(&(ciphertext.len() as u64).to_le_bytes());

    input
}

/// Encrypts `plaintext` under `key` with a freshly drawn random nonce,
/// authenticating `aad` alongside it. Returns `nonce || ciphertext || tag`.
pub fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8], aad: &[u8]) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_LEN];
    Csprng::new().fill_bytes(&mut nonce);

    encrypt_with_nonce(key, &nonce, plaintext, aad)
}

/// Encrypts with a caller-supplied nonce. Exposed for testing against known
/// vectors; production callers should use [`encrypt`], which draws a fresh
/// random nonce per call. Reusing a nonce with the same key is catastrophic.
pub fn encrypt_with_nonce(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
    aad: &[u8],
) -> Vec<u8> {
    let poly_key = poly1305_key(key, nonce);

    let mut ciphertext = plaintext.to_vec();
    chacha::xchacha20_xor(key, nonce, 1, &mut ciphertext);

    let tag = poly1305_mac(&poly_key, &mac_input(aad, &ciphertext));

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len() + TAG_LEN);
    out.extend_from_slice(nonce);
    out.extend_from_slice(&ciphertext);
    out.extend_from_slice(&tag);

    out
}

/// Decrypts and authenticates `ciphertext` (`nonce || body || tag`) produced
/// by [`encrypt`], checking it against `aad`.
pub fn decrypt(key: &[u8; KEY_LEN], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
    if ciphertext.len() < NONCE_LEN + TAG_LEN {
        return Err(AeadError::CiphertextTooShort);
    }

    let nonce: [u8; NONCE_LEN] = ciphertext[..NONCE_LEN].try_into().unwrap();
    let body = &ciphertext[NONCE_LEN..ciphertext.len() - TAG_LEN];
    let tag = &ciphertext[ciphertext.len() - TAG_LEN..];

    let poly_key = poly1305_key(key, &nonce);
    let expected = poly1305_mac(&poly_key, &mac_input(aad, body));

    if !ct_eq(&expected, tag) {
        return Err(AeadError::AuthenticationFailed);
    }

    let mut plaintext = body.to_vec();
    chacha::xchacha20_xor(key, &nonce, 1, &mut plaintext);

    Ok(plaintext)
}
