use aurochs::aead::{self, AeadError};

const KEY: [u8; 32] = [0x11u8; 32];
const NONCE: [u8; 24] = [0x22u8; 24];

#[test]
fn round_trip() {
    let plaintext = b"the quick brown fox jumps over the lazy dog";
    let aad = b"header";

    let ciphertext = aead::encrypt(&KEY, plaintext, aad);
    let recovered = aead::decrypt(&KEY, &ciphertext, aad).expect("decryption should succeed");

    assert_eq!(recovered, plaintext);
}

#[test]
fn empty_plaintext_round_trips() {
    let ciphertext = aead::encrypt(&KEY, b"", b"aad");
    let recovered = aead::decrypt(&KEY, &ciphertext, b"aad").unwrap();

    assert!(recovered.is_empty());
}

#[test]
fn encrypt_draws_a_fresh_nonce_each_call() {
    let a = aead::encrypt(&KEY, b"same plaintext", b"");
    let b = aead::encrypt(&KEY, b"same plaintext", b"");

    assert_ne!(&a[..24], &b[..24], "nonces should differ across calls");
}

#[test]
fn fixed_nonce_is_deterministic() {
    let a = aead::encrypt_with_nonce(&KEY, &NONCE, b"hello", b"");
    let b = aead::encrypt_with_nonce(&KEY, &NONCE, b"hello", b"");

    assert_eq!(a, b);
}

#[test]
fn tampered_ciphertext_is_rejected() {
    let mut ciphertext = aead::encrypt_with_nonce(&KEY, &NONCE, b"hello", b"");
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;

    assert_eq!(
        aead::decrypt(&KEY, &ciphertext, b""),
        Err(AeadError::AuthenticationFailed)
    );
}

#[test]
fn mismatched_aad_is_rejected() {
    let ciphertext = aead::encrypt_with_nonce(&KEY, &NONCE, b"hello", b"correct aad");

    assert_eq!(
        aead::decrypt(&KEY, &ciphertext, b"wrong aad"),
        Err(AeadError::AuthenticationFailed)
    );
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let ciphertext = aead::encrypt_with_nonce(&KEY, &NONCE, b"hello", b"");
    let truncated = &ciphertext[..10];

    assert_eq!(
        aead::decrypt(&KEY, truncated, b""),
        Err(AeadError::CiphertextTooShort)
    );
}

#[test]
fn different_keys_produce_different_ciphertexts() {
    let key_a = [0x01u8; 32];
    let key_b = [0x02u8; 32];

    let a = aead::encrypt_with_nonce(&key_a, &NONCE, b"hello", b"");
    let b = aead::encrypt_with_nonce(&key_b, &NONCE, b"hello", b"");

    assert_ne!(a, b);
    assert_eq!(
        aead::decrypt(&key_b, &a, b""),
        Err(AeadError::AuthenticationFailed)
    );
}
