//! XChaCha20-Poly1305 authenticated encryption.
//!
//! The underlying Poly1305 accumulator is kept internal; callers interact
//! only with the AEAD functions in [`xchacha20poly1305`].

pub(crate) mod poly1305;
pub mod xchacha20poly1305;

pub use xchacha20poly1305::{
    AeadError, KEY_LEN, NONCE_LEN, TAG_LEN, decrypt, encrypt, encrypt_with_nonce,
};
