//! Typed key and parameter objects.
//!
//! Each algorithm's key type pairs its raw material with a [`Variant`],
//! an optional key id, and the 5-byte output prefix derived from them.
//! Secret bytes are held in [`SecretBytes`] and can only be read by
//! presenting a [`SecretKeyAccess`] token.

pub mod ed25519;
pub mod error;
pub mod material;
pub mod secret;
pub mod variant;
pub mod xchacha20poly1305;

pub use error::KeyError;
pub use material::KeyMaterialKind;
pub use secret::{SecretBytes, SecretKeyAccess};
pub use variant::Variant;
