//! Hash algorithms exposed by the crate.
//!
//! Currently provides SHA-512, used internally for Ed25519 key expansion
//! and signing and exposed directly for callers that need a general-purpose
//! digest.

pub mod sha512;

pub use sha512::{Sha512, sha512};
