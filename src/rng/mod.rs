//! Random number generation.
//!
//! Provides a high-level CSPRNG built on the crate's ChaCha20 permutation
//! (see [`crate::chacha`]), suitable for security-critical use cases such
//! as key generation and nonces.

mod csprng;

pub use csprng::Csprng;
