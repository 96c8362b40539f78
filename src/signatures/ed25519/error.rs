//! Errors produced by the Ed25519 implementation.

/// Errors produced by key generation, signing, and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ed25519Error {
    /// A pseudorandom stream used for deterministic key derivation yielded
    /// fewer than 32 bytes.
    InsufficientRandomness,
    /// A signature failed to verify against the given message and public
    /// key.
    InvalidSignature,
}
