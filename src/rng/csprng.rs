//! ChaCha20-based CSPRNG.
//!
//! Implements a cryptographically secure pseudorandom number generator
//! built on the ChaCha20 block function, used as a deterministic random bit
//! generator (DRBG):
//! - relies on the operating system for initial entropy
//! - avoids heap allocations
//! - provides forward secrecy via periodic rekeying
//!
//! Suitable for key generation, nonces, and other security-critical
//! randomness needs throughout the crate.

use crate::chacha;
use crate::os::sys_random;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy (or a caller
/// supplied seed, for deterministic tests) and then expands randomness
/// using the ChaCha20 block function. After generating output, it rekeys
/// itself so that compromise of the current state does not reveal past
/// output.
pub struct Csprng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. Intended for
    /// deterministic tests; production callers should use [`Csprng::new`].
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with cryptographically secure random bytes.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            let block = chacha::block(&self.key, self.counter, &self.nonce);

            self.counter = self.counter.wrapping_add(1);

            let to_copy = 64.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&block[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
    }

    /// Rekeys the generator to provide forward secrecy: a fresh ChaCha20
    /// block is generated and its first 32 bytes become the new key.
    fn rekey(&mut self) {
        let block = chacha::block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}
