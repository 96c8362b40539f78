//! SHA-512 core hashing functions (FIPS 180-4).
//!
//! Provides the compression function, a streaming [`Sha512`] digest with
//! `update`/`reset`/`digest` semantics, and a [`sha512`] convenience
//! function for one-shot hashing.

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// Compresses a single 1024-bit message block, updating `state` in place.
pub(crate) fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Incremental SHA-512 digest.
///
/// Bytes may be supplied across any number of [`update`](Sha512::update)
/// calls; the result is identical to hashing the concatenation in one call.
#[derive(Clone)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; 128],
    buffered: usize,
    total_len: u128,
}

impl Sha512 {
    /// Creates a new digest in its initial state.
    pub fn new() -> Self {
        Self {
            state: H512_INIT,
            buffer: [0u8; 128],
            buffered: 0,
            total_len: 0,
        }
    }

    /// Restores the digest to its initial state, discarding any buffered
    /// input and previously accumulated state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds additional input into the digest.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len += data.len() as u128;

        if self.buffered > 0 {
            let space = 128 - self.buffered;
            let take = space.min(data.len());

            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered == 128 {
                let block = self.buffer;
                compress(&block, &mut self.state);
                self.buffered = 0;
            }
        }

        while data.len() >= 128 {
            let block: &[u8; 128] = data[..128].try_into().unwrap();
            compress(block, &mut self.state);
            data = &data[128..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffered = data.len();
        }
    }

    /// Finalizes the digest and returns the 64-byte hash value, without
    /// consuming `self` — a caller may keep accumulating afterward only by
    /// cloning beforehand, since the padding here is computed on a copy of
    /// the internal state.
    pub fn digest(&self) -> [u8; 64] {
        let mut state = self.state;
        let mut block = [0u8; 128];

        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x80;

        if self.buffered > 111 {
            compress(&block, &mut state);
            block = [0u8; 128];
        }

        let bit_len = self.total_len << 3;
        block[112..128].copy_from_slice(&bit_len.to_be_bytes());
        compress(&block, &mut state);

        let mut out = [0u8; 64];
        for (i, word) in state.iter().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-512 digest of `input` in one call.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(input);
    hasher.digest()
}
