//! Ed25519 key generation, signing, and verification (RFC 8032).
//!
//! Not Ed25519ph: messages are hashed directly with SHA-512 as part of the
//! signing/verification equations, never pre-hashed by the caller.

use super::error::Ed25519Error;
use super::group::GeP3;
use super::scalar::Scalar;
use crate::hash::sha512;
use crate::rng::Csprng;

/// The Ed25519 group order `ℓ`, little-endian.
const L_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

fn is_canonical_scalar(bytes: &[u8; 32]) -> bool {
    for i in (0..32).rev() {
        match bytes[i].cmp(&L_BYTES[i]) {
            std::cmp::Ordering::Less => return true,
            std::cmp::Ordering::Greater => return false,
            std::cmp::Ordering::Equal => continue,
        }
    }
    false
}

fn small_scalar(value: u8) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes[0] = value;
    Scalar(bytes)
}

/// An Ed25519 public key: the canonical 32-byte compressed curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wraps a raw 32-byte compressed Edwards point without validating it.
    /// Structural and cryptographic validity is checked during verification.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// An Ed25519 private key, in expanded form: the secret scalar used for
/// signing and the nonce prefix derived alongside it.
#[derive(Clone, Copy)]
pub struct PrivateKey {
    scalar: Scalar,
    prefix: [u8; 32],
}

impl PrivateKey {
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.scalar.to_bytes());
        out[32..].copy_from_slice(&self.prefix);
        out
    }
}

/// An Ed25519 signature: the compressed point `R` followed by the scalar `S`.
#[derive(Clone, Copy)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

/// Expands a 32-byte seed into its public key and expanded private key
/// (secret scalar + nonce prefix), per the Ed25519 key generation steps.
pub fn keypair_from_seed(seed: [u8; 32]) -> (PublicKey, PrivateKey) {
    let digest = sha512(&seed);

    let mut a_bytes: [u8; 32] = digest[..32].try_into().unwrap();
    a_bytes[0] &= 0xf8;
    a_bytes[31] &= 0x7f;
    a_bytes[31] |= 0x40;
    let scalar = Scalar::from_bytes(&a_bytes);

    let prefix: [u8; 32] = digest[32..].try_into().unwrap();

    let public = PublicKey(GeP3::scalar_mul_base(&scalar).to_bytes());
    let private = PrivateKey { scalar, prefix };

    (public, private)
}

/// Generates a fresh Ed25519 keypair from OS-backed randomness.
pub fn generate_keypair() -> (PublicKey, PrivateKey) {
    let mut seed = [0u8; 32];
    Csprng::new().fill_bytes(&mut seed);

    keypair_from_seed(seed)
}

/// Derives a keypair from a caller-supplied pseudorandom stream, reading
/// exactly 32 bytes via repeated calls to `reader` (each call receives a
/// buffer and returns how many bytes it filled). Fails if the stream is
/// exhausted — signalled by a zero-length read — before 32 bytes accumulate.
pub fn derive_keypair(
    mut reader: impl FnMut(&mut [u8]) -> usize,
) -> Result<(PublicKey, PrivateKey), Ed25519Error> {
    let mut seed = [0u8; 32];
    let mut filled = 0;

    while filled < seed.len() {
        let n = reader(&mut seed[filled..]);
        if n == 0 {
            return Err(Ed25519Error::InsufficientRandomness);
        }
        filled += n;
    }

    Ok(keypair_from_seed(seed))
}

/// Signs `message` deterministically with `private`, returning `R ‖ S`.
pub fn sign(message: &[u8], public: &PublicKey, private: &PrivateKey) -> Signature {
    let a = private.scalar;

    let mut r_input = Vec::with_capacity(32 + message.len());
    r_input.extend_from_slice(&private.prefix);
    r_input.extend_from_slice(message);
    let r = Scalar::reduce(sha512(&r_input));

    let r_bytes = GeP3::scalar_mul_base(&r).to_bytes();

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&r_bytes);
    k_input.extend_from_slice(&public.to_bytes());
    k_input.extend_from_slice(message);
    let k = Scalar::reduce(sha512(&k_input));

    let s = Scalar::from_mul_sum(k, a, r);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_bytes);
    signature[32..].copy_from_slice(&s.to_bytes());

    Signature(signature)
}

/// Verifies `signature` over `message` under `public`, using the cofactored
/// batch equation `[8·S]·B == [8]·R + [8·k]·A`.
pub fn verify(signature: &Signature, message: &[u8], public: &PublicKey) -> Result<(), Ed25519Error> {
    let raw = signature.to_bytes();
    let s_bytes: [u8; 32] = raw[32..].try_into().unwrap();

    if !is_canonical_scalar(&s_bytes) {
        return Err(Ed25519Error::InvalidSignature);
    }

    let (a, status) = GeP3::decompress(&public.to_bytes());
    if status != 0 {
        return Err(Ed25519Error::InvalidSignature);
    }

    let r_bytes: [u8; 32] = raw[..32].try_into().unwrap();
    let (r_point, status) = GeP3::decompress(&r_bytes);
    if status != 0 {
        return Err(Ed25519Error::InvalidSignature);
    }

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&r_bytes);
    k_input.extend_from_slice(&public.to_bytes());
    k_input.extend_from_slice(message);
    let k = Scalar::reduce(sha512(&k_input));

    let s = Scalar(s_bytes);
    let eight = small_scalar(8);
    let zero = small_scalar(0);

    let eight_s = Scalar::from_mul_sum(s, eight, zero);
    let eight_k = Scalar::from_mul_sum(k, eight, zero);

    let lhs = GeP3::scalar_mul_base(&eight_s);
    let rhs = GeP3::double_scalar_mul_vartime(&r_point, &eight, &a, &eight_k);

    if lhs.to_bytes() == rhs.to_bytes() {
        Ok(())
    } else {
        Err(Ed25519Error::InvalidSignature)
    }
}
