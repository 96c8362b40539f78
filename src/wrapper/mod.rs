//! Prefix-dispatched wrappers: the `Aead`, `PublicKeySign`, and
//! `PublicKeyVerify` primitives a caller actually uses, built once from a
//! validated keyset and its parsed keys.

mod error;

pub use error::WrapperError;

use std::collections::HashMap;

use crate::aead as aead_primitive;
use crate::keys::ed25519::{Ed25519PrivateKey, Ed25519PublicKey};
use crate::keys::secret::SecretKeyAccess;
use crate::keys::variant::Variant;
use crate::keys::xchacha20poly1305::XChaCha20Poly1305Key;
use crate::keyset::{KeyStatus, Keyset};
use crate::registry::{self, Key};
use crate::signatures::ed25519::core as ed25519_core;

/// A key's output prefix and variant, used to index it inside a
/// [`PrimitiveSet`] and to decide its data/AAD encoding.
pub trait KeyedPrimitive {
    fn output_prefix(&self) -> &[u8];
    fn variant(&self) -> Variant;
}

impl KeyedPrimitive for XChaCha20Poly1305Key {
    fn output_prefix(&self) -> &[u8] {
        XChaCha20Poly1305Key::output_prefix(self)
    }
    fn variant(&self) -> Variant {
        self.parameters().variant()
    }
}

impl KeyedPrimitive for Ed25519PrivateKey {
    fn output_prefix(&self) -> &[u8] {
        Ed25519PrivateKey::output_prefix(self)
    }
    fn variant(&self) -> Variant {
        self.parameters().variant()
    }
}

impl KeyedPrimitive for Ed25519PublicKey {
    fn output_prefix(&self) -> &[u8] {
        Ed25519PublicKey::output_prefix(self)
    }
    fn variant(&self) -> Variant {
        self.parameters().variant()
    }
}

/// One entry in a [`PrimitiveSet`]: a parsed key plus whether it is the
/// set's primary.
pub struct PrimitiveEntry<T> {
    pub primitive: T,
    pub is_primary: bool,
}

/// A set of parsed, prefix-indexed primitives built once from a validated
/// keyset. Immutable after construction: entries whose key carries an
/// output prefix are grouped by that prefix; `NoPrefix` ("raw") entries are
/// kept separately and are always tried as a fallback.
pub struct PrimitiveSet<T> {
    by_prefix: HashMap<Vec<u8>, Vec<PrimitiveEntry<T>>>,
    raw: Vec<PrimitiveEntry<T>>,
}

impl<T: KeyedPrimitive> PrimitiveSet<T> {
    pub fn new(entries: Vec<PrimitiveEntry<T>>) -> Self {
        let mut by_prefix: HashMap<Vec<u8>, Vec<PrimitiveEntry<T>>> = HashMap::new();
        let mut raw = Vec::new();

        for entry in entries {
            if entry.primitive.output_prefix().is_empty() {
                raw.push(entry);
            } else {
                by_prefix
                    .entry(entry.primitive.output_prefix().to_vec())
                    .or_default()
                    .push(entry);
            }
        }

        PrimitiveSet { by_prefix, raw }
    }

    pub fn by_prefix(&self, prefix: &[u8]) -> &[PrimitiveEntry<T>] {
        self.by_prefix
            .get(prefix)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn raw(&self) -> &[PrimitiveEntry<T>] {
        &self.raw
    }

    pub fn primary(&self) -> Option<&PrimitiveEntry<T>> {
        self.by_prefix
            .values()
            .flatten()
            .chain(self.raw.iter())
            .find(|entry| entry.is_primary)
    }
}

/// Appends a trailing `0x00` to `data` under the `Legacy` variant, per the
/// legacy authentication rule; leaves `data` unchanged for every other
/// variant.
fn legacy_encode(variant: Variant, data: &[u8]) -> Vec<u8> {
    if variant.is_legacy() {
        let mut out = data.to_vec();
        out.push(0);
        out
    } else {
        data.to_vec()
    }
}

fn parsed_entries<T>(
    keyset: &Keyset,
    access: Option<SecretKeyAccess>,
    mut extract: impl FnMut(Key) -> Result<T, WrapperError>,
) -> Result<Vec<PrimitiveEntry<T>>, WrapperError> {
    let mut entries = Vec::new();

    for entry in keyset.entries() {
        if entry.status() != KeyStatus::Enabled {
            continue;
        }

        let key_data = entry.key_data().ok_or(WrapperError::InvalidKeyset)?;
        let key = registry::parse_key(
            entry.output_prefix_type(),
            Some(entry.key_id()),
            key_data,
            access,
        )
        .map_err(WrapperError::Registry)?;

        let is_primary = entry.key_id() == keyset.primary_key_id();
        entries.push(PrimitiveEntry {
            primitive: extract(key)?,
            is_primary,
        });
    }

    Ok(entries)
}

/// Parses every enabled entry of `keyset` into an AEAD [`PrimitiveSet`].
pub fn aead_primitive_set(
    keyset: &Keyset,
    access: SecretKeyAccess,
) -> Result<PrimitiveSet<XChaCha20Poly1305Key>, WrapperError> {
    let entries = parsed_entries(keyset, Some(access), |key| match key {
        Key::XChaCha20Poly1305(k) => Ok(k),
        _ => Err(WrapperError::WrongKeyType),
    })?;

    Ok(PrimitiveSet::new(entries))
}

/// Parses every enabled entry of `keyset` into a signing [`PrimitiveSet`].
pub fn sign_primitive_set(
    keyset: &Keyset,
    access: SecretKeyAccess,
) -> Result<PrimitiveSet<Ed25519PrivateKey>, WrapperError> {
    let entries = parsed_entries(keyset, Some(access), |key| match key {
        Key::Ed25519Private(k) => Ok(k),
        _ => Err(WrapperError::WrongKeyType),
    })?;

    Ok(PrimitiveSet::new(entries))
}

/// Parses every enabled entry of `keyset` into a verification
/// [`PrimitiveSet`]. Public keys carry no secret material, so no capability
/// token is required.
pub fn verify_primitive_set(keyset: &Keyset) -> Result<PrimitiveSet<Ed25519PublicKey>, WrapperError> {
    let entries = parsed_entries(keyset, None, |key| match key {
        Key::Ed25519Public(k) => Ok(k),
        _ => Err(WrapperError::WrongKeyType),
    })?;

    Ok(PrimitiveSet::new(entries))
}

pub trait Aead {
    fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, WrapperError>;
    fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, WrapperError>;
}

pub trait PublicKeySign {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, WrapperError>;
}

pub trait PublicKeyVerify {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), WrapperError>;
}

/// Prefix-dispatched AEAD built from an [`aead_primitive_set`].
pub struct AeadWrapper {
    set: PrimitiveSet<XChaCha20Poly1305Key>,
    access: SecretKeyAccess,
}

impl AeadWrapper {
    pub fn new(set: PrimitiveSet<XChaCha20Poly1305Key>, access: SecretKeyAccess) -> Self {
        AeadWrapper { set, access }
    }
}

impl Aead for AeadWrapper {
    /// Encrypts with the primary key, then prepends its output prefix.
    fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, WrapperError> {
        let primary = self.set.primary().ok_or(WrapperError::MissingPrimaryKey)?;
        let key = &primary.primitive;

        let aad2 = legacy_encode(key.parameters().variant(), aad);
        let key_bytes = key.key_bytes(self.access);
        let raw_ct = aead_primitive::encrypt(&key_bytes, plaintext, &aad2);

        let mut out = key.output_prefix().to_vec();
        out.extend_from_slice(&raw_ct);
        Ok(out)
    }

    /// Tries every key whose prefix matches `ciphertext`'s first 5 bytes, in
    /// registration order, then falls back to every raw key. Returns the
    /// first successful decryption; if none succeeds, returns a single
    /// aggregate error with no per-candidate detail.
    fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, WrapperError> {
        if ciphertext.len() > 5 {
            let (prefix, tail) = ciphertext.split_at(5);
            for entry in self.set.by_prefix(prefix) {
                let key = &entry.primitive;
                let aad2 = legacy_encode(key.parameters().variant(), aad);
                let key_bytes = key.key_bytes(self.access);
                if let Ok(pt) = aead_primitive::decrypt(&key_bytes, tail, &aad2) {
                    return Ok(pt);
                }
            }
        }

        for entry in self.set.raw() {
            let key = &entry.primitive;
            let aad2 = legacy_encode(key.parameters().variant(), aad);
            let key_bytes = key.key_bytes(self.access);
            if let Ok(pt) = aead_primitive::decrypt(&key_bytes, ciphertext, &aad2) {
                return Ok(pt);
            }
        }

        Err(WrapperError::DecryptionFailed)
    }
}

/// Prefix-prepending signer built from a [`sign_primitive_set`].
pub struct SignWrapper {
    set: PrimitiveSet<Ed25519PrivateKey>,
    access: SecretKeyAccess,
}

impl SignWrapper {
    pub fn new(set: PrimitiveSet<Ed25519PrivateKey>, access: SecretKeyAccess) -> Self {
        SignWrapper { set, access }
    }
}

impl PublicKeySign for SignWrapper {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, WrapperError> {
        let primary = self.set.primary().ok_or(WrapperError::MissingPrimaryKey)?;
        let key = &primary.primitive;

        let data2 = legacy_encode(key.parameters().variant(), data);
        let seed = key.seed_bytes(self.access);
        let (public, private) = ed25519_core::keypair_from_seed(seed);
        let signature = ed25519_core::sign(&data2, &public, &private);

        let mut out = key.output_prefix().to_vec();
        out.extend_from_slice(&signature.to_bytes());
        Ok(out)
    }
}

/// Prefix-dispatched verifier built from a [`verify_primitive_set`].
pub struct VerifyWrapper {
    set: PrimitiveSet<Ed25519PublicKey>,
}

impl VerifyWrapper {
    pub fn new(set: PrimitiveSet<Ed25519PublicKey>) -> Self {
        VerifyWrapper { set }
    }
}

impl PublicKeyVerify for VerifyWrapper {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), WrapperError> {
        if signature.len() > 5 {
            let (prefix, body) = signature.split_at(5);
            if let Ok(body) = <[u8; 64]>::try_from(body) {
                for entry in self.set.by_prefix(prefix) {
                    let key = &entry.primitive;
                    let data2 = legacy_encode(key.parameters().variant(), data);
                    let core_sig = ed25519_core::Signature::from_bytes(body);
                    let core_public = key.to_core();
                    if ed25519_core::verify(&core_sig, &data2, &core_public).is_ok() {
                        return Ok(());
                    }
                }
            }
        }

        if let Ok(body) = <[u8; 64]>::try_from(signature) {
            let core_sig = ed25519_core::Signature::from_bytes(body);
            for entry in self.set.raw() {
                let key = &entry.primitive;
                let data2 = legacy_encode(key.parameters().variant(), data);
                let core_public = key.to_core();
                if ed25519_core::verify(&core_sig, &data2, &core_public).is_ok() {
                    return Ok(());
                }
            }
        }

        Err(WrapperError::InvalidSignature)
    }
}
