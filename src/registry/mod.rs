//! Process-wide registry mapping key type URLs to the parse/serialize
//! functions that translate between wire [`KeyData`] and typed key objects.
//!
//! Real Tink keys this registry off reflective class objects; this crate has
//! no reflection, so [`KeyMaterialKind`] plays the same role as a closed,
//! compile-time tag.

mod error;

pub use error::RegistryError;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::keys::ed25519::{Ed25519Parameters, Ed25519PrivateKey, Ed25519PublicKey};
use crate::keys::material::KeyMaterialKind;
use crate::keys::secret::SecretKeyAccess;
use crate::keys::variant::Variant;
use crate::keys::xchacha20poly1305::{XChaCha20Poly1305Key, XChaCha20Poly1305Parameters};
use crate::keyset::{KeyData, OutputPrefixType};
use crate::signatures::ed25519::core as ed25519_core;

pub const TYPE_URL_XCHACHA20_POLY1305: &str =
    "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key";
pub const TYPE_URL_CHACHA20_POLY1305: &str =
    "type.googleapis.com/google.crypto.tink.ChaCha20Poly1305Key";
pub const TYPE_URL_ED25519_PRIVATE: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PrivateKey";
pub const TYPE_URL_ED25519_PUBLIC: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PublicKey";

/// A parsed key, dispatched on the algorithm it was created for.
pub enum Key {
    XChaCha20Poly1305(XChaCha20Poly1305Key),
    Ed25519Public(Ed25519PublicKey),
    Ed25519Private(Ed25519PrivateKey),
}

impl Key {
    pub fn material_kind(&self) -> KeyMaterialKind {
        match self {
            Key::XChaCha20Poly1305(_) => KeyMaterialKind::Symmetric,
            Key::Ed25519Public(_) => KeyMaterialKind::AsymmetricPublic,
            Key::Ed25519Private(_) => KeyMaterialKind::AsymmetricPrivate,
        }
    }
}

/// Output-prefix-type `Legacy` parses to [`Variant::Crunchy`] for both the
/// parsed key's parameters and its runtime crypto behavior; `Legacy` is
/// distinguished only by the wrapper layer's `0x00` data/AAD suffix.
fn resolve_variant(output_prefix_type: OutputPrefixType) -> Result<Variant, RegistryError> {
    match output_prefix_type {
        OutputPrefixType::Legacy => Ok(Variant::Crunchy),
        other => other.to_variant().ok_or(RegistryError::UnknownPrefixType),
    }
}

fn parse_xchacha20_poly1305(
    variant: Variant,
    id: Option<u32>,
    value: &[u8],
    access: Option<SecretKeyAccess>,
) -> Result<Key, RegistryError> {
    // Requiring a token here only gates this parse call; the constructed
    // key still gates its own bytes behind a token on every later read.
    access.ok_or(RegistryError::AccessDenied)?;
    let key_bytes: [u8; 32] = value
        .try_into()
        .map_err(|_| RegistryError::MalformedKeyValue)?;

    let parameters = XChaCha20Poly1305Parameters::new(variant);
    let key = XChaCha20Poly1305Key::new(parameters, key_bytes, id)
        .map_err(|_| RegistryError::MalformedKeyValue)?;

    Ok(Key::XChaCha20Poly1305(key))
}

fn serialize_xchacha20_poly1305(
    key: &XChaCha20Poly1305Key,
    access: Option<SecretKeyAccess>,
) -> Result<KeyData, RegistryError> {
    let access = access.ok_or(RegistryError::AccessDenied)?;

    Ok(KeyData {
        type_url: TYPE_URL_XCHACHA20_POLY1305,
        value: key.key_bytes(access).to_vec(),
        key_material_type: KeyMaterialKind::Symmetric,
    })
}

fn parse_ed25519_public(
    variant: Variant,
    id: Option<u32>,
    value: &[u8],
    _access: Option<SecretKeyAccess>,
) -> Result<Key, RegistryError> {
    let key_bytes: [u8; 32] = value
        .try_into()
        .map_err(|_| RegistryError::MalformedKeyValue)?;

    let parameters = Ed25519Parameters::new(variant);
    let key = Ed25519PublicKey::new(parameters, key_bytes, id)
        .map_err(|_| RegistryError::MalformedKeyValue)?;

    Ok(Key::Ed25519Public(key))
}

fn serialize_ed25519_public(key: &Ed25519PublicKey) -> KeyData {
    KeyData {
        type_url: TYPE_URL_ED25519_PUBLIC,
        value: key.key_bytes().to_vec(),
        key_material_type: KeyMaterialKind::AsymmetricPublic,
    }
}

fn parse_ed25519_private(
    variant: Variant,
    id: Option<u32>,
    value: &[u8],
    access: Option<SecretKeyAccess>,
) -> Result<Key, RegistryError> {
    access.ok_or(RegistryError::AccessDenied)?;
    let seed: [u8; 32] = value
        .try_into()
        .map_err(|_| RegistryError::MalformedKeyValue)?;

    let (public_core, _) = ed25519_core::keypair_from_seed(seed);
    let parameters = Ed25519Parameters::new(variant);
    let public = Ed25519PublicKey::new(parameters, public_core.to_bytes(), id)
        .map_err(|_| RegistryError::MalformedKeyValue)?;
    let private = Ed25519PrivateKey::new(public, seed);

    Ok(Key::Ed25519Private(private))
}

fn serialize_ed25519_private(
    key: &Ed25519PrivateKey,
    access: Option<SecretKeyAccess>,
) -> Result<KeyData, RegistryError> {
    let access = access.ok_or(RegistryError::AccessDenied)?;

    Ok(KeyData {
        type_url: TYPE_URL_ED25519_PRIVATE,
        value: key.seed_bytes(access).to_vec(),
        key_material_type: KeyMaterialKind::AsymmetricPrivate,
    })
}

type Parser =
    fn(Variant, Option<u32>, &[u8], Option<SecretKeyAccess>) -> Result<Key, RegistryError>;

fn parsers() -> &'static HashMap<&'static str, Parser> {
    static PARSERS: OnceLock<HashMap<&'static str, Parser>> = OnceLock::new();
    PARSERS.get_or_init(|| {
        let mut map: HashMap<&'static str, Parser> = HashMap::new();
        map.insert(TYPE_URL_XCHACHA20_POLY1305, parse_xchacha20_poly1305);
        map.insert(TYPE_URL_CHACHA20_POLY1305, parse_xchacha20_poly1305);
        map.insert(TYPE_URL_ED25519_PUBLIC, parse_ed25519_public);
        map.insert(TYPE_URL_ED25519_PRIVATE, parse_ed25519_private);
        map
    })
}

/// Parses a keyset entry's wire `KeyData` into a typed [`Key`], resolving
/// `output_prefix_type` to a [`Variant`] (applying the legacy-to-crunchy
/// quirk) and dispatching on `key_data.type_url`.
pub fn parse_key(
    output_prefix_type: OutputPrefixType,
    id: Option<u32>,
    key_data: &KeyData,
    access: Option<SecretKeyAccess>,
) -> Result<Key, RegistryError> {
    let variant = resolve_variant(output_prefix_type)?;

    let parser = parsers()
        .get(key_data.type_url)
        .ok_or(RegistryError::UnknownTypeUrl)?;

    parser(variant, id, &key_data.value, access)
}

/// Serializes a typed [`Key`] back into wire `KeyData`.
pub fn serialize_key(key: &Key, access: Option<SecretKeyAccess>) -> Result<KeyData, RegistryError> {
    match key {
        Key::XChaCha20Poly1305(k) => serialize_xchacha20_poly1305(k, access),
        Key::Ed25519Public(k) => Ok(serialize_ed25519_public(k)),
        Key::Ed25519Private(k) => serialize_ed25519_private(k, access),
    }
}
