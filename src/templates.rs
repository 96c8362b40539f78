//! Named key templates: fixed `(Parameters, Variant)` pairs callers look up
//! by name instead of hand-assembling parameter objects.

use crate::keys::ed25519::{Ed25519Parameters, Ed25519PrivateKey, Ed25519PublicKey};
use crate::keys::secret::SecretKeyAccess;
use crate::keys::variant::Variant;
use crate::keys::xchacha20poly1305::{XChaCha20Poly1305Key, XChaCha20Poly1305Parameters};
use crate::keyset::KeyData;
use crate::registry::{self, RegistryError};
use crate::rng::Csprng;
use crate::signatures::ed25519::core as ed25519_core;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateError {
    UnknownKeyTemplate,
    InvalidParameter,
    Registry(RegistryError),
}

/// The parameters a template produces, tagged by algorithm.
#[derive(Debug, Clone, Copy)]
pub enum Parameters {
    XChaCha20Poly1305(XChaCha20Poly1305Parameters),
    Ed25519(Ed25519Parameters),
}

impl Parameters {
    pub fn variant(self) -> Variant {
        match self {
            Parameters::XChaCha20Poly1305(p) => p.variant(),
            Parameters::Ed25519(p) => p.variant(),
        }
    }
}

#[derive(Debug)]
pub struct KeyTemplate {
    pub name: &'static str,
    pub parameters: Parameters,
}

/// Looks up a named key template.
///
/// `CHACHA20_POLY1305` and `CHACHA20_POLY1305_RAW` are interop names kept
/// for compatibility with callers expecting the narrower-nonce cipher; this
/// crate implements only XChaCha20-Poly1305, so both names construct
/// [`XChaCha20Poly1305Parameters`] under the hood rather than a distinct
/// ChaCha20-Poly1305 primitive.
pub fn key_template(name: &str) -> Result<KeyTemplate, TemplateError> {
    let (name, parameters): (&'static str, Parameters) = match name {
        "XCHACHA20_POLY1305" => (
            "XCHACHA20_POLY1305",
            Parameters::XChaCha20Poly1305(XChaCha20Poly1305Parameters::new(Variant::Tink)),
        ),
        "XCHACHA20_POLY1305_RAW" => (
            "XCHACHA20_POLY1305_RAW",
            Parameters::XChaCha20Poly1305(XChaCha20Poly1305Parameters::new(Variant::NoPrefix)),
        ),
        "CHACHA20_POLY1305" => (
            "CHACHA20_POLY1305",
            Parameters::XChaCha20Poly1305(XChaCha20Poly1305Parameters::new(Variant::Tink)),
        ),
        "CHACHA20_POLY1305_RAW" => (
            "CHACHA20_POLY1305_RAW",
            Parameters::XChaCha20Poly1305(XChaCha20Poly1305Parameters::new(Variant::NoPrefix)),
        ),
        "ED25519" => (
            "ED25519",
            Parameters::Ed25519(Ed25519Parameters::new(Variant::Tink)),
        ),
        "ED25519_RAW" => (
            "ED25519_RAW",
            Parameters::Ed25519(Ed25519Parameters::new(Variant::NoPrefix)),
        ),
        _ => return Err(TemplateError::UnknownKeyTemplate),
    };

    Ok(KeyTemplate { name, parameters })
}

/// Generates fresh key material matching `template`, serialized as
/// [`KeyData`] ready to insert into a keyset entry under `id`.
///
/// For Ed25519 this produces the private half; the public half can be
/// recovered from it (see [`crate::keys::ed25519::Ed25519PrivateKey::public`])
/// whenever a verifier needs its own entry.
pub fn generate_key(template: &KeyTemplate, id: Option<u32>) -> Result<KeyData, TemplateError> {
    let access = SecretKeyAccess::insecure();

    match template.parameters {
        Parameters::XChaCha20Poly1305(params) => {
            let mut key_bytes = [0u8; 32];
            Csprng::new().fill_bytes(&mut key_bytes);

            let key = XChaCha20Poly1305Key::new(params, key_bytes, id)
                .map_err(|_| TemplateError::InvalidParameter)?;

            registry::serialize_key(&registry::Key::XChaCha20Poly1305(key), Some(access))
                .map_err(TemplateError::Registry)
        }
        Parameters::Ed25519(params) => {
            let mut seed = [0u8; 32];
            Csprng::new().fill_bytes(&mut seed);

            let (public_core, _) = ed25519_core::keypair_from_seed(seed);
            let public = Ed25519PublicKey::new(params, public_core.to_bytes(), id)
                .map_err(|_| TemplateError::InvalidParameter)?;
            let private = Ed25519PrivateKey::new(public, seed);

            registry::serialize_key(&registry::Key::Ed25519Private(private), Some(access))
                .map_err(TemplateError::Registry)
        }
    }
}
