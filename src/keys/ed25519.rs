//! Ed25519 key and parameter objects.

use crate::keys::error::KeyError;
use crate::keys::secret::{SecretBytes, SecretKeyAccess};
use crate::keys::variant::Variant;
use crate::signatures::ed25519 as ed25519_core;

#[derive(Debug, Clone, Copy)]
pub struct Ed25519Parameters {
    variant: Variant,
}

impl Ed25519Parameters {
    pub fn new(variant: Variant) -> Self {
        Ed25519Parameters { variant }
    }

    pub fn variant(self) -> Variant {
        self.variant
    }

    pub fn has_id_requirement(self) -> bool {
        self.variant.has_id_requirement()
    }
}

/// A 32-byte Ed25519 public key, with its parameters, optional id, and
/// derived output prefix.
pub struct Ed25519PublicKey {
    parameters: Ed25519Parameters,
    key_bytes: [u8; 32],
    id: Option<u32>,
    output_prefix: Vec<u8>,
}

impl Ed25519PublicKey {
    pub fn new(
        parameters: Ed25519Parameters,
        key_bytes: [u8; 32],
        id: Option<u32>,
    ) -> Result<Self, KeyError> {
        if parameters.has_id_requirement() != id.is_some() {
            return Err(KeyError::InvalidParameter);
        }

        let output_prefix = match id {
            Some(id) => parameters
                .variant
                .output_prefix(id)
                .map(|p| p.to_vec())
                .unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(Ed25519PublicKey {
            parameters,
            key_bytes,
            id,
            output_prefix,
        })
    }

    pub fn parameters(&self) -> Ed25519Parameters {
        self.parameters
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn output_prefix(&self) -> &[u8] {
        &self.output_prefix
    }

    pub fn key_bytes(&self) -> [u8; 32] {
        self.key_bytes
    }

    pub(crate) fn to_core(&self) -> ed25519_core::core::PublicKey {
        ed25519_core::core::PublicKey::from_bytes(self.key_bytes)
    }
}

/// A 32-byte Ed25519 seed together with the public key it derives, per
/// `getParameters`/`outputPrefix` delegating to the public half.
pub struct Ed25519PrivateKey {
    public: Ed25519PublicKey,
    seed: SecretBytes,
}

impl Ed25519PrivateKey {
    pub fn new(public: Ed25519PublicKey, seed_bytes: [u8; 32]) -> Self {
        Ed25519PrivateKey {
            public,
            seed: SecretBytes::new(seed_bytes),
        }
    }

    pub fn public(&self) -> &Ed25519PublicKey {
        &self.public
    }

    pub fn parameters(&self) -> Ed25519Parameters {
        self.public.parameters()
    }

    pub fn output_prefix(&self) -> &[u8] {
        self.public.output_prefix()
    }

    pub fn seed_bytes(&self, access: SecretKeyAccess) -> [u8; 32] {
        self.seed.bytes(access)
    }
}
