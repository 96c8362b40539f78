//! XChaCha20-Poly1305 key and parameter objects.

use crate::keys::error::KeyError;
use crate::keys::secret::{SecretBytes, SecretKeyAccess};
use crate::keys::variant::Variant;

/// The variant governing a `XChaCha20Poly1305Key`'s output prefix.
#[derive(Debug, Clone, Copy)]
pub struct XChaCha20Poly1305Parameters {
    variant: Variant,
}

impl XChaCha20Poly1305Parameters {
    pub fn new(variant: Variant) -> Self {
        XChaCha20Poly1305Parameters { variant }
    }

    pub fn variant(self) -> Variant {
        self.variant
    }

    pub fn has_id_requirement(self) -> bool {
        self.variant.has_id_requirement()
    }
}

/// A 32-byte XChaCha20-Poly1305 key together with its parameters, optional
/// id, and the output prefix derived from them.
pub struct XChaCha20Poly1305Key {
    parameters: XChaCha20Poly1305Parameters,
    secret: SecretBytes,
    id: Option<u32>,
    output_prefix: Vec<u8>,
}

impl XChaCha20Poly1305Key {
    /// Builds a key, checking that `id.is_some()` matches the parameters'
    /// id requirement and computing the output prefix from `(variant, id)`.
    pub fn new(
        parameters: XChaCha20Poly1305Parameters,
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

        Ok(XChaCha20Poly1305Key {
            parameters,
            secret: SecretBytes::new(key_bytes),
            id,
            output_prefix,
        })
    }

    pub fn parameters(&self) -> XChaCha20Poly1305Parameters {
        self.parameters
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn output_prefix(&self) -> &[u8] {
        &self.output_prefix
    }

    pub fn key_bytes(&self, access: SecretKeyAccess) -> [u8; 32] {
        self.secret.bytes(access)
    }
}
