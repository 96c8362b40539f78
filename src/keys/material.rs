//! Classification of key material, used by the keyset and registry layers
//! to decide whether a capability token is required to touch a key's bytes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterialKind {
    /// A shared secret key (XChaCha20-Poly1305).
    Symmetric,
    /// The public half of an asymmetric keypair (Ed25519 public key).
    AsymmetricPublic,
    /// The private half of an asymmetric keypair (Ed25519 private key).
    AsymmetricPrivate,
}

impl KeyMaterialKind {
    /// Whether reading or writing this kind's raw bytes requires a
    /// [`crate::keys::SecretKeyAccess`] token.
    pub fn is_secret(self) -> bool {
        !matches!(self, KeyMaterialKind::AsymmetricPublic)
    }
}
