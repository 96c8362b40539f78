//! Secret key material with capability-gated access.

use crate::utils::ct_eq;

/// Marker proving the holder is allowed to read or write secret key bytes.
///
/// This type carries no data; possessing a value of it is the capability.
/// The only constructor is [`SecretKeyAccess::insecure`], named after Tink's
/// own escape hatch to make every call site that reaches for it visibly
/// opt out of the access-audit invariant.
#[derive(Clone, Copy)]
pub struct SecretKeyAccess(());

impl SecretKeyAccess {
    /// Returns a token granting secret access. Named `insecure` because
    /// nothing about this type actually restricts who can call it — the
    /// token exists to make secret-reading call sites grep-able, not to
    /// provide real access control.
    pub fn insecure() -> Self {
        SecretKeyAccess(())
    }
}

/// An opaque 32-byte secret buffer.
///
/// Equality is constant-time. The byte buffer is zeroed on drop so a
/// secret does not linger in memory past its owner's lifetime.
pub struct SecretBytes([u8; 32]);

impl SecretBytes {
    pub fn new(bytes: [u8; 32]) -> Self {
        SecretBytes(bytes)
    }

    /// Returns a copy of the secret bytes. Requires a capability token to
    /// make accidental secret exposure visible at every call site.
    pub fn bytes(&self, _access: SecretKeyAccess) -> [u8; 32] {
        self.0
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.0.fill(0);
    }
}

impl Clone for SecretBytes {
    fn clone(&self) -> Self {
        SecretBytes(self.0)
    }
}

impl PartialEq for SecretBytes {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for SecretBytes {}
