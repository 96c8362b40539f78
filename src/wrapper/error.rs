//! Errors produced by the prefix-dispatched wrappers.

use crate::registry::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperError {
    /// `encrypt`/`sign` was called on a primitive set with no primary key.
    MissingPrimaryKey,
    /// No candidate key decrypted the ciphertext.
    DecryptionFailed,
    /// No candidate key verified the signature.
    InvalidSignature,
    /// A keyset entry was missing required data.
    InvalidKeyset,
    /// A keyset entry parsed to a key of the wrong algorithm for this
    /// primitive set.
    WrongKeyType,
    /// The registry failed to parse or serialize a key.
    Registry(RegistryError),
}
