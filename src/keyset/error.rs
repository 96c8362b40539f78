//! Errors produced while validating a keyset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeysetError {
    /// An entry's `key_data` is absent.
    MissingKeyData,
    /// An entry's output prefix type is `UnknownPrefix`.
    UnknownPrefixType,
    /// An entry's status is `Unknown`.
    UnknownStatus,
    /// No entry in the keyset is enabled.
    NoEnabledKeys,
    /// More than one enabled entry carries the primary key id.
    DuplicatePrimaryKeyId,
    /// No enabled entry carries the primary key id, and not every enabled
    /// entry is an asymmetric public key (which would exempt the keyset
    /// from needing a primary).
    MissingPrimaryKey,
}
