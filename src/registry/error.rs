//! Errors produced while parsing or serializing keys through the registry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No parser is registered for the given type URL.
    UnknownTypeUrl,
    /// An output prefix type has no corresponding variant (`UnknownPrefix`).
    UnknownPrefixType,
    /// A key's serialized value was the wrong length or otherwise malformed
    /// for its type URL.
    MalformedKeyValue,
    /// Secret key material was parsed or serialized without presenting a
    /// capability token.
    AccessDenied,
}
