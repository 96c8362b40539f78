//! Crate-level error type aggregating every layer's error enum, plus the
//! coarse classification a caller can match on without naming each layer.

use std::fmt;

use crate::aead::AeadError;
use crate::keys::KeyError;
use crate::keyset::KeysetError;
use crate::registry::RegistryError;
use crate::signatures::Ed25519Error;
use crate::templates::TemplateError;
use crate::wrapper::WrapperError;

/// The coarse classification every error in this crate falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParameter,
    DecryptionFailed,
    InvalidSignature,
    InsufficientRandomness,
    AccessDenied,
    SerializationError,
    UnknownKeyTemplate,
    MissingPrimaryKey,
    InvalidKeyset,
}

/// The union of every error this crate can return, from raw AEAD/signature
/// failures up through keyset validation, registry, and wrapper errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Aead(AeadError),
    Ed25519(Ed25519Error),
    Key(KeyError),
    Keyset(KeysetError),
    Registry(RegistryError),
    Template(TemplateError),
    Wrapper(WrapperError),
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self {
            Error::Aead(e) => match e {
                AeadError::CiphertextTooShort | AeadError::AuthenticationFailed => {
                    ErrorKind::DecryptionFailed
                }
            },
            Error::Ed25519(e) => match e {
                Ed25519Error::InsufficientRandomness => ErrorKind::InsufficientRandomness,
                Ed25519Error::InvalidSignature => ErrorKind::InvalidSignature,
            },
            Error::Key(e) => match e {
                KeyError::InvalidParameter => ErrorKind::InvalidParameter,
            },
            Error::Keyset(_) => ErrorKind::InvalidKeyset,
            Error::Registry(e) => match e {
                RegistryError::AccessDenied => ErrorKind::AccessDenied,
                RegistryError::UnknownTypeUrl
                | RegistryError::UnknownPrefixType
                | RegistryError::MalformedKeyValue => ErrorKind::SerializationError,
            },
            Error::Template(e) => match e {
                TemplateError::UnknownKeyTemplate => ErrorKind::UnknownKeyTemplate,
                TemplateError::InvalidParameter => ErrorKind::InvalidParameter,
                TemplateError::Registry(inner) => Error::Registry(inner).kind(),
            },
            Error::Wrapper(e) => match e {
                WrapperError::MissingPrimaryKey => ErrorKind::MissingPrimaryKey,
                WrapperError::DecryptionFailed => ErrorKind::DecryptionFailed,
                WrapperError::InvalidSignature => ErrorKind::InvalidSignature,
                WrapperError::InvalidKeyset | WrapperError::WrongKeyType => {
                    ErrorKind::InvalidKeyset
                }
                WrapperError::Registry(inner) => Error::Registry(inner).kind(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Aead(e) => write!(f, "aead error: {:?}", e),
            Error::Ed25519(e) => write!(f, "ed25519 error: {:?}", e),
            Error::Key(e) => write!(f, "key error: {:?}", e),
            Error::Keyset(e) => write!(f, "keyset error: {:?}", e),
            Error::Registry(e) => write!(f, "registry error: {:?}", e),
            Error::Template(e) => write!(f, "template error: {:?}", e),
            Error::Wrapper(e) => write!(f, "wrapper error: {:?}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AeadError> for Error {
    fn from(e: AeadError) -> Self {
        Error::Aead(e)
    }
}

impl From<Ed25519Error> for Error {
    fn from(e: Ed25519Error) -> Self {
        Error::Ed25519(e)
    }
}

impl From<KeyError> for Error {
    fn from(e: KeyError) -> Self {
        Error::Key(e)
    }
}

impl From<KeysetError> for Error {
    fn from(e: KeysetError) -> Self {
        Error::Keyset(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<TemplateError> for Error {
    fn from(e: TemplateError) -> Self {
        Error::Template(e)
    }
}

impl From<WrapperError> for Error {
    fn from(e: WrapperError) -> Self {
        Error::Wrapper(e)
    }
}
