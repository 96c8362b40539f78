//! Keysets: ordered collections of keys with a designated primary, and the
//! validation rules that must hold before a keyset can back a wrapper.

mod error;

pub use error::KeysetError;

use crate::keys::material::KeyMaterialKind;
use crate::keys::variant::Variant;

/// Lifecycle state of a keyset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    /// Never a valid state for a persisted entry; only used to detect
    /// entries that were never properly initialized.
    Unknown,
    Enabled,
    Disabled,
    Destroyed,
}

/// The wire-level counterpart of [`Variant`], with an extra `UnknownPrefix`
/// state so a malformed or unrecognized entry can be rejected explicitly
/// rather than silently defaulting to some variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPrefixType {
    Tink,
    Crunchy,
    Legacy,
    Raw,
    UnknownPrefix,
}

impl OutputPrefixType {
    /// Converts to the [`Variant`] used by key construction, or `None` for
    /// `UnknownPrefix`, which has no corresponding variant.
    pub fn to_variant(self) -> Option<Variant> {
        match self {
            OutputPrefixType::Tink => Some(Variant::Tink),
            OutputPrefixType::Crunchy => Some(Variant::Crunchy),
            OutputPrefixType::Legacy => Some(Variant::Legacy),
            OutputPrefixType::Raw => Some(Variant::NoPrefix),
            OutputPrefixType::UnknownPrefix => None,
        }
    }
}

impl From<Variant> for OutputPrefixType {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Tink => OutputPrefixType::Tink,
            Variant::Crunchy => OutputPrefixType::Crunchy,
            Variant::Legacy => OutputPrefixType::Legacy,
            Variant::NoPrefix => OutputPrefixType::Raw,
        }
    }
}

/// The serialized form of a key, as it travels inside a keyset entry: a type
/// URL identifying the key's algorithm, its serialized bytes, and whether
/// those bytes are secret. Mirrors Tink's own `KeyData`.
#[derive(Clone)]
pub struct KeyData {
    pub type_url: &'static str,
    pub value: Vec<u8>,
    pub key_material_type: KeyMaterialKind,
}

/// One key in a keyset, immutable once inserted.
pub struct KeysetEntry {
    key_data: Option<KeyData>,
    status: KeyStatus,
    key_id: u32,
    output_prefix_type: OutputPrefixType,
}

impl KeysetEntry {
    pub fn new(
        key_data: Option<KeyData>,
        status: KeyStatus,
        key_id: u32,
        output_prefix_type: OutputPrefixType,
    ) -> Self {
        KeysetEntry {
            key_data,
            status,
            key_id,
            output_prefix_type,
        }
    }

    pub fn key_data(&self) -> Option<&KeyData> {
        self.key_data.as_ref()
    }

    pub fn status(&self) -> KeyStatus {
        self.status
    }

    pub fn key_id(&self) -> u32 {
        self.key_id
    }

    pub fn output_prefix_type(&self) -> OutputPrefixType {
        self.output_prefix_type
    }
}

/// Checks the invariants that must hold for a single entry, independent of
/// the rest of the keyset it belongs to.
pub fn validate_key(entry: &KeysetEntry) -> Result<(), KeysetError> {
    if entry.key_data.is_none() {
        return Err(KeysetError::MissingKeyData);
    }

    if entry.output_prefix_type == OutputPrefixType::UnknownPrefix {
        return Err(KeysetError::UnknownPrefixType);
    }

    if entry.status == KeyStatus::Unknown {
        return Err(KeysetError::UnknownStatus);
    }

    Ok(())
}

/// An ordered collection of keys with a designated primary key id.
pub struct Keyset {
    primary_key_id: u32,
    entries: Vec<KeysetEntry>,
}

impl Keyset {
    pub fn new(primary_key_id: u32, entries: Vec<KeysetEntry>) -> Self {
        Keyset {
            primary_key_id,
            entries,
        }
    }

    pub fn primary_key_id(&self) -> u32 {
        self.primary_key_id
    }

    pub fn entries(&self) -> &[KeysetEntry] {
        &self.entries
    }
}

/// Checks that a keyset, taken as a whole, is fit to back a wrapper: every
/// entry passes [`validate_key`], at least one key is enabled, and exactly
/// one enabled key carries the primary id — unless every enabled key is an
/// asymmetric public key, in which case no primary is required.
pub fn validate_keyset(keyset: &Keyset) -> Result<(), KeysetError> {
    let mut enabled_count = 0;
    let mut primary_count = 0;
    let mut all_public = true;

    for entry in &keyset.entries {
        if entry.status != KeyStatus::Enabled {
            continue;
        }

        validate_key(entry)?;
        enabled_count += 1;

        if entry.key_id == keyset.primary_key_id {
            primary_count += 1;
        }

        let is_public = entry
            .key_data
            .as_ref()
            .map(|data| data.key_material_type == KeyMaterialKind::AsymmetricPublic)
            .unwrap_or(false);
        if !is_public {
            all_public = false;
        }
    }

    if enabled_count == 0 {
        return Err(KeysetError::NoEnabledKeys);
    }

    if primary_count > 1 {
        return Err(KeysetError::DuplicatePrimaryKeyId);
    }

    if primary_count == 0 && !all_public {
        return Err(KeysetError::MissingPrimaryKey);
    }

    Ok(())
}
