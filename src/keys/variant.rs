//! Output-prefix discipline shared by every key type.

/// Governs the 5-byte output prefix prepended to ciphertexts/signatures,
/// and whether a key requires an id to compute one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `0x01 ‖ uint32-be(id)` prefix.
    Tink,
    /// `0x00 ‖ uint32-be(id)` prefix.
    Crunchy,
    /// Same wire prefix as `Crunchy`, but the wrapper appends `0x00` to the
    /// data/AAD before signing/encrypting (and before verifying/decrypting).
    Legacy,
    /// No prefix; also called "raw" in the wire format and templates.
    NoPrefix,
}

impl Variant {
    /// Whether a key with this variant must carry a key id to compute its
    /// output prefix.
    pub fn has_id_requirement(self) -> bool {
        !matches!(self, Variant::NoPrefix)
    }

    /// Computes the 5-byte output prefix for a key id under this variant,
    /// or `None` for `NoPrefix`.
    pub fn output_prefix(self, key_id: u32) -> Option<[u8; 5]> {
        let version = match self {
            Variant::Tink => 0x01,
            Variant::Crunchy | Variant::Legacy => 0x00,
            Variant::NoPrefix => return None,
        };

        let id_bytes = key_id.to_be_bytes();
        Some([version, id_bytes[0], id_bytes[1], id_bytes[2], id_bytes[3]])
    }

    /// Whether this variant's wrapper behavior appends a `0x00` byte to the
    /// data/AAD before signing/encrypting.
    pub fn is_legacy(self) -> bool {
        matches!(self, Variant::Legacy)
    }
}
