use aurochs::keys::material::KeyMaterialKind;
use aurochs::keyset::{KeyData, Keyset, KeysetEntry, KeysetError, KeyStatus, OutputPrefixType, validate_keyset};

fn symmetric_entry(key_id: u32, status: KeyStatus, prefix: OutputPrefixType) -> KeysetEntry {
    KeysetEntry::new(
        Some(KeyData {
            type_url: "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key",
            value: vec![0u8; 32],
            key_material_type: KeyMaterialKind::Symmetric,
        }),
        status,
        key_id,
        prefix,
    )
}

fn public_entry(key_id: u32, status: KeyStatus, prefix: OutputPrefixType) -> KeysetEntry {
    KeysetEntry::new(
        Some(KeyData {
            type_url: "type.googleapis.com/google.crypto.tink.Ed25519PublicKey",
            value: vec![0u8; 32],
            key_material_type: KeyMaterialKind::AsymmetricPublic,
        }),
        status,
        key_id,
        prefix,
    )
}

#[test]
fn single_enabled_primary_is_valid() {
    let keyset = Keyset::new(
        1,
        vec![symmetric_entry(1, KeyStatus::Enabled, OutputPrefixType::Tink)],
    );

    assert!(validate_keyset(&keyset).is_ok());
}

#[test]
fn no_enabled_keys_is_rejected() {
    let keyset = Keyset::new(
        1,
        vec![symmetric_entry(1, KeyStatus::Disabled, OutputPrefixType::Tink)],
    );

    assert_eq!(validate_keyset(&keyset), Err(KeysetError::NoEnabledKeys));
}

#[test]
fn duplicate_primary_key_id_is_rejected() {
    let keyset = Keyset::new(
        1,
        vec![
            symmetric_entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
            symmetric_entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
        ],
    );

    assert_eq!(
        validate_keyset(&keyset),
        Err(KeysetError::DuplicatePrimaryKeyId)
    );
}

#[test]
fn missing_primary_among_symmetric_keys_is_rejected() {
    let keyset = Keyset::new(
        1,
        vec![symmetric_entry(2, KeyStatus::Enabled, OutputPrefixType::Tink)],
    );

    assert_eq!(validate_keyset(&keyset), Err(KeysetError::MissingPrimaryKey));
}

#[test]
fn all_public_keys_do_not_require_a_primary() {
    let keyset = Keyset::new(
        999,
        vec![
            public_entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
            public_entry(2, KeyStatus::Enabled, OutputPrefixType::Tink),
        ],
    );

    assert!(validate_keyset(&keyset).is_ok());
}

#[test]
fn disabled_entries_are_ignored() {
    let keyset = Keyset::new(
        1,
        vec![
            symmetric_entry(1, KeyStatus::Enabled, OutputPrefixType::Tink),
            symmetric_entry(2, KeyStatus::Disabled, OutputPrefixType::UnknownPrefix),
        ],
    );

    assert!(validate_keyset(&keyset).is_ok());
}

#[test]
fn unknown_prefix_type_on_enabled_entry_is_rejected() {
    let keyset = Keyset::new(
        1,
        vec![symmetric_entry(
            1,
            KeyStatus::Enabled,
            OutputPrefixType::UnknownPrefix,
        )],
    );

    assert_eq!(validate_keyset(&keyset), Err(KeysetError::UnknownPrefixType));
}

#[test]
fn unknown_status_on_entry_is_rejected() {
    let keyset = Keyset::new(
        1,
        vec![symmetric_entry(1, KeyStatus::Unknown, OutputPrefixType::Tink)],
    );

    // An Unknown-status entry is simply not counted as enabled, so a keyset
    // with nothing else enabled fails on the enabled-count check first.
    assert_eq!(validate_keyset(&keyset), Err(KeysetError::NoEnabledKeys));
}

#[test]
fn missing_key_data_on_enabled_entry_is_rejected() {
    let keyset = Keyset::new(
        1,
        vec![KeysetEntry::new(
            None,
            KeyStatus::Enabled,
            1,
            OutputPrefixType::Tink,
        )],
    );

    assert_eq!(validate_keyset(&keyset), Err(KeysetError::MissingKeyData));
}
