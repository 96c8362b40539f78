use aurochs::keys::secret::SecretKeyAccess;
use aurochs::keyset::OutputPrefixType;
use aurochs::registry::{self, Key, RegistryError};

#[test]
fn xchacha20_poly1305_round_trips() {
    let access = SecretKeyAccess::insecure();
    let key_bytes = [0x42u8; 32];

    let key_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key",
        value: key_bytes.to_vec(),
        key_material_type: aurochs::keys::material::KeyMaterialKind::Symmetric,
    };

    let key = registry::parse_key(OutputPrefixType::Tink, Some(7), &key_data, Some(access))
        .expect("parse should succeed with a token");

    match &key {
        Key::XChaCha20Poly1305(k) => assert_eq!(k.key_bytes(access), key_bytes),
        _ => panic!("expected a symmetric key"),
    }

    let round_tripped = registry::serialize_key(&key, Some(access)).unwrap();
    assert_eq!(round_tripped.value, key_bytes.to_vec());
    assert_eq!(round_tripped.type_url, key_data.type_url);
}

#[test]
fn xchacha20_poly1305_parse_without_token_is_denied() {
    let key_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key",
        value: vec![0u8; 32],
        key_material_type: aurochs::keys::material::KeyMaterialKind::Symmetric,
    };

    let result = registry::parse_key(OutputPrefixType::Tink, Some(1), &key_data, None);
    match result {
        Err(e) => assert_eq!(e, RegistryError::AccessDenied),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn legacy_prefix_type_resolves_to_crunchy_variant() {
    let access = SecretKeyAccess::insecure();
    let key_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key",
        value: vec![0x11u8; 32],
        key_material_type: aurochs::keys::material::KeyMaterialKind::Symmetric,
    };

    let key = registry::parse_key(OutputPrefixType::Legacy, Some(5), &key_data, Some(access)).unwrap();
    match key {
        Key::XChaCha20Poly1305(k) => {
            assert_eq!(k.parameters().variant(), aurochs::keys::Variant::Crunchy);
        }
        _ => panic!("expected a symmetric key"),
    }
}

#[test]
fn ed25519_keypair_round_trips_through_the_registry() {
    let access = SecretKeyAccess::insecure();
    let (public_core, _) = aurochs::signatures::keypair_from_seed([9u8; 32]);

    let public_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/google.crypto.tink.Ed25519PublicKey",
        value: public_core.to_bytes().to_vec(),
        key_material_type: aurochs::keys::material::KeyMaterialKind::AsymmetricPublic,
    };
    let public_key = registry::parse_key(OutputPrefixType::Tink, Some(3), &public_data, None).unwrap();
    assert!(matches!(public_key, Key::Ed25519Public(_)));

    let private_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/google.crypto.tink.Ed25519PrivateKey",
        value: [9u8; 32].to_vec(),
        key_material_type: aurochs::keys::material::KeyMaterialKind::AsymmetricPrivate,
    };
    let private_key =
        registry::parse_key(OutputPrefixType::Tink, Some(3), &private_data, Some(access)).unwrap();

    match private_key {
        Key::Ed25519Private(k) => assert_eq!(k.public().key_bytes(), public_core.to_bytes()),
        _ => panic!("expected a private key"),
    }
}

#[test]
fn unknown_type_url_is_rejected() {
    let key_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/not.a.real.KeyType",
        value: vec![0u8; 32],
        key_material_type: aurochs::keys::material::KeyMaterialKind::Symmetric,
    };

    let result = registry::parse_key(
        OutputPrefixType::Tink,
        Some(1),
        &key_data,
        Some(SecretKeyAccess::insecure()),
    );
    match result {
        Err(e) => assert_eq!(e, RegistryError::UnknownTypeUrl),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn unknown_prefix_type_is_rejected() {
    let key_data = aurochs::keyset::KeyData {
        type_url: "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key",
        value: vec![0u8; 32],
        key_material_type: aurochs::keys::material::KeyMaterialKind::Symmetric,
    };

    let result = registry::parse_key(
        OutputPrefixType::UnknownPrefix,
        Some(1),
        &key_data,
        Some(SecretKeyAccess::insecure()),
    );
    match result {
        Err(e) => assert_eq!(e, RegistryError::UnknownPrefixType),
        Ok(_) => panic!("expected an error"),
    }
}
