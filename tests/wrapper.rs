use aurochs::keys::ed25519::{Ed25519Parameters, Ed25519PublicKey};
use aurochs::keys::material::KeyMaterialKind;
use aurochs::keys::secret::SecretKeyAccess;
use aurochs::keys::variant::Variant;
use aurochs::keys::xchacha20poly1305::{XChaCha20Poly1305Key, XChaCha20Poly1305Parameters};
use aurochs::keyset::{KeyData, Keyset, KeysetEntry, KeyStatus, OutputPrefixType};
use aurochs::registry;
use aurochs::signatures::keypair_from_seed;
use aurochs::wrapper::{Aead, AeadWrapper, PublicKeySign, PublicKeyVerify, SignWrapper, VerifyWrapper};

#[test]
fn tink_output_prefix_matches_the_wire_format_exactly() {
    let prefix = Variant::Tink.output_prefix(0x66AABBCC).unwrap();
    assert_eq!(prefix, [0x01, 0x66, 0xAA, 0xBB, 0xCC]);
}

#[test]
fn crunchy_and_legacy_share_the_same_wire_prefix() {
    let crunchy = Variant::Crunchy.output_prefix(0x0708090A).unwrap();
    let legacy = Variant::Legacy.output_prefix(0x0708090A).unwrap();
    assert_eq!(crunchy, [0x00, 0x07, 0x08, 0x09, 0x0A]);
    assert_eq!(legacy, crunchy);
}

#[test]
fn no_prefix_has_no_output_prefix() {
    assert_eq!(Variant::NoPrefix.output_prefix(1), None);
}

fn xchacha20_key_data(key_bytes: [u8; 32]) -> KeyData {
    KeyData {
        type_url: registry::TYPE_URL_XCHACHA20_POLY1305,
        value: key_bytes.to_vec(),
        key_material_type: KeyMaterialKind::Symmetric,
    }
}

#[test]
fn aead_wrapper_encrypts_with_the_primary_keys_prefix() {
    let access = SecretKeyAccess::insecure();
    let keyset = Keyset::new(
        1,
        vec![KeysetEntry::new(
            Some(xchacha20_key_data([0x07u8; 32])),
            KeyStatus::Enabled,
            1,
            OutputPrefixType::Tink,
        )],
    );

    let set = aurochs::wrapper::aead_primitive_set(&keyset, access).unwrap();
    let wrapper = AeadWrapper::new(set, access);

    let ciphertext = wrapper.encrypt(b"payload", b"aad").unwrap();
    let prefix = Variant::Tink.output_prefix(1).unwrap();
    assert_eq!(&ciphertext[..5], &prefix);

    let recovered = wrapper.decrypt(&ciphertext, b"aad").unwrap();
    assert_eq!(recovered, b"payload");
}

#[test]
fn aead_wrapper_tries_raw_keys_and_detects_tampering() {
    let access = SecretKeyAccess::insecure();
    let keyset = Keyset::new(
        1,
        vec![
            KeysetEntry::new(
                Some(xchacha20_key_data([0x01u8; 32])),
                KeyStatus::Enabled,
                1,
                OutputPrefixType::Tink,
            ),
            KeysetEntry::new(
                Some(xchacha20_key_data([0x02u8; 32])),
                KeyStatus::Enabled,
                2,
                OutputPrefixType::Raw,
            ),
        ],
    );

    // Encrypt with the raw key directly, bypassing the primary — this is
    // what a sender using an older, prefix-less key would produce.
    let raw_key_only = Keyset::new(
        2,
        vec![KeysetEntry::new(
            Some(xchacha20_key_data([0x02u8; 32])),
            KeyStatus::Enabled,
            2,
            OutputPrefixType::Raw,
        )],
    );
    let raw_set = aurochs::wrapper::aead_primitive_set(&raw_key_only, access).unwrap();
    let raw_encrypter = AeadWrapper::new(raw_set, access);
    let ciphertext = raw_encrypter.encrypt(b"payload", b"").unwrap();

    let decrypt_set = aurochs::wrapper::aead_primitive_set(&keyset, access).unwrap();
    let decrypter = AeadWrapper::new(decrypt_set, access);
    assert_eq!(decrypter.decrypt(&ciphertext, b"").unwrap(), b"payload");

    let mut tampered = ciphertext.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 1;
    assert!(decrypter.decrypt(&tampered, b"").is_err());
}

#[test]
fn aead_wrapper_without_primary_fails_to_encrypt() {
    let access = SecretKeyAccess::insecure();
    let keyset = Keyset::new(
        1,
        vec![KeysetEntry::new(
            Some(xchacha20_key_data([0x03u8; 32])),
            KeyStatus::Enabled,
            2,
            OutputPrefixType::Raw,
        )],
    );

    let set = aurochs::wrapper::aead_primitive_set(&keyset, access).unwrap();
    let wrapper = AeadWrapper::new(set, access);

    assert!(wrapper.encrypt(b"payload", b"").is_err());
}

fn ed25519_keyset(id: u32, variant: Variant) -> (Keyset, Ed25519PublicKey) {
    let (public_core, _) = keypair_from_seed([id as u8; 32]);
    let parameters = Ed25519Parameters::new(variant);
    let public = Ed25519PublicKey::new(parameters, public_core.to_bytes(), Some(id)).unwrap();

    let private_data = KeyData {
        type_url: registry::TYPE_URL_ED25519_PRIVATE,
        value: [id as u8; 32].to_vec(),
        key_material_type: KeyMaterialKind::AsymmetricPrivate,
    };

    let keyset = Keyset::new(
        id,
        vec![KeysetEntry::new(
            Some(private_data),
            KeyStatus::Enabled,
            id,
            OutputPrefixType::from(variant),
        )],
    );

    (keyset, public)
}

#[test]
fn sign_and_verify_round_trip_through_wrappers() {
    let access = SecretKeyAccess::insecure();
    let (keyset, public) = ed25519_keyset(4, Variant::Tink);

    let sign_set = aurochs::wrapper::sign_primitive_set(&keyset, access).unwrap();
    let signer = SignWrapper::new(sign_set, access);

    let signature = signer.sign(b"message").unwrap();
    let prefix = Variant::Tink.output_prefix(4).unwrap();
    assert_eq!(&signature[..5], &prefix);

    let public_data = KeyData {
        type_url: registry::TYPE_URL_ED25519_PUBLIC,
        value: public.key_bytes().to_vec(),
        key_material_type: KeyMaterialKind::AsymmetricPublic,
    };
    let verify_keyset = Keyset::new(
        4,
        vec![KeysetEntry::new(
            Some(public_data),
            KeyStatus::Enabled,
            4,
            OutputPrefixType::Tink,
        )],
    );
    let verify_set = aurochs::wrapper::verify_primitive_set(&verify_keyset).unwrap();
    let verifier = VerifyWrapper::new(verify_set);

    assert!(verifier.verify(&signature, b"message").is_ok());
    assert!(verifier.verify(&signature, b"tampered").is_err());
}

#[test]
fn legacy_variant_appends_a_trailing_zero_byte_before_signing() {
    let access = SecretKeyAccess::insecure();
    let (keyset, public) = ed25519_keyset(5, Variant::Legacy);

    let sign_set = aurochs::wrapper::sign_primitive_set(&keyset, access).unwrap();
    let signer = SignWrapper::new(sign_set, access);
    let signature = signer.sign(b"message").unwrap();

    // Legacy shares Crunchy's wire prefix.
    let prefix = Variant::Crunchy.output_prefix(5).unwrap();
    assert_eq!(&signature[..5], &prefix);

    let public_data = KeyData {
        type_url: registry::TYPE_URL_ED25519_PUBLIC,
        value: public.key_bytes().to_vec(),
        key_material_type: KeyMaterialKind::AsymmetricPublic,
    };
    let verify_keyset = Keyset::new(
        5,
        vec![KeysetEntry::new(
            Some(public_data),
            KeyStatus::Enabled,
            5,
            OutputPrefixType::Legacy,
        )],
    );
    let verify_set = aurochs::wrapper::verify_primitive_set(&verify_keyset).unwrap();
    let verifier = VerifyWrapper::new(verify_set);

    assert!(verifier.verify(&signature, b"message").is_ok());
}
