use aurochs::keys::secret::SecretKeyAccess;
use aurochs::keys::variant::Variant;
use aurochs::keyset::OutputPrefixType;
use aurochs::registry::{self, Key};
use aurochs::templates::{self, Parameters, TemplateError};

#[test]
fn xchacha20_poly1305_resolves_to_tink_variant() {
    for name in ["XCHACHA20_POLY1305", "CHACHA20_POLY1305"] {
        let template = templates::key_template(name).expect(name);
        assert_eq!(template.name, name);
        assert_eq!(template.parameters.variant(), Variant::Tink);
        assert!(matches!(template.parameters, Parameters::XChaCha20Poly1305(_)));
    }
}

#[test]
fn xchacha20_poly1305_raw_resolves_to_no_prefix_variant() {
    for name in ["XCHACHA20_POLY1305_RAW", "CHACHA20_POLY1305_RAW"] {
        let template = templates::key_template(name).expect(name);
        assert_eq!(template.name, name);
        assert_eq!(template.parameters.variant(), Variant::NoPrefix);
        assert!(matches!(template.parameters, Parameters::XChaCha20Poly1305(_)));
    }
}

#[test]
fn ed25519_resolves_to_tink_variant() {
    let template = templates::key_template("ED25519").unwrap();
    assert_eq!(template.parameters.variant(), Variant::Tink);
    assert!(matches!(template.parameters, Parameters::Ed25519(_)));
}

#[test]
fn ed25519_raw_resolves_to_no_prefix_variant() {
    let template = templates::key_template("ED25519_RAW").unwrap();
    assert_eq!(template.parameters.variant(), Variant::NoPrefix);
    assert!(matches!(template.parameters, Parameters::Ed25519(_)));
}

#[test]
fn unknown_name_is_rejected() {
    let result = templates::key_template("NOT_A_TEMPLATE");
    assert_eq!(result.unwrap_err(), TemplateError::UnknownKeyTemplate);
}

#[test]
fn generated_xchacha20_poly1305_key_round_trips_through_the_registry() {
    let access = SecretKeyAccess::insecure();
    let template = templates::key_template("XCHACHA20_POLY1305").unwrap();

    let key_data = templates::generate_key(&template, Some(1)).unwrap();
    let parsed = registry::parse_key(OutputPrefixType::Tink, Some(1), &key_data, Some(access))
        .expect("generated key data should parse back");

    match parsed {
        Key::XChaCha20Poly1305(k) => assert_eq!(k.id(), Some(1)),
        _ => panic!("expected a symmetric key"),
    }
}

#[test]
fn generated_xchacha20_poly1305_raw_key_round_trips_without_an_id() {
    let access = SecretKeyAccess::insecure();
    let template = templates::key_template("XCHACHA20_POLY1305_RAW").unwrap();

    let key_data = templates::generate_key(&template, None).unwrap();
    let parsed = registry::parse_key(OutputPrefixType::Raw, None, &key_data, Some(access)).unwrap();

    assert!(matches!(parsed, Key::XChaCha20Poly1305(_)));
}

#[test]
fn generated_ed25519_key_round_trips_through_the_registry() {
    let access = SecretKeyAccess::insecure();
    let template = templates::key_template("ED25519").unwrap();

    let key_data = templates::generate_key(&template, Some(9)).unwrap();
    let parsed = registry::parse_key(OutputPrefixType::Tink, Some(9), &key_data, Some(access))
        .expect("generated key data should parse back");

    match parsed {
        Key::Ed25519Private(k) => assert_eq!(k.public().id(), Some(9)),
        _ => panic!("expected a private key"),
    }
}
