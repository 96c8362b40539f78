use aurochs::signatures::{Ed25519Error, Signature, generate_keypair, sign, verify};

#[test]
fn sign_and_verify_round_trip() {
    let (public, private) = generate_keypair();
    let message: &[u8] = b"Hello, world!";

    let signature = sign(message, &public, &private);
    assert!(verify(&signature, message, &public).is_ok());
}

#[test]
fn tampered_signature_is_rejected() {
    let (public, private) = generate_keypair();
    let message: &[u8] = b"Hello, world!";

    let mut raw = sign(message, &public, &private).to_bytes();
    raw[40] ^= 0x10;
    let signature = Signature::from_bytes(raw);

    assert!(verify(&signature, message, &public).is_err());
}

#[test]
fn tampered_message_is_rejected() {
    let (public, private) = generate_keypair();
    let message: &[u8] = b"Hello, world!";

    let signature = sign(message, &public, &private);
    assert!(verify(&signature, b"Goodbye, world!", &public).is_err());
}

#[test]
fn wrong_key_is_rejected() {
    let (_, private_a) = generate_keypair();
    let (public_b, _) = generate_keypair();
    let message: &[u8] = b"cross keys";

    let signature = sign(message, &public_b, &private_a);
    assert!(verify(&signature, message, &public_b).is_err());
}

#[test]
fn many_keypairs_are_distinct_and_consistent() {
    for _ in 0..100 {
        let (public, private) = generate_keypair();
        let message = public.to_bytes();

        let signature = sign(&message, &public, &private);
        assert!(verify(&signature, &message, &public).is_ok());
    }
}

#[test]
fn keypair_from_seed_is_deterministic() {
    let seed = [0x5Au8; 32];
    let (public1, private1) = aurochs::signatures::keypair_from_seed(seed);
    let (public2, private2) = aurochs::signatures::keypair_from_seed(seed);

    assert_eq!(public1.to_bytes(), public2.to_bytes());
    assert_eq!(private1.to_bytes(), private2.to_bytes());
}

#[test]
fn derive_keypair_then_sign_and_verify() {
    let mut stream = (0u8..=255).cycle();
    let result = aurochs::signatures::derive_keypair(|buf| {
        for byte in buf.iter_mut() {
            *byte = stream.next().unwrap();
        }
        buf.len()
    });

    let (public, private) = result.expect("derivation should succeed with a live stream");
    let message = b"derived key signing";
    let signature = sign(message, &public, &private);
    assert!(verify(&signature, message, &public).is_ok());
}

#[test]
fn derive_keypair_fails_on_exhausted_stream() {
    let result = aurochs::signatures::derive_keypair(|_buf| 0);
    match result {
        Err(e) => assert_eq!(e, Ed25519Error::InsufficientRandomness),
        Ok(_) => panic!("expected an error"),
    }
}
