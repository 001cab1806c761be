//! End-to-end flows across the monecc crates

use monecc_algorithms::ec::{Curve, Point};
use monecc_algorithms::modular_inverse;
use monecc_api::{Error, Pke};
use monecc_pke::ecies::generate_keypair_in_range;
use monecc_pke::{decrypt_message, encrypt_message, generate_keypair, Domain, Ecies};
use monecc_tests::{
    affine_points, generator_multiple, monecc_domain, seeded_rng, GENERATOR_ORDER, GROUP_ORDER,
};
use monecc_utils::{read_private_key, read_public_key, write_private_key, write_public_key, KeyFile};
use num_bigint::BigInt;
use tempfile::tempdir;

#[test]
fn test_fixed_configuration() {
    let domain = monecc_domain();
    let curve = domain.curve();
    assert_eq!(curve.p(), &BigInt::from(101));
    assert_eq!(curve.a(), &BigInt::from(35));
    assert_eq!(curve.b(), &BigInt::from(3));
    assert_eq!(domain.order(), &BigInt::from(GENERATOR_ORDER));
    assert_eq!(affine_points(curve).len() + 1, GROUP_ORDER);

    let g = domain.generator();
    assert_eq!(curve.scalar_mul(&BigInt::from(1), g).unwrap(), *g);
    assert_eq!(curve.scalar_mul(domain.order(), g).unwrap(), Point::Infinity);
    for k in 0..12 {
        assert_eq!(
            curve.scalar_mul(&BigInt::from(k), g).unwrap(),
            generator_multiple(k as usize)
        );
    }
}

#[test]
fn test_field_inverse_over_whole_field() {
    let p = BigInt::from(101);
    for x in 1..101 {
        let x = BigInt::from(x);
        let inv = modular_inverse(&p, &x).unwrap();
        assert_eq!((&x * &inv) % &p, BigInt::from(1));
    }
    let err: Error = modular_inverse(&p, &BigInt::from(202)).unwrap_err().into();
    assert!(matches!(err, Error::DivisionByZero { .. }));
}

#[test]
fn test_keygen_files_encrypt_decrypt() {
    // The same steps as `monecc keygen`, `crypt` and `decrypt`
    let dir = tempdir().unwrap();
    let priv_path = dir.path().join("alice.priv");
    let pub_path = dir.path().join("alice.pub");

    let domain = monecc_domain();
    let mut rng = seeded_rng(2024);
    let upper = domain.scalar_range(1000).unwrap();
    let (pk, sk) = generate_keypair_in_range(&domain, &upper, &mut rng).unwrap();
    write_private_key(&priv_path, sk.scalar()).unwrap();
    write_public_key(&pub_path, pk.point()).unwrap();

    let recipient = read_public_key(&pub_path).unwrap();
    assert_eq!(&recipient, pk.point());
    let message = "Rendez-vous à 18h, quai n°3.";
    let cryptogram = encrypt_message(
        domain.curve(),
        domain.generator(),
        &recipient,
        message,
        &upper,
        &mut rng,
    )
    .unwrap();

    let k = read_private_key(&priv_path).unwrap();
    let decrypted = decrypt_message(domain.curve(), domain.generator(), &k, &cryptogram).unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn test_public_key_from_file_is_validated_on_use() {
    // A well-formed key file holding an off-curve point
    let text = KeyFile::Public(Point::new(1, 1)).render().unwrap();
    let q = KeyFile::parse_public(&text).unwrap();

    let domain = monecc_domain();
    let err = encrypt_message(
        domain.curve(),
        domain.generator(),
        &q,
        "hello",
        &BigInt::from(3),
        &mut seeded_rng(1),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { .. }));
}

#[test]
fn test_cryptograms_are_randomized() {
    let domain = monecc_domain();
    let mut rng = seeded_rng(5);
    let (pk, sk) = generate_keypair(&domain, &mut rng).unwrap();
    let ecies = Ecies::new(domain).unwrap();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..40 {
        let c = ecies.encrypt(&pk, "same message", &mut rng).unwrap();
        assert_eq!(ecies.decrypt(&sk, &c).unwrap(), "same message");
        seen.insert(c);
    }
    // Only three ephemeral scalars exist, so at most three cryptograms
    assert!(seen.len() > 1 && seen.len() <= 3, "{} distinct", seen.len());
}

#[test]
fn test_custom_domain_on_another_generator() {
    // Any point of order > 2 on the curve works as a generator
    let curve = Curve::monecc();
    let generator = affine_points(&curve)
        .into_iter()
        .find(|p| curve.point_order(p).unwrap() > BigInt::from(20))
        .unwrap();
    let domain = Domain::new(curve, generator).unwrap();
    assert!(domain.order() > &BigInt::from(20));

    let ecies = Ecies::with_scalar_range(domain, 1000).unwrap();
    let mut rng = seeded_rng(77);
    let (pk, sk) = ecies.keypair(&mut rng).unwrap();
    let c = ecies.encrypt(&pk, "over a larger subgroup", &mut rng).unwrap();
    assert_eq!(ecies.decrypt(&sk, &c).unwrap(), "over a larger subgroup");
}

#[test]
fn test_error_messages_are_descriptive() {
    let domain = monecc_domain();
    let err = decrypt_message(domain.curve(), domain.generator(), &BigInt::from(1), "oops")
        .unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("Malformed cryptogram"), "{}", text);
}
