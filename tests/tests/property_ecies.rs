//! Property-based tests for the curve group and ECIES

use monecc_algorithms::ec::{Curve, Point};
use monecc_api::Error;
use monecc_pke::{decrypt_message, encrypt_message, Envelope};
use monecc_tests::{affine_points, monecc_domain, seeded_rng};
use num_bigint::BigInt;
use proptest::prelude::*;

/// Any point of the monECC group, identity included
fn any_point() -> impl Strategy<Value = Point> {
    let mut points = affine_points(&Curve::monecc());
    points.push(Point::Infinity);
    prop::sample::select(points)
}

proptest! {
    #[test]
    fn scalar_mult_is_linear(a in -500i64..500, b in -500i64..500, p in any_point()) {
        let curve = Curve::monecc();
        let lhs = curve.scalar_mul(&BigInt::from(a + b), &p).unwrap();
        let rhs = curve
            .add(
                &curve.scalar_mul(&BigInt::from(a), &p).unwrap(),
                &curve.scalar_mul(&BigInt::from(b), &p).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn group_law_is_associative(p in any_point(), q in any_point(), r in any_point()) {
        let curve = Curve::monecc();
        let left = curve.add(&curve.add(&p, &q).unwrap(), &r).unwrap();
        let right = curve.add(&p, &curve.add(&q, &r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn ecies_roundtrip(plaintext in any::<String>(), k in 1i64..4, seed in any::<u64>()) {
        let domain = monecc_domain();
        let curve = domain.curve();
        let k = BigInt::from(k);
        let q = curve.scalar_mul(&k, domain.generator()).unwrap();
        let max_scalar = domain.scalar_range(1000).unwrap();

        let cryptogram = encrypt_message(
            curve,
            domain.generator(),
            &q,
            &plaintext,
            &max_scalar,
            &mut seeded_rng(seed),
        )
        .unwrap();
        let decrypted = decrypt_message(curve, domain.generator(), &k, &cryptogram).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn tampering_never_returns_the_original(
        plaintext in "[a-zA-Z0-9 ]{0,64}",
        flip in any::<prop::sample::Index>(),
        mask in 1u8..=255,
        seed in any::<u64>(),
    ) {
        let domain = monecc_domain();
        let curve = domain.curve();
        let k = BigInt::from(3);
        let q = curve.scalar_mul(&k, domain.generator()).unwrap();
        let cryptogram = encrypt_message(
            curve,
            domain.generator(),
            &q,
            &plaintext,
            &BigInt::from(3),
            &mut seeded_rng(seed),
        )
        .unwrap();

        let mut envelope = Envelope::deserialize(&cryptogram).unwrap();
        let index = flip.index(envelope.ciphertext.len());
        envelope.ciphertext[index] ^= mask;
        let tampered = envelope.serialize().unwrap();

        match decrypt_message(curve, domain.generator(), &k, &tampered) {
            Ok(text) => prop_assert_ne!(text, plaintext),
            Err(Error::Padding { .. }) | Err(Error::Encoding { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    #[test]
    fn cryptograms_without_separator_are_malformed(text in "[^:]{0,80}") {
        let domain = monecc_domain();
        let result = decrypt_message(domain.curve(), domain.generator(), &BigInt::from(1), &text);
        prop_assert!(
            matches!(result, Err(Error::MalformedCryptogram { .. })),
            "{:?} gave {:?}", text, result
        );
    }

    #[test]
    fn garbage_cryptograms_are_rejected(text in "[A-Za-z0-9+/=]{0,40}:[A-Za-z0-9+/=]{0,40}") {
        let domain = monecc_domain();
        let result = decrypt_message(domain.curve(), domain.generator(), &BigInt::from(1), &text);
        prop_assert!(result.is_err(), "{:?} decrypted to {:?}", text, result);
    }
}
