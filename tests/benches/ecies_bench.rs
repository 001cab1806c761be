use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use monecc_pke::{decrypt_message, encrypt_message, generate_keypair};
use monecc_tests::{monecc_domain, seeded_rng};

fn bench_ecies(c: &mut Criterion) {
    let domain = monecc_domain();
    let curve = domain.curve();
    let generator = domain.generator();
    let max_scalar = domain.scalar_range(1000).unwrap();
    let mut rng = seeded_rng(0);
    let (pk, sk) = generate_keypair(&domain, &mut rng).unwrap();

    let mut group = c.benchmark_group("ECIES-monECC");

    group.bench_function("keygen", |b| {
        b.iter(|| generate_keypair(&domain, &mut rng).unwrap())
    });

    // Test different message sizes
    for size in [16usize, 256, 4096].iter() {
        let message = "x".repeat(*size);
        let cryptogram =
            encrypt_message(curve, generator, pk.point(), &message, &max_scalar, &mut rng)
                .unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", size), size, |b, _| {
            b.iter(|| {
                encrypt_message(curve, generator, pk.point(), &message, &max_scalar, &mut rng)
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("decrypt", size), size, |b, _| {
            b.iter(|| decrypt_message(curve, generator, sk.scalar(), &cryptogram).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ecies);
criterion_main!(benches);
