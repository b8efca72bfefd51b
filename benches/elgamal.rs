use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use elgamal::{decrypt, encrypt, find_primitive_root, generate_keys, ElGamalParams};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("elgamal");
    group.sample_size(500);

    group.bench_function("find_primitive_root_23", |b| {
        b.iter_with_setup(|| BigUint::from(23u32), |p| find_primitive_root(&p))
    });

    group.bench_function("find_primitive_root_1000003", |b| {
        b.iter_with_setup(|| BigUint::from(1_000_003u32), |p| find_primitive_root(&p))
    });

    group.bench_function("generate_keys", |b| {
        b.iter_with_setup(
            || {
                let params = ElGamalParams::new(BigUint::from(23u32), BigUint::from(5u32));
                let rng = ChaCha20Rng::seed_from_u64(42);
                (params, rng)
            },
            |(params, mut rng)| generate_keys(&params, &mut rng),
        )
    });

    group.bench_function("encrypt", |b| {
        b.iter_with_setup(
            || {
                let params = ElGamalParams::new(BigUint::from(23u32), BigUint::from(5u32));
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let keys = generate_keys(&params, &mut rng).unwrap();
                let message = BigUint::from(15u32);
                (keys, message, rng)
            },
            |(keys, message, mut rng)| encrypt(&keys.public, &message, &mut rng),
        )
    });

    group.bench_function("decrypt", |b| {
        b.iter_with_setup(
            || {
                let params = ElGamalParams::new(BigUint::from(23u32), BigUint::from(5u32));
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let keys = generate_keys(&params, &mut rng).unwrap();
                let message = BigUint::from(15u32);
                let ciphertext = encrypt(&keys.public, &message, &mut rng).unwrap();
                (keys, ciphertext)
            },
            |(keys, ciphertext)| decrypt(&keys.private, &ciphertext),
        )
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
