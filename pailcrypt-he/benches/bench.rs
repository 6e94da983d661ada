use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_core::OsRng;
use rug::Integer;

use pailcrypt_he::cryptosystems::paillier::Paillier;
use pailcrypt_traits::cryptosystems::{AsymmetricCryptosystem, DecryptionKey, EncryptionKey};
use pailcrypt_traits::homomorphic::HomomorphicAddition;
use pailcrypt_traits::randomness::GeneralRng;
use pailcrypt_traits::security::BitsOfSecurity;

fn paillier_benchmark(c: &mut Criterion) {
    // Ignore noise up to 5%
    let mut group = c.benchmark_group("paillier");
    group.noise_threshold(0.05);

    let mut rng = GeneralRng::new(OsRng);
    let paillier = Paillier::setup(&BitsOfSecurity::AES128);
    let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();

    // Benchmark encryption
    group.bench_function("encrypt", |b| {
        b.iter(|| {
            black_box(public_key.encrypt(&Integer::from(123456789u64), &mut rng));
        })
    });

    let ciphertext = public_key.encrypt(&Integer::from(123456789u64), &mut rng);

    // Benchmark decryption
    group.bench_function("decrypt", |b| {
        b.iter(|| black_box(secret_key.decrypt(&ciphertext)))
    });

    let ciphertext = public_key.encrypt_raw(&Integer::from(123456789u64), &mut rng);

    // Benchmark scalar multiplication away from the special-cased scalars
    group.bench_function("mul", |b| {
        b.iter(|| {
            black_box(public_key.mul(
                ciphertext.clone(),
                Integer::from(742u32),
                &mut rng,
            ));
        })
    });

    group.finish();
}

criterion_group!(benches, paillier_benchmark);
criterion_main!(benches);
