//! secp256k1 ECDSA benchmarks

use btc_k256::ecdsa::{Signature, SigningKey};
use criterion::{criterion_group, criterion_main, Criterion};
use hex_literal::hex;
use std::hint::black_box;

fn test_key() -> SigningKey {
    SigningKey::from_bytes(&hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

const TEST_DIGEST: [u8; 32] =
    hex!("e33580eb6ed022aed6af20d92237635e7c20c5f1bcd6aee88182ed7180f6e267");

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");

    let d = test_key();
    let z = TEST_DIGEST;

    group.bench_function("sign_prehash", |b| {
        b.iter(|| {
            let _: Signature = black_box(&d).sign_prehash(black_box(&z)).unwrap();
        })
    });

    let q = d.verifying_key();
    let s = d.sign_prehash(&z).unwrap();

    group.bench_function("verify_prehash", |b| {
        b.iter(|| {
            black_box(q)
                .verify_prehash(black_box(&z), black_box(&s))
                .unwrap()
        })
    });

    let der = s.to_der();
    group.bench_function("from_der", |b| {
        b.iter(|| Signature::from_der(black_box(&der)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
