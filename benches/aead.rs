use aurochs::aead::{self};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const KEY: [u8; 32] = [0x24u8; 32];

pub fn bench_encrypt(c: &mut Criterion) {
    let plaintext = vec![0u8; 1024];
    c.bench_function("xchacha20poly1305 encrypt 1024 bytes", |b| {
        b.iter(|| aead::encrypt(black_box(&KEY), black_box(&plaintext), black_box(b"")))
    });
}

pub fn bench_decrypt(c: &mut Criterion) {
    let plaintext = vec![0u8; 1024];
    let ciphertext = aead::encrypt(&KEY, &plaintext, b"");
    c.bench_function("xchacha20poly1305 decrypt 1024 bytes", |b| {
        b.iter(|| aead::decrypt(black_box(&KEY), black_box(&ciphertext), black_box(b"")))
    });
}

criterion_group!(benches, bench_encrypt, bench_decrypt);
criterion_main!(benches);
