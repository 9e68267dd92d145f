use circuit::{assemble, assemble_chunked, RawPublicKey, RawSignature};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{ORDER, U256};

fn fixture() -> (RawSignature, RawPublicKey) {
    // High s so both paths include the flip.
    let s = ORDER.checked_sub(U256::from(0xdead_beef)).expect("n > s");
    let signature = RawSignature {
        r: [0x5a; 32],
        s: s.to_be_bytes(),
        message_hash: [0xc3; 32],
    };
    let key = RawPublicKey::from_coordinates([0x11; 32], [0x22; 32]);
    (signature, key)
}

fn bench_assemble(c: &mut Criterion) {
    let (signature, key) = fixture();
    c.bench_function("assemble_byte_decimal", |bencher| {
        bencher.iter(|| black_box(assemble(black_box(&signature), black_box(&key))))
    });
}

fn bench_assemble_chunked(c: &mut Criterion) {
    let (signature, key) = fixture();
    c.bench_function("assemble_base43_chunks", |bencher| {
        bencher.iter(|| {
            let input = assemble_chunked(black_box(&signature), black_box(&key)).expect("chunk");
            black_box(input)
        })
    });
}

criterion_group!(benches, bench_assemble, bench_assemble_chunked);
criterion_main!(benches);
