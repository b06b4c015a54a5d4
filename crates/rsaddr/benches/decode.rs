//! Benchmarks for address decoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rsaddr::alphabet::Codeword;
use rsaddr::{checksum, decode_address, gf32, reconstruct};

const ADDRESS: &str = "K37B-9V85-FB95-793HN";

fn bench_gf32(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf32");
    group.throughput(Throughput::Elements(1));

    group.bench_function("mul", |b| {
        b.iter(|| black_box(gf32::mul(black_box(27), black_box(19))));
    });
    group.bench_function("exp", |b| {
        b.iter(|| black_box(gf32::exp(black_box(97))));
    });

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.throughput(Throughput::Elements(1));

    group.bench_function("map", |b| {
        b.iter(|| black_box(Codeword::map(black_box(ADDRESS))));
    });

    if let Ok(codeword) = Codeword::map(ADDRESS) {
        group.bench_function("syndromes", |b| {
            b.iter(|| black_box(checksum::syndromes(black_box(&codeword))));
        });
        group.bench_function("reconstruct", |b| {
            b.iter(|| black_box(reconstruct(black_box(&codeword))));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));

    group.bench_function("valid", |b| {
        b.iter(|| black_box(decode_address(black_box(ADDRESS), 1)));
    });
    group.bench_function("checksum_invalid", |b| {
        b.iter(|| black_box(decode_address(black_box("K37B-9V85-FB95-793HM"), 1)));
    });
    group.bench_function("too_short", |b| {
        b.iter(|| black_box(decode_address(black_box("K37B-9V85"), 1)));
    });

    group.finish();
}

criterion_group!(benches, bench_gf32, bench_stages, bench_decode);
criterion_main!(benches);
