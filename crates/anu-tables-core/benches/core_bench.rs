//! Criterion benchmarks for anu-tables-core generators
//!
//! Run with: cargo bench -p anu-tables-core
#![allow(missing_docs)]

use anu_tables_core::shapes::{expo_envelope, inverted_sine};
use anu_tables_core::{
    CurveShaper, FixedPoint, IncrementRange, NoteRange, Tuning, encode_groove,
    exponential_increments, timer_period_table, warped_increments,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const CONTROL_RATE: f64 = 20_000_000.0 / 510.0 / 8.0 / 2.0;
const TABLE_SIZES: &[usize] = &[64, 256, 1024, 4096];

fn bench_increments(c: &mut Criterion) {
    let mut group = c.benchmark_group("Increments");

    let lfo = IncrementRange::from_frequencies(FixedPoint::Q32, 1.0 / 16.0, 100.0, CONTROL_RATE)
        .unwrap_or_else(|e| panic!("{e}"));
    let env = IncrementRange::from_times(FixedPoint::Q32, 3.0 / CONTROL_RATE, 12.0, CONTROL_RATE)
        .unwrap_or_else(|e| panic!("{e}"));

    for &size in TABLE_SIZES {
        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, &size| {
            b.iter(|| black_box(exponential_increments::<u32>(black_box(lfo), size, 2)));
        });
        group.bench_with_input(BenchmarkId::new("warped", size), &size, |b, &size| {
            b.iter(|| black_box(warped_increments::<u32>(black_box(env), 0.175, size)));
        });
    }

    group.finish();
}

fn bench_pitch(c: &mut Criterion) {
    let notes = NoteRange {
        start: 16.0,
        step: 0.125,
        entries: 97,
    };
    c.bench_function("timer_period_table", |b| {
        b.iter(|| {
            black_box(timer_period_table::<u16>(
                black_box(notes),
                Tuning::A440,
                20_000_000.0,
                16.0,
            ))
        });
    });
}

fn bench_shaper(c: &mut Criterion) {
    let mut group = c.benchmark_group("CurveShaper");

    for &size in TABLE_SIZES {
        let sine = inverted_sine(size).unwrap_or_default();
        let expo = expo_envelope(size, 4.0).unwrap_or_default();
        let byte = CurveShaper::new(1.0, 254.0).unwrap_or_else(|e| panic!("{e}"));
        let word = CurveShaper::full_range::<u16>();

        group.bench_with_input(BenchmarkId::new("sine_u8", size), &size, |b, _| {
            b.iter(|| black_box(byte.quantize::<u8>(black_box(&sine))));
        });
        group.bench_with_input(BenchmarkId::new("expo_u16", size), &size, |b, _| {
            b.iter(|| black_box(word.quantize::<u16>(black_box(&expo))));
        });
    }

    group.finish();
}

fn bench_groove(c: &mut Criterion) {
    let template = [
        0.7, -0.8, 0.85, -0.75, 0.7, -0.7, 0.4, -0.3, 0.5, -0.7, 0.8, -0.75, 0.8, -1.0, 0.5, -0.25,
    ];
    c.bench_function("encode_groove", |b| {
        b.iter(|| black_box(encode_groove(black_box(&template))));
    });
}

criterion_group!(
    benches,
    bench_increments,
    bench_pitch,
    bench_shaper,
    bench_groove
);
criterion_main!(benches);
