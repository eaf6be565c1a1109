// Copyright (c) 2025 the safecmp developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Overhead measurement for the dispatch modes.
//!
//! The data is non-negative so the raising mode never actually raises; the
//! interesting number is the cost of the fast path versus the native
//! operator, and the cost of the guarded mode's double evaluation on
//! mixed-signedness operands.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use safecmp_core::dispatch::{ExactCompare, RaisingCompare, UncheckedCompare};
use std::hint::black_box;

const N: usize = 4096;
const SEED: u64 = 0x5afe_c0de;

/// Random non-negative values, so naive and correct never diverge.
fn make_signed_data(rng: &mut StdRng) -> Vec<i32> {
    (0..N).map(|_| rng.gen_range(0..i32::MAX)).collect()
}

fn make_unsigned_data(rng: &mut StdRng) -> Vec<u32> {
    (0..N).map(|_| rng.gen_range(0..i32::MAX as u32)).collect()
}

fn bench_same_type(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let lhs = make_signed_data(&mut rng);
    let rhs = make_signed_data(&mut rng);

    let mut group = c.benchmark_group("same_type");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function(BenchmarkId::new("native", N), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .filter(|(a, b)| black_box(a < b))
                .count()
        })
    });

    group.bench_function(BenchmarkId::new("exact", N), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .filter(|&(&a, &b)| black_box(ExactCompare::less(a, b)))
                .count()
        })
    });

    group.finish();
}

fn bench_mixed_signedness(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let lhs = make_signed_data(&mut rng);
    let rhs = make_unsigned_data(&mut rng);

    let mut group = c.benchmark_group("mixed_signedness");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function(BenchmarkId::new("unchecked", N), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .filter(|&(&a, &b)| black_box(UncheckedCompare::less(a, b)))
                .count()
        })
    });

    group.bench_function(BenchmarkId::new("exact", N), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .filter(|&(&a, &b)| black_box(ExactCompare::less(a, b)))
                .count()
        })
    });

    group.bench_function(BenchmarkId::new("raising", N), |b| {
        b.iter(|| {
            lhs.iter()
                .zip(&rhs)
                .filter(|&(&a, &b)| {
                    black_box(
                        RaisingCompare::less(a, b)
                            .expect("benchmark data must not diverge"),
                    )
                })
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_same_type, bench_mixed_signedness);
criterion_main!(benches);
