// Copyright (c) 2025 Felix Kahle.
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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tally_core::num::ops::div;
use tally_core::seq::{doubled, ideal, map_fn, range_inclusive, times};

const SIZES: [i64; 3] = [10, 1_000, 100_000];

fn bench_range_and_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_benchmark");

    for half in SIZES {
        let len = (2 * half + 1) as u64;
        group.throughput(Throughput::Elements(len));

        group.bench_with_input(BenchmarkId::new("range_inclusive", half), &half, |b, &h| {
            b.iter(|| range_inclusive(black_box(-h), black_box(h)).to_vec())
        });

        group.bench_with_input(BenchmarkId::new("map_doubled", half), &half, |b, &h| {
            b.iter(|| map_fn(doubled, range_inclusive(black_box(-h), black_box(h))))
        });

        group.bench_with_input(BenchmarkId::new("times_div", half), &half, |b, &h| {
            let n = len as usize;
            b.iter(|| {
                times(black_box(n), |i| div(i as i64 - h, 3))
                    .map(black_box)
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_ideal(c: &mut Criterion) {
    c.bench_function("ideal", |b| b.iter(|| black_box(ideal())));
}

criterion_group!(benches, bench_range_and_map, bench_ideal);
criterion_main!(benches);
