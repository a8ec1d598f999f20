// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_reorder::{ReorderConfig, ReorderList};

const HEIGHT: f64 = 48.0;

fn list_of(len: usize) -> ReorderList<u32> {
    ReorderList::new(0..(len as u32), ReorderConfig::new(HEIGHT))
}

fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/full_sweep");

    // Drags the first item to the bottom in 4px samples. Each sample scans the
    // whole rank order, so this is O(n^2) in the list length.
    for len in [8usize, 32, 128, 512] {
        let distance = len as f64 * HEIGHT;
        let samples = (distance / 4.0) as usize;
        group.throughput(Throughput::Elements(samples as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || list_of(len),
                |mut list| {
                    list.begin_drag(0);
                    for step in 1..=samples {
                        list.update_drag(0, step as f64 * 4.0, 1.0);
                    }
                    black_box(list.end_drag(0));
                    black_box(list.drain_transitions().count());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_idle_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/idle_samples");

    // Samples that move the active item without crossing any boundary:
    // the common case while the pointer hovers.
    for len in [8usize, 128, 2_048] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut list = list_of(len);
            let middle = (len / 2) as u32;
            list.begin_drag(middle);
            let mut flip = 1.0;
            b.iter(|| {
                flip = -flip;
                list.update_drag(middle, black_box(flip * 5.0), flip);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_sweep, bench_idle_samples);
criterion_main!(benches);
