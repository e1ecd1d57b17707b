// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_easing::{Curve, Easing, EasingRegistry};

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing/apply");
    let samples: Vec<f64> = (0..=1_000).map(|i| f64::from(i) / 1_000.0).collect();

    for easing in Easing::ALL {
        group.bench_with_input(BenchmarkId::new("named", easing), &samples, |b, samples| {
            let curve = Curve::Named(easing);
            b.iter(|| {
                for &t in samples {
                    black_box(curve.apply(t));
                }
            });
        });
    }

    group.bench_with_input(BenchmarkId::new("custom", "smoothstep"), &samples, |b, samples| {
        let curve = Curve::custom(|t| t * t * (3.0 - 2.0 * t));
        b.iter(|| {
            for &t in samples {
                black_box(curve.apply(t));
            }
        });
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let registry = EasingRegistry::new();
    c.bench_function("easing/resolve_default", |b| {
        b.iter(|| black_box(registry.resolve(black_box("quadraticInOut"))));
    });
}

criterion_group!(benches, bench_curves, bench_registry);
criterion_main!(benches);
