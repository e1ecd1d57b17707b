// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::time::Duration;
use understory_camera::{AnimationOptions, Camera, CameraState, CameraStatePatch, Dimensions};
use understory_timing::ManualScheduler;

fn rotated_camera() -> Camera<ManualScheduler> {
    let mut camera = Camera::new(ManualScheduler::default());
    camera
        .resize(Dimensions::new(1920.0, 1080.0))
        .set_state(CameraState::new(120.0, -40.0, 0.35, 1.8));
    camera
}

fn grid(len: usize) -> Vec<Point> {
    let side = (len as f64).sqrt().ceil() as usize;
    (0..len)
        .map(|i| Point::new((i % side) as f64 * 12.5, (i / side) as f64 * 12.5))
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/transform");
    let camera = rotated_camera();

    // Hypothesis: building the affine once and reusing it beats recomputing
    // sin/cos per point once there are more than a handful of points.
    for len in [64usize, 1_024, 16_384] {
        let points = grid(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("graph_to_display", len),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points {
                        black_box(camera.graph_to_display(p.x, p.y));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("graph_to_display_affine", len),
            &points,
            |b, points| {
                b.iter(|| {
                    let affine = camera.graph_to_display_affine();
                    for p in points {
                        black_box(affine * *p);
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("display_to_graph", len),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points {
                        black_box(camera.display_to_graph(p.x, p.y));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/animation");

    // One full 150ms animation at 60fps, with and without an observer.
    for observers in [0usize, 4] {
        group.bench_with_input(
            BenchmarkId::new("run_to_completion", observers),
            &observers,
            |b, &observers| {
                b.iter_batched(
                    || {
                        let mut camera = rotated_camera();
                        for _ in 0..observers {
                            camera.on_updated(|state| {
                                black_box(state);
                            });
                        }
                        camera
                    },
                    |mut camera| {
                        camera
                            .animate(
                                CameraStatePatch::default().with_position(0.0, 0.0).with_ratio(1.0),
                                AnimationOptions::default(),
                            )
                            .unwrap();
                        while camera.is_animated() {
                            camera.scheduler_mut().advance(Duration::from_micros(16_667));
                            for frame in camera.scheduler_mut().take_frames() {
                                camera.on_frame(frame);
                            }
                        }
                        black_box(camera.state());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.bench_function("restart_in_flight", |b| {
        let mut camera = rotated_camera();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let x = if flip { 10.0 } else { -10.0 };
            black_box(
                camera
                    .animate(CameraStatePatch::default().with_x(x), AnimationOptions::default())
                    .unwrap(),
            );
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_animation);
criterion_main!(benches);
