// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the drag-to-frame mapping.
//!
//! The mapping runs on every pointer move during a drag session, so it has
//! to stay cheap even for long sequences.

use criterion::{criterion_group, criterion_main, Criterion};
use spin_lens::ui::state::rotation;
use std::hint::black_box;

fn bench_frame_for_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    group.bench_function("frame_for_drag_36", |b| {
        b.iter(|| {
            let mut frame = 0;
            for delta in -500..500 {
                frame = rotation::frame_for_drag(black_box(frame), delta as f32, 36);
            }
            black_box(frame)
        });
    });

    group.bench_function("frame_for_drag_720", |b| {
        b.iter(|| {
            let mut frame = 0;
            for delta in -500..500 {
                frame = rotation::frame_for_drag(black_box(frame), delta as f32 * 3.0, 720);
            }
            black_box(frame)
        });
    });

    group.finish();
}

fn bench_step_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    group.bench_function("step_frame_wraparound", |b| {
        b.iter(|| {
            let mut frame = 0;
            for _ in 0..1000 {
                frame = rotation::step_frame(black_box(frame), -1, 36);
            }
            black_box(frame)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_frame_for_drag, bench_step_frame);
criterion_main!(benches);
