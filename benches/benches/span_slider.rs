// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use understory_span_slider::{
    Control, LinearTrack, MovementPolicy, PointerButton, PointerButtons, SliderAction, SpanSlider,
};

fn slider(maximum: i32) -> SpanSlider {
    let mut s = SpanSlider::new();
    s.set_range(0, maximum);
    s.set_span(maximum / 4, maximum / 2);
    s
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_slider/drag");

    // One pixel per value; the pointer sweeps the lower handle back and forth
    // across the upper one, so free drags swap roles twice per sweep.
    for maximum in [100i32, 1_000, 10_000] {
        let track = LinearTrack::new(Rect::new(0.0, 0.0, f64::from(maximum) + 10.0, 20.0), 10.0);
        let grab = Point::new(f64::from(maximum / 4) + 5.0, 10.0);
        let path: Vec<Point> = (0..=maximum)
            .chain((0..=maximum).rev())
            .map(|v| Point::new(f64::from(v) + 5.0, 10.0))
            .collect();
        group.throughput(Throughput::Elements(path.len() as u64));

        for (name, movement, tracking) in [
            ("free_tracking", MovementPolicy::Free, true),
            ("free_deferred", MovementPolicy::Free, false),
            ("no_crossing_tracking", MovementPolicy::NoCrossing, true),
        ] {
            group.bench_with_input(BenchmarkId::new(name, maximum), &path, |b, path| {
                b.iter_batched(
                    || {
                        let mut s = slider(maximum);
                        s.set_movement_policy(movement);
                        s.set_tracking(tracking);
                        s
                    },
                    |mut s| {
                        s.pointer_down(
                            &track,
                            grab,
                            PointerButton::Primary,
                            PointerButtons::PRIMARY,
                        );
                        for &point in path {
                            black_box(s.pointer_move(&track, point, PointerButtons::PRIMARY));
                        }
                        black_box(s.pointer_up());
                        black_box(s);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_slider/actions");

    // Stepping the main handle through the whole range crosses the other one.
    for maximum in [1_000i32, 10_000] {
        group.throughput(Throughput::Elements(maximum as u64));
        group.bench_with_input(
            BenchmarkId::new("single_step_sweep", maximum),
            &maximum,
            |b, &maximum| {
                b.iter_batched(
                    || slider(maximum),
                    |mut s| {
                        s.trigger_action(SliderAction::ToMinimum, Control::Main);
                        for _ in 0..maximum {
                            black_box(s.trigger_action(SliderAction::SingleStepAdd, Control::Main));
                        }
                        black_box(s);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_set_span(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_slider/set_span");
    let pairs: Vec<(i32, i32)> = (0..1_024).map(|i| ((i * 37) % 1_000, (i * 91) % 1_000)).collect();
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("reversed_and_clamped", |b| {
        b.iter_batched(
            || slider(999),
            |mut s| {
                for &(first, second) in &pairs {
                    black_box(s.set_span(first, second));
                }
                black_box(s);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_actions, bench_set_span);
criterion_main!(benches);
