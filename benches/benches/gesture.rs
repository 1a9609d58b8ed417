// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use tabletop_interaction::{InteractionPoints, PointerKey, TapPolicy};
use tabletop_scatter::{ScatterConfig, ScatterContainer};

/// `fingers` contacts on a circle, one frame apart, then spread by 5%.
fn spread(fingers: u32) -> InteractionPoints {
    let mut points = InteractionPoints::new(TapPolicy::default());
    let center = Point::new(500.0, 500.0);
    let place = |i: u32, r: f64| {
        let alpha = core::f64::consts::TAU * f64::from(i) / f64::from(fingers);
        center + Vec2::new(r * alpha.cos(), r * alpha.sin())
    };
    for i in 0..fingers {
        points.update(PointerKey::Id(i64::from(i)), place(i, 100.0), 0.0);
    }
    for i in 0..fingers {
        points.update(PointerKey::Id(i64::from(i)), place(i, 105.0), 16.0);
    }
    points
}

fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/delta");
    for fingers in [1_u32, 2, 5, 10] {
        let points = spread(fingers);
        group.bench_function(BenchmarkId::new("fingers", fingers), |b| {
            b.iter(|| black_box(points.delta()));
        });
    }
    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/scatter");

    group.bench_function("transform_pinch", |b| {
        let mut scatter = ScatterConfig::new(Point::new(100.0, 100.0), Size::new(300.0, 200.0))
            .with_scale_range(0.5, 4.0)
            .build()
            .unwrap();
        let mut zoom = 1.01;
        b.iter(|| {
            // Alternate so the scale stays inside its bounds.
            zoom = 1.0 / zoom;
            scatter.transform(Vec2::new(0.5, 0.25), zoom, 0.01, Point::new(250.0, 200.0));
        });
    });

    group.bench_function("throw_to_rest", |b| {
        b.iter_batched(
            || {
                let mut stage = ScatterContainer::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
                let mut scatter =
                    ScatterConfig::new(Point::new(800.0, 400.0), Size::new(300.0, 200.0))
                        .build()
                        .unwrap();
                scatter.throwable_mut().observe_velocity(0.0);
                for frame in 1..=5 {
                    scatter
                        .throwable_mut()
                        .add_velocity(Vec2::new(60.0, 20.0), f64::from(frame) * 16.0);
                }
                stage.insert(0_u32, scatter);
                stage
            },
            |mut stage| {
                if let Some(scatter) = stage.get_mut(0) {
                    scatter.start_throw(80.0);
                }
                let mut now = 80.0;
                while stage.tick(now) {
                    now += 16.0;
                }
                black_box(stage)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_delta, bench_scatter);
criterion_main!(benches);
