// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use tabletop_geometry::Polygon;

/// A regular polygon with `sides` corners on a circle of radius `r`.
fn regular(center: Point, sides: u32, r: f64) -> Polygon {
    let mut polygon = Polygon::new(center);
    for i in 0..sides {
        let alpha = core::f64::consts::TAU * f64::from(i) / f64::from(sides);
        polygon.add_point(Vec2::new(r * alpha.cos(), r * alpha.sin()));
    }
    polygon
}

fn bench_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat/intersects_with");

    let stage = Polygon::rect(Point::new(960.0, 540.0), 1920.0, 1080.0, 0.0);
    let inside = Polygon::rect(Point::new(400.0, 300.0), 300.0, 200.0, 0.4);
    let outside = Polygon::rect(Point::new(2400.0, 300.0), 300.0, 200.0, 0.4);
    group.bench_function("rect_inside_stage", |b| {
        b.iter(|| black_box(stage.intersects_with(black_box(&inside))));
    });
    group.bench_function("rect_outside_stage", |b| {
        b.iter(|| black_box(stage.intersects_with(black_box(&outside))));
    });

    for sides in [8_u32, 32, 128] {
        let a = regular(Point::new(0.0, 0.0), sides, 100.0);
        let b_poly = regular(Point::new(150.0, 20.0), sides, 100.0);
        group.bench_function(BenchmarkId::new("regular", sides), |b| {
            b.iter(|| black_box(a.intersects_with(black_box(&b_poly))));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sat/contains_point");
    let card = Polygon::rect(Point::new(400.0, 300.0), 300.0, 200.0, 0.4);
    group.bench_function("rotated_rect", |b| {
        b.iter(|| black_box(card.contains_point(black_box(Point::new(420.0, 310.0)))));
    });
    group.finish();
}

criterion_group!(benches, bench_sat);
criterion_main!(benches);
