//! Benchmarks for the viewport engine hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use desplazar_core::{ChildConstraint, Dock, Point, Rect, Size};
use desplazar_scroll::{canvas_size, resolve, ScrollbarMetrics, SlotChildren};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_both_overflow", |b| {
        b.iter(|| {
            resolve(
                black_box(Size::new(1200, 900)),
                black_box(Size::new(400, 300)),
                false,
                false,
                true,
                ScrollbarMetrics::default(),
            )
        });
    });

    c.bench_function("resolve_no_overflow", |b| {
        b.iter(|| {
            resolve(
                black_box(Size::new(100, 100)),
                black_box(Size::new(400, 300)),
                false,
                false,
                true,
                ScrollbarMetrics::default(),
            )
        });
    });
}

fn bench_canvas_size(c: &mut Criterion) {
    let mut children = SlotChildren::new();
    for i in 0..200 {
        children.push(
            Rect::new(0, i * 24, 320, 24),
            ChildConstraint::docked(Dock::Top),
        );
        children.push(
            Rect::new(i * 10, 0, 64, 64),
            ChildConstraint::floating(),
        );
    }

    c.bench_function("canvas_size_400_children", |b| {
        b.iter(|| {
            canvas_size(
                black_box(&children),
                Point::ORIGIN,
                Size::new(4, 4),
                Size::ZERO,
            )
        });
    });
}

criterion_group!(benches, bench_resolve, bench_canvas_size);
criterion_main!(benches);
