//! Size resolution benchmarks.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panel_layout::{resolve_sizes, LayoutItem, SizeCache};

fn app_layout() -> LayoutItem {
    LayoutItem::row("root").with_size(1920.0, 1080.0).with_children([
        LayoutItem::column("sidebar")
            .with_width(250.0)
            .resizable_right()
            .with_children([
                LayoutItem::new("folders").with_height(600.0).resizable_bottom(),
                LayoutItem::new("tags"),
            ]),
        LayoutItem::new("note-list").with_width(300.0).resizable_right(),
        LayoutItem::column("main").with_children([
            LayoutItem::new("toolbar").with_height(40.0),
            LayoutItem::row("editors").with_children([
                LayoutItem::new("editor").flexible().with_width(600.0),
                LayoutItem::new("viewer").flexible().with_width(600.0),
            ]),
        ]),
    ])
}

fn wide_layout(columns: usize, rows: usize) -> LayoutItem {
    LayoutItem::row("root").with_size(10_000.0, 10_000.0).with_children((0..columns).map(|c| {
        LayoutItem::column(format!("col-{c}"))
            .with_children((0..rows).map(move |r| LayoutItem::new(format!("cell-{c}-{r}"))))
    }))
}

fn resolve_app(c: &mut Criterion) {
    let root = app_layout();
    c.bench_function("resolve_app", |b| {
        b.iter(|| resolve_sizes(black_box(&root), false))
    });
}

fn resolve_wide(c: &mut Criterion) {
    let root = wide_layout(32, 32);
    c.bench_function("resolve_wide", |b| {
        b.iter(|| resolve_sizes(black_box(&root), false))
    });
}

fn cache_hit(c: &mut Criterion) {
    let root = Arc::new(app_layout());
    let mut cache = SizeCache::new();
    c.bench_function("cache_hit", |b| {
        b.iter(|| cache.get_sizes(black_box(&root), false).map(|sizes| sizes.len()))
    });
}

criterion_group!(benches, resolve_app, resolve_wide, cache_hit);
criterion_main!(benches);
