//! Benchmarks for the reader core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipbook::{
    estimate_height, paginate, ContentBlock, HeadlessWidget, Reader, SizeProfile, Viewport,
};

fn magazine(articles: usize) -> Vec<ContentBlock> {
    let body = "Quantum computers leverage qubits that can exist in multiple states at once, \
                which lets them explore many solutions in parallel. "
        .repeat(6);
    (0..articles)
        .flat_map(|i| {
            vec![
                ContentBlock::title(format!("Article {}", i)),
                ContentBlock::author("Md. Asif Khan"),
                ContentBlock::date("June 28, 2025"),
                ContentBlock::image("/placeholder.svg"),
                ContentBlock::heading("Introduction", 2),
                ContentBlock::paragraph(body.clone()),
                ContentBlock::quote("I will always be faster.", None),
                ContentBlock::list(["Cryptography", "Drug discovery", "Weather"]),
                ContentBlock::paragraph(body.clone()),
            ]
        })
        .collect()
}

fn bench_estimate_paragraph(c: &mut Criterion) {
    c.bench_function("estimate_paragraph", |b| {
        let profile = SizeProfile::desktop();
        let block = ContentBlock::paragraph("word ".repeat(400));
        b.iter(|| black_box(estimate_height(black_box(&block), &profile)));
    });
}

fn bench_paginate_small(c: &mut Criterion) {
    c.bench_function("paginate_small_issue", |b| {
        let blocks = magazine(4);
        let profile = SizeProfile::desktop();
        b.iter(|| black_box(paginate(black_box(&blocks), &profile)));
    });
}

fn bench_paginate_large(c: &mut Criterion) {
    c.bench_function("paginate_large_issue", |b| {
        let blocks = magazine(200);
        let profile = SizeProfile::mobile();
        b.iter(|| black_box(paginate(black_box(&blocks), &profile)));
    });
}

fn bench_resize_cycle(c: &mut Criterion) {
    c.bench_function("resize_desktop_mobile_cycle", |b| {
        let desktop = Viewport::new(1280.0, 900.0).unwrap();
        let mobile = Viewport::new(390.0, 844.0).unwrap();
        let mut reader = Reader::new(magazine(20), desktop, HeadlessWidget::new());

        b.iter(|| {
            reader.resize(mobile);
            reader.resize(desktop);
        });
    });
}

criterion_group!(
    benches,
    bench_estimate_paragraph,
    bench_paginate_small,
    bench_paginate_large,
    bench_resize_cycle,
);

criterion_main!(benches);
