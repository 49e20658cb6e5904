use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sinergi::{landing_page, render, AppConfig, EmbedRequest};

fn bench_render_embed(c: &mut Criterion) {
    let req = EmbedRequest::new("https://sinergi.elpeef.com/", 5, -110, 800).unwrap();
    c.bench_function("render_embed", |b| b.iter(|| render(black_box(&req))));
}

fn bench_render_page(c: &mut Criterion) {
    let cfg = AppConfig::default();
    c.bench_function("render_landing_page", |b| {
        b.iter(|| landing_page(black_box(&cfg)).unwrap().render())
    });
}

criterion_group!(benches, bench_render_embed, bench_render_page);
criterion_main!(benches);
