use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growth_core::{dataset, summarize, GrowthChart};

fn bench_tooltip(c: &mut Criterion) {
    let store = dataset::companies().expect("builtin dataset");
    let mut chart = GrowthChart::from_store(store, dataset::default_visibility());
    chart.set_all(true);

    c.bench_function("summarize_all_years", |b| {
        b.iter(|| {
            for year in 0..chart.rows().len() {
                black_box(summarize(chart.rows(), chart.visibility(), year));
            }
        });
    });
    c.bench_function("chart_model_hovered", |b| {
        b.iter(|| black_box(chart.model(Some(7))));
    });
}

criterion_group!(benches, bench_tooltip);
criterion_main!(benches);
