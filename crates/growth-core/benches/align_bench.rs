use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growth_core::{align, compute_domain, Category, DomainOptions, Entity, SeriesStore, VisibilityMask};

fn gen_store(entities: usize, years: usize) -> SeriesStore {
    let list = (0..entities)
        .map(|i| {
            // staggered lengths and a gap every seventh year
            let len = years - (i % 5);
            let series = (0..len)
                .map(|y| if (y + i) % 7 == 3 { None } else { Some((y as f64 * 0.4).exp() * (1.0 + i as f64 * 0.01)) })
                .collect();
            let category = if i % 2 == 0 { Category::Hardware } else { Category::SoftwareAi };
            Entity::new(format!("e{i}"), category, series)
        })
        .collect();
    SeriesStore::new(list).expect("unique ids")
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");
    for &n in &[20usize, 200usize, 2_000usize] {
        let store = gen_store(n, 20);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &store, |b, s| {
            b.iter(|| black_box(align(s)));
        });
    }
    group.finish();
}

fn bench_domain(c: &mut Criterion) {
    let store = gen_store(200, 20);
    let mask = VisibilityMask::all_visible(&store);
    let opts = DomainOptions::default();
    c.bench_function("compute_domain_n200", |b| {
        b.iter(|| black_box(compute_domain(&store, &mask, &opts)));
    });
}

criterion_group!(benches, bench_align, bench_domain);
criterion_main!(benches);
