use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ms_prob::beta::Beta;

fn bench_beta_evaluation(c: &mut Criterion) {
    let d = Beta::new(2.2, 3.3).unwrap();
    let xs: Vec<f64> = (0..10_000).map(|i| ((i as f64) + 0.5) / 10_000.0).collect();

    c.bench_function("beta_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += d.pdf(x);
            }
            black_box(acc)
        })
    });

    c.bench_function("beta_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += d.cdf(x);
            }
            black_box(acc)
        })
    });

    let ps: Vec<f64> = (1..100).map(|i| (i as f64) / 100.0).collect();
    c.bench_function("beta_quantile_99", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &ps {
                acc += d.quantile(p).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("beta_moments", |b| {
        b.iter(|| black_box(d.summary()))
    });
}

criterion_group!(benches, bench_beta_evaluation);
criterion_main!(benches);
