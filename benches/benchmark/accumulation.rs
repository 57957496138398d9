use crate::common::{configure_criterion, realistic_forms, validate_age, validate_email};
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::{Combine, Error, Outcome};
use std::hint::black_box;

pub fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulation/combine");

    group.bench_function("all_success", |b| {
        b.iter(|| {
            black_box(
                (
                    Outcome::success(black_box(1)),
                    Outcome::success("two"),
                    Outcome::success(3.0),
                    Outcome::unit(),
                )
                    .combine(),
            )
        })
    });

    group.bench_function("mixed_failures", |b| {
        b.iter(|| {
            black_box(
                (
                    Outcome::<i32>::failure(Error::new("first")),
                    Outcome::success("two"),
                    Outcome::<f64>::failure(Error::new("third")),
                    Outcome::<()>::failure(Error::new("fourth")),
                )
                    .combine(),
            )
        })
    });

    group.finish();
}

pub fn bench_merge_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulation/merge");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("ages", size), &size, |b, &size| {
            b.iter(|| {
                let merged = Outcome::merge(
                    realistic_forms().iter().take(size).map(|form| validate_age(form.age)),
                );
                black_box(merged)
            })
        });
    }

    group.bench_function("collect_emails", |b| {
        b.iter(|| {
            let emails: Outcome<Vec<String>> = realistic_forms()
                .iter()
                .map(|form| validate_email(&form.email))
                .collect();
            black_box(emails)
        })
    });

    group.finish();
}

criterion_group! {
    name = accumulation_benches;
    config = configure_criterion();
    targets = bench_combine, bench_merge_scaling,
}
