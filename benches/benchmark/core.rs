use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::{Error, Outcome};
use std::hint::black_box;

pub fn bench_error_creation(c: &mut Criterion) {
    c.bench_function("core/error_new", |b| {
        b.iter(|| black_box(Error::with_type("database", "Connection pool exhausted")))
    });

    c.bench_function("core/error_with_data", |b| {
        b.iter(|| {
            black_box(Error::with_data(
                "database",
                "Connection pool exhausted",
                [("host", "db-primary-01.company.local"), ("retry_count", "3")],
            ))
        })
    });

    c.bench_function("core/error_from_fault", |b| {
        b.iter(|| black_box(Error::from_fault("not-a-number".parse::<u32>().unwrap_err())))
    });
}

pub fn bench_short_circuit(c: &mut Criterion) {
    c.bench_function("core/map_bind_success", |b| {
        b.iter(|| {
            black_box(
                Outcome::success(black_box(21))
                    .map(|x| x * 2)
                    .bind(|x| Outcome::success(x + 1))
                    .tap(|x| {
                        black_box(x);
                    }),
            )
        })
    });

    c.bench_function("core/map_bind_failure", |b| {
        b.iter(|| {
            black_box(
                Outcome::<i32>::failure(Error::new("early"))
                    .map(|x| x * 2)
                    .bind(|x| Outcome::success(x + 1))
                    .try_recover(|_| Outcome::success(0)),
            )
        })
    });

    c.bench_function("core/result_baseline", |b| {
        b.iter(|| {
            black_box(
                Ok::<i32, Error>(black_box(21))
                    .map(|x| x * 2)
                    .and_then(|x| Ok(x + 1)),
            )
        })
    });
}

pub fn bench_append_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/append_errors");

    for count in [2, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut total = Error::empty();
                for i in 0..count {
                    total += Error::new(format!("failure {i}"));
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

pub fn bench_equality(c: &mut Criterion) {
    let left: Error = (0..16).map(|i| Error::new(format!("e{i}"))).collect();
    let right = left.clone();

    c.bench_function("core/aggregate_eq", |b| b.iter(|| black_box(&left) == black_box(&right)));
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_error_creation,
        bench_short_circuit,
        bench_append_chain,
        bench_equality,
}
