use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use outcome_rail::Error;
use std::hint::black_box;

pub fn bench_error_display(c: &mut Criterion) {
    let all: Error = (0..8).map(|i| Error::new(format!("failure {i}"))).collect();

    c.bench_function("features/aggregate_to_string", |b| b.iter(|| black_box(all.to_string())));
}

pub fn bench_serialization(c: &mut Criterion) {
    #[cfg(feature = "serde")]
    {
        let err = Error::with_data(
            "rate_limit",
            "API rate limit exceeded",
            [("endpoint", "/api/v2/users"), ("retry_after", "60")],
        ) + Error::new("quota exhausted");
        let json = serde_json::to_string(&err).unwrap();

        c.bench_function("serde/error_serialize", |b| {
            b.iter(|| black_box(serde_json::to_string(black_box(&err)).unwrap()))
        });

        c.bench_function("serde/error_deserialize", |b| {
            b.iter(|| black_box(serde_json::from_str::<Error>(black_box(&json)).unwrap()))
        });
    }
    #[cfg(not(feature = "serde"))]
    let _ = c;
}

pub fn bench_async_pipeline(c: &mut Criterion) {
    #[cfg(feature = "async")]
    {
        use outcome_rail::prelude_async::*;
        use tokio::runtime::Runtime;

        let rt = Runtime::new().unwrap();
        let mut group = c.benchmark_group("async/pipeline");

        group.bench_function("success_path", |b| {
            b.iter(|| {
                rt.block_on(async {
                    let outcome = async { Outcome::success(20) }
                        .map_outcome(|v| v + 1)
                        .await
                        .bind_async(|v| async move { Outcome::success(v * 2) })
                        .await;
                    black_box(outcome)
                })
            })
        });

        group.bench_function("merge_async", |b| {
            b.iter(|| {
                rt.block_on(async {
                    let futures = (0..16).map(|i| async move {
                        if i % 4 == 0 {
                            Outcome::failure(Error::new("skipped"))
                        } else {
                            Outcome::success(i)
                        }
                    });
                    black_box(merge_async(futures).await)
                })
            })
        });

        group.finish();
    }
    #[cfg(not(feature = "async"))]
    let _ = c;
}

criterion_group! {
    name = feature_benches;
    config = configure_criterion();
    targets = bench_error_display, bench_serialization, bench_async_pipeline,
}
