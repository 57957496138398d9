use crate::common::{
    configure_criterion, realistic_forms, validate_age, validate_email, validate_username,
    SignupForm,
};
use criterion::{criterion_group, Criterion};
use outcome_rail::{ensure, Combine, Ensure, Outcome};
use std::hint::black_box;

fn validate_form(form: &SignupForm) -> Outcome<(String, String, u32)> {
    (
        validate_username(&form.username),
        validate_email(&form.email),
        validate_age(form.age),
    )
        .combine()
}

pub fn bench_ensure_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation/ensure");

    group.bench_function("passing_chain", |b| {
        b.iter(|| {
            let value = black_box(42_u32);
            black_box(
                ensure!(value)
                    .greater_than(0)
                    .less_than_or_equal_to(100)
                    .not_equal_to(13)
                    .result(),
            )
        })
    });

    group.bench_function("failing_chain", |b| {
        b.iter(|| {
            let value = black_box(0_u32);
            black_box(
                Ensure::that(value, "quantity")
                    .greater_than(0)
                    .less_than_or_equal_to(100)
                    .result(),
            )
        })
    });

    group.finish();
}

pub fn bench_form_validation(c: &mut Criterion) {
    c.bench_function("validation/forms_realistic", |b| {
        b.iter(|| {
            let failures = realistic_forms()
                .iter()
                .map(validate_form)
                .filter(Outcome::is_failure)
                .count();
            black_box(failures)
        })
    });
}

criterion_group! {
    name = validation_benches;
    config = configure_criterion();
    targets = bench_ensure_chain, bench_form_validation,
}
