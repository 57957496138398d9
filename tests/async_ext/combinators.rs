use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use outcome_rail::async_ext::merge_async;
use outcome_rail::{Ensure, Error, Outcome};

async fn lookup(id: u32) -> Outcome<String> {
    if id == 0 {
        Outcome::failure(Error::with_type("not_found", "no user 0"))
    } else {
        Outcome::success(format!("user-{id}"))
    }
}

#[tokio::test]
async fn map_and_bind_async() {
    let doubled = Outcome::success(21).map_async(|x| async move { x * 2 }).await;
    assert_eq!(doubled, Outcome::success(42));

    let found = Outcome::success(7).bind_async(lookup).await;
    assert_eq!(found, Outcome::success(String::from("user-7")));

    let missing = Outcome::success(0).bind_async(lookup).await;
    assert_eq!(missing.error().map(Error::error_type), Some("not_found"));
}

#[tokio::test]
async fn failures_skip_async_steps() {
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let skipped = Outcome::<u32>::failure("early")
        .bind_async(move |id| {
            counter.fetch_add(1, Ordering::SeqCst);
            lookup(id)
        })
        .await;

    assert_eq!(skipped.into_error(), Some(Error::new("early")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn match_async_awaits_one_branch() {
    let described = Outcome::<u32>::failure("gone")
        .match_async(
            |v| async move { format!("value {v}") },
            |e| async move { format!("error {e}") },
        )
        .await;
    assert_eq!(described, "error gone");
}

#[tokio::test]
async fn tap_async_observes_both_tracks() {
    let seen = Arc::new(AtomicU32::new(0));

    let counter = seen.clone();
    let ok = Outcome::success(5_u32)
        .tap_async(move |v| {
            let v = *v;
            async move {
                counter.fetch_add(v, Ordering::SeqCst);
            }
        })
        .await;
    assert_eq!(ok, Outcome::success(5));

    let counter = seen.clone();
    let failed = Outcome::<u32>::failure("x")
        .tap_failure_async(move |e| {
            let count = e.count() as u32;
            async move {
                counter.fetch_add(count * 100, Ordering::SeqCst);
            }
        })
        .await;
    assert!(failed.is_failure());
    assert_eq!(seen.load(Ordering::SeqCst), 105);
}

#[tokio::test]
async fn try_recover_async_replaces_failure() {
    let recovered = Outcome::<String>::failure("cache miss")
        .try_recover_async(|_| lookup(3))
        .await;
    assert_eq!(recovered, Outcome::success(String::from("user-3")));
}

#[tokio::test]
async fn append_and_extend_async() {
    let both = Outcome::success((1_u32,))
        .append_async(|| lookup(1))
        .await;
    assert_eq!(both, Outcome::success((1, String::from("user-1"))));

    let extended = Outcome::success((2_u32,))
        .extend_async(|(id,)| lookup(*id))
        .await;
    assert_eq!(extended, Outcome::success((2, String::from("user-2"))));

    let failed = Outcome::success((0_u32,))
        .extend_async(|(id,)| lookup(*id))
        .await;
    assert_eq!(failed.into_error(), Some(Error::with_type("not_found", "no user 0")));
}

#[tokio::test]
async fn merge_async_collects_every_failure() {
    let merged = merge_async([lookup(1), lookup(0), lookup(2), lookup(0)]).await;
    let error = merged.into_error().unwrap();

    assert!(matches!(error, Error::Many(_)));
    assert_eq!(error.count(), 2);

    let all = merge_async([lookup(1), lookup(2)]).await;
    assert_eq!(all.into_value().map(|users| users.len()), Some(2));
}

#[tokio::test]
async fn ensure_async_validation() {
    let checked = Ensure::that_async(async { 12_u32 }, "age")
        .await
        .greater_than_or_equal_to(18)
        .result();
    assert_eq!(
        checked.into_error(),
        Some(Error::with_type("EnsureFailed", "Value {age} is less than requirement."))
    );

    let checked = Ensure::that(String::from("ada"), "name")
        .satisfies_async(|name| {
            let taken = name == "bob";
            async move { !taken }
        })
        .await
        .result();
    assert!(checked.is_success());

    let checked = Ensure::that(3, "slot")
        .satisfies_async(|_| async { false })
        .await
        .result();
    assert_eq!(
        checked.error().map(Error::message),
        Some("Value {slot} does not satisfy the requirement.")
    );
}
