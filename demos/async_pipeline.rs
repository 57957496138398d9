use std::time::Duration;

use outcome_rail::async_ext::spawn_outcome;
use outcome_rail::prelude_async::*;

async fn fetch_user(id: u32) -> Outcome<String> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    if id == 0 {
        Outcome::failure(Error::with_type("not_found", "user 0 does not exist"))
    } else {
        Outcome::success(format!("user-{id}"))
    }
}

async fn fetch_quota(user: String) -> Outcome<u32> {
    Outcome::success(user.len() as u32 * 10)
}

#[tokio::main]
async fn main() {
    let quota = fetch_user(7)
        .map_outcome(|name| name.to_uppercase())
        .await
        .bind_async(fetch_quota)
        .await;
    println!("quota: {quota}");

    let users = merge_async([fetch_user(1), fetch_user(0), fetch_user(2)]).await;
    match users.into_result() {
        Ok(users) => println!("users: {users:?}"),
        Err(error) => println!("{} lookup(s) failed: {error}", error.count()),
    }

    let crashed = spawn_outcome(async {
        if quota_exceeded() {
            panic!("worker crashed");
        }
        Outcome::success(())
    })
    .await;
    println!("worker: {}", crashed.match_with(|_| String::from("ok"), |e| e.error_type().to_owned()));
}

fn quota_exceeded() -> bool {
    true
}
