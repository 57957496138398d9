use outcome_rail::prelude::*;

#[derive(Debug)]
struct Signup {
    username: String,
    email: String,
    age: u32,
    accepted_terms: bool,
}

#[derive(Debug)]
struct Account {
    username: String,
    email: String,
}

fn validate(signup: Signup) -> Outcome<Account> {
    let Signup { username, email, age, accepted_terms } = signup;

    (
        ensure!(username).not_whitespace().result(),
        ensure!(email)
            .not_empty()
            .satisfies_or(
                |email| email.contains('@'),
                |label: &str| Error::with_data("format", format!("{label} is malformed"), [("field", "email")]),
            )
            .result(),
        ensure!(age).greater_than_or_equal_to(18).result(),
        ensure!(accepted_terms).is_true().result(),
    )
        .combine()
        .map(|(username, email, _, _)| Account { username, email })
}

fn main() {
    let good = Signup {
        username: String::from("ada"),
        email: String::from("ada@example.com"),
        age: 36,
        accepted_terms: true,
    };
    let bad = Signup {
        username: String::from("   "),
        email: String::from("ada.example.com"),
        age: 12,
        accepted_terms: false,
    };

    for signup in [good, bad] {
        match validate(signup).into_result() {
            Ok(account) => println!("created {account:?}"),
            Err(errors) => {
                println!("rejected with {} error(s):", errors.count());
                for error in &errors {
                    println!("  [{}] {}", error.error_type(), error.message());
                }
            }
        }
    }
}
