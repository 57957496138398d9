use outcome_rail::prelude::*;

#[derive(Debug)]
struct Config {
    host: String,
    port: u16,
}

fn read_setting(key: &str) -> Outcome<String> {
    match key {
        "host" => Outcome::success(String::from("localhost")),
        "port" => Outcome::success(String::from("80a")),
        _ => Outcome::failure(Error::with_type("missing_setting", format!("{key} is not set"))),
    }
}

fn parse_port(raw: String) -> Outcome<u16> {
    // A foreign error becomes an exceptional failure.
    raw.parse::<u16>().into_outcome()
}

fn load_config() -> Outcome<Config> {
    (read_setting("host"), read_setting("port").bind(parse_port))
        .combine()
        .map(|(host, port)| Config { host, port })
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Short-circuiting pipeline
    println!("\n1. Short-circuiting:");
    let doubled = read_setting("timeout")
        .bind(|raw| raw.parse::<u32>().into_outcome())
        .map(|secs| secs * 2);
    match doubled.into_result() {
        Ok(secs) => println!("timeout: {secs}s"),
        Err(e) => println!("failed early: [{}] {}", e.error_type(), e),
    }

    // 2. Accumulating pipeline
    println!("\n2. Accumulating:");
    let config = load_config()
        .tap(|config| println!("loaded {config:?}"))
        .tap_failure(|e| println!("{} problem(s) found", e.count()));
    if let Some(error) = config.error() {
        for single in error {
            println!("  - {} ({})", single, if single.is_exceptional() { "fault" } else { "expected" });
        }
    }

    // 3. Recovery
    println!("\n3. Recovery:");
    let port = read_setting("port")
        .bind(parse_port)
        .try_recover(|_| Outcome::success(8080));
    println!("port: {port}");
}
