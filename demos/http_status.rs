//! HTTP Status Classification
//!
//! This example demonstrates classifying values with a match chain.
//!
//! Key concepts:
//! - Exact matches and `matches_one_of` sets
//! - Switching the comparator mid-chain with `using`
//! - Lazy results with `Outcome::deferred`
//! - A uniform fallback with `scratch`
//!
//! Run with: cargo run --example http_status
//! Set RUST_LOG=itch=trace to see each attempt being finalized.

use itch::{cases, create, Outcome};

fn classify(status: u16) -> String {
    create(status)
        .matches(200)
        .then("OK".to_string())
        .matches_one_of([301, 302, 307, 308])
        .then("Redirect".to_string())
        .using(|seed: &u16, class: &u16| seed / 100 == *class)
        .matches(4)
        .evaluate(Outcome::deferred(|| format!("Client error ({status})")))
        .matches(5)
        .evaluate(Outcome::deferred(|| format!("Server error ({status})")))
        .scratch()("Unrecognized".to_string())
}

fn retryable(status: u16) -> bool {
    cases!(status;
        one_of [429, 502, 503, 504] => true,
        _ => false,
    )
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== HTTP Status Classification ===\n");

    for status in [200, 302, 404, 429, 503, 999] {
        println!(
            "{status}: {:<22} retryable: {}",
            classify(status),
            retryable(status)
        );
    }

    println!("\n=== Example Complete ===");
}
