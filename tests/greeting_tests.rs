// Host-side tests for greeting selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod greeting {
    include!("../src/core/greeting.rs");
}
use greeting::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn picks_come_from_the_list() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        assert!(GREETINGS.contains(&pick(&mut rng)));
    }
}

#[test]
fn every_greeting_shows_up_eventually() {
    let mut rng = StdRng::seed_from_u64(42);
    let seen: HashSet<&str> = (0..2000).map(|_| pick(&mut rng)).collect();
    assert_eq!(seen.len(), GREETINGS.len());
}

#[test]
fn greetings_are_distinct_and_non_empty() {
    let unique: HashSet<&&str> = GREETINGS.iter().collect();
    assert_eq!(unique.len(), GREETINGS.len());
    assert!(GREETINGS.iter().all(|g| !g.trim().is_empty()));
}
