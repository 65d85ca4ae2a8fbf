#![allow(dead_code)]

use ofc_engine::cards::{full_deck, parse_row, Card};
use ofc_engine::settle::Arrangement;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub fn arr(back: &str, mid: &str, front: &str) -> Arrangement {
    Arrangement::parse(back, mid, front).expect("valid notation")
}

/// Panics if any card appears twice across the given rows.
pub fn assert_one_deck(rows: &[&str]) {
    let mut seen = std::collections::HashSet::new();
    for row in rows {
        for card in parse_row(row).expect("valid notation") {
            assert!(seen.insert(card), "{card} repeated in {rows:?}");
        }
    }
}

/// Deals two arrangements from one seeded shuffle, so no card repeats.
pub fn deal_pair(seed: u64) -> (Arrangement, Arrangement) {
    let mut cards: Vec<Card> = full_deck();
    cards.shuffle(&mut ChaCha20Rng::seed_from_u64(seed));
    let take = |from: usize| {
        Arrangement::new(
            cards[from..from + 5].to_vec(),
            cards[from + 5..from + 10].to_vec(),
            cards[from + 10..from + 13].to_vec(),
        )
    };
    (take(0), take(13))
}
