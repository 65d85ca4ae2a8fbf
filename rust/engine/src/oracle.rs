//! 5-card rank oracle.
//!
//! The scoring core only needs a category and a within-category rank for the
//! back and mid rows, so any evaluator can be plugged in through
//! [`RankOracle`]. [`StandardOracle`] is the evaluator used by default.

use crate::cards::Card;
use crate::hand::{Category, HandEvaluation};

/// Ranks exactly five cards.
///
/// Implementations must be pure: the same cards always yield the same
/// evaluation. A category of [`Category::Invalid`] tells the caller the cards
/// do not form a legal hand.
pub trait RankOracle: Send + Sync {
    fn evaluate5(&self, cards: &[Card; 5]) -> HandEvaluation;
}

impl<F> RankOracle for F
where
    F: Fn(&[Card; 5]) -> HandEvaluation + Send + Sync,
{
    fn evaluate5(&self, cards: &[Card; 5]) -> HandEvaluation {
        self(cards)
    }
}

/// Standard poker ranking for five cards.
///
/// Straights (and straight flushes) are numbered from the wheel (1) to
/// ace-high (10), so a royal flush evaluates to straight flush / 10. Every
/// other category packs its kickers, grouped by multiplicity then rank, into
/// a base-14 number.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardOracle;

impl StandardOracle {
    pub fn new() -> Self {
        StandardOracle
    }
}

impl RankOracle for StandardOracle {
    fn evaluate5(&self, cards: &[Card; 5]) -> HandEvaluation {
        evaluate_five(cards)
    }
}

pub fn evaluate_five(cards: &[Card; 5]) -> HandEvaluation {
    if cards.iter().any(|c| !c.is_valid()) {
        return HandEvaluation::invalid();
    }
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.code();
        if seen & bit != 0 {
            return HandEvaluation::invalid();
        }
        seen |= bit;
    }

    let mut rank_counts = [0u8; 14]; // 1..13 used
    let mut rank_mask = 0u16;
    for c in cards {
        let r = c.rank_value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
    }
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high_from_mask(rank_mask);

    if let Some(high) = straight {
        let category = if flush {
            Category::StraightFlush
        } else {
            Category::Straight
        };
        return HandEvaluation::new(category, u32::from(high - 3));
    }

    let groups = group_ranks(&rank_counts);
    let kickers: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
    let shape: Vec<u8> = groups.iter().map(|&(n, _)| n).collect();

    let category = match shape.as_slice() {
        [4, 1] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        _ if flush => Category::Flush,
        [3, 1, 1] => Category::ThreeOfAKind,
        [2, 2, 1] => Category::TwoPair,
        [2, 1, 1, 1] => Category::OnePair,
        _ => Category::HighCard,
    };
    HandEvaluation::new(category, encode_kickers(&kickers))
}

// (count, rank) pairs, largest group first, higher rank first within a group size
fn group_ranks(rank_counts: &[u8; 14]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (1..=13u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn encode_kickers(kickers: &[u8]) -> u32 {
    let mut value = 0u32;
    for i in 0..5 {
        value = value * 14 + u32::from(kickers.get(i).copied().unwrap_or(0));
    }
    value
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // ace also plays low, one step under the deuce
    if (m & (1 << 13)) != 0 {
        m |= 1;
    }
    // sliding 5-bit window from ace-high down to five-high
    for high in (4..=13u16).rev() {
        let window = 0b1_1111u16 << (high - 4);
        if (m & window) == window {
            return Some(high as u8);
        }
    }
    None
}
