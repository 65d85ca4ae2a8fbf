use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{sorted_ranks, Card};
use crate::errors::ScoringError;
use crate::oracle::RankOracle;

/// Hand categories shared by the 5-card rows and the 3-card front row.
///
/// The front row can only ever be [`Category::HighCard`],
/// [`Category::OnePair`] or [`Category::ThreeOfAKind`], which keeps it on the
/// same numeric scale the foul check compares against.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    /// Reported by the oracle for cards that do not form a legal hand
    Invalid = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Row position within an arrangement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Back,
    Mid,
    Front,
}

impl RowKind {
    /// Number of cards a row in this position holds.
    pub fn card_count(self) -> usize {
        match self {
            RowKind::Back | RowKind::Mid => 5,
            RowKind::Front => 3,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowKind::Back => "back",
            RowKind::Mid => "mid",
            RowKind::Front => "front",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    // only comparable between evaluations of the same category
    pub tiebreak_rank: u32,
}

impl HandEvaluation {
    pub fn new(category: Category, tiebreak_rank: u32) -> Self {
        Self {
            category,
            tiebreak_rank,
        }
    }

    pub fn invalid() -> Self {
        Self::new(Category::Invalid, 0)
    }

    pub fn is_royal_flush(&self) -> bool {
        self.category == Category::StraightFlush && self.tiebreak_rank == 10
    }
}

/// Orders two evaluations by category, then by tiebreak rank.
pub fn compare_evaluations(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak_rank.cmp(&b.tiebreak_rank),
        ord => ord,
    }
}

fn check_len(kind: RowKind, row: &[Card]) -> Result<(), ScoringError> {
    if row.len() != kind.card_count() {
        return Err(ScoringError::InvalidRowLength {
            kind,
            expected: kind.card_count(),
            actual: row.len(),
        });
    }
    Ok(())
}

/// Classifies a 3-card front row.
///
/// Tiebreak ranks:
/// - three of a kind: the triple rank
/// - one pair: `pair * 13 + kicker`
/// - high card: `r2 * 169 + r1 * 13 + r0` with `r2` the highest rank
///
/// # Errors
///
/// Returns [`ScoringError::InvalidRowLength`] unless the row has exactly 3 cards.
///
/// # Examples
///
/// ```
/// use ofc_engine::cards::parse_row;
/// use ofc_engine::hand::{evaluate_front, Category};
///
/// // ranks [2, 2, 5]
/// let e = evaluate_front(&parse_row("3c 3d 6h").unwrap()).unwrap();
/// assert_eq!(e.category, Category::OnePair);
/// assert_eq!(e.tiebreak_rank, 31);
/// ```
pub fn evaluate_front(row: &[Card]) -> Result<HandEvaluation, ScoringError> {
    check_len(RowKind::Front, row)?;
    let r: Vec<u32> = sorted_ranks(row).into_iter().map(u32::from).collect();

    if r[0] == r[2] {
        return Ok(HandEvaluation::new(Category::ThreeOfAKind, r[0]));
    }
    if r[0] == r[1] || r[1] == r[2] {
        // the middle rank always belongs to the pair
        let kicker = if r[0] == r[1] { r[2] } else { r[0] };
        return Ok(HandEvaluation::new(Category::OnePair, r[1] * 13 + kicker));
    }
    Ok(HandEvaluation::new(
        Category::HighCard,
        r[2] * 169 + r[1] * 13 + r[0],
    ))
}

fn evaluate_five(
    kind: RowKind,
    row: &[Card],
    oracle: &dyn RankOracle,
) -> Result<HandEvaluation, ScoringError> {
    let cards: &[Card; 5] = row
        .try_into()
        .map_err(|_| ScoringError::InvalidRowLength {
            kind,
            expected: 5,
            actual: row.len(),
        })?;
    let eval = oracle.evaluate5(cards);
    if eval.category == Category::Invalid {
        return Err(ScoringError::InvalidHand { kind });
    }
    Ok(eval)
}

/// Evaluates a 5-card back row through the oracle.
///
/// # Errors
///
/// [`ScoringError::InvalidRowLength`] unless the row has 5 cards, and
/// [`ScoringError::InvalidHand`] when the oracle rejects the cards.
pub fn evaluate_back(
    row: &[Card],
    oracle: &dyn RankOracle,
) -> Result<HandEvaluation, ScoringError> {
    evaluate_five(RowKind::Back, row, oracle)
}

/// Same contract as [`evaluate_back`].
pub fn evaluate_mid(
    row: &[Card],
    oracle: &dyn RankOracle,
) -> Result<HandEvaluation, ScoringError> {
    evaluate_five(RowKind::Mid, row, oracle)
}
