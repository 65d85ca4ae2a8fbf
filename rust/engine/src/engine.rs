use crate::cards::{parse_row, Card};
use crate::errors::ScoringError;
use crate::foul;
use crate::hand::{self, HandEvaluation};
use crate::oracle::{RankOracle, StandardOracle};
use crate::rules::{self, ScoreRules};
use crate::settle::{self, Arrangement, Settlement};

/// Scoring facade bound to one rank oracle.
///
/// Holds no per-call state, so a single `Scorer` can be shared across
/// threads and used for any number of settlements.
///
/// # Examples
///
/// ```
/// use ofc_engine::engine::Scorer;
/// use ofc_engine::rules::ScoreRules;
/// use ofc_engine::settle::Arrangement;
///
/// let scorer = Scorer::new();
/// let good = Arrangement::parse("Ac Ad Kh Ks 2c", "Qc Qd 5h 6s 7c", "3c 4d 8h").unwrap();
/// let fouled = Arrangement::parse("2d 3h 5s 9c Jd", "Tc Td 5d 6d 7d", "3s 4h 9d").unwrap();
///
/// // three rows plus the default scoop of 3
/// assert_eq!(scorer.settle(&good, &fouled, None).unwrap(), 6);
/// assert_eq!(scorer.settle(&fouled, &good, Some(&ScoreRules::default())).unwrap(), -6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scorer<O = StandardOracle> {
    oracle: O,
}

impl Scorer<StandardOracle> {
    pub fn new() -> Self {
        Self::with_oracle(StandardOracle::new())
    }
}

impl<O: RankOracle> Scorer<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn parse_row(&self, notation: &str) -> Result<Vec<Card>, ScoringError> {
        parse_row(notation)
    }

    pub fn evaluate_back(&self, row: &[Card]) -> Result<HandEvaluation, ScoringError> {
        hand::evaluate_back(row, &self.oracle)
    }

    pub fn evaluate_mid(&self, row: &[Card]) -> Result<HandEvaluation, ScoringError> {
        hand::evaluate_mid(row, &self.oracle)
    }

    pub fn evaluate_front(&self, row: &[Card]) -> Result<HandEvaluation, ScoringError> {
        hand::evaluate_front(row)
    }

    pub fn is_foul(
        &self,
        back: &[Card],
        mid: &[Card],
        front: &[Card],
    ) -> Result<bool, ScoringError> {
        foul::is_foul(back, mid, front, &self.oracle)
    }

    pub fn compare_back(&self, a: &[Card], b: &[Card]) -> Result<i32, ScoringError> {
        settle::compare_back(a, b, &self.oracle)
    }

    pub fn compare_mid(&self, a: &[Card], b: &[Card]) -> Result<i32, ScoringError> {
        settle::compare_mid(a, b, &self.oracle)
    }

    pub fn compare_front(&self, a: &[Card], b: &[Card]) -> Result<i32, ScoringError> {
        settle::compare_front(a, b)
    }

    pub fn bonus_for_back(
        &self,
        row: &[Card],
        rules: Option<&ScoreRules>,
    ) -> Result<u32, ScoringError> {
        rules::bonus_for_back(row, rules, &self.oracle)
    }

    pub fn bonus_for_mid(
        &self,
        row: &[Card],
        rules: Option<&ScoreRules>,
    ) -> Result<u32, ScoringError> {
        rules::bonus_for_mid(row, rules, &self.oracle)
    }

    pub fn bonus_for_front(
        &self,
        row: &[Card],
        rules: Option<&ScoreRules>,
    ) -> Result<u32, ScoringError> {
        rules::bonus_for_front(row, rules)
    }

    pub fn settle(
        &self,
        a: &Arrangement,
        b: &Arrangement,
        rules: Option<&ScoreRules>,
    ) -> Result<i32, ScoringError> {
        settle::settle(a, b, rules, &self.oracle)
    }

    pub fn settle_detailed(
        &self,
        a: &Arrangement,
        b: &Arrangement,
        rules: Option<&ScoreRules>,
    ) -> Result<Settlement, ScoringError> {
        settle::settle_detailed(a, b, rules, &self.oracle)
    }
}
