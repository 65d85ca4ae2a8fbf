use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{format_row, parse_row, Card};
use crate::errors::ScoringError;
use crate::foul::is_foul;
use crate::hand::{compare_evaluations, evaluate_back, evaluate_front, evaluate_mid};
use crate::oracle::RankOracle;
use crate::rules::{bonus_for_back, bonus_for_front, bonus_for_mid, scoop_value, ScoreRules};

/// One player's three rows for a single comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    pub back: Vec<Card>,
    pub mid: Vec<Card>,
    pub front: Vec<Card>,
}

impl Arrangement {
    pub fn new(back: Vec<Card>, mid: Vec<Card>, front: Vec<Card>) -> Self {
        Self { back, mid, front }
    }

    /// Parses the three rows from card notation. Lengths are checked when the
    /// arrangement is evaluated, not here.
    pub fn parse(back: &str, mid: &str, front: &str) -> Result<Self, ScoringError> {
        Ok(Self {
            back: parse_row(back)?,
            mid: parse_row(mid)?,
            front: parse_row(front)?,
        })
    }

    pub fn is_foul(&self, oracle: &dyn RankOracle) -> Result<bool, ScoringError> {
        is_foul(&self.back, &self.mid, &self.front, oracle)
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            format_row(&self.back),
            format_row(&self.mid),
            format_row(&self.front)
        )
    }
}

/// Compares two back rows: 1 if `a` wins, -1 if `b` wins, 0 on a tie.
pub fn compare_back(a: &[Card], b: &[Card], oracle: &dyn RankOracle) -> Result<i32, ScoringError> {
    let (ea, eb) = (evaluate_back(a, oracle)?, evaluate_back(b, oracle)?);
    Ok(compare_evaluations(&ea, &eb) as i32)
}

/// Compares two mid rows, see [`compare_back`].
pub fn compare_mid(a: &[Card], b: &[Card], oracle: &dyn RankOracle) -> Result<i32, ScoringError> {
    let (ea, eb) = (evaluate_mid(a, oracle)?, evaluate_mid(b, oracle)?);
    Ok(compare_evaluations(&ea, &eb) as i32)
}

/// Compares two front rows, see [`compare_back`].
pub fn compare_front(a: &[Card], b: &[Card]) -> Result<i32, ScoringError> {
    let (ea, eb) = (evaluate_front(a)?, evaluate_front(b)?);
    Ok(compare_evaluations(&ea, &eb) as i32)
}

/// Which branch of the settlement applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    BothFoul,
    PlayerOneFoul,
    PlayerTwoFoul,
    Played,
}

/// Signed per-row results of a settlement, from player one's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub back: i32,
    pub mid: i32,
    pub front: i32,
    pub scoop: i32,
    pub outcome: Outcome,
}

impl Settlement {
    fn both_foul() -> Self {
        Self {
            back: 0,
            mid: 0,
            front: 0,
            scoop: 0,
            outcome: Outcome::BothFoul,
        }
    }

    /// Sum of the rows and the scoop.
    ///
    /// Settlements returned by [`settle_detailed`] always fit; use
    /// [`Settlement::checked_total`] for hand-built values.
    pub fn total(&self) -> i32 {
        self.back + self.mid + self.front + self.scoop
    }

    pub fn checked_total(&self) -> Option<i32> {
        self.back
            .checked_add(self.mid)?
            .checked_add(self.front)?
            .checked_add(self.scoop)
    }

    fn negated(self, outcome: Outcome) -> Result<Self, ScoringError> {
        let neg = |v: i32| v.checked_neg().ok_or(ScoringError::ScoreOverflow);
        Ok(Self {
            back: neg(self.back)?,
            mid: neg(self.mid)?,
            front: neg(self.front)?,
            scoop: neg(self.scoop)?,
            outcome,
        })
    }
}

// a won row is worth one point plus the winner's royalty
fn row_won(bonus: u32) -> Result<i32, ScoringError> {
    i32::try_from(bonus)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or(ScoringError::ScoreOverflow)
}

// one player fouled: the other wins every row and the scoop
fn sweep(
    winner: &Arrangement,
    rules: Option<&ScoreRules>,
    oracle: &dyn RankOracle,
) -> Result<Settlement, ScoringError> {
    Ok(Settlement {
        back: row_won(bonus_for_back(&winner.back, rules, oracle)?)?,
        mid: row_won(bonus_for_mid(&winner.mid, rules, oracle)?)?,
        front: row_won(bonus_for_front(&winner.front, rules)?)?,
        scoop: scoop_value(rules),
        outcome: Outcome::PlayerTwoFoul,
    })
}

// the winner of a row also collects that row's royalty
fn with_bonus(
    outcome: i32,
    bonus_a: impl FnOnce() -> Result<u32, ScoringError>,
    bonus_b: impl FnOnce() -> Result<u32, ScoringError>,
) -> Result<i32, ScoringError> {
    Ok(match outcome {
        1 => row_won(bonus_a()?)?,
        -1 => -row_won(bonus_b()?)?,
        _ => 0,
    })
}

/// Settles two arrangements and reports every row.
///
/// See [`settle`] for the scoring rules.
///
/// # Errors
///
/// As [`settle`].
pub fn settle_detailed(
    a: &Arrangement,
    b: &Arrangement,
    rules: Option<&ScoreRules>,
    oracle: &dyn RankOracle,
) -> Result<Settlement, ScoringError> {
    let a_foul = a.is_foul(oracle)?;
    let b_foul = b.is_foul(oracle)?;

    let settlement = match (a_foul, b_foul) {
        (true, true) => Settlement::both_foul(),
        (false, true) => sweep(a, rules, oracle)?,
        (true, false) => sweep(b, rules, oracle)?.negated(Outcome::PlayerOneFoul)?,
        (false, false) => {
            let back = with_bonus(
                compare_back(&a.back, &b.back, oracle)?,
                || bonus_for_back(&a.back, rules, oracle),
                || bonus_for_back(&b.back, rules, oracle),
            )?;
            let mid = with_bonus(
                compare_mid(&a.mid, &b.mid, oracle)?,
                || bonus_for_mid(&a.mid, rules, oracle),
                || bonus_for_mid(&b.mid, rules, oracle),
            )?;
            let front = with_bonus(
                compare_front(&a.front, &b.front)?,
                || bonus_for_front(&a.front, rules),
                || bonus_for_front(&b.front, rules),
            )?;
            let rows = [back, mid, front];
            let scoop = if rows.iter().all(|&r| r > 0) {
                scoop_value(rules)
            } else if rows.iter().all(|&r| r < 0) {
                scoop_value(rules)
                    .checked_neg()
                    .ok_or(ScoringError::ScoreOverflow)?
            } else {
                0
            };
            Settlement {
                back,
                mid,
                front,
                scoop,
                outcome: Outcome::Played,
            }
        }
    };
    let total = settlement
        .checked_total()
        .ok_or(ScoringError::ScoreOverflow)?;

    tracing::debug!(
        outcome = ?settlement.outcome,
        back = settlement.back,
        mid = settlement.mid,
        front = settlement.front,
        scoop = settlement.scoop,
        total,
        "settled arrangements"
    );
    Ok(settlement)
}

/// Net score of `a` against `b`; positive favours `a`.
///
/// - both players foul: 0
/// - one player fouls: the other wins every row, collects their own
///   royalties and the scoop
/// - otherwise each row goes to the stronger hand plus its royalty, ties
///   score nothing, and winning all three rows adds the scoop
///
/// # Errors
///
/// Any row, rules or consistency error met along the way, and
/// [`ScoringError::ScoreOverflow`] when the score leaves `i32`.
///
/// # Examples
///
/// ```
/// use ofc_engine::oracle::StandardOracle;
/// use ofc_engine::settle::{settle, Arrangement};
///
/// let a = Arrangement::parse("Ac Ad Kh Ks 2c", "Qc Qd 5h 6s 7c", "3c 4d 8h").unwrap();
/// let b = Arrangement::parse("Jc Jd 9h 9s 2d", "Tc Td 5d 6d 7d", "3h 4h 9c").unwrap();
/// // a wins back and mid, b wins front
/// assert_eq!(settle(&a, &b, None, &StandardOracle).unwrap(), 1);
/// ```
pub fn settle(
    a: &Arrangement,
    b: &Arrangement,
    rules: Option<&ScoreRules>,
    oracle: &dyn RankOracle,
) -> Result<i32, ScoringError> {
    settle_detailed(a, b, rules, oracle).map(|s| s.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::StandardOracle;

    #[test]
    fn rows_compare_three_ways() {
        let o = StandardOracle;
        let pair = parse_row("Ac Ad 2h 3s 7c").unwrap();
        let high = parse_row("Ah Kd 9h 8s 3c").unwrap();
        assert_eq!(compare_back(&pair, &high, &o).unwrap(), 1);
        assert_eq!(compare_mid(&high, &pair, &o).unwrap(), -1);
        assert_eq!(compare_back(&pair, &pair, &o).unwrap(), 0);
    }

    #[test]
    fn front_rows_compare_three_ways() {
        let a = parse_row("Qc Qd 2h").unwrap();
        let b = parse_row("Qh Qs 3c").unwrap();
        assert_eq!(compare_front(&a, &b).unwrap(), -1);
        assert_eq!(compare_front(&b, &a).unwrap(), 1);
        assert_eq!(compare_front(&a, &a).unwrap(), 0);
    }

    #[test]
    fn row_bonus_follows_the_winner() {
        assert_eq!(with_bonus(1, || Ok(4), || Ok(9)).unwrap(), 5);
        assert_eq!(with_bonus(-1, || Ok(4), || Ok(9)).unwrap(), -10);
        assert_eq!(
            with_bonus(0, || Err(ScoringError::InternalInconsistency("x")), || Ok(9)).unwrap(),
            0
        );
    }

    #[test]
    fn oversized_royalty_is_an_overflow_not_a_wrapped_score() {
        assert_eq!(row_won(i32::MAX as u32 - 1), Ok(i32::MAX));
        assert_eq!(row_won(i32::MAX as u32), Err(ScoringError::ScoreOverflow));
        assert_eq!(row_won(3_000_000_000), Err(ScoringError::ScoreOverflow));
        assert_eq!(
            with_bonus(-1, || Ok(0), || Ok(3_000_000_000)),
            Err(ScoringError::ScoreOverflow)
        );
    }

    #[test]
    fn checked_total_rejects_sums_outside_i32() {
        let s = Settlement {
            back: i32::MAX,
            mid: 1,
            front: 0,
            scoop: 0,
            outcome: Outcome::Played,
        };
        assert_eq!(s.checked_total(), None);
        assert_eq!(Settlement { mid: -1, ..s }.checked_total(), Some(i32::MAX - 1));
    }

    #[test]
    fn arrangement_display_uses_card_notation() {
        let a = Arrangement::parse("Ac Ad Kh Ks 2c", "Qc Qd 5h 6s 7c", "3c 4d 8h").unwrap();
        assert_eq!(a.to_string(), "Ac Ad Kh Ks 2c / Qc Qd 5h 6s 7c / 3c 4d 8h");
    }
}
