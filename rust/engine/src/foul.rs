//! Arrangement validity.
//!
//! A player fouls when the rows are not ordered back > mid >= front. Back
//! against mid is a plain evaluation comparison. Mid against front can fall
//! into the same category, and then the rows are compared card by card from
//! their sorted ranks, since the two tiebreak scales are not comparable.

use std::cmp::Ordering;

use crate::cards::{sorted_ranks, Card};
use crate::errors::ScoringError;
use crate::hand::{evaluate_back, evaluate_front, evaluate_mid, Category};
use crate::oracle::RankOracle;

/// Decides whether one player's arrangement fouls.
///
/// # Errors
///
/// Any evaluation error for the three rows, and
/// [`ScoringError::InternalInconsistency`] when mid and front both hold
/// three of a kind of the same rank, which a single deck cannot produce.
///
/// # Examples
///
/// ```
/// use ofc_engine::cards::parse_row;
/// use ofc_engine::foul::is_foul;
/// use ofc_engine::oracle::StandardOracle;
///
/// let back = parse_row("Ac Kd 9h 8s 3c").unwrap();
/// let mid = parse_row("2c 2d 5h 6s 7c").unwrap();
/// let front = parse_row("4c 4d Jh").unwrap();
/// assert!(is_foul(&back, &mid, &front, &StandardOracle).unwrap());
/// ```
pub fn is_foul(
    back: &[Card],
    mid: &[Card],
    front: &[Card],
    oracle: &dyn RankOracle,
) -> Result<bool, ScoringError> {
    let back_eval = evaluate_back(back, oracle)?;
    let mid_eval = evaluate_mid(mid, oracle)?;
    let front_eval = evaluate_front(front)?;

    match back_eval.category.cmp(&mid_eval.category) {
        Ordering::Less => {
            tracing::trace!(reason = "back category below mid", "foul");
            return Ok(true);
        }
        Ordering::Equal if back_eval.tiebreak_rank <= mid_eval.tiebreak_rank => {
            tracing::trace!(reason = "back not stronger than mid", "foul");
            return Ok(true);
        }
        _ => {}
    }

    match mid_eval.category.cmp(&front_eval.category) {
        Ordering::Less => {
            tracing::trace!(reason = "mid category below front", "foul");
            return Ok(true);
        }
        Ordering::Greater => return Ok(false),
        Ordering::Equal => {}
    }

    let mid_ranks = sorted_ranks(mid);
    let front_ranks = sorted_ranks(front);
    let fouled = match mid_eval.category {
        Category::HighCard => high_card_foul(&mid_ranks, &front_ranks),
        Category::OnePair => one_pair_foul(&mid_ranks, &front_ranks),
        Category::ThreeOfAKind => trips_foul(&mid_ranks, &front_ranks)?,
        _ => {
            tracing::warn!(
                category = ?mid_eval.category,
                "mid and front share a 5-card-only category"
            );
            return Err(ScoringError::InternalInconsistency(
                "front row evaluated to a 5-card-only category",
            ));
        }
    };
    if fouled {
        tracing::trace!(reason = "front outkicks mid", "foul");
    }
    Ok(fouled)
}

// Mid's top three ranks against front's three, highest first.
fn high_card_foul(mid: &[u8], front: &[u8]) -> bool {
    for i in (2..=4).rev() {
        match mid[i].cmp(&front[i - 2]) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
    }
    false
}

fn pair_rank(sorted: &[u8]) -> Option<u8> {
    sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
}

// Pair ranks first. On equal pairs only mid's best kicker is held against
// front's single kicker.
fn one_pair_foul(mid: &[u8], front: &[u8]) -> bool {
    let (Some(mid_pair), Some(front_pair)) = (pair_rank(mid), pair_rank(front)) else {
        return false;
    };
    if mid_pair != front_pair {
        return mid_pair < front_pair;
    }
    let mid_kicker = mid.iter().copied().filter(|&r| r != mid_pair).max();
    let front_kicker = front.iter().copied().find(|&r| r != front_pair);
    match (mid_kicker, front_kicker) {
        (Some(m), Some(f)) => m < f,
        _ => false,
    }
}

fn trips_foul(mid: &[u8], front: &[u8]) -> Result<bool, ScoringError> {
    // sorted 5 cards holding trips always have the triple in the middle slot
    let mid_trips = mid[2];
    let front_trips = front[0];
    match mid_trips.cmp(&front_trips) {
        Ordering::Greater => Ok(false),
        Ordering::Less => Ok(true),
        Ordering::Equal => {
            tracing::warn!(rank = mid_trips, "duplicate three of a kind in mid and front");
            Err(ScoringError::InternalInconsistency(
                "duplicate three of a kind in mid and front",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_row;
    use crate::oracle::StandardOracle;

    fn foul(back: &str, mid: &str, front: &str) -> Result<bool, ScoringError> {
        is_foul(
            &parse_row(back).unwrap(),
            &parse_row(mid).unwrap(),
            &parse_row(front).unwrap(),
            &StandardOracle,
        )
    }

    #[test]
    fn high_card_walk_stops_at_first_difference() {
        assert!(high_card_foul(&[1, 2, 4, 9, 11], &[3, 9, 12]));
        assert!(!high_card_foul(&[1, 2, 4, 9, 12], &[3, 8, 12]));
        assert!(foul("Ac Ad Kh Ks 2c", "2d 3h 5s Tc Qd", "4c Th Kc").unwrap());
        assert!(!foul("Ac Ad Kh Ks 2c", "2d 3h 5s Tc Kd", "4c Th Qs").unwrap());
    }

    #[test]
    fn identical_high_cards_do_not_foul() {
        assert!(!foul("Ac Ad Kh Ks 2c", "2d 3h 5s Tc Qd", "5c Th Qs").unwrap());
    }

    #[test]
    fn only_three_mid_ranks_are_compared() {
        // mid's two lowest cards never matter
        assert!(!high_card_foul(&[1, 2, 5, 9, 12], &[5, 9, 12]));
    }

    #[test]
    fn pair_rank_decides_before_kickers() {
        assert!(one_pair_foul(&[5, 5, 11, 12, 13], &[6, 6, 1]));
        assert!(!one_pair_foul(&[1, 2, 3, 7, 7], &[6, 6, 13]));
    }

    #[test]
    fn equal_pairs_use_mids_best_kicker_only() {
        assert!(one_pair_foul(&[1, 2, 6, 6, 8], &[6, 6, 9]));
        assert!(!one_pair_foul(&[1, 2, 6, 6, 9], &[6, 6, 9]));
        assert!(!one_pair_foul(&[1, 2, 6, 6, 13], &[6, 6, 9]));
    }

    #[test]
    fn trips_compare_by_rank() {
        assert_eq!(trips_foul(&[1, 9, 9, 9, 13], &[5, 5, 5]), Ok(false));
        assert_eq!(trips_foul(&[1, 4, 4, 4, 13], &[5, 5, 5]), Ok(true));
        assert!(matches!(
            trips_foul(&[5, 5, 5, 9, 13], &[5, 5, 5]),
            Err(ScoringError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn back_must_beat_mid_strictly() {
        assert!(foul("Ac Kd 9h 8s 3c", "Ad Kh 9s 8c 3d", "2c 4d 6h").unwrap());
        assert!(foul("Ac Kd 9h 8s 3c", "2c 2d 5h 6s 7c", "4c 3d Jh").unwrap());
    }

    #[test]
    fn stronger_mid_category_short_circuits() {
        assert!(!foul("9c 9d 9h 9s 2c", "Jc Jd 4h 4s Ac", "Ah Ad Ks").unwrap());
    }

    #[test]
    fn front_trips_over_mid_two_pair_fouls() {
        assert!(foul("9c 9d 9h 9s 2c", "Jc Jd 4h 4s Ac", "2d 2h 2s").unwrap());
    }

    #[test]
    fn row_errors_propagate() {
        assert!(matches!(
            foul("Ac Kd 9h 8s", "2c 2d 5h 6s 7c", "4c 3d Jh"),
            Err(ScoringError::InvalidRowLength { .. })
        ));
        assert!(matches!(
            foul("Ac Ac 9h 8s 3c", "2c 2d 5h 6s 7c", "4c 3d Jh"),
            Err(ScoringError::InvalidHand { .. })
        ));
    }
}
