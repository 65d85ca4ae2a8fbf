mod common;

use ofc_engine::cards::parse_row;
use ofc_engine::engine::Scorer;
use ofc_engine::errors::ScoringError;
use ofc_engine::hand::{Category, HandEvaluation, RowKind};
use ofc_engine::oracle::RankOracle;

use common::deal_pair;

#[test]
fn back_and_mid_agree_on_every_row() {
    let scorer = Scorer::new();
    for seed in 0..200 {
        let (a, b) = deal_pair(seed);
        for row in [&a.back, &a.mid, &b.back, &b.mid] {
            assert_eq!(
                scorer.evaluate_back(row).unwrap(),
                scorer.evaluate_mid(row).unwrap()
            );
        }
    }
}

#[test]
fn five_card_rows_check_length_before_the_oracle() {
    let scorer = Scorer::new();
    let row = parse_row("Ac Kd Qh").unwrap();
    assert_eq!(
        scorer.evaluate_mid(&row),
        Err(ScoringError::InvalidRowLength {
            kind: RowKind::Mid,
            expected: 5,
            actual: 3
        })
    );
}

#[test]
fn oracle_category_zero_is_an_invalid_hand() {
    let scorer = Scorer::with_oracle(|_: &[ofc_engine::cards::Card; 5]| HandEvaluation::invalid());
    let row = parse_row("Ac Kd Qh Js 9c").unwrap();
    assert_eq!(
        scorer.evaluate_back(&row),
        Err(ScoringError::InvalidHand {
            kind: RowKind::Back
        })
    );
}

#[test]
fn injected_oracle_is_consulted() {
    struct Always(Category);
    impl RankOracle for Always {
        fn evaluate5(&self, _: &[ofc_engine::cards::Card; 5]) -> HandEvaluation {
            HandEvaluation::new(self.0, 1)
        }
    }
    let scorer = Scorer::with_oracle(Always(Category::FullHouse));
    let row = parse_row("2c 3d 5h 7s 9c").unwrap();
    assert_eq!(scorer.evaluate_back(&row).unwrap().category, Category::FullHouse);
}

#[test]
fn unknown_tokens_fail_parsing() {
    let scorer = Scorer::new();
    assert_eq!(
        scorer.parse_row("Ac Kd Zz"),
        Err(ScoringError::InvalidCardToken {
            token: "Zz".to_string()
        })
    );
}
