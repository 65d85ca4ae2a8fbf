//! # ofc-engine: Open-Face Chinese Poker Scoring
//!
//! Scores one arrangement against another in open-face Chinese poker. Each
//! player sets thirteen cards into a 5-card back row, a 5-card mid row and a
//! 3-card front row; the rows are compared position by position and combined
//! with royalty bonuses and a scoop into one signed score.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card codes, ranks, suits and row notation
//! - [`oracle`] - The pluggable 5-card [`oracle::RankOracle`] and its standard implementation
//! - [`hand`] - Row evaluation, including the 3-card front evaluator
//! - [`foul`] - Arrangement validity (back > mid >= front)
//! - [`rules`] - Royalty tables, scoop configuration and bonus calculation
//! - [`settle`] - Row comparison and settlement between two players
//! - [`engine`] - [`engine::Scorer`], a facade over all of the above
//! - [`logging`] - Tracing setup and a capturing subscriber for tests
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use ofc_engine::engine::Scorer;
//! use ofc_engine::rules::ScoreRules;
//! use ofc_engine::settle::Arrangement;
//!
//! let scorer = Scorer::new();
//! let a = Arrangement::parse("9c 9d 9h 9s 2c", "Kc Kd 5h 6s 7c", "Qc Qd 3h").unwrap();
//! let b = Arrangement::parse("Jc Jd 4h 4s 2d", "Tc Td 5d 6d 8d", "3c 4d 8h").unwrap();
//!
//! let rules = ScoreRules::standard();
//! // a wins every row: 3 + quads (10) + queens up front (7) + scoop (3)
//! assert_eq!(scorer.settle(&a, &b, Some(&rules)).unwrap(), 23);
//! ```
//!
//! ## Scoring Rules
//!
//! Rules load from TOML or JSON:
//!
//! ```rust
//! use ofc_engine::rules::ScoreRules;
//!
//! let rules = ScoreRules::from_toml_str(
//!     "back = [2, 4, 6, 10, 15, 25]\nmid = [4, 8, 12, 20, 30, 50]\nfront = true\nscoop = 6\n",
//! )
//! .unwrap();
//! assert_eq!(rules.scoop, 6);
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod foul;
pub mod hand;
pub mod logging;
pub mod oracle;
pub mod rules;
pub mod settle;
