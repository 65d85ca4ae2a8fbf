use thiserror::Error;

use crate::hand::RowKind;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Invalid card token: {token:?}")]
    InvalidCardToken { token: String },
    #[error("{kind} row must have {expected} cards, got {actual}")]
    InvalidRowLength {
        kind: RowKind,
        expected: usize,
        actual: usize,
    },
    #[error("{kind} row is not a valid hand")]
    InvalidHand { kind: RowKind },
    #[error("{kind} bonus table must have 6 entries, got {len}")]
    InvalidRulesShape { kind: RowKind, len: usize },
    #[error("settlement score does not fit in a signed 32-bit integer")]
    ScoreOverflow,
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(&'static str),
}

/// Failures while loading [`crate::rules::ScoreRules`] from a file or the environment.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML rules: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON rules: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {var}")]
    Env { var: &'static str, value: String },
}
