use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::{sorted_ranks, Card};
use crate::errors::{RulesError, ScoringError};
use crate::hand::{evaluate_back, evaluate_front, evaluate_mid, Category, HandEvaluation, RowKind};
use crate::oracle::RankOracle;

pub const DEFAULT_SCOOP: i32 = 3;
pub const BONUS_TABLE_LEN: usize = 6;

pub const RULES_PATH_VAR: &str = "OFC_RULES";
pub const SCOOP_VAR: &str = "OFC_SCOOP";

/// Royalty points for a 5-card row.
///
/// Slots are, in order: straight, flush, full house, four of a kind,
/// straight flush, royal flush. Tables are accepted at any length and only
/// rejected when consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusTable(pub Vec<u32>);

impl BonusTable {
    pub fn new(slots: [u32; BONUS_TABLE_LEN]) -> Self {
        BonusTable(slots.to_vec())
    }

    fn check_shape(&self, kind: RowKind) -> Result<(), ScoringError> {
        if self.0.len() != BONUS_TABLE_LEN {
            return Err(ScoringError::InvalidRulesShape {
                kind,
                len: self.0.len(),
            });
        }
        Ok(())
    }

    /// Bonus for an evaluated row. Anything weaker than a straight scores 0.
    pub fn bonus_for(&self, kind: RowKind, eval: &HandEvaluation) -> Result<u32, ScoringError> {
        self.check_shape(kind)?;
        let category = eval.category.value() as usize;
        let slot = if eval.is_royal_flush() {
            category.checked_sub(4)
        } else {
            category.checked_sub(5)
        };
        Ok(slot.and_then(|i| self.0.get(i)).copied().unwrap_or(0))
    }
}

fn default_scoop() -> i32 {
    DEFAULT_SCOOP
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FrontSetting {
    Flag(bool),
    Table(Vec<i64>),
}

// a front table only switches front royalties on; its contents are unused
fn front_switch<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FrontSetting>::deserialize(deserializer)? {
        Some(FrontSetting::Flag(on)) => on,
        Some(FrontSetting::Table(_)) => true,
        None => false,
    })
}

/// Scoring configuration for a settlement.
///
/// `front` is a switch: front royalties come from the row's ranks, not from
/// a table. Configs may give either `true`/`false` or a table, and any
/// table turns front royalties on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    #[serde(default)]
    pub back: Option<BonusTable>,
    #[serde(default)]
    pub mid: Option<BonusTable>,
    #[serde(default, deserialize_with = "front_switch")]
    pub front: bool,
    #[serde(default = "default_scoop")]
    pub scoop: i32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            back: None,
            mid: None,
            front: false,
            scoop: DEFAULT_SCOOP,
        }
    }
}

impl ScoreRules {
    /// A common royalty schedule with mid bonuses doubled relative to back.
    pub fn standard() -> Self {
        Self {
            back: Some(BonusTable::new([2, 4, 6, 10, 15, 25])),
            mid: Some(BonusTable::new([4, 8, 12, 20, 30, 50])),
            front: true,
            scoop: DEFAULT_SCOOP,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, RulesError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads rules from a file; `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&s)
        } else {
            Self::from_toml_str(&s)
        }
    }

    /// Resolves rules from `OFC_RULES` (a file path) and `OFC_SCOOP`.
    ///
    /// Without `OFC_RULES` the defaults apply; `OFC_SCOOP` overrides the
    /// scoop either way.
    pub fn load_from_env() -> Result<Self, RulesError> {
        let mut rules = match std::env::var(RULES_PATH_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path)?,
            _ => Self::default(),
        };
        if let Ok(v) = std::env::var(SCOOP_VAR) {
            if !v.is_empty() {
                rules.scoop = v.trim().parse().map_err(|_| RulesError::Env {
                    var: SCOOP_VAR,
                    value: v.clone(),
                })?;
            }
        }
        tracing::debug!(
            back = rules.back.is_some(),
            mid = rules.mid.is_some(),
            front = rules.front,
            scoop = rules.scoop,
            "resolved score rules"
        );
        Ok(rules)
    }

    /// Checks table shapes up front instead of on first use.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if let Some(t) = &self.back {
            t.check_shape(RowKind::Back)?;
        }
        if let Some(t) = &self.mid {
            t.check_shape(RowKind::Mid)?;
        }
        Ok(())
    }
}

/// Scoop value for a settlement; absent rules fall back to the default.
pub fn scoop_value(rules: Option<&ScoreRules>) -> i32 {
    rules.map_or(DEFAULT_SCOOP, |r| r.scoop)
}

/// Back-row royalty.
///
/// # Errors
///
/// With a back table present: [`ScoringError::InvalidRulesShape`] if it does
/// not have 6 slots, otherwise any evaluation error for the row.
///
/// # Examples
///
/// ```
/// use ofc_engine::cards::parse_row;
/// use ofc_engine::oracle::StandardOracle;
/// use ofc_engine::rules::{bonus_for_back, ScoreRules};
///
/// let quads = parse_row("9c 9d 9h 9s 2c").unwrap();
/// let rules = ScoreRules::standard();
/// assert_eq!(bonus_for_back(&quads, Some(&rules), &StandardOracle).unwrap(), 10);
/// assert_eq!(bonus_for_back(&quads, None, &StandardOracle).unwrap(), 0);
/// ```
pub fn bonus_for_back(
    row: &[Card],
    rules: Option<&ScoreRules>,
    oracle: &dyn RankOracle,
) -> Result<u32, ScoringError> {
    let Some(table) = rules.and_then(|r| r.back.as_ref()) else {
        return Ok(0);
    };
    table.check_shape(RowKind::Back)?;
    let eval = evaluate_back(row, oracle)?;
    table.bonus_for(RowKind::Back, &eval)
}

/// Mid-row royalty, same contract as [`bonus_for_back`] against the mid table.
pub fn bonus_for_mid(
    row: &[Card],
    rules: Option<&ScoreRules>,
    oracle: &dyn RankOracle,
) -> Result<u32, ScoringError> {
    let Some(table) = rules.and_then(|r| r.mid.as_ref()) else {
        return Ok(0);
    };
    table.check_shape(RowKind::Mid)?;
    let eval = evaluate_mid(row, oracle)?;
    table.bonus_for(RowKind::Mid, &eval)
}

/// Front-row royalty: `9 + rank` for trips, `rank - 4` for pairs of sixes
/// and up, 0 otherwise. Only paid when the rules switch front bonuses on.
pub fn bonus_for_front(row: &[Card], rules: Option<&ScoreRules>) -> Result<u32, ScoringError> {
    if !rules.is_some_and(|r| r.front) {
        return Ok(0);
    }
    let eval = evaluate_front(row)?;
    let ranks = sorted_ranks(row);
    let bonus = match eval.category {
        Category::ThreeOfAKind => 9 + u32::from(ranks[0]),
        // the middle rank is always part of the pair
        Category::OnePair => u32::from(ranks[1]).saturating_sub(4),
        _ => 0,
    };
    Ok(bonus)
}
