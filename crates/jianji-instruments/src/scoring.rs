use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use jianji_core::ScoreMap;

/// Inclusive raw-value range for an instrument's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl ScoreRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One questionnaire item. `group` is the symptom cluster or dimension the
/// form displays next to the question.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub id: &'static str,
    pub text: &'static str,
    pub group: Option<&'static str>,
}

/// Derived instrument total: sum of present entries, missing keys
/// contribute 0. There is no cached total anywhere to go stale.
pub fn total(scores: &ScoreMap) -> i64 {
    scores.values().sum()
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub instrument_id: String,
    pub item_id: String,
    pub value: i64,
    pub expected_range: ScoreRange,
    pub message: String,
}
