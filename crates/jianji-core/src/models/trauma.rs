use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ScoreMap;

/// Lifetime trauma-exposure checklist. Seven independent flags, no
/// ordering or exclusivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TraumaHistory {
    pub natural_disaster: bool,
    pub accident: bool,
    pub witness_violence: bool,
    pub physical_abuse: bool,
    pub sexual_trauma: bool,
    pub loss: bool,
    pub medical_trauma: bool,
}

/// UCLA PTSD-RI symptom inventory (under 18). Items "1".."19", each 0–4.
/// The total is derived at read time, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UclaRecord {
    pub history: TraumaHistory,
    pub scores: ScoreMap,
}

impl UclaRecord {
    /// Sum of entered item scores; unanswered items contribute 0.
    pub fn total_score(&self) -> i64 {
        self.scores.values().sum()
    }
}

/// PCL-5 symptom inventory (18+). Items "1".."20", each 0–4.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pcl5Record {
    pub history: TraumaHistory,
    /// The index trauma the symptom ratings refer to.
    pub index_trauma: String,
    pub index_trauma_date: String,
    pub scores: ScoreMap,
}

impl Pcl5Record {
    /// Sum of entered item scores; unanswered items contribute 0.
    pub fn total_score(&self) -> i64 {
        self.scores.values().sum()
    }
}
