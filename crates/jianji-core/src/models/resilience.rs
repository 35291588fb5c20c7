use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ScoreMap;

/// CYRM-based child checklist (ages 1–12). Items "1".."8", each 0–2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChildResilience {
    pub scores: ScoreMap,
}

/// Teen strengths and supports scale (ages 13–17). Items "1".."12",
/// each 1–5.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeenResilience {
    pub scores: ScoreMap,
}

/// Adult pair: CD-RISC-10 (items "1".."10", each 0–4) and MSPSS (items
/// "1".."12" minus "5", each 1–7 — item "5" is absent from the
/// instrument, not an omission).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdultResilience {
    pub cdrisc: ScoreMap,
    pub mspss: ScoreMap,
}

/// All three age-gated sub-records. Only one is semantically active at a
/// time (selected by patient age); the others stay present but unused, so
/// answers survive an age correction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResilienceRecord {
    pub child: ChildResilience,
    pub teen: TeenResilience,
    pub adult: AdultResilience,
}
