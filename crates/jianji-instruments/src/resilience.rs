//! Resilience composite normalization: three named dimension scores, each
//! a 0–100 percentage, feeding the radar visualization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use jianji_core::{AgeBand, ResilienceRecord, ScoreMap};

/// Dimension labels, in axis order: personal capacity, family support,
/// social environment.
pub const DIMENSION_LABELS: [&str; 3] = ["个人能力", "家庭支持", "社会环境"];

/// Cosmetic display floor: an all-unanswered instrument still renders a
/// visible wedge instead of a degenerate point. Applied only in
/// [`radar_axes`], never to stored or reported totals.
pub const DISPLAY_FLOOR: f64 = 5.0;

const CHILD_PERSONAL: &[&str] = &["1", "2", "3"];
const CHILD_FAMILY: &[&str] = &["4", "5"];
const CHILD_SOCIAL: &[&str] = &["6", "7", "8"];

const TEEN_PERSONAL: &[&str] = &["1", "2", "3", "4"];
const TEEN_FAMILY: &[&str] = &["5", "6", "7", "8"];
const TEEN_SOCIAL: &[&str] = &["9", "10", "11", "12"];

const MSPSS_FAMILY: &[&str] = &["3", "4", "8", "11"];
const MSPSS_SOCIAL: &[&str] = &["1", "2", "6", "7", "9", "10", "12"];

const CDRISC_MAX_TOTAL: f64 = 40.0;

/// Raw (unfloored) composite percentages. `Unset` age yields all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeScores {
    pub personal: f64,
    pub family: f64,
    pub social: f64,
}

/// One radar axis: dimension label plus floored display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScore {
    pub label: String,
    pub value: f64,
}

/// Normalize one item group: `(sum − n·min) / (n·(max−min)) · 100`.
/// Missing items count as `min`, so an incomplete questionnaire scores
/// low, never negative.
fn group_percent(scores: &ScoreMap, ids: &[&str], min: i64, max: i64) -> f64 {
    let n = ids.len() as f64;
    let sum: i64 = ids
        .iter()
        .map(|id| scores.get(*id).copied().unwrap_or(min))
        .sum();
    ((sum as f64 - n * min as f64) / (n * (max - min) as f64)) * 100.0
}

/// Compute the three composite dimensions for the active age band.
pub fn composite_scores(age: u32, resilience: &ResilienceRecord) -> CompositeScores {
    match AgeBand::from_age(age) {
        AgeBand::Unset => CompositeScores {
            personal: 0.0,
            family: 0.0,
            social: 0.0,
        },
        AgeBand::Child => CompositeScores {
            personal: group_percent(&resilience.child.scores, CHILD_PERSONAL, 0, 2),
            family: group_percent(&resilience.child.scores, CHILD_FAMILY, 0, 2),
            social: group_percent(&resilience.child.scores, CHILD_SOCIAL, 0, 2),
        },
        AgeBand::Teen => CompositeScores {
            personal: group_percent(&resilience.teen.scores, TEEN_PERSONAL, 1, 5),
            family: group_percent(&resilience.teen.scores, TEEN_FAMILY, 1, 5),
            social: group_percent(&resilience.teen.scores, TEEN_SOCIAL, 1, 5),
        },
        AgeBand::Adult => {
            // CD-RISC personal capacity is the raw total over the maximum
            // attainable 40 — the general formula with min=0, max=4, n=10.
            let cdrisc_total: i64 = resilience.adult.cdrisc.values().sum();
            CompositeScores {
                personal: (cdrisc_total as f64 / CDRISC_MAX_TOTAL) * 100.0,
                family: group_percent(&resilience.adult.mspss, MSPSS_FAMILY, 1, 7),
                social: group_percent(&resilience.adult.mspss, MSPSS_SOCIAL, 1, 7),
            }
        }
    }
}

/// The three labeled axes for the radar chart, with the display floor
/// applied. An unset age yields three axes at the floor value.
pub fn radar_axes(age: u32, resilience: &ResilienceRecord) -> [DimensionScore; 3] {
    let composite = composite_scores(age, resilience);
    let floored = |value: f64| value.max(DISPLAY_FLOOR);
    [
        DimensionScore {
            label: DIMENSION_LABELS[0].to_string(),
            value: floored(composite.personal),
        },
        DimensionScore {
            label: DIMENSION_LABELS[1].to_string(),
            value: floored(composite.family),
        },
        DimensionScore {
            label: DIMENSION_LABELS[2].to_string(),
            value: floored(composite.social),
        },
    ]
}
