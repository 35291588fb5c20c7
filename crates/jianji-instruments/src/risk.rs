use serde::{Deserialize, Serialize};
use ts_rs::TS;

use jianji_core::CssrsRecord;

/// C-SSRS alert level. Disjoint by evaluation order: High is checked
/// first, so a record matching both conditions classifies High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    /// Red alert: any explicit "yes" on q4, q5, or q6.
    High,
    /// Orange alert: ideation (q1 or q2 "yes") without q3/q4/q5 "yes".
    Moderate,
    /// No alert.
    None,
}

/// Classify the six tri-state answers. An unanswered item never escalates:
/// only an explicit "yes" counts toward either alert, and "not yes"
/// (false or unanswered) is what the Moderate condition requires of q3–q5.
pub fn classify(record: &CssrsRecord) -> RiskLevel {
    let yes = |q: Option<bool>| q == Some(true);

    if yes(record.q4) || yes(record.q5) || yes(record.q6) {
        return RiskLevel::High;
    }
    if (yes(record.q1) || yes(record.q2)) && !yes(record.q3) && !yes(record.q4) && !yes(record.q5)
    {
        return RiskLevel::Moderate;
    }
    RiskLevel::None
}

/// Disclosure state for the C-SSRS form, derived fresh from the answers on
/// every render — never stored, never sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Disclosure {
    /// Items q3–q5 are shown.
    pub followups: bool,
    /// Section B (intensity / frequency) is shown.
    pub intensity: bool,
}

pub fn disclosure(record: &CssrsRecord) -> Disclosure {
    let any_ideation = record.any_ideation();
    Disclosure {
        followups: any_ideation,
        intensity: any_ideation,
    }
}
