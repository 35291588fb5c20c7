use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// C-SSRS screening answers. Each of q1–q6 is tri-state: `None` means the
/// item has not been answered. q3–q5 are only shown once q1 or q2 is
/// answered "yes", but hidden answers are kept, never reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CssrsRecord {
    pub q1: Option<bool>,
    pub q2: Option<bool>,
    pub q3: Option<bool>,
    pub q4: Option<bool>,
    pub q5: Option<bool>,
    pub q6: Option<bool>,
    /// Section B severity of the worst ideation, nominally 1–5. The type
    /// does not constrain it; the form layer coerces bad input to 0.
    pub intensity_score: i64,
    /// Captured on the form but unused downstream.
    pub intensity_description: String,
    /// One of the fixed frequency options ("", "1次", "偶尔", "经常", "总是").
    pub frequency: String,
}

impl CssrsRecord {
    /// "Any ideation": q1 or q2 answered yes. Gates items q3–q5 and
    /// section B on the form.
    pub fn any_ideation(&self) -> bool {
        self.q1 == Some(true) || self.q2 == Some(true)
    }
}
