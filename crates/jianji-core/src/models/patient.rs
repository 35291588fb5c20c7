use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::age::AgeBand;

/// Gender as captured on the intake form. Serialized with the original
/// Chinese labels so persisted records stay readable by the form layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[default]
    #[serde(rename = "男")]
    Male,
    #[serde(rename = "女")]
    Female,
    #[serde(rename = "其他")]
    Other,
}

/// Who supplied the answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InfoSource {
    #[default]
    #[serde(rename = "本人")]
    SelfReport,
    #[serde(rename = "家长")]
    Parent,
    #[serde(rename = "其他")]
    Other,
}

/// Patient demographics. `age` is the one field the rest of the system
/// branches on (instrument variant selection); 0 means "not entered".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    /// Date of birth, ISO `YYYY-MM-DD` as entered (may be empty).
    pub dob: String,
    /// Assessment date, ISO `YYYY-MM-DD`.
    pub date: String,
    /// Free-form record identifier (e.g. "ID-000123").
    pub id: String,
    pub clinician: String,
    pub source: InfoSource,
}

impl PatientInfo {
    pub fn age_band(&self) -> AgeBand {
        AgeBand::from_age(self.age)
    }
}

impl Default for PatientInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: Gender::default(),
            age: 0,
            dob: String::new(),
            date: jiff::Zoned::now().date().to_string(),
            id: String::new(),
            clinician: String::new(),
            source: InfoSource::default(),
        }
    }
}
