use std::collections::BTreeMap;

pub mod patient;
pub mod resilience;
pub mod risk;
pub mod state;
pub mod summary;
pub mod trauma;

/// Ordered item-id → raw score mapping used by every instrument. Keys are
/// the string item ids ("1", "2", …); absent keys mean "unanswered".
pub type ScoreMap = BTreeMap<String, i64>;

pub use patient::{Gender, InfoSource, PatientInfo};
pub use resilience::{AdultResilience, ChildResilience, ResilienceRecord, TeenResilience};
pub use risk::CssrsRecord;
pub use state::AssessmentState;
pub use summary::SummaryRecord;
pub use trauma::{Pcl5Record, TraumaHistory, UclaRecord};
