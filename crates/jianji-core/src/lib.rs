//! jianji-core
//!
//! Pure domain types for the Jianji assessment record and the age-band
//! classifier. No I/O, no network — this is the shared vocabulary of the
//! Jianji system.

pub mod age;
pub mod error;
pub mod models;

pub use age::AgeBand;
pub use models::{
    AdultResilience, AssessmentState, ChildResilience, CssrsRecord, Gender, InfoSource,
    PatientInfo, Pcl5Record, ResilienceRecord, ScoreMap, SummaryRecord, TeenResilience,
    TraumaHistory, UclaRecord,
};
