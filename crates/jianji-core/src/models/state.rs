use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{
    CssrsRecord, PatientInfo, Pcl5Record, ResilienceRecord, SummaryRecord, UclaRecord,
};

/// Aggregate root for one assessment session. Single instance, fully
/// serialized on every mutation, fully replaced on reset. Sub-records are
/// swapped whole — no partial in-place patching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentState {
    pub patient: PatientInfo,
    pub cssrs: CssrsRecord,
    pub ucla: UclaRecord,
    pub pcl5: Pcl5Record,
    pub resilience: ResilienceRecord,
    pub summary: SummaryRecord,
}
