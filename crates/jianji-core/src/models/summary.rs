use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free-text conclusion section. `clinical_formulation` may be overwritten
/// wholesale by the AI collaborator's output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryRecord {
    pub clinical_formulation: String,
    pub needs: String,
    pub action_plan: String,
}
