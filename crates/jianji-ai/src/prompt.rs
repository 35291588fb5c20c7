use jianji_core::AssessmentState;
use jianji_instruments::trauma::TraumaVariant;

use crate::error::AiError;

/// Build the clinical-formulation prompt: patient info and C-SSRS answers
/// as JSON, plus the total of whichever symptom inventory the patient's
/// age selects, with the fixed four-part output instruction.
pub fn build_formulation_prompt(state: &AssessmentState) -> Result<String, AiError> {
    let patient = serde_json::to_string(&state.patient)?;
    let cssrs = serde_json::to_string(&state.cssrs)?;

    let symptoms = match TraumaVariant::for_band(state.patient.age_band()) {
        Some(TraumaVariant::Pcl5) => format!("PCL-5 总分: {}", state.pcl5.total_score()),
        _ => format!("UCLA PTSD-RI 总分: {}", state.ucla.total_score()),
    };

    Ok(format!(
        "作为一名资深临床心理学家，请根据以下评估数据生成一份结构化的临床综合画像。\n\
         [基本信息] {patient}\n\
         [风险数据] C-SSRS: {cssrs}\n\
         [症状数据] {symptoms}\n\
         请按结构输出中文：1.核心症状 2.风险等级 3.资源画像 4.建议。"
    ))
}
