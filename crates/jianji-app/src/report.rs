//! Plain-text rendering of the full record for the print/export surface.
//! Printing itself is a platform side effect owned by the rendering
//! layer; this module only produces the content, changing no state.

use std::fmt::Write;

use jianji_core::{AssessmentState, TraumaHistory};
use jianji_instruments::risk::RiskLevel;
use jianji_instruments::trauma::{TraumaVariant, HISTORY_ENTRIES};
use jianji_instruments::{cssrs, resilience, Instrument};

fn tri_state(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "是",
        Some(false) => "否",
        None => "未作答",
    }
}

fn risk_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "红色警报: 高风险",
        RiskLevel::Moderate => "橙色警报: 中风险",
        RiskLevel::None => "无警报",
    }
}

fn history_flag(history: &TraumaHistory, key: &str) -> bool {
    match key {
        "naturalDisaster" => history.natural_disaster,
        "accident" => history.accident,
        "witnessViolence" => history.witness_violence,
        "physicalAbuse" => history.physical_abuse,
        "sexualTrauma" => history.sexual_trauma,
        "loss" => history.loss,
        "medicalTrauma" => history.medical_trauma,
        _ => false,
    }
}

/// Render the assessment report as markdown.
pub fn render_report(state: &AssessmentState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# 见己 · 深度评估报告\n");

    // Patient
    let patient = &state.patient;
    let _ = writeln!(out, "## 基本信息\n");
    let _ = writeln!(out, "- 姓名: {}", patient.name);
    let _ = writeln!(out, "- 档案编号: {}", patient.id);
    let _ = writeln!(out, "- 年龄: {}", patient.age);
    let _ = writeln!(out, "- 评估日期: {}", patient.date);
    let _ = writeln!(out, "- 评估师: {}", patient.clinician);

    // Risk
    let level = jianji_instruments::risk::classify(&state.cssrs);
    let _ = writeln!(out, "\n## 安全风险筛查 (C-SSRS)\n");
    let _ = writeln!(out, "- 风险等级: {}", risk_label(level));
    let answers = [
        state.cssrs.q1,
        state.cssrs.q2,
        state.cssrs.q3,
        state.cssrs.q4,
        state.cssrs.q5,
        state.cssrs.q6,
    ];
    for (question, answer) in cssrs::QUESTIONS.iter().zip(answers) {
        let _ = writeln!(out, "- {}: {}", question.label, tri_state(answer));
    }
    if state.cssrs.any_ideation() {
        let _ = writeln!(out, "- 最严重的意念 (1-5): {}", state.cssrs.intensity_score);
        let _ = writeln!(out, "- 频率: {}", state.cssrs.frequency);
    }

    // Trauma
    let _ = writeln!(out, "\n## 创伤评估\n");
    match TraumaVariant::for_band(patient.age_band()) {
        None => {
            let _ = writeln!(out, "（未输入年龄，无适用量表）");
        }
        Some(variant) => {
            let (history, scores, total) = match variant {
                TraumaVariant::Ucla => (
                    &state.ucla.history,
                    &state.ucla.scores,
                    state.ucla.total_score(),
                ),
                TraumaVariant::Pcl5 => (
                    &state.pcl5.history,
                    &state.pcl5.scores,
                    state.pcl5.total_score(),
                ),
            };
            let instrument = variant.instrument();
            let _ = writeln!(
                out,
                "- 量表: {} (总分 {} / {})",
                instrument.name(),
                total,
                instrument.max_total()
            );
            let checked: Vec<&str> = HISTORY_ENTRIES
                .iter()
                .filter(|entry| history_flag(history, entry.key))
                .map(|entry| entry.label)
                .collect();
            if !checked.is_empty() {
                let _ = writeln!(out, "- 创伤史: {}", checked.join("；"));
            }
            let _ = writeln!(out, "\n{}", instrument.to_structured_input(scores));
        }
    }

    // Resilience composites, as displayed (floored, rounded)
    let axes = resilience::radar_axes(patient.age, &state.resilience);
    let _ = writeln!(out, "## 资源与保护因素\n");
    for axis in &axes {
        let _ = writeln!(out, "- {}: {}%", axis.label, axis.value.round());
    }

    // Summary
    let _ = writeln!(out, "\n## 评估结论\n");
    let _ = writeln!(out, "### 临床综合画像\n\n{}\n", state.summary.clinical_formulation);
    let _ = writeln!(out, "### 核心需求与目标\n\n{}\n", state.summary.needs);
    let _ = writeln!(out, "### 下一步行动计划\n\n{}", state.summary.action_plan);

    out
}
