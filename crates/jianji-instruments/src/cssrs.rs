//! C-SSRS (Columbia-Suicide Severity Rating Scale) screening-version
//! question set. The classifier itself lives in [`crate::risk`]; this
//! module holds the fixed form content.

/// One screening question: number, short label, and the full question as
/// asked.
#[derive(Debug, Clone, Copy)]
pub struct ScreeningQuestion {
    pub id: &'static str,
    pub label: &'static str,
    pub text: &'static str,
}

/// Section A (q1–q5, ideation) and section C (q6, behavior).
pub const QUESTIONS: &[ScreeningQuestion] = &[
    ScreeningQuestion {
        id: "q1",
        label: "死的愿望 (Wish to be Dead)",
        text: "你是否曾希望自己睡着了就不要醒来，或者希望自己已经死掉？",
    },
    ScreeningQuestion {
        id: "q2",
        label: "非特异性的主动自杀念头",
        text: "你是否真的有过自杀（结束自己生命）的念头？",
    },
    ScreeningQuestion {
        id: "q3",
        label: "有方法但无意图的主动自杀念头",
        text: "你是否想过要是你要自杀你会怎么做（方法）？但你并不是真的想去死。",
    },
    ScreeningQuestion {
        id: "q4",
        label: "有些许意图但无具体计划的主动自杀念头",
        text: "你是否有过自杀的念头，并且甚至想真的去死？",
    },
    ScreeningQuestion {
        id: "q5",
        label: "有具体计划和意图的主动自杀念头",
        text: "你是否已经想好了细节？并且你打算去实施这个计划？",
    },
    ScreeningQuestion {
        id: "q6",
        label: "自杀行为",
        text: "你是否做过任何事情、或者尝试做任何事情来伤害你自己以达到结束生命的目的？\
               (如：吞药、准备遗书、买药等)",
    },
];

/// Fixed option set for the section B frequency field. The empty string
/// (nothing selected) is also a valid stored value.
pub const FREQUENCY_OPTIONS: &[&str] = &["1次", "偶尔", "经常", "总是"];

/// Nominal bounds of the section B intensity score.
pub const INTENSITY_MIN: i64 = 1;
pub const INTENSITY_MAX: i64 = 5;
