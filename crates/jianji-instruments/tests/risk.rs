use jianji_core::CssrsRecord;
use jianji_instruments::risk::{classify, disclosure, RiskLevel};

const STATES: [Option<bool>; 3] = [None, Some(false), Some(true)];

fn record(q: [Option<bool>; 6]) -> CssrsRecord {
    CssrsRecord {
        q1: q[0],
        q2: q[1],
        q3: q[2],
        q4: q[3],
        q5: q[4],
        q6: q[5],
        ..CssrsRecord::default()
    }
}

#[test]
fn ideation_alone_is_moderate() {
    let r = record([Some(true), None, None, None, None, None]);
    assert_eq!(classify(&r), RiskLevel::Moderate);
}

#[test]
fn behavior_answer_is_high_even_with_ideation() {
    let r = record([Some(true), None, None, None, None, Some(true)]);
    assert_eq!(classify(&r), RiskLevel::High);
}

#[test]
fn method_without_intent_suppresses_moderate() {
    // q3 "yes" knocks out the moderate alert while q4-q6 stay negative.
    let r = record([Some(true), None, Some(true), None, None, None]);
    assert_eq!(classify(&r), RiskLevel::None);
}

#[test]
fn all_unanswered_is_no_alert() {
    assert_eq!(classify(&CssrsRecord::default()), RiskLevel::None);
}

#[test]
fn explicit_no_everywhere_is_no_alert() {
    let r = record([Some(false); 6]);
    assert_eq!(classify(&r), RiskLevel::None);
}

#[test]
fn unanswered_never_escalates() {
    // Only explicit "yes" answers can trigger an alert.
    for answers in [[None; 6], [Some(false); 6]] {
        assert_eq!(classify(&record(answers)), RiskLevel::None);
    }
}

#[test]
fn classification_matches_definition_for_every_answer_combination() {
    let yes = |q: Option<bool>| q == Some(true);
    for q1 in STATES {
        for q2 in STATES {
            for q3 in STATES {
                for q4 in STATES {
                    for q5 in STATES {
                        for q6 in STATES {
                            let r = record([q1, q2, q3, q4, q5, q6]);
                            let expected = if yes(q4) || yes(q5) || yes(q6) {
                                RiskLevel::High
                            } else if (yes(q1) || yes(q2)) && !yes(q3) && !yes(q4) && !yes(q5) {
                                RiskLevel::Moderate
                            } else {
                                RiskLevel::None
                            };
                            assert_eq!(classify(&r), expected, "answers {:?}", r);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn followups_disclosed_only_after_ideation() {
    let hidden = disclosure(&CssrsRecord::default());
    assert!(!hidden.followups);
    assert!(!hidden.intensity);

    let shown = disclosure(&record([None, Some(true), None, None, None, None]));
    assert!(shown.followups);
    assert!(shown.intensity);

    // An explicit "no" on both gate questions keeps the sections hidden.
    let denied = disclosure(&record([Some(false), Some(false), None, None, None, None]));
    assert!(!denied.followups);
}

#[test]
fn hidden_answers_are_kept_not_reset() {
    // q3 retains its value even when q1/q2 no longer disclose it.
    let r = record([Some(false), Some(false), Some(true), None, None, None]);
    assert!(!disclosure(&r).followups);
    assert_eq!(r.q3, Some(true));
}
