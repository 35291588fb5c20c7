use jianji_core::{AgeBand, AssessmentState, Gender, InfoSource, PatientInfo};

#[test]
fn every_age_maps_to_exactly_one_band() {
    assert_eq!(AgeBand::from_age(0), AgeBand::Unset);
    assert_eq!(AgeBand::from_age(1), AgeBand::Child);
    assert_eq!(AgeBand::from_age(12), AgeBand::Child);
    assert_eq!(AgeBand::from_age(13), AgeBand::Teen);
    assert_eq!(AgeBand::from_age(17), AgeBand::Teen);
    assert_eq!(AgeBand::from_age(18), AgeBand::Adult);
    assert_eq!(AgeBand::from_age(120), AgeBand::Adult);

    // Totality: adjacent ages never skip or double-cover a band.
    for age in 0..=150u32 {
        let band = AgeBand::from_age(age);
        let expected = match age {
            0 => AgeBand::Unset,
            1..=12 => AgeBand::Child,
            13..=17 => AgeBand::Teen,
            _ => AgeBand::Adult,
        };
        assert_eq!(band, expected, "age {age}");
    }
}

#[test]
fn default_state_is_empty_with_todays_date() {
    let state = AssessmentState::default();
    assert_eq!(state.patient.age, 0);
    assert_eq!(state.patient.gender, Gender::Male);
    assert_eq!(state.patient.source, InfoSource::SelfReport);
    assert!(!state.patient.date.is_empty());
    assert_eq!(state.cssrs.q1, None);
    assert!(state.ucla.scores.is_empty());
    assert!(state.summary.clinical_formulation.is_empty());
}

fn populated_state() -> AssessmentState {
    let mut state = AssessmentState::default();
    state.patient = PatientInfo {
        name: "李雷".to_string(),
        gender: Gender::Female,
        age: 22,
        dob: "2004-01-15".to_string(),
        date: "2026-08-26".to_string(),
        id: "ID-000123".to_string(),
        clinician: "王医生".to_string(),
        source: InfoSource::Parent,
    };
    state.cssrs.q1 = Some(true);
    state.cssrs.q3 = Some(false);
    state.cssrs.intensity_score = 3;
    state.cssrs.frequency = "偶尔".to_string();
    state.pcl5.history.loss = true;
    state.pcl5.index_trauma = "车祸".to_string();
    state.pcl5.scores.insert("1".to_string(), 3);
    state.pcl5.scores.insert("17".to_string(), 2);
    state.resilience.adult.cdrisc.insert("2".to_string(), 4);
    state.resilience.adult.mspss.insert("11".to_string(), 6);
    state.summary.needs = "稳定化".to_string();
    state
}

#[test]
fn populated_state_round_trips_through_json() {
    let state = populated_state();
    let json = serde_json::to_string_pretty(&state).unwrap();
    let back: AssessmentState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}

#[test]
fn wire_format_keeps_the_original_field_names() {
    let json = serde_json::to_value(populated_state()).unwrap();
    assert_eq!(json["patient"]["gender"], "女");
    assert_eq!(json["patient"]["source"], "家长");
    assert!(json["cssrs"].get("intensityScore").is_some());
    assert!(json["pcl5"]["history"].get("loss").is_some());
    assert!(json["pcl5"].get("indexTrauma").is_some());
    assert!(json["summary"].get("clinicalFormulation").is_some());
}

#[test]
fn legacy_blobs_with_cached_totals_still_deserialize() {
    // Older saves carried a stored totalScore; it is ignored now that the
    // total is derived from the mapping.
    let json = r#"{
        "patient": {
            "name": "", "gender": "男", "age": 20, "dob": "", "date": "",
            "id": "", "clinician": "", "source": "本人"
        },
        "cssrs": {
            "q1": null, "q2": null, "q3": null, "q4": null, "q5": null, "q6": null,
            "intensityScore": 0, "intensityDescription": "", "frequency": ""
        },
        "ucla": {
            "history": {
                "naturalDisaster": false, "accident": false, "witnessViolence": false,
                "physicalAbuse": false, "sexualTrauma": false, "loss": false,
                "medicalTrauma": false
            },
            "scores": {}, "totalScore": 0
        },
        "pcl5": {
            "history": {
                "naturalDisaster": false, "accident": false, "witnessViolence": false,
                "physicalAbuse": false, "sexualTrauma": false, "loss": false,
                "medicalTrauma": false
            },
            "indexTrauma": "", "indexTraumaDate": "",
            "scores": { "1": 3, "5": 2 }, "totalScore": 5
        },
        "resilience": {
            "child": { "scores": {} },
            "teen": { "scores": {} },
            "adult": { "cdrisc": {}, "mspss": {} }
        },
        "summary": { "clinicalFormulation": "", "needs": "", "actionPlan": "" }
    }"#;

    let state: AssessmentState = serde_json::from_str(json).unwrap();
    assert_eq!(state.pcl5.total_score(), 5);
}

#[test]
fn any_ideation_requires_an_explicit_yes() {
    let mut state = AssessmentState::default();
    assert!(!state.cssrs.any_ideation());
    state.cssrs.q1 = Some(false);
    state.cssrs.q2 = Some(false);
    assert!(!state.cssrs.any_ideation());
    state.cssrs.q2 = Some(true);
    assert!(state.cssrs.any_ideation());
}
