use jianji_core::{ResilienceRecord, ScoreMap};
use jianji_instruments::resilience::{
    composite_scores, radar_axes, DIMENSION_LABELS, DISPLAY_FLOOR,
};

const EPSILON: f64 = 1e-9;

fn scores(entries: &[(&str, i64)]) -> ScoreMap {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn child_band_groups_and_range() {
    let mut record = ResilienceRecord::default();
    record.child.scores = scores(&[
        ("1", 2),
        ("2", 2),
        ("3", 2), // personal: 6/6 -> 100
        ("4", 1), // family: 1/4 -> 25 (item 5 missing, counts as 0)
        ("6", 0),
        ("7", 0),
        ("8", 0), // social: 0
    ]);
    let c = composite_scores(8, &record);
    assert_close(c.personal, 100.0);
    assert_close(c.family, 25.0);
    assert_close(c.social, 0.0);
}

#[test]
fn teen_band_min_is_one_not_zero() {
    let mut record = ResilienceRecord::default();
    record.teen.scores = scores(&[("1", 3), ("2", 3), ("3", 3), ("4", 3)]);
    let c = composite_scores(15, &record);
    // (12 - 4·1) / (4·4) = 50%
    assert_close(c.personal, 50.0);
    // All-missing groups sit at the raw minimum, i.e. 0%, not negative.
    assert_close(c.family, 0.0);
    assert_close(c.social, 0.0);
}

#[test]
fn adult_composite_end_to_end() {
    let mut record = ResilienceRecord::default();
    for id in 1..=10 {
        record.adult.cdrisc.insert(id.to_string(), 2);
    }
    for id in ["3", "4", "8", "11"] {
        record.adult.mspss.insert(id.to_string(), 4);
    }

    let c = composite_scores(30, &record);
    assert_close(c.personal, 50.0); // 20/40
    assert_close(c.family, 50.0); // (16-4)/(4·6)
    assert_close(c.social, 0.0); // unanswered -> raw minimum

    let axes = radar_axes(30, &record);
    assert_close(axes[0].value, 50.0);
    assert_close(axes[1].value, 50.0);
    assert_close(axes[2].value, DISPLAY_FLOOR);
}

#[test]
fn adult_personal_is_cdrisc_total_over_forty() {
    let mut record = ResilienceRecord::default();
    for id in 1..=10 {
        record.adult.cdrisc.insert(id.to_string(), 4);
    }
    assert_close(composite_scores(40, &record).personal, 100.0);
}

#[test]
fn increasing_an_item_never_decreases_its_dimension() {
    // Child personal dimension over item "1".
    let mut previous = f64::MIN;
    for value in 0..=2 {
        let mut record = ResilienceRecord::default();
        record.child.scores = scores(&[("1", value), ("2", 1)]);
        let c = composite_scores(10, &record);
        assert!(c.personal >= previous);
        previous = c.personal;
    }

    // Adult social dimension over MSPSS item "9".
    let mut previous = f64::MIN;
    for value in 1..=7 {
        let mut record = ResilienceRecord::default();
        record.adult.mspss = scores(&[("9", value), ("12", 3)]);
        let c = composite_scores(25, &record);
        assert!(c.social >= previous);
        previous = c.social;
    }
}

#[test]
fn display_values_never_drop_below_the_floor() {
    for age in [0, 5, 15, 40] {
        let axes = radar_axes(age, &ResilienceRecord::default());
        for axis in &axes {
            assert!(axis.value >= DISPLAY_FLOOR, "age {age}: {axis:?}");
        }
    }
}

#[test]
fn floor_is_cosmetic_only() {
    // The raw composite stays at its true value; only the radar axes are
    // floored.
    let c = composite_scores(30, &ResilienceRecord::default());
    assert_close(c.personal, 0.0);
    assert_close(c.family, 0.0);
    assert_close(c.social, 0.0);
}

#[test]
fn unset_age_yields_neutral_axes() {
    let axes = radar_axes(0, &ResilienceRecord::default());
    for (axis, label) in axes.iter().zip(DIMENSION_LABELS) {
        assert_eq!(axis.label, label);
        assert_close(axis.value, DISPLAY_FLOOR);
    }
}

#[test]
fn axis_labels_are_ordered_personal_family_social() {
    let axes = radar_axes(20, &ResilienceRecord::default());
    let labels: Vec<&str> = axes.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, DIMENSION_LABELS);
}
