use jianji_core::{AgeBand, Pcl5Record, ScoreMap, UclaRecord};
use jianji_instruments::scoring::total;
use jianji_instruments::trauma::TraumaVariant;

fn scores(entries: &[(&str, i64)]) -> ScoreMap {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

#[test]
fn total_sums_present_entries_missing_keys_contribute_zero() {
    let map = scores(&[("1", 3), ("5", 2)]);
    assert_eq!(total(&map), 5);
    assert_eq!(total(&ScoreMap::new()), 0);
}

#[test]
fn record_totals_are_derived_from_the_mapping() {
    let mut pcl5 = Pcl5Record::default();
    assert_eq!(pcl5.total_score(), 0);
    pcl5.scores = scores(&[("1", 3), ("5", 2)]);
    assert_eq!(pcl5.total_score(), 5);
    // Mutating the mapping is immediately visible in the total; there is
    // no cache to go stale.
    pcl5.scores.insert("20".to_string(), 4);
    assert_eq!(pcl5.total_score(), 9);

    let mut ucla = UclaRecord::default();
    ucla.scores = scores(&[("19", 4)]);
    assert_eq!(ucla.total_score(), 4);
}

#[test]
fn age_routes_to_exactly_one_variant() {
    assert_eq!(TraumaVariant::for_band(AgeBand::from_age(0)), None);
    assert_eq!(
        TraumaVariant::for_band(AgeBand::from_age(7)),
        Some(TraumaVariant::Ucla)
    );
    assert_eq!(
        TraumaVariant::for_band(AgeBand::from_age(17)),
        Some(TraumaVariant::Ucla)
    );
    assert_eq!(
        TraumaVariant::for_band(AgeBand::from_age(18)),
        Some(TraumaVariant::Pcl5)
    );
}

#[test]
fn variant_max_totals() {
    assert_eq!(TraumaVariant::Ucla.max_total(), 76);
    assert_eq!(TraumaVariant::Pcl5.max_total(), 80);
}
