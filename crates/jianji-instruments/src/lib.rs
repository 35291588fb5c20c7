//! jianji-instruments
//!
//! Clinical assessment instrument definitions and the scoring engine.
//! Pure data and pure functions — no I/O. Defines the fixed question sets,
//! valid score ranges, risk classification, instrument totals, and the
//! resilience composite normalization.

pub mod cssrs;
pub mod error;
pub mod instruments;
pub mod resilience;
pub mod risk;
pub mod scoring;
pub mod trauma;

use jianji_core::ScoreMap;
use scoring::{Item, ScoreRange, ValidationError};

/// Trait implemented by each scored questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g. "pcl5", "mspss").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "PCL-5", "MSPSS").
    fn name(&self) -> &str;

    /// The ordered item set, with the fixed question texts.
    fn items(&self) -> &[Item];

    /// Valid raw range for every item of this instrument.
    fn item_range(&self) -> ScoreRange;

    /// Highest attainable total score.
    fn max_total(&self) -> i64 {
        self.items().len() as i64 * self.item_range().max
    }

    /// Validate an item→score mapping against this instrument's item set
    /// and range.
    fn validate_scores(&self, scores: &ScoreMap) -> Vec<ValidationError> {
        let range = self.item_range();
        let mut errors = Vec::new();
        for (item_id, value) in scores {
            let Some(item) = self.items().iter().find(|i| i.id == item_id) else {
                errors.push(ValidationError {
                    instrument_id: self.id().to_string(),
                    item_id: item_id.clone(),
                    value: *value,
                    expected_range: range,
                    message: format!("{}: unknown item '{}'", self.name(), item_id),
                });
                continue;
            };
            if !range.contains(*value) {
                errors.push(ValidationError {
                    instrument_id: self.id().to_string(),
                    item_id: item_id.clone(),
                    value: *value,
                    expected_range: range,
                    message: format!(
                        "{}: item {} score {} is outside range [{}, {}]",
                        self.name(),
                        item.id,
                        value,
                        range.min,
                        range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Format entered scores as structured text for inclusion in the
    /// generation prompt.
    fn to_structured_input(&self, scores: &ScoreMap) -> String {
        let mut output = format!("## {} (总分 {})\n\n", self.name(), scoring::total(scores));
        for item in self.items() {
            if let Some(value) = scores.get(item.id) {
                output.push_str(&format!("- {}. {}: {}\n", item.id, item.text, value));
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::ucla::UclaPtsdRi),
        Box::new(instruments::pcl5::Pcl5),
        Box::new(instruments::cyrm_child::CyrmChild),
        Box::new(instruments::teen_strengths::TeenStrengths),
        Box::new(instruments::cdrisc::CdRisc10),
        Box::new(instruments::mspss::Mspss),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
