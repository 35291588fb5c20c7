//! Commands the rendering layer invokes. Every mutation replaces a whole
//! sub-record and synchronously saves the aggregate; derived values are
//! recomputed on every read, never stored.

use serde::Serialize;

use jianji_chart::RadarGeometry;
use jianji_core::{
    AssessmentState, CssrsRecord, PatientInfo, Pcl5Record, ResilienceRecord, SummaryRecord,
    UclaRecord,
};
use jianji_instruments::resilience::DimensionScore;
use jianji_instruments::risk::{Disclosure, RiskLevel};
use jianji_instruments::trauma::TraumaVariant;
use jianji_storage::STORAGE_KEY;

use crate::state::AppState;

fn replace_and_save(
    app: &AppState,
    apply: impl FnOnce(&mut AssessmentState),
) -> eyre::Result<()> {
    let mut data = app.lock();
    apply(&mut data);
    let snapshot = data.clone();
    drop(data);
    app.persist(&snapshot)?;
    Ok(())
}

pub fn set_patient(app: &AppState, patient: PatientInfo) -> eyre::Result<()> {
    replace_and_save(app, |data| data.patient = patient)
}

pub fn set_cssrs(app: &AppState, cssrs: CssrsRecord) -> eyre::Result<()> {
    replace_and_save(app, |data| data.cssrs = cssrs)
}

pub fn set_ucla(app: &AppState, ucla: UclaRecord) -> eyre::Result<()> {
    replace_and_save(app, |data| data.ucla = ucla)
}

pub fn set_pcl5(app: &AppState, pcl5: Pcl5Record) -> eyre::Result<()> {
    replace_and_save(app, |data| data.pcl5 = pcl5)
}

pub fn set_resilience(app: &AppState, resilience: ResilienceRecord) -> eyre::Result<()> {
    replace_and_save(app, |data| data.resilience = resilience)
}

pub fn set_summary(app: &AppState, summary: SummaryRecord) -> eyre::Result<()> {
    replace_and_save(app, |data| data.summary = summary)
}

/// Discard the saved blob and reinstall defaults. The confirmation dialog
/// lives in the rendering layer; by the time this runs the user has
/// already confirmed.
pub fn reset(app: &AppState) -> eyre::Result<()> {
    jianji_storage::delete_state(app.data_dir(), STORAGE_KEY)?;
    let mut data = app.lock();
    *data = AssessmentState::default();
    Ok(())
}

pub fn snapshot(app: &AppState) -> AssessmentState {
    app.snapshot()
}

/// Derived C-SSRS state for the risk tab: alert level plus which form
/// sections are disclosed.
#[derive(Debug, Clone, Serialize)]
pub struct RiskStatus {
    pub level: RiskLevel,
    pub disclosure: Disclosure,
}

pub fn risk_status(app: &AppState) -> RiskStatus {
    let data = app.lock();
    RiskStatus {
        level: jianji_instruments::risk::classify(&data.cssrs),
        disclosure: jianji_instruments::risk::disclosure(&data.cssrs),
    }
}

/// Derived trauma-inventory state: the age-selected variant and its total.
/// `None` while age is unset — the form blocks entry instead of guessing
/// a variant.
#[derive(Debug, Clone, Serialize)]
pub struct TraumaSummary {
    pub variant: TraumaVariant,
    pub total: i64,
    pub max_total: i64,
}

pub fn trauma_summary(app: &AppState) -> Option<TraumaSummary> {
    let data = app.lock();
    let variant = TraumaVariant::for_band(data.patient.age_band())?;
    let total = match variant {
        TraumaVariant::Ucla => data.ucla.total_score(),
        TraumaVariant::Pcl5 => data.pcl5.total_score(),
    };
    Some(TraumaSummary {
        variant,
        total,
        max_total: variant.max_total(),
    })
}

/// Everything the summary tab needs to draw the radar chart: the floored
/// dimension values and the polygon geometry at the requested size.
#[derive(Debug, Clone, Serialize)]
pub struct RadarView {
    pub axes: [DimensionScore; 3],
    pub geometry: RadarGeometry,
}

pub fn radar_data(app: &AppState, size: f64) -> eyre::Result<RadarView> {
    let data = app.lock();
    let axes =
        jianji_instruments::resilience::radar_axes(data.patient.age, &data.resilience);
    drop(data);

    let values: Vec<jianji_chart::AxisValue> = axes
        .iter()
        .map(|axis| jianji_chart::AxisValue {
            label: axis.label.clone(),
            value: axis.value,
        })
        .collect();
    let geometry = jianji_chart::radar_geometry(&values, size)?;
    Ok(RadarView { axes, geometry })
}

/// Tolerant numeric entry: anything unparseable becomes 0 rather than an
/// error, matching the form's frictionless-entry behavior.
pub fn parse_age(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

/// Same coercion for the C-SSRS intensity field.
pub fn parse_intensity(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}
