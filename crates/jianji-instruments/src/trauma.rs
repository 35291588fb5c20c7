//! Trauma-inventory variant routing and the shared exposure checklist.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use jianji_core::AgeBand;

use crate::instruments::{pcl5::Pcl5, ucla::UclaPtsdRi};
use crate::Instrument;

/// Which symptom inventory applies to the patient. Selected solely by age
/// band; `AgeBand::Unset` has no valid variant and the form layer blocks
/// entry rather than defaulting to either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TraumaVariant {
    /// UCLA PTSD-RI, under 18. 19 items, 0–4 each, max 76.
    Ucla,
    /// PCL-5, 18 and over. 20 items, 0–4 each, max 80.
    Pcl5,
}

impl TraumaVariant {
    pub fn for_band(band: AgeBand) -> Option<Self> {
        match band {
            AgeBand::Unset => None,
            AgeBand::Child | AgeBand::Teen => Some(TraumaVariant::Ucla),
            AgeBand::Adult => Some(TraumaVariant::Pcl5),
        }
    }

    pub fn instrument(self) -> Box<dyn Instrument> {
        match self {
            TraumaVariant::Ucla => Box::new(UclaPtsdRi),
            TraumaVariant::Pcl5 => Box::new(Pcl5),
        }
    }

    pub fn max_total(self) -> i64 {
        self.instrument().max_total()
    }
}

/// One entry of the lifetime trauma-exposure checklist, keyed by the
/// `TraumaHistory` field it toggles.
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// The seven checklist entries, shared by both inventory variants.
pub const HISTORY_ENTRIES: &[HistoryEntry] = &[
    HistoryEntry {
        key: "naturalDisaster",
        label: "自然灾害：地震、洪水、飓风、大火等",
    },
    HistoryEntry {
        key: "accident",
        label: "意外事故：严重车祸、高空坠落、溺水等",
    },
    HistoryEntry {
        key: "witnessViolence",
        label: "目睹暴力：家庭暴力、社区暴力等",
    },
    HistoryEntry {
        key: "physicalAbuse",
        label: "身体受虐：被殴打导致受伤或严重痛感",
    },
    HistoryEntry {
        key: "sexualTrauma",
        label: "性创伤：被强迫进行性接触或不适行为",
    },
    HistoryEntry {
        key: "loss",
        label: "丧失：亲近的人突然去世或被害",
    },
    HistoryEntry {
        key: "medicalTrauma",
        label: "医疗创伤：痛苦的手术或重症治疗",
    },
];
