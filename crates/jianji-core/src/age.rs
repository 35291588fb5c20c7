use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age band selecting which instrument variant applies. Every component
/// that branches on age goes through [`AgeBand::from_age`] rather than
/// re-deriving the thresholds locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBand {
    /// Age 0 — not yet entered. No instrument variant is valid.
    Unset,
    /// Ages 1–12: UCLA PTSD-RI and the child resilience checklist.
    Child,
    /// Ages 13–17: UCLA PTSD-RI and the teen strengths scale.
    Teen,
    /// Ages 18+: PCL-5 and CD-RISC-10 / MSPSS.
    Adult,
}

impl AgeBand {
    /// Total over all non-negative ages: no gap, no overlap.
    pub fn from_age(age: u32) -> Self {
        match age {
            0 => AgeBand::Unset,
            1..=12 => AgeBand::Child,
            13..=17 => AgeBand::Teen,
            _ => AgeBand::Adult,
        }
    }

    pub fn is_adult(self) -> bool {
        self == AgeBand::Adult
    }
}
