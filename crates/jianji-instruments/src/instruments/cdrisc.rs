use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// CD-RISC-10: Connor-Davidson Resilience Scale, 10-item version.
/// Each item rated 0–4. Total 0–40.
pub struct CdRisc10;

const ITEMS: &[Item] = &[
    Item {
        id: "1",
        text: "我能够适应变化。",
        group: None,
    },
    Item {
        id: "2",
        text: "无论发生什么事情，我都能应付。",
        group: None,
    },
    Item {
        id: "3",
        text: "当问题出现时，我能看到事物幽默的一面。",
        group: None,
    },
    Item {
        id: "4",
        text: "应对压力使我感到更有力量。",
        group: None,
    },
    Item {
        id: "5",
        text: "经历困难后，我能很快恢复过来（反弹）。",
        group: None,
    },
    Item {
        id: "6",
        text: "即使有阻碍，我也会努力去实现目标。",
        group: None,
    },
    Item {
        id: "7",
        text: "在压力之下，我仍然能够保持专注。",
        group: None,
    },
    Item {
        id: "8",
        text: "即使失败了，我也不会轻易气馁。",
        group: None,
    },
    Item {
        id: "9",
        text: "我觉得自己是一个坚强的人。",
        group: None,
    },
    Item {
        id: "10",
        text: "当不得不处理痛苦的情感时，我能处理好。",
        group: None,
    },
];

impl Instrument for CdRisc10 {
    fn id(&self) -> &str {
        "cdrisc10"
    }

    fn name(&self) -> &str {
        "CD-RISC-10"
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 4 }
    }
}
