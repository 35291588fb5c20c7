use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// CYRM-based child resilience checklist ("能量背包", ages 6–12).
/// 8 items, each rated 0 (不像我) / 1 (有点像) / 2 (很像我).
pub struct CyrmChild;

const ITEMS: &[Item] = &[
    Item {
        id: "1",
        text: "当我不开心的时候，我有办法让自己好起来。",
        group: Some("个人能力"),
    },
    Item {
        id: "2",
        text: "我觉得我有优点，我是个棒小孩。",
        group: Some("个人能力"),
    },
    Item {
        id: "3",
        text: "当我想要做一件事的时候，我会努力坚持。",
        group: Some("个人能力"),
    },
    Item {
        id: "4",
        text: "当我害怕的时候，我知道可以找谁抱抱。",
        group: Some("家庭支持"),
    },
    Item {
        id: "5",
        text: "爸爸/妈妈（或照顾者）很爱我，即使我犯错也爱我。",
        group: Some("家庭支持"),
    },
    Item {
        id: "6",
        text: "我有朋友可以一起玩，不会觉得孤单。",
        group: Some("社会环境"),
    },
    Item {
        id: "7",
        text: "我觉得学校是一个安全的地方。",
        group: Some("社会环境"),
    },
    Item {
        id: "8",
        text: "我参加过我很喜欢的兴趣班或活动（画画、运动等）。",
        group: Some("社会环境"),
    },
];

impl Instrument for CyrmChild {
    fn id(&self) -> &str {
        "cyrm_child"
    }

    fn name(&self) -> &str {
        "CYRM 儿童复原力核查表"
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 2 }
    }
}
