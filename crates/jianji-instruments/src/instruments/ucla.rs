use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// UCLA PTSD-RI: UCLA PTSD Reaction Index, child/adolescent version.
/// 19 items, each rated 0–4. Total 0–76.
pub struct UclaPtsdRi;

const ITEMS: &[Item] = &[
    Item {
        id: "1",
        text: "当我不想去想那件可怕的事情时，它还是会突然冒出来。",
        group: Some("侵入"),
    },
    Item {
        id: "2",
        text: "我会做关于那件事的噩梦，或者很吓人的梦。",
        group: Some("侵入"),
    },
    Item {
        id: "3",
        text: "有时候我会觉得那件可怕的事情好像正在发生一样（闪回）。",
        group: Some("侵入"),
    },
    Item {
        id: "4",
        text: "当看到、听到或闻到某些像那件事的东西时，我会非常难过或害怕。",
        group: Some("侵入"),
    },
    Item {
        id: "5",
        text: "当我想起那件事时，我的身体会有反应（心跳、出汗等）。",
        group: Some("侵入"),
    },
    Item {
        id: "6",
        text: "我尽量不去想、不谈论那件可怕的事情，也不去感受情绪。",
        group: Some("回避"),
    },
    Item {
        id: "7",
        text: "我尽量避开那些会让我想起那件事的人、地方或东西。",
        group: Some("回避"),
    },
    Item {
        id: "8",
        text: "我记不清那件可怕事情的一些重要部分了。",
        group: Some("认知/情绪"),
    },
    Item {
        id: "9",
        text: "我觉得自己很糟糕，或者觉得这个世界很危险。",
        group: Some("认知/情绪"),
    },
    Item {
        id: "10",
        text: "我觉得那件事发生是我的错，或者我导致了坏结果。",
        group: Some("认知/情绪"),
    },
    Item {
        id: "11",
        text: "我很难感到开心、快乐或爱。",
        group: Some("认知/情绪"),
    },
    Item {
        id: "12",
        text: "对我以前喜欢做的事情不再感兴趣了。",
        group: Some("认知/情绪"),
    },
    Item {
        id: "13",
        text: "我觉得跟谁都不亲近，感觉自己是孤单一人。",
        group: Some("认知/情绪"),
    },
    Item {
        id: "14",
        text: "我很容易发脾气，或者容易跟人打架、吵架。",
        group: Some("警觉"),
    },
    Item {
        id: "15",
        text: "我做事情变得不顾危险，或者故意做危险的事。",
        group: Some("警觉"),
    },
    Item {
        id: "16",
        text: "我总是处于高度警惕的状态，时刻注意周围危险。",
        group: Some("警觉"),
    },
    Item {
        id: "17",
        text: "我很容易被突然的声音或动作吓一跳。",
        group: Some("警觉"),
    },
    Item {
        id: "18",
        text: "我很难集中注意力。",
        group: Some("警觉"),
    },
    Item {
        id: "19",
        text: "我很难入睡，或者半夜容易醒来。",
        group: Some("警觉"),
    },
];

impl Instrument for UclaPtsdRi {
    fn id(&self) -> &str {
        "ucla_ptsd_ri"
    }

    fn name(&self) -> &str {
        "UCLA PTSD-RI"
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 4 }
    }
}
