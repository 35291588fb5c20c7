use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// PCL-5: PTSD Checklist for DSM-5, adult version.
/// 20 items, each rated 0–4. Total 0–80.
pub struct Pcl5;

const ITEMS: &[Item] = &[
    Item {
        id: "1",
        text: "反复出现关于该压力事件的、令人不安的记忆、想法或画面？",
        group: Some("侵入"),
    },
    Item {
        id: "2",
        text: "反复做关于该压力事件的令人不安的梦？",
        group: Some("侵入"),
    },
    Item {
        id: "3",
        text: "突然感觉该压力事件好像正在重演（仿佛回到了当时）？",
        group: Some("侵入"),
    },
    Item {
        id: "4",
        text: "当某些事物让您想起该压力事件时，您会感到非常沮丧或不安？",
        group: Some("侵入"),
    },
    Item {
        id: "5",
        text: "想起该压力事件时，您会有强烈的生理反应？",
        group: Some("侵入"),
    },
    Item {
        id: "6",
        text: "回避关于该压力事件的记忆、想法或感觉？",
        group: Some("回避"),
    },
    Item {
        id: "7",
        text: "回避外部提醒物（如人、地点、对话、活动）？",
        group: Some("回避"),
    },
    Item {
        id: "8",
        text: "记不起该压力事件的某个重要方面？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "9",
        text: "对自己、他人或世界持有强烈的负面信念？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "10",
        text: "既然发生了该事件，您却责怪自己或他人？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "11",
        text: "持续拥有负面的情绪状态（如恐惧、愤怒、内疚、羞耻）？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "12",
        text: "对以前喜欢的活动明显失去兴趣？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "13",
        text: "感觉与他人疏远或隔绝？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "14",
        text: "难以体验积极的情绪（如无法感到快乐或爱意）？",
        group: Some("认知/情绪"),
    },
    Item {
        id: "15",
        text: "易怒、爆发愤怒或表现出攻击性行为？",
        group: Some("警觉"),
    },
    Item {
        id: "16",
        text: "冒太大的风险或做可能会伤害自己的事情？",
        group: Some("警觉"),
    },
    Item {
        id: "17",
        text: "保持高度警觉、提防卫护？",
        group: Some("警觉"),
    },
    Item {
        id: "18",
        text: "容易受惊吓？",
        group: Some("警觉"),
    },
    Item {
        id: "19",
        text: "注意力难以集中？",
        group: Some("警觉"),
    },
    Item {
        id: "20",
        text: "难以入睡或易醒？",
        group: Some("警觉"),
    },
];

impl Instrument for Pcl5 {
    fn id(&self) -> &str {
        "pcl5"
    }

    fn name(&self) -> &str {
        "PCL-5"
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 4 }
    }
}
