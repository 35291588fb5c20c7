use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// Teen strengths and supports scale ("导航系统", ages 13–17).
/// 12 items, each rated 1–5.
pub struct TeenStrengths;

const ITEMS: &[Item] = &[
    Item {
        id: "1",
        text: "我身边有一些我很敬佩的人，我想成为像他们那样的人。",
        group: Some("个人能力"),
    },
    Item {
        id: "2",
        text: "我能够与周围的人合作完成任务。",
        group: Some("个人能力"),
    },
    Item {
        id: "3",
        text: "我认为受教育/学习对我未来的生活很重要。",
        group: Some("个人能力"),
    },
    Item {
        id: "4",
        text: "我具备解决生活难题的技能和能力。",
        group: Some("个人能力"),
    },
    Item {
        id: "5",
        text: "我的父母（或监护人）真正了解我是一个怎样的人。",
        group: Some("家庭支持"),
    },
    Item {
        id: "6",
        text: "当我面临困难时，父母（或监护人）会站在我身后支持我。",
        group: Some("家庭支持"),
    },
    Item {
        id: "7",
        text: "我的基本生活需求（如食物、住所）是有保障的。",
        group: Some("家庭支持"),
    },
    Item {
        id: "8",
        text: "我的父母（或监护人）很关注我的行踪和安全。",
        group: Some("家庭支持"),
    },
    Item {
        id: "9",
        text: "我们家在遇到困难时，会聚在一起讨论解决办法。",
        group: Some("社会环境"),
    },
    Item {
        id: "10",
        text: "我通过参与宗教、精神信仰或文化习俗来获得力量。",
        group: Some("社会环境"),
    },
    Item {
        id: "11",
        text: "我觉得我所处的社区/学校环境对我是友好的。",
        group: Some("社会环境"),
    },
    Item {
        id: "12",
        text: "我对我的家庭背景或文化根源感到自豪。",
        group: Some("社会环境"),
    },
];

impl Instrument for TeenStrengths {
    fn id(&self) -> &str {
        "teen_strengths"
    }

    fn name(&self) -> &str {
        "青少年优势与支持量表"
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange { min: 1, max: 5 }
    }
}
