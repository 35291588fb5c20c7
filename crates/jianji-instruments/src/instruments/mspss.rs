use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// MSPSS: Multidimensional Scale of Perceived Social Support.
/// 11 items here, each rated 1–7. Item "5" is absent from this form of
/// the instrument by design, so ids run "1".."4", "6".."12".
pub struct Mspss;

const ITEMS: &[Item] = &[
    Item {
        id: "1",
        text: "当我有需要时，我很特别的一个人（伴侣/密友）会在我身边。",
        group: Some("重要他人"),
    },
    Item {
        id: "2",
        text: "遇到快乐或悲伤的事，我有很特别的一个人可以分享。",
        group: Some("重要他人"),
    },
    Item {
        id: "3",
        text: "我的家庭能切实地给我所需要的帮助（具体的支持）。",
        group: Some("家庭"),
    },
    Item {
        id: "4",
        text: "我能从我的家庭获得情感上的支持与帮助。",
        group: Some("家庭"),
    },
    Item {
        id: "6",
        text: "当我有需要时，我的朋友们会试着来帮我。",
        group: Some("朋友"),
    },
    Item {
        id: "7",
        text: "当事情出现问题时，我可以指望我的朋友们。",
        group: Some("朋友"),
    },
    Item {
        id: "8",
        text: "我能与我的家人谈论我的难题。",
        group: Some("家庭"),
    },
    Item {
        id: "9",
        text: "我有朋友能与其分享快乐和忧愁。",
        group: Some("朋友"),
    },
    Item {
        id: "10",
        text: "在我的生活中，有一个特别的人关心我的感受。",
        group: Some("重要他人"),
    },
    Item {
        id: "11",
        text: "我的家人愿意帮我做决定。",
        group: Some("家庭"),
    },
    Item {
        id: "12",
        text: "我能与我的朋友们谈论我的难题。",
        group: Some("朋友"),
    },
];

impl Instrument for Mspss {
    fn id(&self) -> &str {
        "mspss"
    }

    fn name(&self) -> &str {
        "MSPSS"
    }

    fn items(&self) -> &[Item] {
        ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ScoreRange { min: 1, max: 7 }
    }
}
