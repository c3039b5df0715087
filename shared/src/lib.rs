use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackCategory {
    Positive,
    Improvement,
}

impl From<String> for FeedbackCategory {
    // Unrecognized categories land on Improvement so they pick up the
    // caution styling instead of failing deserialization.
    fn from(value: String) -> Self {
        match value.as_str() {
            "positive" => Self::Positive,
            _ => Self::Improvement,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Feedback {
    pub overall: String,
    #[serde(default)]
    pub items: Vec<FeedbackItem>,
}
