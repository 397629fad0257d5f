use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    Positive,
    Constructive,
    General,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 3] = [
        FeedbackType::Positive,
        FeedbackType::Constructive,
        FeedbackType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Positive => "positive",
            FeedbackType::Constructive => "constructive",
            FeedbackType::General => "general",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            FeedbackType::Positive => "badge-success",
            FeedbackType::Constructive => "badge-warning",
            FeedbackType::General => "badge-secondary",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedbackType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown feedback type '{s}'"))
    }
}

/// A feedback row joined with the "other side" profile: the manager for
/// the employee's history, the employee for the manager's list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub feedback_type: String,
    pub rating: Option<i32>,
    pub is_read: bool,
    pub employee_id: i64,
    pub manager_id: i64,
    pub counterpart_name: Option<String>,
    pub counterpart_position: Option<String>,
    pub created_at: String,
}

impl Feedback {
    pub fn kind(&self) -> FeedbackType {
        self.feedback_type.parse().unwrap_or(FeedbackType::General)
    }

    pub fn badge_class(&self) -> &'static str {
        self.kind().badge_class()
    }

    pub fn created_display(&self) -> String {
        format::long_date(&self.created_at)
    }

    pub fn stars(&self) -> String {
        self.rating.map(format::stars).unwrap_or_default()
    }

    pub fn counterpart_name_or_blank(&self) -> &str {
        self.counterpart_name.as_deref().unwrap_or("")
    }

    pub fn counterpart_position_or_blank(&self) -> &str {
        self.counterpart_position.as_deref().unwrap_or("")
    }

    pub fn read_label(&self) -> &'static str {
        if self.is_read { "Read" } else { "Unread" }
    }
}

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub title: String,
    pub content: String,
    pub feedback_type: FeedbackType,
    pub rating: Option<i32>,
    pub employee_id: i64,
    pub manager_id: i64,
}

/// Manager's "Give Feedback" form.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackForm {
    pub employee_id: i64,
    pub feedback_type: FeedbackType,
    pub title: String,
    pub content: String,
    pub rating: Option<i32>,
    pub csrf_token: String,
}
