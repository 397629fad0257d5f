use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::Pending,
        GoalStatus::InProgress,
        GoalStatus::Completed,
        GoalStatus::Cancelled,
    ];

    /// Statuses counted as "active" on the dashboards.
    pub const ACTIVE: [GoalStatus; 2] = [GoalStatus::Pending, GoalStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Pending => "pending",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> String {
        format::humanize(self.as_str())
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            GoalStatus::Pending => "badge-secondary",
            GoalStatus::InProgress => "badge-default",
            GoalStatus::Completed => "badge-success",
            GoalStatus::Cancelled => "badge-destructive",
        }
    }

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown goal status '{s}'"))
    }
}

/// A goal row, optionally joined with the employee's name and position.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_date: String,
    pub status: String,
    pub progress: i32,
    pub is_personal: bool,
    pub employee_id: i64,
    pub manager_id: Option<i64>,
    pub employee_name: Option<String>,
    pub employee_position: Option<String>,
    pub created_at: String,
}

impl Goal {
    /// Parsed status. Rows are constrained by the schema, so an unknown
    /// value only shows up with a hand-edited database; treat it as pending.
    pub fn status(&self) -> GoalStatus {
        self.status.parse().unwrap_or(GoalStatus::Pending)
    }

    pub fn status_label(&self) -> String {
        self.status().label()
    }

    pub fn badge_class(&self) -> &'static str {
        self.status().badge_class()
    }

    pub fn target_date_display(&self) -> String {
        format::long_date(&self.target_date)
    }

    pub fn description_or_blank(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn employee_name_or_blank(&self) -> &str {
        self.employee_name.as_deref().unwrap_or("")
    }

    pub fn owner_label(&self) -> &'static str {
        if self.is_personal { "Personal" } else { "Assigned" }
    }
}

/// Insert payload for a goal.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub target_date: String,
    pub status: GoalStatus,
    pub progress: i32,
    pub is_personal: bool,
    pub employee_id: i64,
    pub manager_id: Option<i64>,
}

/// Fields an employee may change on one of their goals. `None` keeps the
/// stored value.
#[derive(Debug, Clone)]
pub struct GoalUpdate {
    pub title: String,
    pub description: Option<String>,
    pub target_date: String,
    pub progress: Option<i32>,
    pub status: Option<GoalStatus>,
}

/// Employee's personal goal form (create and edit share it; `progress` and
/// `status` are only rendered when editing). Both arrive as raw text so a
/// cleared input reaches validation instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_date: String,
    #[serde(default)]
    pub progress: String,
    #[serde(default)]
    pub status: String,
    pub csrf_token: String,
}

/// Manager's "Set Goal" form.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignGoalForm {
    pub employee_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_date: String,
    pub status: Option<GoalStatus>,
    pub csrf_token: String,
}
