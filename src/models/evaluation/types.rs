use serde::{Deserialize, Serialize};

use crate::format;

/// The five per-skill criteria. The overall rating is stored alongside but
/// is not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Criterion {
    Technical,
    Communication,
    Teamwork,
    Leadership,
    Initiative,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Technical,
        Criterion::Communication,
        Criterion::Teamwork,
        Criterion::Leadership,
        Criterion::Initiative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Technical => "Technical",
            Criterion::Communication => "Communication",
            Criterion::Teamwork => "Teamwork",
            Criterion::Leadership => "Leadership",
            Criterion::Initiative => "Initiative",
        }
    }
}

/// An evaluation row joined with the evaluated employee's name/position.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Evaluation {
    pub id: i64,
    pub period_start: String,
    pub period_end: String,
    pub evaluation_date: String,
    pub overall_rating: i32,
    pub technical_skills: Option<i32>,
    pub communication: Option<i32>,
    pub teamwork: Option<i32>,
    pub leadership: Option<i32>,
    pub initiative: Option<i32>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub comments: Option<String>,
    pub employee_id: i64,
    pub manager_id: i64,
    pub employee_name: Option<String>,
    pub employee_position: Option<String>,
    pub created_at: String,
}

impl Evaluation {
    pub fn criterion(&self, criterion: Criterion) -> Option<i32> {
        match criterion {
            Criterion::Technical => self.technical_skills,
            Criterion::Communication => self.communication,
            Criterion::Teamwork => self.teamwork,
            Criterion::Leadership => self.leadership,
            Criterion::Initiative => self.initiative,
        }
    }

    pub fn period_display(&self) -> String {
        format!(
            "{} - {}",
            format::long_date(&self.period_start),
            format::long_date(&self.period_end)
        )
    }

    pub fn created_short(&self) -> String {
        format::short_date(&self.created_at)
    }

    pub fn stars(&self) -> String {
        format::stars(self.overall_rating)
    }

    pub fn strengths_or_blank(&self) -> &str {
        self.strengths.as_deref().unwrap_or("")
    }

    pub fn improvement_or_blank(&self) -> &str {
        self.areas_for_improvement.as_deref().unwrap_or("")
    }

    pub fn comments_or_blank(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }

    pub fn employee_name_or_blank(&self) -> &str {
        self.employee_name.as_deref().unwrap_or("")
    }

    pub fn employee_position_or_blank(&self) -> &str {
        self.employee_position.as_deref().unwrap_or("")
    }

    /// Criterion values in `Criterion::ALL` order as shown in the trend
    /// table ("-" when not rated).
    pub fn criteria_cells(&self) -> Vec<String> {
        Criterion::ALL
            .into_iter()
            .map(|c| self.criterion(c).map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub employee_id: i64,
    pub manager_id: i64,
    pub period_start: String,
    pub period_end: String,
    pub overall_rating: i32,
    pub technical_skills: i32,
    pub communication: i32,
    pub teamwork: i32,
    pub leadership: i32,
    pub initiative: i32,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub comments: Option<String>,
}

fn default_rating() -> i32 {
    3
}

/// Manager's "New Evaluation" form. Ratings default to 3 like the form's
/// initial selection.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationForm {
    pub employee_id: i64,
    pub period_start: String,
    pub period_end: String,
    #[serde(default = "default_rating")]
    pub overall_rating: i32,
    #[serde(default = "default_rating")]
    pub technical_skills: i32,
    #[serde(default = "default_rating")]
    pub communication: i32,
    #[serde(default = "default_rating")]
    pub teamwork: i32,
    #[serde(default = "default_rating")]
    pub leadership: i32,
    #[serde(default = "default_rating")]
    pub initiative: i32,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub areas_for_improvement: String,
    #[serde(default)]
    pub comments: String,
    pub csrf_token: String,
}
