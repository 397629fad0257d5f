use serde::Serialize;

use crate::format;

/// One dated score snapshot. Scores are 0–100 and any of them may be absent.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PerformanceMetric {
    pub id: i64,
    pub employee_id: i64,
    pub metric_date: String,
    pub productivity_score: Option<i32>,
    pub quality_score: Option<i32>,
    pub attendance_score: Option<i32>,
    pub collaboration_score: Option<i32>,
    pub notes: Option<String>,
}

impl PerformanceMetric {
    pub fn date_short(&self) -> String {
        format::short_date(&self.metric_date)
    }
}

/// Insert payload; metrics come from outside the UI (seeder, imports).
#[derive(Debug, Clone, Default)]
pub struct NewMetric {
    pub employee_id: i64,
    pub metric_date: String,
    pub productivity_score: Option<i32>,
    pub quality_score: Option<i32>,
    pub attendance_score: Option<i32>,
    pub collaboration_score: Option<i32>,
    pub notes: Option<String>,
}
