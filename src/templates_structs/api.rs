use serde::Serialize;

use crate::stats::DashboardStats;

#[derive(Serialize, Debug, Clone)]
pub struct StatsResponse {
    pub profile_id: i64,
    pub stats: DashboardStats,
}

#[derive(Serialize, Debug, Clone)]
pub struct MarkReadResponse {
    pub feedback_id: i64,
    /// False when the item was already read (or not the caller's).
    pub transitioned: bool,
    pub stats: DashboardStats,
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
}
