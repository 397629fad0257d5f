//! Dashboard summary statistics.
//!
//! Each statistic is an independent read against the store. The reads run
//! concurrently and a failed read degrades only its own number to 0.

pub mod reducer;
pub mod reports;

use serde::Serialize;

use crate::auth::session::Identity;
use crate::errors::AppError;
use crate::format;
use crate::models::goal::GoalStatus;
use crate::models::profile::Role;
use crate::store::PerformanceStore;

pub use reducer::{CategoryAverage, GoalTally, StatusCount};

/// How many recent evaluations feed an employee's average rating.
pub const EMPLOYEE_RECENT_EVALUATIONS: i64 = 5;
/// How many recent evaluations feed the manager's average performance.
pub const MANAGER_RECENT_EVALUATIONS: i64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EmployeeStats {
    pub active_goals: i64,
    pub completed_goals: i64,
    pub unread_feedback: i64,
    pub avg_rating: f64,
}

impl EmployeeStats {
    pub fn avg_rating_display(&self) -> String {
        format::rating(self.avg_rating)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ManagerStats {
    pub total_employees: i64,
    pub active_goals: i64,
    pub avg_performance: f64,
    pub feedback_this_month: i64,
}

impl ManagerStats {
    pub fn avg_performance_display(&self) -> String {
        format::rating(self.avg_performance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DashboardStats {
    Employee(EmployeeStats),
    Manager(ManagerStats),
}

/// Swallow a failed read: log it and fall back to the type's zero value.
pub(crate) fn or_default<T: Default>(what: &str, result: Result<T, AppError>) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("Failed to load {what}: {e}");
        T::default()
    })
}

pub async fn employee_stats<S: PerformanceStore>(store: &S, employee_id: i64) -> EmployeeStats {
    let (active, completed, unread, ratings) = tokio::join!(
        store.count_goals(Some(employee_id), &GoalStatus::ACTIVE),
        store.count_goals(Some(employee_id), &[GoalStatus::Completed]),
        store.count_unread_feedback(employee_id),
        store.recent_overall_ratings(Some(employee_id), EMPLOYEE_RECENT_EVALUATIONS),
    );

    EmployeeStats {
        active_goals: or_default("active goal count", active),
        completed_goals: or_default("completed goal count", completed),
        unread_feedback: or_default("unread feedback count", unread),
        avg_rating: reducer::average_rating(&or_default("recent evaluation ratings", ratings)),
    }
}

/// Organisation-wide numbers for the manager dashboard, plus the manager's
/// own feedback count for the current month.
pub async fn manager_stats<S: PerformanceStore>(store: &S, manager_id: i64) -> ManagerStats {
    let (employees, active, ratings, sent) = tokio::join!(
        store.count_employees(),
        store.count_goals(None, &GoalStatus::ACTIVE),
        store.recent_overall_ratings(None, MANAGER_RECENT_EVALUATIONS),
        store.count_feedback_sent_this_month(manager_id),
    );

    ManagerStats {
        total_employees: or_default("employee count", employees),
        active_goals: or_default("active goal count", active),
        avg_performance: reducer::average_rating(&or_default("recent evaluation ratings", ratings)),
        feedback_this_month: or_default("feedback sent count", sent),
    }
}

pub async fn for_identity<S: PerformanceStore>(store: &S, identity: &Identity) -> DashboardStats {
    match identity.role {
        Role::Employee => DashboardStats::Employee(employee_stats(store, identity.profile_id).await),
        Role::Manager => DashboardStats::Manager(manager_stats(store, identity.profile_id).await),
    }
}
