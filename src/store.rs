//! The data-store seam.
//!
//! Aggregation and panel code is written against [`PerformanceStore`] so it
//! runs the same against PostgreSQL (`PgPool`, the only production
//! implementation) and the in-memory store used by the integration tests.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::evaluation::{self, Evaluation, NewEvaluation};
use crate::models::feedback::{self, Feedback, NewFeedback};
use crate::models::goal::{self, Goal, GoalStatus, GoalUpdate, NewGoal};
use crate::models::metric::{self, PerformanceMetric};
use crate::models::profile::{self, Profile};

/// Which side of a relationship a list is fetched for: rows belonging to an
/// employee, or rows authored by a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Employee(i64),
    Manager(i64),
}

#[allow(async_fn_in_trait)]
pub trait PerformanceStore {
    /// Count goals in `statuses`; `employee_id = None` counts every goal.
    async fn count_goals(&self, employee_id: Option<i64>, statuses: &[GoalStatus]) -> Result<i64, AppError>;
    async fn goal_statuses(&self, employee_id: Option<i64>) -> Result<Vec<GoalStatus>, AppError>;
    async fn count_unread_feedback(&self, employee_id: i64) -> Result<i64, AppError>;
    async fn count_feedback_sent_this_month(&self, manager_id: i64) -> Result<i64, AppError>;
    async fn count_employees(&self) -> Result<i64, AppError>;
    /// Overall ratings of the `limit` most recent evaluations, newest first.
    async fn recent_overall_ratings(&self, employee_id: Option<i64>, limit: i64) -> Result<Vec<i32>, AppError>;
    async fn recent_evaluations(&self, employee_id: Option<i64>, limit: i64) -> Result<Vec<Evaluation>, AppError>;
    async fn metrics_for_employee(&self, employee_id: i64, limit: i64) -> Result<Vec<PerformanceMetric>, AppError>;
    async fn goals(&self, scope: Scope) -> Result<Vec<Goal>, AppError>;
    async fn feedback(&self, scope: Scope) -> Result<Vec<Feedback>, AppError>;
    async fn evaluations_by_manager(&self, manager_id: i64) -> Result<Vec<Evaluation>, AppError>;
    async fn employees(&self) -> Result<Vec<Profile>, AppError>;

    async fn insert_goal(&self, goal: &NewGoal) -> Result<i64, AppError>;
    /// Returns false when the goal does not belong to `employee_id`.
    async fn update_goal(&self, id: i64, employee_id: i64, changes: &GoalUpdate) -> Result<bool, AppError>;
    async fn insert_feedback(&self, feedback: &NewFeedback) -> Result<i64, AppError>;
    /// Returns true only if the item transitioned from unread to read.
    async fn mark_feedback_read(&self, id: i64, employee_id: i64) -> Result<bool, AppError>;
    async fn insert_evaluation(&self, evaluation: &NewEvaluation) -> Result<i64, AppError>;
}

impl PerformanceStore for PgPool {
    async fn count_goals(&self, employee_id: Option<i64>, statuses: &[GoalStatus]) -> Result<i64, AppError> {
        goal::count_by_status(self, employee_id, statuses).await
    }

    async fn goal_statuses(&self, employee_id: Option<i64>) -> Result<Vec<GoalStatus>, AppError> {
        goal::find_statuses(self, employee_id).await
    }

    async fn count_unread_feedback(&self, employee_id: i64) -> Result<i64, AppError> {
        feedback::count_unread(self, employee_id).await
    }

    async fn count_feedback_sent_this_month(&self, manager_id: i64) -> Result<i64, AppError> {
        feedback::count_sent_this_month(self, manager_id).await
    }

    async fn count_employees(&self) -> Result<i64, AppError> {
        profile::count_employees(self).await
    }

    async fn recent_overall_ratings(&self, employee_id: Option<i64>, limit: i64) -> Result<Vec<i32>, AppError> {
        evaluation::find_recent_overall_ratings(self, employee_id, limit).await
    }

    async fn recent_evaluations(&self, employee_id: Option<i64>, limit: i64) -> Result<Vec<Evaluation>, AppError> {
        evaluation::find_recent(self, employee_id, limit).await
    }

    async fn metrics_for_employee(&self, employee_id: i64, limit: i64) -> Result<Vec<PerformanceMetric>, AppError> {
        metric::find_for_employee(self, employee_id, limit).await
    }

    async fn goals(&self, scope: Scope) -> Result<Vec<Goal>, AppError> {
        match scope {
            Scope::Employee(id) => goal::find_for_employee(self, id).await,
            Scope::Manager(id) => goal::find_for_manager(self, id).await,
        }
    }

    async fn feedback(&self, scope: Scope) -> Result<Vec<Feedback>, AppError> {
        match scope {
            Scope::Employee(id) => feedback::find_for_employee(self, id).await,
            Scope::Manager(id) => feedback::find_for_manager(self, id).await,
        }
    }

    async fn evaluations_by_manager(&self, manager_id: i64) -> Result<Vec<Evaluation>, AppError> {
        evaluation::find_for_manager(self, manager_id).await
    }

    async fn employees(&self) -> Result<Vec<Profile>, AppError> {
        profile::find_employees(self).await
    }

    async fn insert_goal(&self, new: &NewGoal) -> Result<i64, AppError> {
        goal::create(self, new).await
    }

    async fn update_goal(&self, id: i64, employee_id: i64, changes: &GoalUpdate) -> Result<bool, AppError> {
        goal::update_for_employee(self, id, employee_id, changes).await
    }

    async fn insert_feedback(&self, new: &NewFeedback) -> Result<i64, AppError> {
        feedback::create(self, new).await
    }

    async fn mark_feedback_read(&self, id: i64, employee_id: i64) -> Result<bool, AppError> {
        feedback::mark_read(self, id, employee_id).await
    }

    async fn insert_evaluation(&self, new: &NewEvaluation) -> Result<i64, AppError> {
        evaluation::create(self, new).await
    }
}
