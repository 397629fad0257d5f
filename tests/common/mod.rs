//! Shared test infrastructure.
//!
//! [`MemoryStore`] implements `PerformanceStore` over plain vectors so the
//! aggregator and panel logic can be exercised without PostgreSQL. Any
//! operation can be made to fail with [`MemoryStore::fail`].

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;

use perfboard::errors::AppError;
use perfboard::models::evaluation::{Evaluation, NewEvaluation};
use perfboard::models::feedback::{Feedback, NewFeedback};
use perfboard::models::goal::{Goal, GoalStatus, GoalUpdate, NewGoal};
use perfboard::models::metric::PerformanceMetric;
use perfboard::models::profile::{Profile, Role};
use perfboard::store::{PerformanceStore, Scope};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const MANAGER_ID: i64 = 1;
pub const EMPLOYEE_ID: i64 = 2;
pub const OTHER_EMPLOYEE_ID: i64 = 3;

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

#[derive(Default)]
struct Tables {
    next_id: i64,
    profiles: Vec<Profile>,
    goals: Vec<Goal>,
    feedback: Vec<Feedback>,
    evaluations: Vec<Evaluation>,
    metrics: Vec<PerformanceMetric>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn name_of(&self, id: i64) -> (Option<String>, Option<String>) {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .map(|p| (Some(p.full_name.clone()), p.position.clone()))
            .unwrap_or((None, None))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: Mutex<HashSet<&'static str>>,
}

fn now_text() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.6f+00").to_string()
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

impl MemoryStore {
    /// A store holding one manager and two employees.
    pub fn with_team() -> Self {
        let store = Self::default();
        store.add_profile(MANAGER_ID, "Morgan Reyes", Role::Manager, Some("Engineering Manager"));
        store.add_profile(EMPLOYEE_ID, "Ada Lovelace", Role::Employee, Some("Senior Engineer"));
        store.add_profile(OTHER_EMPLOYEE_ID, "Linus Park", Role::Employee, None);
        store
    }

    pub fn add_profile(&self, id: i64, full_name: &str, role: Role, position: Option<&str>) {
        let mut t = self.tables.lock().unwrap();
        t.next_id = t.next_id.max(id);
        t.profiles.push(Profile {
            id,
            full_name: full_name.to_string(),
            email: format!("{}@example.com", full_name.split_whitespace().next().unwrap_or("x").to_lowercase()),
            role: role.as_str().to_string(),
            department: Some("Engineering".to_string()),
            position: position.map(str::to_string),
            avatar_url: None,
        });
    }

    /// Make every call of the named operation fail until [`Self::heal`].
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn heal(&self, operation: &'static str) {
        self.failing.lock().unwrap().remove(operation);
    }

    fn check(&self, operation: &'static str) -> Result<(), AppError> {
        if self.failing.lock().unwrap().contains(operation) {
            Err(AppError::Db(sqlx::Error::Protocol(format!("injected failure in {operation}"))))
        } else {
            Ok(())
        }
    }

    pub fn seed_goal(&self, employee_id: i64, title: &str, status: GoalStatus) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let (employee_name, employee_position) = t.name_of(employee_id);
        t.goals.push(Goal {
            id,
            title: title.to_string(),
            description: None,
            target_date: "2026-12-31".to_string(),
            status: status.as_str().to_string(),
            progress: 0,
            is_personal: true,
            employee_id,
            manager_id: None,
            employee_name,
            employee_position,
            created_at: now_text(),
        });
        id
    }

    pub fn seed_feedback(&self, employee_id: i64, title: &str, is_read: bool) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let (counterpart_name, counterpart_position) = t.name_of(MANAGER_ID);
        t.feedback.push(Feedback {
            id,
            title: title.to_string(),
            content: "Details".to_string(),
            feedback_type: "general".to_string(),
            rating: Some(3),
            is_read,
            employee_id,
            manager_id: MANAGER_ID,
            counterpart_name,
            counterpart_position,
            created_at: now_text(),
        });
        id
    }

    /// Evaluation with every criterion set to `overall`.
    pub fn seed_evaluation(&self, employee_id: i64, overall: i32) -> i64 {
        self.seed_evaluation_with(employee_id, overall, [Some(overall); 5])
    }

    pub fn seed_evaluation_with(&self, employee_id: i64, overall: i32, criteria: [Option<i32>; 5]) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let (employee_name, employee_position) = t.name_of(employee_id);
        t.evaluations.push(Evaluation {
            id,
            period_start: "2026-01-01".to_string(),
            period_end: "2026-03-31".to_string(),
            evaluation_date: today(),
            overall_rating: overall,
            technical_skills: criteria[0],
            communication: criteria[1],
            teamwork: criteria[2],
            leadership: criteria[3],
            initiative: criteria[4],
            strengths: None,
            areas_for_improvement: None,
            comments: None,
            employee_id,
            manager_id: MANAGER_ID,
            employee_name,
            employee_position,
            created_at: now_text(),
        });
        id
    }

    pub fn seed_metric(&self, employee_id: i64, date: &str, score: i32) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.metrics.push(PerformanceMetric {
            id,
            employee_id,
            metric_date: date.to_string(),
            productivity_score: Some(score),
            quality_score: Some(score),
            attendance_score: None,
            collaboration_score: Some(score),
            notes: None,
        });
        id
    }

    pub fn goal_count(&self) -> usize {
        self.tables.lock().unwrap().goals.len()
    }

    pub fn goal(&self, id: i64) -> Option<Goal> {
        self.tables.lock().unwrap().goals.iter().find(|g| g.id == id).cloned()
    }

    pub fn feedback_item(&self, id: i64) -> Option<Feedback> {
        self.tables.lock().unwrap().feedback.iter().find(|f| f.id == id).cloned()
    }
}

impl PerformanceStore for MemoryStore {
    async fn count_goals(&self, employee_id: Option<i64>, statuses: &[GoalStatus]) -> Result<i64, AppError> {
        self.check("count_goals")?;
        let t = self.tables.lock().unwrap();
        Ok(t.goals
            .iter()
            .filter(|g| employee_id.is_none_or(|id| g.employee_id == id))
            .filter(|g| statuses.contains(&g.status()))
            .count() as i64)
    }

    async fn goal_statuses(&self, employee_id: Option<i64>) -> Result<Vec<GoalStatus>, AppError> {
        self.check("goal_statuses")?;
        let t = self.tables.lock().unwrap();
        Ok(t.goals
            .iter()
            .filter(|g| employee_id.is_none_or(|id| g.employee_id == id))
            .map(|g| g.status())
            .collect())
    }

    async fn count_unread_feedback(&self, employee_id: i64) -> Result<i64, AppError> {
        self.check("count_unread_feedback")?;
        let t = self.tables.lock().unwrap();
        Ok(t.feedback.iter().filter(|f| f.employee_id == employee_id && !f.is_read).count() as i64)
    }

    async fn count_feedback_sent_this_month(&self, manager_id: i64) -> Result<i64, AppError> {
        self.check("count_feedback_sent_this_month")?;
        let month = Utc::now().format("%Y-%m").to_string();
        let t = self.tables.lock().unwrap();
        Ok(t.feedback
            .iter()
            .filter(|f| f.manager_id == manager_id && f.created_at.starts_with(&month))
            .count() as i64)
    }

    async fn count_employees(&self) -> Result<i64, AppError> {
        self.check("count_employees")?;
        let t = self.tables.lock().unwrap();
        Ok(t.profiles.iter().filter(|p| p.role() == Role::Employee).count() as i64)
    }

    async fn recent_overall_ratings(&self, employee_id: Option<i64>, limit: i64) -> Result<Vec<i32>, AppError> {
        self.check("recent_overall_ratings")?;
        Ok(self
            .recent_evaluations(employee_id, limit)
            .await?
            .iter()
            .map(|e| e.overall_rating)
            .collect())
    }

    async fn recent_evaluations(&self, employee_id: Option<i64>, limit: i64) -> Result<Vec<Evaluation>, AppError> {
        self.check("recent_evaluations")?;
        let t = self.tables.lock().unwrap();
        Ok(t.evaluations
            .iter()
            .rev()
            .filter(|e| employee_id.is_none_or(|id| e.employee_id == id))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn metrics_for_employee(&self, employee_id: i64, limit: i64) -> Result<Vec<PerformanceMetric>, AppError> {
        self.check("metrics_for_employee")?;
        let t = self.tables.lock().unwrap();
        let mut rows: Vec<PerformanceMetric> =
            t.metrics.iter().filter(|m| m.employee_id == employee_id).cloned().collect();
        rows.sort_by(|a, b| a.metric_date.cmp(&b.metric_date));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn goals(&self, scope: Scope) -> Result<Vec<Goal>, AppError> {
        self.check("goals")?;
        let t = self.tables.lock().unwrap();
        Ok(t.goals
            .iter()
            .rev()
            .filter(|g| match scope {
                Scope::Employee(id) => g.employee_id == id,
                Scope::Manager(id) => g.manager_id == Some(id),
            })
            .cloned()
            .collect())
    }

    async fn feedback(&self, scope: Scope) -> Result<Vec<Feedback>, AppError> {
        self.check("feedback")?;
        let t = self.tables.lock().unwrap();
        Ok(t.feedback
            .iter()
            .rev()
            .filter(|f| match scope {
                Scope::Employee(id) => f.employee_id == id,
                Scope::Manager(id) => f.manager_id == id,
            })
            .cloned()
            .collect())
    }

    async fn evaluations_by_manager(&self, manager_id: i64) -> Result<Vec<Evaluation>, AppError> {
        self.check("evaluations_by_manager")?;
        let t = self.tables.lock().unwrap();
        Ok(t.evaluations.iter().rev().filter(|e| e.manager_id == manager_id).cloned().collect())
    }

    async fn employees(&self) -> Result<Vec<Profile>, AppError> {
        self.check("employees")?;
        let t = self.tables.lock().unwrap();
        let mut rows: Vec<Profile> =
            t.profiles.iter().filter(|p| p.role() == Role::Employee).cloned().collect();
        rows.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(rows)
    }

    async fn insert_goal(&self, new: &NewGoal) -> Result<i64, AppError> {
        self.check("insert_goal")?;
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let (employee_name, employee_position) = t.name_of(new.employee_id);
        t.goals.push(Goal {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            target_date: new.target_date.clone(),
            status: new.status.as_str().to_string(),
            progress: new.progress,
            is_personal: new.is_personal,
            employee_id: new.employee_id,
            manager_id: new.manager_id,
            employee_name,
            employee_position,
            created_at: now_text(),
        });
        Ok(id)
    }

    async fn update_goal(&self, id: i64, employee_id: i64, changes: &GoalUpdate) -> Result<bool, AppError> {
        self.check("update_goal")?;
        let mut t = self.tables.lock().unwrap();
        let Some(goal) = t.goals.iter_mut().find(|g| g.id == id && g.employee_id == employee_id) else {
            return Ok(false);
        };
        goal.title = changes.title.clone();
        goal.description = changes.description.clone();
        goal.target_date = changes.target_date.clone();
        if let Some(progress) = changes.progress {
            goal.progress = progress;
        }
        if let Some(status) = changes.status {
            goal.status = status.as_str().to_string();
        }
        Ok(true)
    }

    async fn insert_feedback(&self, new: &NewFeedback) -> Result<i64, AppError> {
        self.check("insert_feedback")?;
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let (counterpart_name, counterpart_position) = t.name_of(new.manager_id);
        t.feedback.push(Feedback {
            id,
            title: new.title.clone(),
            content: new.content.clone(),
            feedback_type: new.feedback_type.as_str().to_string(),
            rating: new.rating,
            is_read: false,
            employee_id: new.employee_id,
            manager_id: new.manager_id,
            counterpart_name,
            counterpart_position,
            created_at: now_text(),
        });
        Ok(id)
    }

    async fn mark_feedback_read(&self, id: i64, employee_id: i64) -> Result<bool, AppError> {
        self.check("mark_feedback_read")?;
        let mut t = self.tables.lock().unwrap();
        match t.feedback.iter_mut().find(|f| f.id == id && f.employee_id == employee_id && !f.is_read) {
            Some(item) => {
                item.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_evaluation(&self, new: &NewEvaluation) -> Result<i64, AppError> {
        self.check("insert_evaluation")?;
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let (employee_name, employee_position) = t.name_of(new.employee_id);
        t.evaluations.push(Evaluation {
            id,
            period_start: new.period_start.clone(),
            period_end: new.period_end.clone(),
            evaluation_date: today(),
            overall_rating: new.overall_rating,
            technical_skills: Some(new.technical_skills),
            communication: Some(new.communication),
            teamwork: Some(new.teamwork),
            leadership: Some(new.leadership),
            initiative: Some(new.initiative),
            strengths: new.strengths.clone(),
            areas_for_improvement: new.areas_for_improvement.clone(),
            comments: new.comments.clone(),
            employee_id: new.employee_id,
            manager_id: new.manager_id,
            employee_name,
            employee_position,
            created_at: now_text(),
        });
        Ok(id)
    }
}
