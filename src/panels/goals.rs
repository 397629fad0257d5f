use crate::models::goal::{AssignGoalForm, GoalForm, GoalStatus, GoalUpdate, NewGoal};
use crate::store::PerformanceStore;
use super::{Submission, optional_text, require, require_date};

fn validate(title: &str, target_date: &str) -> Vec<String> {
    let mut errors = Vec::new();
    require(&mut errors, title, "Title");
    require_date(&mut errors, target_date, "Target date");
    errors
}

/// Employee creates a personal goal: pending, 0% progress, no manager.
pub async fn create_personal<S: PerformanceStore>(store: &S, employee_id: i64, form: &GoalForm) -> Submission {
    let errors = validate(&form.title, &form.target_date);
    if !errors.is_empty() {
        return Submission::rejected(errors);
    }

    let goal = NewGoal {
        title: form.title.trim().to_string(),
        description: optional_text(&form.description),
        target_date: form.target_date.trim().to_string(),
        status: GoalStatus::Pending,
        progress: 0,
        is_personal: true,
        employee_id,
        manager_id: None,
    };
    match store.insert_goal(&goal).await {
        Ok(_) => Submission::saved("Goal created successfully", true),
        Err(e) => Submission::failed("create goal", &e),
    }
}

/// Blank keeps the stored progress; a number is clamped to 0-100.
fn parse_progress(errors: &mut Vec<String>, raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i32>() {
        Ok(n) => Some(n.clamp(0, 100)),
        Err(_) => {
            errors.push("Progress must be a whole number".to_string());
            None
        }
    }
}

/// Blank keeps the stored status.
fn parse_status(errors: &mut Vec<String>, raw: &str) -> Option<GoalStatus> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<GoalStatus>() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.push("Status is not valid".to_string());
            None
        }
    }
}

/// Employee edits one of their goals (personal or assigned).
pub async fn update_own<S: PerformanceStore>(
    store: &S,
    employee_id: i64,
    goal_id: i64,
    form: &GoalForm,
) -> Submission {
    let mut errors = validate(&form.title, &form.target_date);
    let progress = parse_progress(&mut errors, &form.progress);
    let status = parse_status(&mut errors, &form.status);
    if !errors.is_empty() {
        return Submission::rejected(errors);
    }

    let changes = GoalUpdate {
        title: form.title.trim().to_string(),
        description: optional_text(&form.description),
        target_date: form.target_date.trim().to_string(),
        progress,
        status,
    };
    match store.update_goal(goal_id, employee_id, &changes).await {
        Ok(true) => Submission::saved("Goal updated successfully", true),
        Ok(false) => Submission::rejected(vec!["Goal not found".to_string()]),
        Err(e) => Submission::failed("update goal", &e),
    }
}

/// Manager sets a goal for an employee.
pub async fn assign<S: PerformanceStore>(store: &S, manager_id: i64, form: &AssignGoalForm) -> Submission {
    let mut errors = validate(&form.title, &form.target_date);
    if form.employee_id <= 0 {
        errors.insert(0, "Employee is required".to_string());
    }
    if !errors.is_empty() {
        return Submission::rejected(errors);
    }

    let goal = NewGoal {
        title: form.title.trim().to_string(),
        description: optional_text(&form.description),
        target_date: form.target_date.trim().to_string(),
        status: form.status.unwrap_or(GoalStatus::Pending),
        progress: 0,
        is_personal: false,
        employee_id: form.employee_id,
        manager_id: Some(manager_id),
    };
    match store.insert_goal(&goal).await {
        Ok(_) => Submission::saved("Goal created successfully", true),
        Err(e) => Submission::failed("assign goal", &e),
    }
}
