use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

const GOAL_SELECT: &str =
    "SELECT g.id, g.title, g.description, g.target_date::TEXT AS target_date, g.status, \
            g.progress, g.is_personal, g.employee_id, g.manager_id, \
            p.full_name AS employee_name, p.position AS employee_position, \
            g.created_at::TEXT AS created_at \
     FROM goals g \
     LEFT JOIN profiles p ON p.id = g.employee_id";

fn status_strings(statuses: &[GoalStatus]) -> Vec<String> {
    statuses.iter().map(|s| s.as_str().to_string()).collect()
}

/// Goals owned by an employee, newest first.
pub async fn find_for_employee(pool: &PgPool, employee_id: i64) -> Result<Vec<Goal>, AppError> {
    let sql = format!("{GOAL_SELECT} WHERE g.employee_id = $1 ORDER BY g.created_at DESC, g.id DESC");
    let rows = sqlx::query_as::<_, Goal>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Goals a manager assigned, newest first, with the employee's name.
pub async fn find_for_manager(pool: &PgPool, manager_id: i64) -> Result<Vec<Goal>, AppError> {
    let sql = format!("{GOAL_SELECT} WHERE g.manager_id = $1 ORDER BY g.created_at DESC, g.id DESC");
    let rows = sqlx::query_as::<_, Goal>(&sql)
        .bind(manager_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Count goals in the given statuses. `employee_id = None` counts across
/// every employee.
pub async fn count_by_status(
    pool: &PgPool,
    employee_id: Option<i64>,
    statuses: &[GoalStatus],
) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM goals \
         WHERE ($1::BIGINT IS NULL OR employee_id = $1) AND status = ANY($2)",
    )
    .bind(employee_id)
    .bind(status_strings(statuses))
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Status column only, for the goals-by-status histogram.
pub async fn find_statuses(pool: &PgPool, employee_id: Option<i64>) -> Result<Vec<GoalStatus>, AppError> {
    let rows: Vec<String> = sqlx::query_scalar(
        "SELECT status FROM goals WHERE ($1::BIGINT IS NULL OR employee_id = $1)",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().filter_map(|s| s.parse().ok()).collect())
}

pub async fn create(pool: &PgPool, goal: &NewGoal) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO goals (title, description, target_date, status, progress, is_personal, employee_id, manager_id) \
         VALUES ($1, $2, $3::DATE, $4, $5, $6, $7, $8) RETURNING id",
    )
    .bind(&goal.title)
    .bind(&goal.description)
    .bind(&goal.target_date)
    .bind(goal.status.as_str())
    .bind(goal.progress)
    .bind(goal.is_personal)
    .bind(goal.employee_id)
    .bind(goal.manager_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Update one of an employee's goals. Returns false when no goal with that
/// id belongs to the employee. A `None` progress or status leaves the column
/// as it is.
pub async fn update_for_employee(
    pool: &PgPool,
    id: i64,
    employee_id: i64,
    changes: &GoalUpdate,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE goals SET title = $1, description = $2, target_date = $3::DATE, \
                progress = COALESCE($4, progress), status = COALESCE($5, status), \
                updated_at = now() \
         WHERE id = $6 AND employee_id = $7",
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(&changes.target_date)
    .bind(changes.progress)
    .bind(changes.status.map(|s| s.as_str()))
    .bind(id)
    .bind(employee_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
