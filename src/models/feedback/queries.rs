use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

/// Feedback received by an employee, joined with the authoring manager.
pub async fn find_for_employee(pool: &PgPool, employee_id: i64) -> Result<Vec<Feedback>, AppError> {
    let rows = sqlx::query_as::<_, Feedback>(
        "SELECT f.id, f.title, f.content, f.feedback_type, f.rating, f.is_read, \
                f.employee_id, f.manager_id, \
                m.full_name AS counterpart_name, m.position AS counterpart_position, \
                f.created_at::TEXT AS created_at \
         FROM feedback f \
         LEFT JOIN profiles m ON m.id = f.manager_id \
         WHERE f.employee_id = $1 \
         ORDER BY f.created_at DESC, f.id DESC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Feedback authored by a manager, joined with the receiving employee.
pub async fn find_for_manager(pool: &PgPool, manager_id: i64) -> Result<Vec<Feedback>, AppError> {
    let rows = sqlx::query_as::<_, Feedback>(
        "SELECT f.id, f.title, f.content, f.feedback_type, f.rating, f.is_read, \
                f.employee_id, f.manager_id, \
                e.full_name AS counterpart_name, e.position AS counterpart_position, \
                f.created_at::TEXT AS created_at \
         FROM feedback f \
         LEFT JOIN profiles e ON e.id = f.employee_id \
         WHERE f.manager_id = $1 \
         ORDER BY f.created_at DESC, f.id DESC",
    )
    .bind(manager_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn count_unread(pool: &PgPool, employee_id: i64) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM feedback WHERE employee_id = $1 AND is_read = FALSE",
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Feedback a manager has written since the first of the current month.
pub async fn count_sent_this_month(pool: &PgPool, manager_id: i64) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM feedback \
         WHERE manager_id = $1 AND created_at >= date_trunc('month', now())",
    )
    .bind(manager_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

pub async fn create(pool: &PgPool, new: &NewFeedback) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO feedback (title, content, feedback_type, rating, employee_id, manager_id) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(&new.title)
    .bind(&new.content)
    .bind(new.feedback_type.as_str())
    .bind(new.rating)
    .bind(new.employee_id)
    .bind(new.manager_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Mark one of an employee's feedback items read.
///
/// Returns true only when the row moved from unread to read; marking an
/// already-read item (or someone else's item) changes nothing.
pub async fn mark_read(pool: &PgPool, id: i64, employee_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE feedback SET is_read = TRUE, updated_at = now() \
         WHERE id = $1 AND employee_id = $2 AND is_read = FALSE",
    )
    .bind(id)
    .bind(employee_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
