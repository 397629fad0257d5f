use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

const EVALUATION_SELECT: &str =
    "SELECT ev.id, ev.period_start::TEXT AS period_start, ev.period_end::TEXT AS period_end, \
            ev.evaluation_date::TEXT AS evaluation_date, ev.overall_rating, \
            ev.technical_skills, ev.communication, ev.teamwork, ev.leadership, ev.initiative, \
            ev.strengths, ev.areas_for_improvement, ev.comments, \
            ev.employee_id, ev.manager_id, \
            p.full_name AS employee_name, p.position AS employee_position, \
            ev.created_at::TEXT AS created_at \
     FROM evaluations ev \
     LEFT JOIN profiles p ON p.id = ev.employee_id";

/// Most recent evaluations, newest first. `employee_id = None` returns the
/// most recent across the whole organisation.
pub async fn find_recent(
    pool: &PgPool,
    employee_id: Option<i64>,
    limit: i64,
) -> Result<Vec<Evaluation>, AppError> {
    let sql = format!(
        "{EVALUATION_SELECT} WHERE ($1::BIGINT IS NULL OR ev.employee_id = $1) \
         ORDER BY ev.created_at DESC, ev.id DESC LIMIT $2"
    );
    let rows = sqlx::query_as::<_, Evaluation>(&sql)
        .bind(employee_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Overall-rating column only, for the dashboard average.
pub async fn find_recent_overall_ratings(
    pool: &PgPool,
    employee_id: Option<i64>,
    limit: i64,
) -> Result<Vec<i32>, AppError> {
    let rows: Vec<i32> = sqlx::query_scalar(
        "SELECT overall_rating FROM evaluations \
         WHERE ($1::BIGINT IS NULL OR employee_id = $1) \
         ORDER BY created_at DESC, id DESC LIMIT $2",
    )
    .bind(employee_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Evaluations written by a manager, newest first.
pub async fn find_for_manager(pool: &PgPool, manager_id: i64) -> Result<Vec<Evaluation>, AppError> {
    let sql = format!("{EVALUATION_SELECT} WHERE ev.manager_id = $1 ORDER BY ev.created_at DESC, ev.id DESC");
    let rows = sqlx::query_as::<_, Evaluation>(&sql)
        .bind(manager_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, new: &NewEvaluation) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO evaluations (employee_id, manager_id, period_start, period_end, \
                overall_rating, technical_skills, communication, teamwork, leadership, initiative, \
                strengths, areas_for_improvement, comments) \
         VALUES ($1, $2, $3::DATE, $4::DATE, $5, $6, $7, $8, $9, $10, $11, $12, $13) RETURNING id",
    )
    .bind(new.employee_id)
    .bind(new.manager_id)
    .bind(&new.period_start)
    .bind(&new.period_end)
    .bind(new.overall_rating)
    .bind(new.technical_skills)
    .bind(new.communication)
    .bind(new.teamwork)
    .bind(new.leadership)
    .bind(new.initiative)
    .bind(&new.strengths)
    .bind(&new.areas_for_improvement)
    .bind(&new.comments)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
