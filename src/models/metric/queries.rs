use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

/// The first `limit` metric snapshots for an employee in date order
/// (oldest first), ready to plot left to right.
pub async fn find_for_employee(
    pool: &PgPool,
    employee_id: i64,
    limit: i64,
) -> Result<Vec<PerformanceMetric>, AppError> {
    let rows = sqlx::query_as::<_, PerformanceMetric>(
        "SELECT id, employee_id, metric_date::TEXT AS metric_date, \
                productivity_score, quality_score, attendance_score, collaboration_score, notes \
         FROM performance_metrics \
         WHERE employee_id = $1 \
         ORDER BY metric_date ASC, id ASC \
         LIMIT $2",
    )
    .bind(employee_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, new: &NewMetric) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO performance_metrics (employee_id, metric_date, productivity_score, \
                quality_score, attendance_score, collaboration_score, notes) \
         VALUES ($1, $2::DATE, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(new.employee_id)
    .bind(&new.metric_date)
    .bind(new.productivity_score)
    .bind(new.quality_score)
    .bind(new.attendance_score)
    .bind(new.collaboration_score)
    .bind(&new.notes)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
