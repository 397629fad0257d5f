use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

const PROFILE_COLUMNS: &str =
    "id, full_name, email, role, department, position, avatar_url";

pub async fn create(pool: &PgPool, new: &NewProfile) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO profiles (full_name, email, role, department, position, password_hash) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(new.role.as_str())
    .bind(&new.department)
    .bind(&new.position)
    .bind(&new.password_hash)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Case-insensitive lookup by email for login.
pub async fn find_credentials_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<ProfileCredentials>, AppError> {
    let row = sqlx::query_as::<_, ProfileCredentials>(
        "SELECT id, full_name, role, password_hash FROM profiles WHERE lower(email) = lower($1)",
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// All employees, ordered by name. Feeds the team panel and the
/// employee pickers on manager forms.
pub async fn find_employees(pool: &PgPool) -> Result<Vec<Profile>, AppError> {
    let sql = format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE role = 'employee' ORDER BY full_name"
    );
    let rows = sqlx::query_as::<_, Profile>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn count_employees(pool: &PgPool) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = 'employee'")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_all(pool: &PgPool) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
