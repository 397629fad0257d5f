use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::get_identity;
use crate::errors::AppError;
use crate::stats;
use crate::templates_structs::StatsResponse;

/// GET /api/v1/stats - Summary numbers for the signed-in profile's dashboard.
pub async fn read(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = get_identity(&session)?;
    let stats = stats::for_identity(pool.get_ref(), &identity).await;
    Ok(HttpResponse::Ok().json(StatsResponse { profile_id: identity.profile_id, stats }))
}
