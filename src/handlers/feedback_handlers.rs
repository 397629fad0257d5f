use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::require_role;
use crate::auth::csrf;
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::{LiveRefresh, finish_submission};
use crate::live::{ConnectionMap, RequestSequencer};
use crate::models::feedback::FeedbackForm;
use crate::models::profile::Role;
use crate::panels;

/// POST /feedback/{id}/read: form fallback for marking feedback read. The
/// dashboard script uses the JSON endpoint instead.
pub async fn mark_read(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Employee)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let submission = panels::feedback::mark_read(pool.get_ref(), identity.profile_id, path.into_inner()).await;
    let live = LiveRefresh { pool: &pool, conn_map: &conn_map, sequencer: &sequencer };
    Ok(finish_submission(&session, &live, identity, None, submission, "/dashboard?tab=feedback"))
}

/// POST /manager/feedback
pub async fn give(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<FeedbackForm>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let submission = panels::feedback::give(pool.get_ref(), identity.profile_id, &form).await;
    let live = LiveRefresh { pool: &pool, conn_map: &conn_map, sequencer: &sequencer };
    Ok(finish_submission(
        &session,
        &live,
        identity,
        Some(form.employee_id),
        submission,
        "/dashboard?tab=feedback",
    ))
}
