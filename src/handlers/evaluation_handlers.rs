use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::session::require_role;
use crate::errors::AppError;
use crate::handlers::{LiveRefresh, finish_submission};
use crate::live::{ConnectionMap, RequestSequencer};
use crate::models::evaluation::EvaluationForm;
use crate::models::profile::Role;
use crate::panels;

/// POST /manager/evaluations
pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<EvaluationForm>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let submission = panels::evaluations::create(pool.get_ref(), identity.profile_id, &form).await;
    let live = LiveRefresh { pool: &pool, conn_map: &conn_map, sequencer: &sequencer };
    Ok(finish_submission(
        &session,
        &live,
        identity,
        Some(form.employee_id),
        submission,
        "/dashboard?tab=evaluations",
    ))
}
