use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::session::require_role;
use crate::errors::AppError;
use crate::handlers::{LiveRefresh, finish_submission};
use crate::live::{ConnectionMap, RequestSequencer};
use crate::models::goal::{AssignGoalForm, GoalForm};
use crate::models::profile::Role;
use crate::panels;

/// POST /goals: employee creates a personal goal.
pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<GoalForm>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Employee)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let submission = panels::goals::create_personal(pool.get_ref(), identity.profile_id, &form).await;
    let live = LiveRefresh { pool: &pool, conn_map: &conn_map, sequencer: &sequencer };
    Ok(finish_submission(&session, &live, identity, None, submission, "/dashboard?tab=goals"))
}

/// POST /goals/{id}: employee edits one of their goals.
pub async fn update(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<GoalForm>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Employee)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let goal_id = path.into_inner();

    let submission = panels::goals::update_own(pool.get_ref(), identity.profile_id, goal_id, &form).await;
    // Keep the edit form open when the change was rejected.
    let location = if submission.notice.is_error() {
        format!("/dashboard?tab=goals&edit={goal_id}")
    } else {
        "/dashboard?tab=goals".to_string()
    };
    let live = LiveRefresh { pool: &pool, conn_map: &conn_map, sequencer: &sequencer };
    Ok(finish_submission(&session, &live, identity, None, submission, &location))
}

/// POST /manager/goals: manager sets a goal for an employee.
pub async fn assign(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<AssignGoalForm>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let submission = panels::goals::assign(pool.get_ref(), identity.profile_id, &form).await;
    let live = LiveRefresh { pool: &pool, conn_map: &conn_map, sequencer: &sequencer };
    Ok(finish_submission(
        &session,
        &live,
        identity,
        Some(form.employee_id),
        submission,
        "/dashboard?tab=goals",
    ))
}
