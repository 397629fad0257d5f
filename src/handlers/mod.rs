pub mod api_v1;
pub mod auth_handlers;
pub mod dashboard;
pub mod evaluation_handlers;
pub mod feedback_handlers;
pub mod goal_handlers;
pub mod live_ws;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth;
use crate::auth::session::{Identity, set_flash};
use crate::live::{self, ConnectionMap, RequestSequencer};
use crate::models::profile::Role;
use crate::panels::Submission;

/// Shared state a write handler needs to refresh open dashboards.
pub struct LiveRefresh<'a> {
    pub pool: &'a PgPool,
    pub conn_map: &'a ConnectionMap,
    pub sequencer: &'a RequestSequencer,
}

impl LiveRefresh<'_> {
    pub fn push(&self, identity: Identity) {
        live::push_stats(self.conn_map, self.sequencer, self.pool, identity);
    }
}

/// Flash the submission's notice, refresh stats when they may have moved and
/// redirect back to the dashboard tab. `affected_employee` is the employee a
/// manager's write targeted; their open dashboard is refreshed too.
pub fn finish_submission(
    session: &Session,
    live: &LiveRefresh<'_>,
    actor: Identity,
    affected_employee: Option<i64>,
    submission: Submission,
    location: &str,
) -> HttpResponse {
    if submission.stats_changed {
        live.push(actor);
        if let Some(employee_id) = affected_employee.filter(|id| *id != actor.profile_id) {
            live.push(Identity { profile_id: employee_id, role: Role::Employee });
        }
    }
    set_flash(session, &submission.notice);
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Register every page, form and API route. Static files and the 404
/// fallback are added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }))
        // Protected routes
        .service(
            web::scope("")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("/dashboard", web::get().to(dashboard::index))
                .route("/logout", web::post().to(auth_handlers::logout))
                .route("/ws/dashboard", web::get().to(live_ws::ws_connect))
                // Employee writes
                .route("/goals", web::post().to(goal_handlers::create))
                .route("/goals/{id}", web::post().to(goal_handlers::update))
                .route("/feedback/{id}/read", web::post().to(feedback_handlers::mark_read))
                // Manager writes
                .route("/manager/goals", web::post().to(goal_handlers::assign))
                .route("/manager/feedback", web::post().to(feedback_handlers::give))
                .route("/manager/evaluations", web::post().to(evaluation_handlers::create))
                // JSON API
                .service(web::scope("/api/v1").configure(api_v1::configure))
        );
}
