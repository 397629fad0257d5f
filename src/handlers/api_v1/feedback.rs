use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::require_role;
use crate::errors::AppError;
use crate::live::{self, ConnectionMap, RequestSequencer};
use crate::models::profile::Role;
use crate::stats;
use crate::store::PerformanceStore;
use crate::templates_structs::{ApiErrorResponse, MarkReadResponse};

/// POST /api/v1/feedback/{id}/read - Mark one feedback item read and return
/// the caller's fresh stats. Repeating the call is harmless: `transitioned`
/// is false and the unread count is unchanged.
pub async fn mark_read(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, AppError> {
    let identity = require_role(&session, Role::Employee)?;
    let feedback_id = path.into_inner();

    let transitioned = match pool.get_ref().mark_feedback_read(feedback_id, identity.profile_id).await {
        Ok(transitioned) => transitioned,
        Err(e) => {
            log::warn!("Failed to mark feedback {feedback_id} read: {e}");
            return Ok(HttpResponse::InternalServerError().json(ApiErrorResponse {
                error: e.user_message(),
            }));
        }
    };

    let stats = stats::for_identity(pool.get_ref(), &identity).await;
    if transitioned {
        // Other tabs of the same profile pick the change up over the socket.
        live::send_to(&conn_map, identity.profile_id, &live::stats_message(&stats));
        // Any refresh already in flight is older than these numbers.
        sequencer.issue(live::PanelKey::new(identity.profile_id, live::PanelKind::Stats));
    }

    Ok(HttpResponse::Ok().json(MarkReadResponse { feedback_id, transitioned, stats }))
}
