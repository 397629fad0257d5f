use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::session::get_identity;

/// Gate for everything behind the login. A session without a profile id and
/// role is anonymous: pages redirect to /login, `/api/` paths get a 401 JSON
/// body.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if get_identity(&req.get_session()).is_ok() {
        return next.call(req).await.map(|res| res.map_into_left_body());
    }

    let response = if req.path().starts_with("/api/") {
        HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Not signed in" }))
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/login"))
            .finish()
    };
    Ok(req.into_response(response).map_into_right_body())
}
