pub mod feedback;
pub mod stats;

use actix_web::{
    web, Error, HttpResponse,
    body::MessageBody,
    http::Method,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

/// JSON mutations carry no CSRF token; they must be sent as
/// `application/json`. Reads are exempt.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if matches!(*req.method(), Method::POST | Method::PUT | Method::PATCH | Method::DELETE) {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json for mutation requests"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(stats::read));
    cfg.service(
        web::scope("/feedback")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("/{id}/read", web::post().to(feedback::mark_read))
    );
}
