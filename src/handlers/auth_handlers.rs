use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::session::{get_profile_id, sign_in};
use crate::auth::{csrf, password, rate_limit::RateLimiter};
use crate::errors::{AppError, render};
use crate::models::profile::{self, Role};
use crate::templates_structs::{APP_NAME, LoginTemplate};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(session: &Session, error: Option<&str>, email: &str) -> Result<HttpResponse, AppError> {
    let tmpl = LoginTemplate {
        error: error.map(str::to_string),
        app_name: APP_NAME.to_string(),
        csrf_token: csrf::get_or_create_token(session),
        email: email.to_string(),
    };
    render(tmpl)
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // Already signed in
    if get_profile_id(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }
    login_form(&session, None, "")
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE any database access
    let ip = req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        return login_form(
            &session,
            Some("Too many failed login attempts. Please try again later."),
            &form.email,
        );
    }

    let email = form.email.trim();
    let found = profile::find_credentials_by_email(&pool, email).await?;

    let verified = match &found {
        Some(creds) => password::verify_password(&form.password, creds.password_hash.as_deref())?,
        None => false,
    };

    match found {
        Some(creds) if verified => {
            limiter.clear(ip);
            let role: Role = creds.role.parse().map_err(AppError::Validation)?;
            sign_in(&session, creds.id, &creds.full_name, role)?;
            log::info!("Profile {} signed in as {}", creds.id, role);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        _ => {
            limiter.record_failure(ip);
            login_form(&session, Some("Invalid email or password"), email)
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
