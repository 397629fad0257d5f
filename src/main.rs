use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use perfboard::auth::rate_limit::RateLimiter;
use perfboard::config::AppConfig;
use perfboard::live::{self, RequestSequencer};
use perfboard::{db, handlers};

fn io_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| io_error("Invalid configuration", e))?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(|e| io_error("Failed to connect to database", e))?;
    db::run_migrations(&pool)
        .await
        .map_err(|e| io_error("Failed to run migrations", e))?;

    if config.seed_demo_data {
        db::seed_demo(&pool)
            .await
            .map_err(|e| io_error("Failed to seed demo data", e))?;
    }

    // Session encryption key: load from SESSION_KEY for sessions that survive restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let limiter = web::Data::new(RateLimiter::new());
    let conn_map = web::Data::new(live::new_connection_map());
    let sequencer = web::Data::new(RequestSequencer::new());
    let cookie_secure = config.cookie_secure;

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(limiter.clone())
            .app_data(conn_map.clone())
            .app_data(sequencer.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
