use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::Message;
use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::auth::session::get_identity;
use crate::live::{self, ConnectionMap, RequestSequencer};

/// WebSocket upgrade handler for live dashboard stats.
///
/// The server pushes `{"type":"stats",...}` after writes; a client may send
/// the text `refresh` to ask for the same.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    session: Session,
    pool: web::Data<PgPool>,
    conn_map: web::Data<ConnectionMap>,
    sequencer: web::Data<RequestSequencer>,
) -> Result<HttpResponse, actix_web::Error> {
    let identity = match get_identity(&session) {
        Ok(identity) => identity,
        Err(_) => return Ok(HttpResponse::Unauthorized().finish()),
    };

    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    live::register(&conn_map, identity.profile_id, tx);

    let conn_map = conn_map.into_inner();
    let sequencer = sequencer.into_inner();
    let pool = pool.into_inner();

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                Some(msg) = rx.recv() => {
                    if ws_session.text(msg).await.is_err() {
                        break;
                    }
                }
                Some(Ok(msg)) = msg_stream.recv() => {
                    match msg {
                        Message::Ping(bytes) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Message::Close(_) => break,
                        Message::Text(text) if text.trim() == "refresh" => {
                            live::push_stats(&conn_map, &sequencer, &pool, identity);
                        }
                        _ => {}
                    }
                }
                else => break,
            }
        }

        live::disconnect(&conn_map, &sequencer, identity.profile_id, rx);
    });

    Ok(response)
}
