//! Live dashboard updates over WebSocket.
//!
//! After a write changes an identity's summary numbers, the stats are
//! recomputed in the background and pushed to that profile's open sockets.
//! Overlapping refreshes are ordered by [`RequestSequencer`]: only the most
//! recently requested result is sent.

pub mod sequencer;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::auth::session::Identity;
use crate::stats::{self, DashboardStats};

pub use sequencer::{PanelKey, PanelKind, RequestSequencer, Ticket};

pub type ConnectionMap = Arc<RwLock<HashMap<i64, Vec<mpsc::UnboundedSender<String>>>>>;

pub fn new_connection_map() -> ConnectionMap {
    Arc::new(RwLock::new(HashMap::new()))
}

pub fn register(conn_map: &ConnectionMap, profile_id: i64, tx: mpsc::UnboundedSender<String>) {
    let mut map = conn_map.write().unwrap_or_else(|e| e.into_inner());
    map.entry(profile_id).or_default().push(tx);
}

/// Drop closed senders. Returns true when the profile has no sockets left.
pub fn prune(conn_map: &ConnectionMap, profile_id: i64) -> bool {
    let mut map = conn_map.write().unwrap_or_else(|e| e.into_inner());
    if let Some(senders) = map.get_mut(&profile_id) {
        senders.retain(|s| !s.is_closed());
        if senders.is_empty() {
            map.remove(&profile_id);
            return true;
        }
        return false;
    }
    true
}

/// Tear down one socket. The receiver is dropped first so its sender counts
/// as closed; when it was the profile's last socket the sequencer's counters
/// for that profile are forgotten too.
pub fn disconnect(
    conn_map: &ConnectionMap,
    sequencer: &RequestSequencer,
    profile_id: i64,
    rx: mpsc::UnboundedReceiver<String>,
) {
    drop(rx);
    if prune(conn_map, profile_id) {
        sequencer.forget(profile_id);
    }
}

pub fn has_listeners(conn_map: &ConnectionMap, profile_id: i64) -> bool {
    let map = conn_map.read().unwrap_or_else(|e| e.into_inner());
    map.get(&profile_id).is_some_and(|senders| !senders.is_empty())
}

pub fn stats_message(stats: &DashboardStats) -> String {
    serde_json::json!({
        "type": "stats",
        "stats": stats,
    })
    .to_string()
}

/// Send a message to every socket a profile has open.
pub fn send_to(conn_map: &ConnectionMap, profile_id: i64, msg: &str) {
    let map = conn_map.read().unwrap_or_else(|e| e.into_inner());
    if let Some(senders) = map.get(&profile_id) {
        for sender in senders {
            let _ = sender.send(msg.to_string());
        }
    }
}

/// Recompute and push stats for `identity` unless a newer refresh for the
/// same profile overtakes this one.
pub fn push_stats(conn_map: &ConnectionMap, sequencer: &RequestSequencer, pool: &PgPool, identity: Identity) {
    if !has_listeners(conn_map, identity.profile_id) {
        return;
    }

    let ticket = sequencer.issue(PanelKey::new(identity.profile_id, PanelKind::Stats));
    let conn_map = conn_map.clone();
    let sequencer = sequencer.clone();
    let pool = pool.clone();

    actix_web::rt::spawn(async move {
        let fresh = stats::for_identity(&pool, &identity).await;
        if let Some(fresh) = sequencer.accept(ticket, fresh) {
            send_to(&conn_map, identity.profile_id, &stats_message(&fresh));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::EmployeeStats;

    #[test]
    fn test_register_send_and_prune() {
        let map = new_connection_map();
        let (tx, mut rx) = mpsc::unbounded_channel();
        register(&map, 3, tx);
        assert!(has_listeners(&map, 3));
        assert!(!has_listeners(&map, 4));

        send_to(&map, 3, "hello");
        assert_eq!(rx.try_recv().unwrap(), "hello");

        drop(rx);
        assert!(prune(&map, 3));
        assert!(!has_listeners(&map, 3));
    }

    #[test]
    fn test_disconnect_last_socket_forgets_profile() {
        let map = new_connection_map();
        let sequencer = RequestSequencer::new();
        let (tx, rx) = mpsc::unbounded_channel();
        register(&map, 7, tx);
        let ticket = sequencer.issue(PanelKey::new(7, PanelKind::Stats));

        // The socket task still holds `rx` when it finishes its loop.
        disconnect(&map, &sequencer, 7, rx);

        assert!(!has_listeners(&map, 7));
        assert!(!sequencer.is_current(&ticket));
    }

    #[test]
    fn test_disconnect_keeps_remaining_sockets() {
        let map = new_connection_map();
        let sequencer = RequestSequencer::new();
        let (first_tx, first_rx) = mpsc::unbounded_channel();
        let (second_tx, mut second_rx) = mpsc::unbounded_channel();
        register(&map, 7, first_tx);
        register(&map, 7, second_tx);
        let ticket = sequencer.issue(PanelKey::new(7, PanelKind::Stats));

        disconnect(&map, &sequencer, 7, first_rx);

        assert!(has_listeners(&map, 7));
        assert!(sequencer.is_current(&ticket));
        send_to(&map, 7, "still here");
        assert_eq!(second_rx.try_recv().unwrap(), "still here");
    }

    #[test]
    fn test_stats_message_shape() {
        let msg = stats_message(&DashboardStats::Employee(EmployeeStats {
            active_goals: 3,
            completed_goals: 2,
            unread_feedback: 1,
            avg_rating: 4.0,
        }));
        let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
        assert_eq!(value["type"], "stats");
        assert_eq!(value["stats"]["role"], "employee");
        assert_eq!(value["stats"]["unread_feedback"], 1);
        assert_eq!(value["stats"]["avg_rating"], 4.0);
    }
}
