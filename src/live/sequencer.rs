use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Parts of a dashboard that are refreshed in the background. Only the
/// summary cards are pushed today; the panels re-render on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelKey {
    pub profile_id: i64,
    pub kind: PanelKind,
}

impl PanelKey {
    pub fn new(profile_id: i64, kind: PanelKind) -> Self {
        Self { profile_id, kind }
    }
}

/// Handle for one in-flight refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub key: PanelKey,
    pub seq: u64,
}

/// Hands out increasing sequence numbers per panel key so that a refresh
/// finishing after a newer one was requested is dropped instead of
/// overwriting fresher data.
#[derive(Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<Mutex<HashMap<PanelKey, u64>>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh for `key`. Supersedes every earlier ticket for it.
    pub fn issue(&self, key: PanelKey) -> Ticket {
        let mut map = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        let seq = map.entry(key).or_insert(0);
        *seq += 1;
        Ticket { key, seq: *seq }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        let map = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        map.get(&ticket.key).copied() == Some(ticket.seq)
    }

    /// Pass `value` through if `ticket` is still the latest for its key.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(&ticket) {
            Some(value)
        } else {
            log::debug!(
                "Discarding stale {:?} refresh #{} for profile {}",
                ticket.key.kind, ticket.seq, ticket.key.profile_id
            );
            None
        }
    }

    /// Forget a profile's counters once its last socket closes.
    pub fn forget(&self, profile_id: i64) {
        let mut map = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        map.retain(|key, _| key.profile_id != profile_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequencer::new();
        let key = PanelKey::new(7, PanelKind::Stats);
        let first = seq.issue(key);
        let second = seq.issue(key);
        assert!(second.seq > first.seq);

        assert_eq!(seq.accept(first, "old"), None);
        assert_eq!(seq.accept(second, "new"), Some("new"));
    }

    #[test]
    fn test_profiles_are_independent() {
        let seq = RequestSequencer::new();
        let mine = seq.issue(PanelKey::new(1, PanelKind::Stats));
        let theirs = seq.issue(PanelKey::new(2, PanelKind::Stats));
        let theirs_again = seq.issue(PanelKey::new(2, PanelKind::Stats));
        assert!(seq.is_current(&mine));
        assert!(!seq.is_current(&theirs));
        assert!(seq.is_current(&theirs_again));
    }

    #[test]
    fn test_forget_drops_only_that_profile() {
        let seq = RequestSequencer::new();
        let mine = seq.issue(PanelKey::new(1, PanelKind::Stats));
        let theirs = seq.issue(PanelKey::new(2, PanelKind::Stats));
        seq.forget(1);
        assert!(!seq.is_current(&mine));
        assert!(seq.is_current(&theirs));
        // Counting restarts, but a fresh ticket is current again.
        let again = seq.issue(PanelKey::new(1, PanelKind::Stats));
        assert!(seq.is_current(&again));
    }
}
