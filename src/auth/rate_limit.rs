use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MAX_ATTEMPTS: usize = 5;
const WINDOW: Duration = Duration::from_secs(900); // 15 minutes

/// Failed-login counter per client IP, shared by all workers.
#[derive(Clone)]
pub struct RateLimiter {
    attempts: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    max_attempts: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_limits(MAX_ATTEMPTS, WINDOW)
    }

    pub fn with_limits(max_attempts: usize, window: Duration) -> Self {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
            max_attempts,
            window,
        }
    }

    /// Check if the given IP is rate-limited. Returns true if blocked.
    /// Also lazily cleans up stale entries for the checked IP.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        let window = self.window;

        if let Some(timestamps) = map.get_mut(&ip) {
            timestamps.retain(|t| now.duration_since(*t) < window);
            timestamps.len() >= self.max_attempts
        } else {
            false
        }
    }

    /// Record a failed login attempt for the given IP.
    pub fn record_failure(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(ip).or_default().push(Instant::now());
    }

    /// Clear all recorded attempts for the given IP (call on successful login).
    pub fn clear(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&ip);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_blocks_after_max_failures() {
        let limiter = RateLimiter::new();
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));
        for _ in 0..MAX_ATTEMPTS - 1 {
            limiter.record_failure(ip);
        }
        assert!(!limiter.is_blocked(ip));
        limiter.record_failure(ip);
        assert!(limiter.is_blocked(ip));

        limiter.clear(ip);
        assert!(!limiter.is_blocked(ip));
    }

    #[test]
    fn test_failures_expire_after_window() {
        let limiter = RateLimiter::with_limits(2, Duration::from_millis(20));
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9));
        limiter.record_failure(ip);
        limiter.record_failure(ip);
        assert!(limiter.is_blocked(ip));
        std::thread::sleep(Duration::from_millis(40));
        assert!(!limiter.is_blocked(ip));
    }

    #[test]
    fn test_ips_are_tracked_separately() {
        let limiter = RateLimiter::new();
        let noisy = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let quiet = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));
        for _ in 0..MAX_ATTEMPTS {
            limiter.record_failure(noisy);
        }
        assert!(limiter.is_blocked(noisy));
        assert!(!limiter.is_blocked(quiet));
    }
}
