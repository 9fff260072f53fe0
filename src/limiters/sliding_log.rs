use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::limiter::RateLimiter;

/// Exact sliding-window admission backed by a timestamp log.
///
/// Every admission is recorded in an ordered log. On each decision, entries
/// strictly older than `now - window` are pruned from the front; the request
/// admits only if fewer than `max_requests` live entries remain. This is the
/// reference-accurate algorithm: a rolling window of any alignment never
/// contains more than `max_requests` admitted events. The price is memory
/// proportional to the admit count within one window.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use rate_gate_core::limiters::SlidingWindowLog;
/// use rate_gate_core::RateLimiter;
///
/// let log = SlidingWindowLog::new(3, Duration::from_secs(1));
/// let base = Instant::now();
///
/// assert!(log.try_admit_at(base));
/// assert!(log.try_admit_at(base));
/// assert!(log.try_admit_at(base));
/// assert!(!log.try_admit_at(base));
///
/// // Just past the window the old entries are pruned
/// assert!(log.try_admit_at(base + Duration::from_millis(1001)));
/// ```
pub struct SlidingWindowLog {
    /// Maximum live entries at any one time.
    max_requests: u32,
    /// Length of the trailing window.
    window: Duration,
    /// Admission timestamps, oldest first.
    log: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowLog {
    /// Creates a log admitting at most `max_requests` within any trailing
    /// `window`.
    ///
    /// # Panics
    ///
    /// Panics if `max_requests` is 0 or `window` is zero.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        assert!(max_requests > 0, "max_requests must be greater than 0");
        assert!(!window.is_zero(), "window must be greater than 0");

        SlidingWindowLog {
            max_requests,
            window,
            log: Mutex::new(VecDeque::new()),
        }
    }

    /// Drops entries strictly older than `now - window`.
    ///
    /// `checked_sub` covers the first moments of the process, before a full
    /// window of monotonic time exists; nothing can be stale then.
    fn prune(&self, log: &mut VecDeque<Instant>, now: Instant) {
        if let Some(window_start) = now.checked_sub(self.window) {
            while log.front().is_some_and(|&t| t < window_start) {
                log.pop_front();
            }
        }
    }
}

impl RateLimiter for SlidingWindowLog {
    fn try_admit_at(&self, now: Instant) -> bool {
        let mut log = self.log.lock();
        self.prune(&mut log, now);

        if (log.len() as u32) < self.max_requests {
            log.push_back(now);
            true
        } else {
            false
        }
    }

    fn available_capacity_at(&self, now: Instant) -> Option<u32> {
        let mut log = self.log.lock();
        self.prune(&mut log, now);
        Some(self.max_requests.saturating_sub(log.len() as u32))
    }

    fn reset(&self) {
        self.log.lock().clear();
    }
}
