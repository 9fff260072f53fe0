use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::limiter::RateLimiter;

/// Fixed window counter admission.
///
/// Time is split into discrete windows of `window` duration. Each window
/// admits up to `max_requests`, counted by a single integer; when a decision
/// arrives after the current window has elapsed, the counter resets to zero
/// and a new window starts at that instant (a hard jump, not a rolling
/// advance).
///
/// # Boundary Bursts
///
/// Because boundaries are fixed rather than rolling, a burst straddling a
/// boundary can admit up to `2 * max_requests` across two adjacent windows
/// (`max_requests` at the very end of one, `max_requests` at the very start
/// of the next). This is a documented accuracy/memory trade-off of the
/// algorithm, not a bug, and callers choosing it accept the artifact in
/// exchange for O(1) memory.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use rate_gate_core::limiters::FixedWindowCounter;
/// use rate_gate_core::RateLimiter;
///
/// let counter = FixedWindowCounter::new(2, Duration::from_secs(1));
/// let base = Instant::now();
///
/// assert!(counter.try_admit_at(base));
/// assert!(counter.try_admit_at(base));
/// assert!(!counter.try_admit_at(base));
///
/// // A new window opens once the old one has elapsed
/// assert!(counter.try_admit_at(base + Duration::from_secs(1)));
/// ```
pub struct FixedWindowCounter {
    /// Maximum admits per window.
    max_requests: u32,
    /// Duration of each window.
    window: Duration,
    state: Mutex<FixedWindowState>,
}

struct FixedWindowState {
    /// Admits counted in the active window.
    count: u32,
    /// Instant the active window started.
    window_start: Instant,
}

impl FixedWindowCounter {
    /// Creates a counter admitting `max_requests` per `window`. The first
    /// window starts at construction time.
    ///
    /// # Panics
    ///
    /// Panics if `max_requests` is 0 or `window` is zero.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        assert!(max_requests > 0, "max_requests must be greater than 0");
        assert!(!window.is_zero(), "window must be greater than 0");

        FixedWindowCounter {
            max_requests,
            window,
            state: Mutex::new(FixedWindowState {
                count: 0,
                window_start: Instant::now(),
            }),
        }
    }

    /// Resets the counter if the active window has elapsed as of `now`.
    fn rotate(&self, state: &mut FixedWindowState, now: Instant) {
        if now.saturating_duration_since(state.window_start) >= self.window {
            state.count = 0;
            state.window_start = now;
        }
    }
}

impl RateLimiter for FixedWindowCounter {
    fn try_admit_at(&self, now: Instant) -> bool {
        let mut state = self.state.lock();
        self.rotate(&mut state, now);

        if state.count < self.max_requests {
            state.count += 1;
            true
        } else {
            false
        }
    }

    fn available_capacity_at(&self, now: Instant) -> Option<u32> {
        let mut state = self.state.lock();
        self.rotate(&mut state, now);
        Some(self.max_requests - state.count)
    }

    fn reset(&self) {
        let mut state = self.state.lock();
        state.count = 0;
        state.window_start = Instant::now();
    }
}
