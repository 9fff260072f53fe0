use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::limiter::RateLimiter;

/// Sliding window counter admission using two weighted windows.
///
/// Keeps one counter for the current window and one for the previous, and
/// estimates the load of the trailing window as
///
/// ```text
/// estimated = previous * (1 - elapsed_fraction) + current
/// ```
///
/// where `elapsed_fraction` is how far the current window has progressed,
/// in `[0, 1)`. The request admits only if the estimate stays below
/// `max_requests`. The estimate is always a convex combination of the two
/// counts, which interpolates between the exactness of the timestamp log
/// and the O(1) memory of the fixed window, smoothing out the fixed
/// window's boundary artifact at the cost of being an approximation.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use rate_gate_core::limiters::SlidingWindowCounter;
/// use rate_gate_core::RateLimiter;
///
/// let counter = SlidingWindowCounter::new(10, Duration::from_secs(1));
/// let base = Instant::now();
///
/// for _ in 0..10 {
///     assert!(counter.try_admit_at(base));
/// }
/// assert!(!counter.try_admit_at(base));
/// ```
pub struct SlidingWindowCounter {
    max_requests: u32,
    window: Duration,
    state: Mutex<SlidingCounterState>,
}

struct SlidingCounterState {
    /// Admits counted in the current window.
    current: u32,
    /// Admits counted in the previous window.
    previous: u32,
    /// Instant the current window started.
    current_start: Instant,
}

impl SlidingWindowCounter {
    /// Creates a counter targeting `max_requests` per trailing `window`.
    ///
    /// # Panics
    ///
    /// Panics if `max_requests` is 0 or `window` is zero.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        assert!(max_requests > 0, "max_requests must be greater than 0");
        assert!(!window.is_zero(), "window must be greater than 0");

        SlidingWindowCounter {
            max_requests,
            window,
            state: Mutex::new(SlidingCounterState {
                current: 0,
                previous: 0,
                current_start: Instant::now(),
            }),
        }
    }

    /// Rotates the windows if the current one has elapsed as of `now`.
    ///
    /// A gap of two or more full windows means the previous window no
    /// longer overlaps any trailing window ending at `now`, so its count
    /// expires entirely instead of rotating forward.
    fn rotate(&self, state: &mut SlidingCounterState, now: Instant) {
        let elapsed = now.saturating_duration_since(state.current_start);
        if elapsed >= self.window {
            state.previous = if elapsed >= self.window * 2 {
                0
            } else {
                state.current
            };
            state.current = 0;
            state.current_start = now;
        }
    }

    /// Weighted estimate of admits in the trailing window ending at `now`.
    fn estimated_count(&self, state: &SlidingCounterState, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(state.current_start);
        let fraction = elapsed.as_secs_f64() / self.window.as_secs_f64();
        f64::from(state.previous) * (1.0 - fraction) + f64::from(state.current)
    }
}

impl RateLimiter for SlidingWindowCounter {
    fn try_admit_at(&self, now: Instant) -> bool {
        let mut state = self.state.lock();
        self.rotate(&mut state, now);

        if self.estimated_count(&state, now) < f64::from(self.max_requests) {
            state.current += 1;
            true
        } else {
            false
        }
    }

    /// Unsupported: the weighted estimate is an approximation, and the
    /// contract allows declining to guess.
    fn available_capacity_at(&self, _now: Instant) -> Option<u32> {
        None
    }

    fn reset(&self) {
        let mut state = self.state.lock();
        state.current = 0;
        state.previous = 0;
        state.current_start = Instant::now();
    }
}
