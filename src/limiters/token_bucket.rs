use std::time::Instant;

use parking_lot::Mutex;

use crate::limiter::RateLimiter;

/// Token bucket admission with continuous refill.
///
/// The bucket holds a continuous quantity of tokens, refilled at a constant
/// rate and capped at `capacity`. Each admit consumes one token; a request
/// arriving at an empty bucket is denied. Unused tokens accumulate up to the
/// capacity, which is what allows bursts: a bucket idle long enough admits
/// `capacity` requests back to back before throttling to the steady rate.
///
/// # Algorithm Behavior
///
/// - The bucket starts full with `capacity` tokens
/// - On every decision, `elapsed_seconds * refill_rate` tokens are added,
///   capped strictly at `capacity`
/// - If at least one token remains, one is consumed and the request admits
/// - Otherwise the request is denied and the token count is left untouched
///
/// Token arithmetic is double-precision. Tokens never go negative and never
/// exceed the capacity, so idle periods cannot bank unbounded credit.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use rate_gate_core::limiters::TokenBucket;
/// use rate_gate_core::RateLimiter;
///
/// // Capacity 5, refilling 5 tokens per second
/// let bucket = TokenBucket::new(5, 5.0);
/// let base = Instant::now();
///
/// // The initial burst drains the full capacity
/// for _ in 0..5 {
///     assert!(bucket.try_admit_at(base));
/// }
/// assert!(!bucket.try_admit_at(base));
///
/// // 200ms later one token has dripped back in
/// assert!(bucket.try_admit_at(base + Duration::from_millis(200)));
/// ```
pub struct TokenBucket {
    /// Maximum tokens the bucket can hold.
    capacity: f64,
    /// Tokens added per second of elapsed monotonic time.
    refill_rate: f64,
    /// Mutable state behind a per-instance mutex.
    state: Mutex<TokenBucketState>,
}

struct TokenBucketState {
    /// Current tokens, always within `[0, capacity]`.
    tokens: f64,
    /// Instant of the last refill computation.
    last_refill: Instant,
}

impl TokenBucket {
    /// Creates a bucket with the given capacity and refill rate in tokens
    /// per second. The bucket starts full.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or `refill_rate` is not finite or not
    /// positive. [`Policy`](crate::Policy) validation makes both impossible
    /// when constructing through the factory.
    pub fn new(capacity: u32, refill_rate: f64) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        assert!(
            refill_rate.is_finite() && refill_rate > 0.0,
            "refill_rate must be positive"
        );

        TokenBucket {
            capacity: f64::from(capacity),
            refill_rate,
            state: Mutex::new(TokenBucketState {
                tokens: f64::from(capacity),
                last_refill: Instant::now(),
            }),
        }
    }

    /// Adds the tokens earned since the last refill, capped at capacity.
    ///
    /// A `now` earlier than `last_refill` contributes zero elapsed time.
    fn refill(&self, state: &mut TokenBucketState, now: Instant) {
        let elapsed = now.saturating_duration_since(state.last_refill);
        if !elapsed.is_zero() {
            let earned = elapsed.as_secs_f64() * self.refill_rate;
            state.tokens = (state.tokens + earned).min(self.capacity);
            state.last_refill = now;
        }
    }
}

impl RateLimiter for TokenBucket {
    fn try_admit_at(&self, now: Instant) -> bool {
        let mut state = self.state.lock();
        self.refill(&mut state, now);

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Whole tokens currently in the bucket, after refilling up to `now`.
    fn available_capacity_at(&self, now: Instant) -> Option<u32> {
        let mut state = self.state.lock();
        self.refill(&mut state, now);
        Some(state.tokens as u32)
    }

    fn reset(&self) {
        let mut state = self.state.lock();
        state.tokens = self.capacity;
        state.last_refill = Instant::now();
    }
}
