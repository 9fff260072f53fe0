//! Policy-to-limiter dispatch.

use crate::limiter::RateLimiter;
use crate::limiters::{FixedWindowCounter, SlidingWindowCounter, SlidingWindowLog, TokenBucket};
use crate::policy::{AlgorithmKind, Policy};

/// Builds a fresh, independent limiter instance for `policy`.
///
/// A pure function from validated policy to concrete algorithm: it holds no
/// shared state and never reuses instances across calls. Two limiters built
/// from the same policy are fully isolated from each other.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rate_gate_core::{build_limiter, AlgorithmKind, Policy, RateLimiter};
///
/// let policy = Policy::new(AlgorithmKind::FixedWindow, 10, Duration::from_secs(1))?;
/// let limiter = build_limiter(&policy);
/// assert!(limiter.try_admit());
/// # Ok::<(), rate_gate_core::ConfigError>(())
/// ```
pub fn build_limiter(policy: &Policy) -> Box<dyn RateLimiter> {
    match policy.algorithm() {
        AlgorithmKind::TokenBucket => Box::new(TokenBucket::new(
            policy.burst_capacity(),
            policy.refill_rate(),
        )),
        AlgorithmKind::SlidingLog => Box::new(SlidingWindowLog::new(
            policy.max_requests(),
            policy.window(),
        )),
        AlgorithmKind::FixedWindow => Box::new(FixedWindowCounter::new(
            policy.max_requests(),
            policy.window(),
        )),
        AlgorithmKind::SlidingCounter => Box::new(SlidingWindowCounter::new(
            policy.max_requests(),
            policy.window(),
        )),
    }
}
