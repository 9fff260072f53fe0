//! The admission contract shared by all rate limiting algorithms.

use std::time::Instant;

/// The trait implemented by every admission algorithm.
///
/// From the caller's point of view all four algorithms behave identically:
/// one call per unit of work, a boolean answer, no blocking, no sleeping,
/// no I/O. Implementations serialize concurrent calls on an internal
/// per-instance mutex held only for the refill/prune-check-update sequence.
///
/// Decisions are driven exclusively by the monotonic clock. The `_at`
/// variants exist so that callers owning their own `Instant` (and tests)
/// can supply it explicitly; an earlier-than-last-seen instant is treated
/// as zero elapsed time and never corrupts state.
pub trait RateLimiter: Send + Sync {
    /// Decides whether one unit of work may proceed at `now`.
    ///
    /// Returns `true` to admit (the consumption is recorded) or `false` to
    /// deny (no state change beyond internal pruning/refill bookkeeping).
    /// Denial is an expected outcome, not a failure.
    fn try_admit_at(&self, now: Instant) -> bool;

    /// Decides whether one unit of work may proceed now.
    ///
    /// The sole steady-state hot-path call. Equivalent to
    /// `try_admit_at(Instant::now())`.
    fn try_admit(&self) -> bool {
        self.try_admit_at(Instant::now())
    }

    /// Best-effort estimate of how many further admits would currently
    /// succeed, as of `now`.
    ///
    /// Advisory only. Algorithms that cannot cheaply compute this without
    /// guessing return `None`.
    fn available_capacity_at(&self, now: Instant) -> Option<u32>;

    /// Best-effort estimate of how many further admits would currently
    /// succeed. See [`available_capacity_at`](Self::available_capacity_at).
    fn available_capacity(&self) -> Option<u32> {
        self.available_capacity_at(Instant::now())
    }

    /// Restores the instance to its freshly-constructed state: full bucket,
    /// empty log, zero counters.
    ///
    /// For tests and operational overrides, not the steady-state path.
    fn reset(&self);
}
