//! Error types for policy construction and key validation.
//!
//! A denied request is *not* an error: [`try_admit`](crate::RateLimiter::try_admit)
//! returns `false` for denial. The types here cover the two genuine failure
//! modes, both surfaced synchronously at the offending call: an invalid
//! policy and an invalid per-key-manager key.

use thiserror::Error;

/// Raised eagerly by [`Policy`](crate::Policy) construction.
///
/// A policy is never partially constructed: validation happens once, up
/// front, and a failing parameter bundle produces no instance at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_requests` was zero.
    #[error("max_requests must be greater than 0")]
    ZeroMaxRequests,

    /// The window duration was zero.
    #[error("window duration must be greater than 0")]
    ZeroWindow,

    /// An algorithm name did not match any known variant.
    #[error("unknown algorithm kind: {0:?}")]
    UnknownAlgorithm(String),
}

/// Raised by the [`KeyedRateLimiter`](crate::KeyedRateLimiter) for keys it
/// refuses to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The supplied key was empty.
    #[error("rate limit key must not be empty")]
    Empty,
}
