//! Validated rate limiting policy and algorithm selection.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Selects which admission algorithm a [`Policy`] builds.
///
/// The kebab-case names (`token-bucket`, `sliding-log`, `fixed-window`,
/// `sliding-counter`) are accepted by [`FromStr`] and, with the `serde`
/// feature, by serde deserialization -- so configuration files can name
/// algorithms directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlgorithmKind {
    /// Continuous-refill bucket allowing bounded bursts.
    TokenBucket,
    /// Exact timestamp log; most accurate, highest memory.
    SlidingLog,
    /// Discrete reset boundaries; O(1) memory, boundary-burst artifact.
    FixedWindow,
    /// Two-window weighted approximation.
    SlidingCounter,
}

impl AlgorithmKind {
    /// The canonical kebab-case name of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::TokenBucket => "token-bucket",
            AlgorithmKind::SlidingLog => "sliding-log",
            AlgorithmKind::FixedWindow => "fixed-window",
            AlgorithmKind::SlidingCounter => "sliding-counter",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "token-bucket" => Ok(AlgorithmKind::TokenBucket),
            "sliding-log" => Ok(AlgorithmKind::SlidingLog),
            "fixed-window" => Ok(AlgorithmKind::FixedWindow),
            "sliding-counter" => Ok(AlgorithmKind::SlidingCounter),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// An immutable, validated rate limiting parameter bundle.
///
/// Constructed in one step and never mutated afterwards, so it can be
/// shared across threads and limiter instances without synchronization.
/// Validation is eager: an invalid combination never produces a `Policy`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rate_gate_core::{AlgorithmKind, ConfigError, Policy};
///
/// let policy = Policy::new(AlgorithmKind::SlidingLog, 100, Duration::from_secs(60))?;
/// assert_eq!(policy.max_requests(), 100);
///
/// // Zero limits are rejected up front
/// let err = Policy::new(AlgorithmKind::SlidingLog, 0, Duration::from_secs(60));
/// assert_eq!(err, Err(ConfigError::ZeroMaxRequests));
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    algorithm: AlgorithmKind,
    max_requests: u32,
    window: Duration,
    burst_capacity: u32,
}

impl Policy {
    /// Creates a policy admitting `max_requests` per `window`, with burst
    /// capacity defaulting to `max_requests`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroMaxRequests`] if `max_requests` is 0,
    /// [`ConfigError::ZeroWindow`] if `window` is zero.
    pub fn new(
        algorithm: AlgorithmKind,
        max_requests: u32,
        window: Duration,
    ) -> Result<Self, ConfigError> {
        Self::with_burst(algorithm, max_requests, window, 0)
    }

    /// Creates a policy with an explicit burst capacity.
    ///
    /// A `burst_capacity` of 0 means "use `max_requests`". The burst
    /// capacity is only meaningful for [`AlgorithmKind::TokenBucket`];
    /// the other algorithms ignore it.
    pub fn with_burst(
        algorithm: AlgorithmKind,
        max_requests: u32,
        window: Duration,
        burst_capacity: u32,
    ) -> Result<Self, ConfigError> {
        if max_requests == 0 {
            return Err(ConfigError::ZeroMaxRequests);
        }
        if window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }
        let burst_capacity = if burst_capacity == 0 {
            max_requests
        } else {
            burst_capacity
        };
        Ok(Policy {
            algorithm,
            max_requests,
            window,
            burst_capacity,
        })
    }

    /// The algorithm this policy selects.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Maximum admits per window. Always greater than 0.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// The window duration. Always non-zero.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Resolved burst capacity. Equal to [`max_requests`](Self::max_requests)
    /// unless overridden at construction.
    pub fn burst_capacity(&self) -> u32 {
        self.burst_capacity
    }

    /// Steady-state refill rate in tokens per second
    /// (`max_requests / window`).
    pub fn refill_rate(&self) -> f64 {
        self.max_requests as f64 / self.window.as_secs_f64()
    }
}
