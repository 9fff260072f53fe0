//! An admission-control library for Rust applications.
//!
//! This library answers one question per unit of work: "may this proceed
//! now?" It provides four rate limiting algorithms behind a single trait,
//! a validated policy configuration with a factory, and a per-key manager
//! that gives every caller-supplied identity its own independent limiter
//! state. All implementations are thread-safe and designed for concurrent
//! multi-user load.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use rate_gate_core::{build_limiter, AlgorithmKind, Policy, RateLimiter};
//!
//! // 100 requests per second through a token bucket
//! let policy = Policy::new(AlgorithmKind::TokenBucket, 100, Duration::from_secs(1))?;
//! let limiter = build_limiter(&policy);
//!
//! if limiter.try_admit() {
//!     // do the work
//! } else {
//!     // denied: reject, queue, or delay -- the caller's choice
//! }
//! # Ok::<(), rate_gate_core::ConfigError>(())
//! ```
//!
//! # Per-Key Isolation
//!
//! ```rust
//! use std::time::Duration;
//! use rate_gate_core::{AlgorithmKind, KeyedRateLimiter, Policy};
//!
//! let policy = Policy::new(AlgorithmKind::SlidingLog, 3, Duration::from_secs(60))?;
//! let manager = KeyedRateLimiter::new(policy);
//!
//! // "alice" and "bob" get fully independent limiter state
//! assert_eq!(manager.try_admit("alice"), Ok(true));
//! assert_eq!(manager.try_admit("bob"), Ok(true));
//! # Ok::<(), rate_gate_core::ConfigError>(())
//! ```
//!
//! # Available Algorithms
//!
//! ## [Token Bucket](limiters::TokenBucket)
//! Continuous refill with bounded bursts. The only algorithm that tolerates
//! bursts by design: up to `burst_capacity` admits instantly, then the
//! steady-state rate of `max_requests / window`.
//!
//! ## [Sliding Window Log](limiters::SlidingWindowLog)
//! Exact timestamp log. A rolling window of any alignment never contains
//! more than `max_requests` admits. Memory grows with the admit rate.
//!
//! ## [Fixed Window Counter](limiters::FixedWindowCounter)
//! Discrete windows with O(1) memory. Known artifact: a burst straddling a
//! window boundary can exceed `max_requests` across the two windows.
//!
//! ## [Sliding Window Counter](limiters::SlidingWindowCounter)
//! Two-window weighted approximation: O(1) memory with most of the boundary
//! artifact smoothed out.
//!
//! # Algorithm Selection Guide
//!
//! | Algorithm | Memory | Accuracy | Burst Handling |
//! |-----------|--------|----------|----------------|
//! | Token Bucket | O(1) | High | Allows bursts |
//! | Sliding Window Log | O(rate) | Exact | Smooth |
//! | Fixed Window Counter | O(1) | Medium | Boundary bursts |
//! | Sliding Window Counter | O(1) | Good | Smoothed |
//!
//! # Core Concepts
//!
//! ## Time
//! All interval math uses [`std::time::Instant`], a monotonic clock.
//! Wall-clock adjustments never influence admission. Every decision method
//! has an `_at(now: Instant)` variant so callers (and tests) can supply the
//! instant explicitly.
//!
//! ## Denial Is Not an Error
//! A `false` from [`RateLimiter::try_admit`] is an expected, frequent,
//! successful outcome. Errors are reserved for invalid configuration
//! ([`ConfigError`]) and invalid keys ([`KeyError`]), both raised eagerly
//! at the offending call.
//!
//! ## Thread Safety
//! Each limiter instance guards its state with its own mutex, held only for
//! the refill/prune-check-update sequence. Instances belonging to different
//! keys never contend on the same lock.

pub mod error;
pub mod factory;
pub mod limiter;
pub mod limiters;
pub mod manager;
pub mod policy;

pub use error::{ConfigError, KeyError};
pub use factory::build_limiter;
pub use limiter::RateLimiter;
pub use manager::KeyedRateLimiter;
pub use policy::{AlgorithmKind, Policy};
