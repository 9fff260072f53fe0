//! Admission algorithm implementations.
//!
//! Each limiter is a self-contained, thread-safe implementation of the
//! [`RateLimiter`](crate::RateLimiter) contract, scoped to one policy and
//! one logical subject. They are usually constructed through
//! [`build_limiter`](crate::build_limiter) or the
//! [`KeyedRateLimiter`](crate::KeyedRateLimiter), but can be built directly
//! when a single algorithm is all that is needed.
//!
//! # Algorithm Comparison
//!
//! | Algorithm | Memory | Accuracy | Burst Handling |
//! |-----------|--------|----------|----------------|
//! | [`TokenBucket`] | O(1) | High | Allows bursts up to capacity |
//! | [`SlidingWindowLog`] | O(admits/window) | Exact | Smooth |
//! | [`FixedWindowCounter`] | O(1) | Medium | Boundary bursts |
//! | [`SlidingWindowCounter`] | O(1) | Good | Smoothed |

pub mod fixed_window;
pub mod sliding_counter;
pub mod sliding_log;
pub mod token_bucket;

pub use fixed_window::FixedWindowCounter;
pub use sliding_counter::SlidingWindowCounter;
pub use sliding_log::SlidingWindowLog;
pub use token_bucket::TokenBucket;
