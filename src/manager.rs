//! Per-key limiter isolation under one shared policy.

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use tracing::debug;

use crate::error::KeyError;
use crate::factory::build_limiter;
use crate::limiter::RateLimiter;
use crate::policy::Policy;

/// Gives each distinct key its own independent limiter under one policy.
///
/// Instances are created lazily on a key's first use and live until
/// explicitly removed or cleared; there is no implicit eviction. The
/// key-to-instance map is sharded, and get-or-create is atomic: concurrent
/// first callers for the same new key observe exactly one instance.
/// Different keys never contend on the same limiter lock, so the manager
/// scales with concurrent multi-user load.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rate_gate_core::{AlgorithmKind, KeyError, KeyedRateLimiter, Policy};
///
/// let policy = Policy::new(AlgorithmKind::FixedWindow, 2, Duration::from_secs(60))?;
/// let manager = KeyedRateLimiter::new(policy);
///
/// assert_eq!(manager.try_admit("alice"), Ok(true));
/// assert_eq!(manager.try_admit("alice"), Ok(true));
/// assert_eq!(manager.try_admit("alice"), Ok(false));
///
/// // "bob" is unaffected by "alice" exhausting her limit
/// assert_eq!(manager.try_admit("bob"), Ok(true));
///
/// // Empty keys are rejected
/// assert_eq!(manager.try_admit(""), Err(KeyError::Empty));
/// # Ok::<(), rate_gate_core::ConfigError>(())
/// ```
pub struct KeyedRateLimiter {
    policy: Policy,
    limiters: DashMap<String, Arc<dyn RateLimiter>>,
}

impl KeyedRateLimiter {
    /// Creates a manager applying `policy` independently to every key.
    pub fn new(policy: Policy) -> Self {
        KeyedRateLimiter {
            policy,
            limiters: DashMap::new(),
        }
    }

    /// The shared policy applied to every key.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Decides whether one unit of work for `key` may proceed now.
    ///
    /// # Errors
    ///
    /// [`KeyError::Empty`] if `key` is empty.
    pub fn try_admit(&self, key: &str) -> Result<bool, KeyError> {
        self.try_admit_at(key, Instant::now())
    }

    /// Decides whether one unit of work for `key` may proceed at `now`.
    pub fn try_admit_at(&self, key: &str, now: Instant) -> Result<bool, KeyError> {
        Ok(self.limiter_for(key)?.try_admit_at(now))
    }

    /// Per-key passthrough of
    /// [`available_capacity`](RateLimiter::available_capacity).
    ///
    /// Creates the key's limiter if it does not exist yet; a capacity query
    /// counts as first use.
    pub fn available_capacity(&self, key: &str) -> Result<Option<u32>, KeyError> {
        self.available_capacity_at(key, Instant::now())
    }

    /// Per-key capacity passthrough at an explicit instant.
    pub fn available_capacity_at(&self, key: &str, now: Instant) -> Result<Option<u32>, KeyError> {
        Ok(self.limiter_for(key)?.available_capacity_at(now))
    }

    /// Resets the limiter tracked for `key` to its freshly-constructed
    /// state. Returns whether the key was tracked.
    pub fn reset(&self, key: &str) -> bool {
        match self.limiters.get(key) {
            Some(limiter) => {
                limiter.reset();
                true
            }
            None => false,
        }
    }

    /// Drops the limiter tracked for `key`. Returns whether the key was
    /// tracked.
    pub fn remove(&self, key: &str) -> bool {
        let existed = self.limiters.remove(key).is_some();
        if existed {
            debug!(key, "removed per-key rate limiter");
        }
        existed
    }

    /// Drops every tracked key.
    pub fn clear(&self) {
        debug!(keys = self.limiters.len(), "clearing per-key rate limiters");
        self.limiters.clear();
    }

    /// Number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.limiters.len()
    }

    /// Whether no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.limiters.is_empty()
    }

    /// Atomic get-or-create of the limiter for `key`.
    fn limiter_for(&self, key: &str) -> Result<Arc<dyn RateLimiter>, KeyError> {
        if key.is_empty() {
            return Err(KeyError::Empty);
        }

        // Fast path: an existing key only takes a shard read lock.
        if let Some(existing) = self.limiters.get(key) {
            return Ok(Arc::clone(&existing));
        }

        // The entry API makes the insert atomic: concurrent first callers
        // for the same key race to one construction, never two.
        let entry = self.limiters.entry(key.to_string()).or_insert_with(|| {
            debug!(key, algorithm = %self.policy.algorithm(), "creating per-key rate limiter");
            Arc::from(build_limiter(&self.policy))
        });
        Ok(Arc::clone(&entry))
    }
}
