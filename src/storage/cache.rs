//! Generic time-bounded key/value cache primitive

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::warn;

/// A keyed cache whose entries expire a fixed duration after their last
/// write.
///
/// Every operation takes the interior lock exactly once, so
/// check-expiry-then-read and check-then-mutate are atomic with respect to
/// concurrent callers. Expired entries are discovered lazily by the access
/// that finds them — there is no background eviction; the next `set`
/// overwrites them in place.
pub struct TimedCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, TimedEntry<V>>>,
}

struct TimedEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> TimedEntry<V> {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create a cache whose entries live for `ttl` after each write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The value under `key`, if present and unexpired.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.lock("get");
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            _ => None,
        }
    }

    /// Store `value` under `key` with a fresh expiry, replacing any previous
    /// entry.
    pub fn set(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.lock("set");
        entries.insert(key, TimedEntry { value, expires_at });
    }

    /// Mutate the value under `key` in place when present and unexpired,
    /// refreshing its expiry. Returns whether the mutation was applied.
    pub fn update<F>(&self, key: &K, mutate: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        let mut entries = self.lock("update");
        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired() => {
                mutate(&mut entry.value);
                entry.expires_at = Instant::now() + self.ttl;
                true
            }
            _ => false,
        }
    }

    fn lock(&self, op: &'static str) -> MutexGuard<'_, HashMap<K, TimedEntry<V>>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!(
                    op,
                    lock_kind = "mutex.lock",
                    result = "poisoned_recovered",
                    hint = "state may be stale after panic in another thread",
                    "Recovered from poisoned cache lock"
                );
                poisoned.into_inner()
            }
        }
    }
}
