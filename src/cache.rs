//! Time-bounded memoization
//!
//! # cache
//!
//! A [`TtlCache`] remembers one computed value per key together with the
//! instant it was computed. A lookup serves the remembered value until it is
//! older than the cache's time-to-live, at which point the next lookup for
//! that key recomputes it. Nothing is evicted proactively: a key that is never
//! asked for again keeps its stale value until the cache is dropped.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Source of "now" for expiry decisions.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Debug)]
struct Slot<V> {
    computed_at: Instant,
    value: Arc<V>,
}

#[derive(Debug)]
pub struct TtlCache<K, V, C = SystemClock> {
    ttl: Duration,
    clock: C,
    slots: Mutex<HashMap<K, Slot<V>>>,
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn with_ttl(ttl: Duration) -> Self {
        TtlCache::new(ttl, SystemClock)
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash + Clone + Debug,
    C: Clock,
{
    pub fn new(ttl: Duration, clock: C) -> Self {
        TtlCache {
            ttl,
            clock,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the value cached for `key`, running `compute` first if there
    /// is none or it has outlived the TTL.
    pub fn get_or_compute<F>(&self, key: &K, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        let now = self.clock.now();
        self.get_or_compute_at(key, now, compute)
    }

    /// Same as [`get_or_compute`](Self::get_or_compute), judging freshness
    /// against `now` instead of the cache's clock.
    ///
    /// The whole check-then-recompute runs under one lock, so two callers
    /// racing past the same expired slot trigger a single computation.
    pub fn get_or_compute_at<F>(&self, key: &K, now: Instant, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        let mut slots = self.lock();

        match slots.get(key) {
            Some(slot) if !self.is_expired(slot, now) => return Arc::clone(&slot.value),
            Some(_) => log::debug!("cache entry expired for: {:?}", key),
            None => log::debug!("cache empty for: {:?}", key),
        }

        let value = Arc::new(compute(key));
        slots.insert(
            key.clone(),
            Slot {
                computed_at: now,
                value: Arc::clone(&value),
            },
        );

        value
    }

    /// Drops the value cached for `key`; the next lookup recomputes it.
    pub fn invalidate(&self, key: &K) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // age == ttl is still fresh
    fn is_expired(&self, slot: &Slot<V>, now: Instant) -> bool {
        now.saturating_duration_since(slot.computed_at) > self.ttl
    }

    // a panicking `compute` never leaves a half-written slot behind, so the
    // map is still consistent after poisoning
    fn lock(&self) -> MutexGuard<'_, HashMap<K, Slot<V>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
