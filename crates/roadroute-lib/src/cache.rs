use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cost::{OptimizationGoal, RoutingContext, TimeOfDay};
use crate::graph::CityId;
use crate::path::FoundRoute;

/// Default number of cached routes before eviction kicks in.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Composite lookup key covering exactly the context fields that influence
/// edge cost. Display-only preferences are deliberately absent: including
/// them would split identical results across distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    start: CityId,
    goal: CityId,
    time_of_day: TimeOfDay,
    is_weekend: bool,
    optimization: OptimizationGoal,
    avoid_tolls: bool,
    avoid_highways: bool,
    max_accident_risk_percent: u8,
    avoided: Vec<CityId>,
}

impl CacheKey {
    /// Build the key for a query. The avoid set is sorted so contexts that
    /// differ only in set iteration order produce the same fingerprint.
    pub fn for_query(start: CityId, goal: CityId, context: &RoutingContext) -> Self {
        let mut avoided: Vec<CityId> = context.avoid_cities.iter().copied().collect();
        avoided.sort_unstable();

        Self {
            start,
            goal,
            time_of_day: context.time_of_day,
            is_weekend: context.is_weekend,
            optimization: context.goal,
            avoid_tolls: context.avoid_tolls,
            avoid_highways: context.avoid_highways,
            max_accident_risk_percent: context.max_accident_risk_percent,
            avoided,
        }
    }
}

/// Cached search result plus the moment it was computed.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub route: FoundRoute,
    pub created_at: Instant,
}

struct Slot {
    entry: CacheEntry,
    last_used: u64,
}

/// Bounded memoization layer over the pathfinder.
///
/// Pure memoization: a hit must return exactly what the search returned when
/// the entry was created. Entries older than the caller-supplied age limit
/// are dropped on lookup, since a traffic reading that expired after the
/// entry was computed silently changes the true cost.
pub struct RouteCache {
    entries: HashMap<CacheKey, Slot>,
    capacity: usize,
    tick: u64,
}

impl RouteCache {
    /// Create a cache holding at most `capacity` routes (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            tick: 0,
        }
    }

    /// Fetch the entry for `key`, refreshing its recency. Entries older
    /// than `max_age` are removed and reported as misses.
    pub fn lookup(&mut self, key: &CacheKey, now: Instant, max_age: Duration) -> Option<CacheEntry> {
        let expired = match self.entries.get(key) {
            Some(slot) => now.saturating_duration_since(slot.entry.created_at) >= max_age,
            None => return None,
        };
        if expired {
            self.entries.remove(key);
            return None;
        }

        self.tick += 1;
        let slot = self.entries.get_mut(key)?;
        slot.last_used = self.tick;
        Some(slot.entry.clone())
    }

    /// Store an entry, evicting the least-recently-used one at capacity.
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_least_recent();
        }
        self.tick += 1;
        self.entries.insert(
            key,
            Slot {
                entry,
                last_used: self.tick,
            },
        );
    }

    /// Drop every entry. Used when a traffic update invalidates all costs.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}
