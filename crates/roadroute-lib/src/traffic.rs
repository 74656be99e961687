use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::graph::CityId;

/// How long a traffic reading stays usable after the latest update.
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Live traffic delays layered over the static graph.
///
/// The overlay never touches the graph: searches consult it per directed
/// edge and add whatever delay it reports to the static cost. A stale
/// overlay degrades to zero delay silently; staleness is never an error.
#[derive(Debug, Clone)]
pub struct TrafficOverlay {
    delays: HashMap<(CityId, CityId), f64>,
    last_update: Option<Instant>,
    freshness_window: Duration,
    version: u64,
}

impl TrafficOverlay {
    pub fn new(freshness_window: Duration) -> Self {
        Self {
            delays: HashMap::new(),
            last_update: None,
            freshness_window,
            version: 0,
        }
    }

    /// Upsert the delay for a directed city pair and refresh the global
    /// last-update timestamp.
    pub fn record_delay(&mut self, from: CityId, to: CityId, delay_minutes: f64, now: Instant) {
        self.delays.insert((from, to), delay_minutes);
        self.last_update = Some(now);
        self.version += 1;
    }

    /// Delay currently attributed to the directed pair, or 0.0 when the
    /// overlay has no fresh data for it.
    pub fn current_delay(&self, from: CityId, to: CityId, now: Instant) -> f64 {
        if !self.is_fresh(now) {
            return 0.0;
        }
        self.delays.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Whether the most recent update is still within the freshness window.
    pub fn is_fresh(&self, now: Instant) -> bool {
        match self.last_update {
            Some(updated) => now.saturating_duration_since(updated) < self.freshness_window,
            None => false,
        }
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    /// Counter incremented on every recorded delay. Lets callers detect
    /// overlay changes without inspecting individual entries.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of directed pairs with a recorded delay, fresh or not.
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}

impl Default for TrafficOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS_WINDOW)
    }
}
