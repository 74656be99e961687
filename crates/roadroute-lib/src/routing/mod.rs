//! Route planning orchestration.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (Dijkstra, A*)
//! - [`ServiceOptions`] - Settings consumed from the external loader
//! - [`RouteSummary`] - Planned route result for collaborators
//! - [`RoutingService`] - Cache-fronted entry point for queries
//!
//! The service is the only type external collaborators call: it owns the
//! graph, the traffic overlay, and the route cache, and keeps the three
//! composed safely (cache entries never outlive the traffic readings they
//! were computed against).

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cache::{CacheEntry, CacheKey, RouteCache};
use crate::cost::{OptimizationGoal, RoutingContext, TimeOfDay};
use crate::error::{Error, Result};
use crate::graph::{CityId, Graph};
use crate::path::FoundRoute;
use crate::traffic::{TrafficOverlay, DEFAULT_FRESHNESS_WINDOW};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (no heuristic guidance).
    Dijkstra,
    /// A* search (heuristic guided).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Settings applied to a routing service instance. The external settings
/// loader maps its file format onto this struct; the core never reads files.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub algorithm: RouteAlgorithm,
    /// Disable to bypass the route cache entirely.
    pub use_cache: bool,
    pub max_cache_size: usize,
    /// Default accident-risk ceiling as a fraction in [0, 1]; seeds
    /// [`RoutingService::default_context`].
    pub max_acceptable_risk: f64,
    /// Heuristic scale handed to A*; see
    /// [`SearchOptions::heuristic_scale`](crate::path::SearchOptions::heuristic_scale).
    pub heuristic_scale: f64,
    /// Optional settled-node budget per search.
    pub max_expansions: Option<usize>,
    pub freshness_window: Duration,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            algorithm: RouteAlgorithm::default(),
            use_cache: true,
            max_cache_size: crate::cache::DEFAULT_CACHE_CAPACITY,
            max_acceptable_risk: 0.8,
            heuristic_scale: 0.0,
            max_expansions: None,
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
        }
    }
}

/// Planned route returned by the service. Exporters serialize this as-is.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: CityId,
    pub goal: CityId,
    pub steps: Vec<CityId>,
    pub total_cost: f64,
    /// Cost paid per hop, aligned with consecutive pairs in `steps`.
    pub edge_costs: Vec<f64>,
}

impl RouteSummary {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Counters accumulated across the lifetime of a service instance.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RoutingStats {
    pub queries: u64,
    pub cache_hits: u64,
    /// Number of searches actually executed (cache misses).
    pub searches: u64,
}

/// Cache-fronted routing facade over graph, cost model, and traffic overlay.
pub struct RoutingService {
    graph: Graph,
    overlay: TrafficOverlay,
    cache: RouteCache,
    options: ServiceOptions,
    stats: RoutingStats,
}

impl RoutingService {
    pub fn new(graph: Graph, options: ServiceOptions) -> Self {
        let overlay = TrafficOverlay::new(options.freshness_window);
        let cache = RouteCache::with_capacity(options.max_cache_size);
        Self {
            graph,
            overlay,
            cache,
            options,
            stats: RoutingStats::default(),
        }
    }

    /// Compute (or recall) the best route between two cities.
    pub fn query(
        &mut self,
        start: CityId,
        goal: CityId,
        context: &RoutingContext,
    ) -> Result<RouteSummary> {
        self.query_at(start, goal, context, Instant::now())
    }

    /// As [`query`](Self::query), with an explicit clock reading. The same
    /// `now` drives cache aging and overlay freshness, so a query observes
    /// one consistent snapshot of the traffic state.
    pub fn query_at(
        &mut self,
        start: CityId,
        goal: CityId,
        context: &RoutingContext,
        now: Instant,
    ) -> Result<RouteSummary> {
        self.stats.queries += 1;

        if !self.graph.contains(start) {
            return Err(Error::UnknownCity { id: start });
        }
        if !self.graph.contains(goal) {
            return Err(Error::UnknownCity { id: goal });
        }

        let key = CacheKey::for_query(start, goal, context);
        if self.options.use_cache {
            if let Some(hit) = self.cache.lookup(&key, now, self.overlay.freshness_window()) {
                self.stats.cache_hits += 1;
                tracing::debug!("route cache hit for {start} -> {goal}");
                return Ok(self.summarize(start, goal, hit.route));
            }
        }

        let planner = select_planner(&self.options);
        self.stats.searches += 1;
        let route = planner
            .find_path(&self.graph, context, &self.overlay, now, start, goal)?
            .ok_or(Error::NoPathFound { start, goal })?;

        if self.options.use_cache {
            self.cache.insert(
                key,
                CacheEntry {
                    route: route.clone(),
                    created_at: now,
                },
            );
        }

        Ok(self.summarize(start, goal, route))
    }

    /// Run one query per optimization goal and collect every outcome. Each
    /// goal is an independent query with its own cache key; a goal with no
    /// feasible route reports `NoPathFound` without affecting the others.
    pub fn compare_goals(
        &mut self,
        start: CityId,
        goal: CityId,
        time_of_day: TimeOfDay,
        is_weekend: bool,
        goals: &[OptimizationGoal],
    ) -> HashMap<OptimizationGoal, Result<RouteSummary>> {
        let mut results = HashMap::with_capacity(goals.len());
        for &objective in goals {
            let mut context = self.default_context();
            context.time_of_day = time_of_day;
            context.is_weekend = is_weekend;
            context.goal = objective;
            results.insert(objective, self.query(start, goal, &context));
        }
        results
    }

    /// Record a live traffic delay for a directed city pair.
    pub fn record_delay(&mut self, from: CityId, to: CityId, delay_minutes: f64) {
        self.record_delay_at(from, to, delay_minutes, Instant::now());
    }

    /// As [`record_delay`](Self::record_delay), with an explicit clock
    /// reading. Every update invalidates the whole route cache: cached
    /// totals embed the delays they were computed against, and recomputing
    /// a handful of routes is cheaper than returning a wrong one.
    pub fn record_delay_at(&mut self, from: CityId, to: CityId, delay_minutes: f64, now: Instant) {
        self.overlay.record_delay(from, to, delay_minutes, now);
        if !self.cache.is_empty() {
            tracing::debug!(
                "traffic update for {from} -> {to} invalidates {} cached routes",
                self.cache.len()
            );
            self.cache.invalidate_all();
        }
    }

    /// Context seeded with the configured risk ceiling; callers adjust the
    /// remaining fields per query.
    pub fn default_context(&self) -> RoutingContext {
        let percent = (self.options.max_acceptable_risk.clamp(0.0, 1.0) * 100.0).round() as u8;
        RoutingContext {
            max_accident_risk_percent: percent,
            ..RoutingContext::default()
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn overlay(&self) -> &TrafficOverlay {
        &self.overlay
    }

    pub fn stats(&self) -> RoutingStats {
        self.stats
    }

    /// Number of routes currently cached.
    pub fn cached_routes(&self) -> usize {
        self.cache.len()
    }

    fn summarize(&self, start: CityId, goal: CityId, route: FoundRoute) -> RouteSummary {
        RouteSummary {
            algorithm: self.options.algorithm,
            start,
            goal,
            steps: route.steps,
            total_cost: route.total_cost,
            edge_costs: route.edge_costs,
        }
    }
}
