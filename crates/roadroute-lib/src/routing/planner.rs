//! Route planning strategies.
//!
//! Each algorithm is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so the service orchestration stays independent of
//! which search runs underneath. The per-goal cost weighting is not a
//! strategy: goals form a closed set dispatched inside the cost model.

use std::time::Instant;

use crate::cost::RoutingContext;
use crate::error::Result;
use crate::graph::{CityId, Graph};
use crate::path::{find_route_a_star, find_route_dijkstra, FoundRoute, SearchOptions};
use crate::traffic::TrafficOverlay;

use super::{RouteAlgorithm, ServiceOptions};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search. `Ok(None)` means the goal is unreachable under
    /// the given context; errors are reserved for real faults such as an
    /// exhausted search budget.
    fn find_path(
        &self,
        graph: &Graph,
        context: &RoutingContext,
        overlay: &TrafficOverlay,
        now: Instant,
        start: CityId,
        goal: CityId,
    ) -> Result<Option<FoundRoute>>;
}

/// Dijkstra planner; explores by settled cost alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner {
    options: SearchOptions,
}

impl DijkstraPlanner {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        context: &RoutingContext,
        overlay: &TrafficOverlay,
        now: Instant,
        start: CityId,
        goal: CityId,
    ) -> Result<Option<FoundRoute>> {
        find_route_dijkstra(graph, context, overlay, now, start, goal, &self.options)
    }
}

/// A* planner; guided by the scaled straight-line estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner {
    options: SearchOptions,
}

impl AStarPlanner {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        context: &RoutingContext,
        overlay: &TrafficOverlay,
        now: Instant,
        start: CityId,
        goal: CityId,
    ) -> Result<Option<FoundRoute>> {
        find_route_a_star(graph, context, overlay, now, start, goal, &self.options)
    }
}

/// Select the planner configured by the service options.
pub fn select_planner(options: &ServiceOptions) -> Box<dyn RoutePlanner> {
    let search = SearchOptions {
        heuristic_scale: options.heuristic_scale,
        max_expansions: options.max_expansions,
    };
    match options.algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner::new(search)),
        RouteAlgorithm::AStar => Box::new(AStarPlanner::new(search)),
    }
}
