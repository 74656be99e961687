//! Roadroute library entry points.
//!
//! This crate models a weighted road network and computes least-cost routes
//! under time-, calendar-, and preference-dependent edge costs, with a
//! bounded result cache and an overlay of live traffic delays. Higher-level
//! consumers (menus, exporters, settings loaders) should only depend on the
//! types exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cache;
pub mod cost;
pub mod error;
pub mod graph;
pub mod path;
pub mod routing;
pub mod traffic;

pub use cache::{CacheEntry, CacheKey, RouteCache, DEFAULT_CACHE_CAPACITY};
pub use cost::{edge_cost, OptimizationGoal, RoutingContext, TimeOfDay, MIN_EDGE_COST};
pub use error::{Error, Result};
pub use graph::{City, CityId, Edge, EdgeAttrs, Graph, RoadType, TimeMultipliers};
pub use path::{find_route_a_star, find_route_dijkstra, FoundRoute, SearchOptions};
pub use routing::{
    select_planner, AStarPlanner, DijkstraPlanner, RouteAlgorithm, RoutePlanner, RouteSummary,
    RoutingService, RoutingStats, ServiceOptions,
};
pub use traffic::{TrafficOverlay, DEFAULT_FRESHNESS_WINDOW};
