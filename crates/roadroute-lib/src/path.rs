use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::cost::{edge_cost, RoutingContext};
use crate::error::{Error, Result};
use crate::graph::{CityId, Graph};
use crate::traffic::TrafficOverlay;

/// Knobs applied to a single search invocation.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Factor applied to the straight-line distance when estimating
    /// remaining cost. Admissibility requires the factor to never exceed the
    /// network's true minimum cost per unit of distance; 0.0 disables the
    /// estimate, which degrades A* to Dijkstra and is always admissible.
    pub heuristic_scale: f64,
    /// Maximum number of settled nodes before the search gives up with
    /// [`Error::SearchBudgetExceeded`]. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heuristic_scale: 0.0,
            max_expansions: None,
        }
    }
}

/// Route produced by a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundRoute {
    /// Ordered city identifiers from start to goal, inclusive.
    pub steps: Vec<CityId>,
    pub total_cost: f64,
    /// Cost paid for each hop; one entry per consecutive pair in `steps`.
    pub edge_costs: Vec<f64>,
}

/// Run A* between `start` and `goal`.
///
/// Returns `Ok(None)` when the frontier empties without reaching the goal,
/// which callers report as the ordinary no-route outcome. Stale frontier
/// entries are expected and skipped lazily since the queue does not support
/// decrease-key.
pub fn find_route_a_star(
    graph: &Graph,
    context: &RoutingContext,
    overlay: &TrafficOverlay,
    now: Instant,
    start: CityId,
    goal: CityId,
    options: &SearchOptions,
) -> Result<Option<FoundRoute>> {
    if start == goal {
        return Ok(Some(trivial_route(start)));
    }

    let mut g_score: HashMap<CityId, f64> = HashMap::new();
    let mut parents: HashMap<CityId, Option<CityId>> = HashMap::new();
    let mut settled: HashSet<CityId> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    g_score.insert(start, 0.0);
    parents.insert(start, None);
    let start_estimate = heuristic(graph, start, goal, options.heuristic_scale);
    queue.push(AStarEntry::new(start, 0.0, start_estimate));

    while let Some(entry) = queue.pop() {
        if settled.contains(&entry.node) {
            continue;
        }
        let current_score = match g_score.get(&entry.node) {
            Some(score) if entry.cost.0 > *score => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return Ok(Some(assemble_route(&parents, &g_score, start, goal)));
        }

        if let Some(budget) = options.max_expansions {
            if expanded >= budget {
                return Err(Error::SearchBudgetExceeded { expanded });
            }
        }
        settled.insert(entry.node);
        expanded += 1;

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if settled.contains(&next) {
                continue;
            }
            let delay = overlay.current_delay(entry.node, next, now);
            let Some(cost) = edge_cost(edge, context, delay) else {
                continue;
            };

            let tentative = current_score + cost;
            if tentative < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                parents.insert(next, Some(entry.node));
                let estimate = heuristic(graph, next, goal, options.heuristic_scale);
                queue.push(AStarEntry::new(next, tentative, estimate));
            }
        }
    }

    Ok(None)
}

/// Run Dijkstra's algorithm between `start` and `goal`.
///
/// Kept as an independent implementation rather than A* with a zero scale:
/// it backs the explicit Dijkstra service mode and serves as the optimality
/// cross-check for the heuristic search.
pub fn find_route_dijkstra(
    graph: &Graph,
    context: &RoutingContext,
    overlay: &TrafficOverlay,
    now: Instant,
    start: CityId,
    goal: CityId,
    options: &SearchOptions,
) -> Result<Option<FoundRoute>> {
    if start == goal {
        return Ok(Some(trivial_route(start)));
    }

    let mut distances: HashMap<CityId, f64> = HashMap::new();
    let mut parents: HashMap<CityId, Option<CityId>> = HashMap::new();
    let mut settled: HashSet<CityId> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if settled.contains(&entry.node) {
            continue;
        }
        let current_distance = match distances.get(&entry.node) {
            Some(distance) if entry.cost.0 > *distance => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.node == goal {
            return Ok(Some(assemble_route(&parents, &distances, start, goal)));
        }

        if let Some(budget) = options.max_expansions {
            if expanded >= budget {
                return Err(Error::SearchBudgetExceeded { expanded });
            }
        }
        settled.insert(entry.node);
        expanded += 1;

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if settled.contains(&next) {
                continue;
            }
            let delay = overlay.current_delay(entry.node, next, now);
            let Some(cost) = edge_cost(edge, context, delay) else {
                continue;
            };

            let next_distance = current_distance + cost;
            if next_distance < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_distance);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_distance));
            }
        }
    }

    Ok(None)
}

fn trivial_route(city: CityId) -> FoundRoute {
    FoundRoute {
        steps: vec![city],
        total_cost: 0.0,
        edge_costs: Vec::new(),
    }
}

fn heuristic(graph: &Graph, from: CityId, goal: CityId, scale: f64) -> f64 {
    if scale <= 0.0 {
        return 0.0;
    }
    graph
        .distance_between(from, goal)
        .map(|distance| distance * scale)
        .unwrap_or(0.0)
}

fn assemble_route(
    parents: &HashMap<CityId, Option<CityId>>,
    scores: &HashMap<CityId, f64>,
    start: CityId,
    goal: CityId,
) -> FoundRoute {
    let steps = reconstruct_path(parents, start, goal);

    // Per-hop costs fall out of the settled score deltas along the path.
    let mut edge_costs = Vec::with_capacity(steps.len().saturating_sub(1));
    for pair in steps.windows(2) {
        let from = scores.get(&pair[0]).copied().unwrap_or(0.0);
        let to = scores.get(&pair[1]).copied().unwrap_or(from);
        edge_costs.push(to - from);
    }

    FoundRoute {
        steps,
        total_cost: scores.get(&goal).copied().unwrap_or(0.0),
        edge_costs,
    }
}

fn reconstruct_path(
    parents: &HashMap<CityId, Option<CityId>>,
    start: CityId,
    goal: CityId,
) -> Vec<CityId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: CityId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: CityId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with
        // the lower city id winning ties for reproducible pops.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: CityId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: CityId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            // f is derived from g and h at construction and never mutated,
            // so the two can never diverge.
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on f; ties prefer the deeper node (larger g), then the
        // lower city id for deterministic expansion order.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
