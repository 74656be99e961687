use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::graph::{CityId, Edge, RoadType, TimeMultipliers};

/// Floor applied to every computed edge cost.
///
/// This clamp is load-bearing: A* is only guaranteed optimal when every edge
/// weight is non-negative, and the fastest-time and eco goals subtract
/// bonuses that could otherwise drive a cheap edge to zero or below.
pub const MIN_EDGE_COST: f64 = 1e-3;

/// Cost deducted per unit of posted speed limit by the fastest-time goal.
const SPEED_BONUS_PER_LIMIT: f64 = 0.1;

/// Cost added per unit of accident-risk fraction by the safest-route goal.
const RISK_PENALTY_WEIGHT: f64 = 100.0;

/// Flat bonus for public-transport edges under the eco goal.
const TRANSIT_BONUS: f64 = 20.0;

/// Flat penalty for highway edges under the eco goal.
const HIGHWAY_PENALTY: f64 = 10.0;

/// Default accident-risk ceiling when the caller supplies no settings.
const DEFAULT_MAX_RISK_PERCENT: u8 = 80;

/// Time-of-day bucket used to select an edge's weight multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        };
        f.write_str(value)
    }
}

/// Optimization objective selecting the goal-specific cost adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationGoal {
    #[default]
    ShortestDistance,
    FastestTime,
    LowestCost,
    SafestRoute,
    EcoFriendly,
}

impl fmt::Display for OptimizationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OptimizationGoal::ShortestDistance => "shortest_distance",
            OptimizationGoal::FastestTime => "fastest_time",
            OptimizationGoal::LowestCost => "lowest_cost",
            OptimizationGoal::SafestRoute => "safest_route",
            OptimizationGoal::EcoFriendly => "eco_friendly",
        };
        f.write_str(value)
    }
}

/// Time, calendar, and preference context applied while weighting edges.
#[derive(Debug, Clone)]
pub struct RoutingContext {
    pub time_of_day: TimeOfDay,
    pub is_weekend: bool,
    pub goal: OptimizationGoal,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    /// Carried for collaborators; does not influence edge cost.
    pub prefer_public_transport: bool,
    /// Hard ceiling: edges whose risk exceeds this percentage are pruned.
    pub max_accident_risk_percent: u8,
    pub avoid_cities: HashSet<CityId>,
    /// Consumed by a multi-stop planner outside this crate; ignored by the
    /// single-pair search.
    pub must_visit_cities: Vec<CityId>,
}

impl Default for RoutingContext {
    fn default() -> Self {
        Self {
            time_of_day: TimeOfDay::Morning,
            is_weekend: false,
            goal: OptimizationGoal::default(),
            avoid_tolls: false,
            avoid_highways: false,
            prefer_public_transport: false,
            max_accident_risk_percent: DEFAULT_MAX_RISK_PERCENT,
            avoid_cities: HashSet::new(),
            must_visit_cities: Vec::new(),
        }
    }
}

impl TimeMultipliers {
    /// Multiplier for the given time-of-day bucket.
    pub fn for_time(&self, time: TimeOfDay) -> f64 {
        match time {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
            TimeOfDay::Night => self.night,
        }
    }
}

/// Compute the traversal cost of a single edge under the given context.
///
/// Returns `None` when a hard constraint prunes the edge entirely; the edge
/// is then invisible to the search rather than merely expensive. Surviving
/// edges pay the calendar-adjusted base weight plus the live traffic delay,
/// then the goal-specific adjustment, and the result is clamped to
/// [`MIN_EDGE_COST`].
pub fn edge_cost(edge: &Edge, context: &RoutingContext, overlay_delay: f64) -> Option<f64> {
    let attrs = &edge.attrs;

    if attrs.closed {
        return None;
    }
    if context.avoid_tolls && attrs.toll > 0.0 {
        return None;
    }
    if context.avoid_highways && attrs.road_type == RoadType::Highway {
        return None;
    }
    if attrs.accident_risk * 100.0 > f64::from(context.max_accident_risk_percent) {
        return None;
    }
    if context.avoid_cities.contains(&edge.target) {
        return None;
    }

    let weekend_factor = if context.is_weekend {
        attrs.multipliers.weekend
    } else {
        1.0
    };
    let base =
        attrs.base_weight * attrs.multipliers.for_time(context.time_of_day) * weekend_factor
            + overlay_delay;

    let adjusted = match context.goal {
        OptimizationGoal::ShortestDistance => base,
        OptimizationGoal::FastestTime => base - attrs.speed_limit * SPEED_BONUS_PER_LIMIT,
        OptimizationGoal::LowestCost => base + attrs.toll,
        OptimizationGoal::SafestRoute => base + attrs.accident_risk * RISK_PENALTY_WEIGHT,
        OptimizationGoal::EcoFriendly => {
            let mut cost = base;
            if attrs.public_transport {
                cost -= TRANSIT_BONUS;
            }
            if attrs.road_type == RoadType::Highway {
                cost += HIGHWAY_PENALTY;
            }
            cost
        }
    };

    Some(adjusted.max(MIN_EDGE_COST))
}
