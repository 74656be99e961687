use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};

/// Stable identifier for a city in the road network.
pub type CityId = i64;

/// Classification of the road an edge travels over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    Local,
    Highway,
    Transit,
}

/// City within the road network. Coordinates are planar and used only for
/// heuristic estimation; they carry no unit beyond "same unit as x and y of
/// every other city".
#[derive(Debug, Clone)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Straight-line distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Per-time-of-day and weekend weight multipliers for an edge. All factors
/// default to 1.0, so an edge without calendar behaviour needs no setup.
#[derive(Debug, Clone, Copy)]
pub struct TimeMultipliers {
    pub morning: f64,
    pub afternoon: f64,
    pub evening: f64,
    pub night: f64,
    pub weekend: f64,
}

impl Default for TimeMultipliers {
    fn default() -> Self {
        Self {
            morning: 1.0,
            afternoon: 1.0,
            evening: 1.0,
            night: 1.0,
            weekend: 1.0,
        }
    }
}

/// Attributes describing a directed road segment.
#[derive(Debug, Clone)]
pub struct EdgeAttrs {
    /// Base travel weight before any calendar or preference adjustment.
    pub base_weight: f64,
    /// Posted speed limit, used by the fastest-time goal.
    pub speed_limit: f64,
    /// Toll charged for traversing the edge.
    pub toll: f64,
    /// Accident-risk fraction in [0, 1].
    pub accident_risk: f64,
    pub road_type: RoadType,
    /// Whether the segment is served by public transport.
    pub public_transport: bool,
    /// A closed road is never traversable, regardless of preferences.
    pub closed: bool,
    pub multipliers: TimeMultipliers,
}

impl Default for EdgeAttrs {
    fn default() -> Self {
        Self {
            base_weight: 1.0,
            speed_limit: 50.0,
            toll: 0.0,
            accident_risk: 0.0,
            road_type: RoadType::Local,
            public_transport: false,
            closed: false,
            multipliers: TimeMultipliers::default(),
        }
    }
}

/// Directed edge within the road graph. Parallel edges between the same
/// ordered pair are permitted and treated as independent alternatives.
#[derive(Debug, Clone)]
pub struct Edge {
    pub target: CityId,
    pub attrs: EdgeAttrs,
}

/// Road network used by the pathfinding algorithms.
///
/// The graph is write-once: cities and edges are added while loading and the
/// structure is never mutated during queries. Cloning shares the adjacency
/// storage, so clones are cheap and safe to hand to concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: HashMap<CityId, City>,
    adjacency: Arc<HashMap<CityId, Vec<Edge>>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city. Fails if the identifier is already present.
    pub fn add_city(&mut self, id: CityId, name: impl Into<String>, x: f64, y: f64) -> Result<()> {
        if self.cities.contains_key(&id) {
            return Err(Error::DuplicateCity { id });
        }
        self.cities.insert(
            id,
            City {
                id,
                name: name.into(),
                x,
                y,
            },
        );
        Arc::make_mut(&mut self.adjacency).insert(id, Vec::new());
        Ok(())
    }

    /// Add a directed edge from `from` to `to`. Fails if either endpoint is
    /// absent. Edges are appended, so neighbour iteration follows insertion
    /// order.
    pub fn add_edge(&mut self, from: CityId, to: CityId, attrs: EdgeAttrs) -> Result<()> {
        if !self.cities.contains_key(&from) {
            return Err(Error::UnknownCity { id: from });
        }
        if !self.cities.contains_key(&to) {
            return Err(Error::UnknownCity { id: to });
        }
        Arc::make_mut(&mut self.adjacency)
            .entry(from)
            .or_default()
            .push(Edge { target: to, attrs });
        Ok(())
    }

    /// Return the outgoing edges for a given city identifier.
    pub fn neighbours(&self, city: CityId) -> &[Edge] {
        self.adjacency.get(&city).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, city: CityId) -> bool {
        self.cities.contains_key(&city)
    }

    pub fn city(&self, city: CityId) -> Option<&City> {
        self.cities.get(&city)
    }

    /// Straight-line distance between two cities, when both exist.
    pub fn distance_between(&self, from: CityId, to: CityId) -> Option<f64> {
        let from = self.cities.get(&from)?;
        let to = self.cities.get(&to)?;
        Some(from.distance_to(to))
    }

    /// Number of cities in the graph.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
