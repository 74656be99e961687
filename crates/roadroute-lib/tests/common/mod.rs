//! Shared fixture networks for integration tests.
#![allow(dead_code)]

use roadroute_lib::{
    EdgeAttrs, Graph, OptimizationGoal, RoadType, RoutingContext, RoutingService, ServiceOptions,
};

/// Five-city star around hub 1 with one bridging edge between spokes.
///
/// The direct hub edge to city 5 costs 10.0 while the two-hop detour through
/// city 2 costs 5.0, so a correct search must prefer the bridge. Base weights
/// are at least the straight-line distances, keeping a heuristic scale of
/// 1.0 admissible.
pub fn star_bridge_network() -> Graph {
    let mut graph = Graph::new();
    graph.add_city(1, "Hub", 0.0, 0.0).expect("city");
    graph.add_city(2, "East", 1.0, 0.0).expect("city");
    graph.add_city(3, "North", 0.0, 1.0).expect("city");
    graph.add_city(4, "South", 0.0, -1.0).expect("city");
    graph.add_city(5, "FarEast", 2.0, 0.0).expect("city");

    graph.add_edge(1, 2, weighted(2.0)).expect("edge");
    graph.add_edge(1, 3, weighted(1.0)).expect("edge");
    graph.add_edge(1, 4, weighted(1.0)).expect("edge");
    graph.add_edge(1, 5, weighted(10.0)).expect("edge");
    // The bridge that makes the two-hop route cheaper than the direct edge.
    graph.add_edge(2, 5, weighted(3.0)).expect("edge");

    graph
}

/// Four-city network with one highway corridor, one local/transit corridor,
/// and a high-risk shortcut, so each optimization goal has something to
/// prefer or avoid.
pub fn preference_network() -> Graph {
    let mut graph = Graph::new();
    graph.add_city(1, "Origin", 0.0, 0.0).expect("city");
    graph.add_city(2, "Junction", 4.0, 0.0).expect("city");
    graph.add_city(3, "Suburb", 0.0, 3.0).expect("city");
    graph.add_city(4, "Destination", 4.0, 3.0).expect("city");

    // Highway corridor: quick, tolled, moderately risky.
    graph
        .add_edge(
            1,
            2,
            EdgeAttrs {
                base_weight: 4.0,
                speed_limit: 120.0,
                toll: 5.0,
                accident_risk: 0.1,
                road_type: RoadType::Highway,
                ..EdgeAttrs::default()
            },
        )
        .expect("edge");
    graph
        .add_edge(
            2,
            4,
            EdgeAttrs {
                base_weight: 3.0,
                speed_limit: 120.0,
                toll: 3.0,
                accident_risk: 0.1,
                road_type: RoadType::Highway,
                ..EdgeAttrs::default()
            },
        )
        .expect("edge");

    // Local corridor ending in a public-transport leg.
    graph
        .add_edge(
            1,
            3,
            EdgeAttrs {
                base_weight: 5.0,
                speed_limit: 40.0,
                accident_risk: 0.05,
                ..EdgeAttrs::default()
            },
        )
        .expect("edge");
    graph
        .add_edge(
            3,
            4,
            EdgeAttrs {
                base_weight: 6.0,
                speed_limit: 30.0,
                accident_risk: 0.01,
                road_type: RoadType::Transit,
                public_transport: true,
                ..EdgeAttrs::default()
            },
        )
        .expect("edge");

    // Short but dangerous: pruned under the default risk ceiling.
    graph
        .add_edge(
            1,
            4,
            EdgeAttrs {
                base_weight: 6.5,
                accident_risk: 0.9,
                ..EdgeAttrs::default()
            },
        )
        .expect("edge");

    graph
}

/// Two cities joined only by a tolled edge; `avoid_tolls` leaves no route.
pub fn toll_only_network() -> Graph {
    let mut graph = Graph::new();
    graph.add_city(1, "Origin", 0.0, 0.0).expect("city");
    graph.add_city(2, "Gated", 1.0, 0.0).expect("city");
    graph
        .add_edge(
            1,
            2,
            EdgeAttrs {
                base_weight: 2.0,
                toll: 4.0,
                ..EdgeAttrs::default()
            },
        )
        .expect("edge");
    graph
}

/// Chain 1 -> 2 -> 3 -> 4 -> 5 plus an unreachable island city 9.
pub fn chain_network() -> Graph {
    let mut graph = Graph::new();
    for (id, name) in [(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E")] {
        graph.add_city(id, name, id as f64, 0.0).expect("city");
    }
    graph.add_city(9, "Island", 9.0, 9.0).expect("city");
    for pair in [(1, 2), (2, 3), (3, 4), (4, 5)] {
        graph.add_edge(pair.0, pair.1, weighted(1.0)).expect("edge");
    }
    graph
}

/// Plain edge with the given base weight and neutral attributes.
pub fn weighted(base_weight: f64) -> EdgeAttrs {
    EdgeAttrs {
        base_weight,
        ..EdgeAttrs::default()
    }
}

/// Service over the given graph with default options.
pub fn service(graph: Graph) -> RoutingService {
    RoutingService::new(graph, ServiceOptions::default())
}

/// Context targeting the given goal with otherwise default preferences.
pub fn context_for(goal: OptimizationGoal) -> RoutingContext {
    RoutingContext {
        goal,
        ..RoutingContext::default()
    }
}
