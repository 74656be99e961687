use roadroute_lib::{
    Error, OptimizationGoal, RouteAlgorithm, RoutingContext, RoutingService, ServiceOptions,
    TimeOfDay,
};

mod common;

use common::{
    context_for, preference_network, service, star_bridge_network, toll_only_network,
};

#[test]
fn query_returns_summary_with_per_edge_breakdown() {
    let mut service = service(star_bridge_network());
    let summary = service
        .query(1, 5, &RoutingContext::default())
        .expect("route exists");

    assert_eq!(summary.algorithm, RouteAlgorithm::AStar);
    assert_eq!(summary.start, 1);
    assert_eq!(summary.goal, 5);
    assert_eq!(summary.steps, vec![1, 2, 5]);
    assert_eq!(summary.hop_count(), 2);
    assert_eq!(summary.edge_costs.len(), summary.hop_count());

    let breakdown_total: f64 = summary.edge_costs.iter().sum();
    assert!((breakdown_total - summary.total_cost).abs() < 1e-9);
}

#[test]
fn query_to_same_city_is_a_zero_cost_single_city_path() {
    let mut service = service(star_bridge_network());
    let summary = service
        .query(4, 4, &RoutingContext::default())
        .expect("trivial route");

    assert_eq!(summary.steps, vec![4]);
    assert_eq!(summary.total_cost, 0.0);
    assert_eq!(summary.hop_count(), 0);
}

#[test]
fn unknown_endpoints_are_rejected_immediately() {
    let mut service = service(star_bridge_network());

    let error = service
        .query(42, 5, &RoutingContext::default())
        .expect_err("unknown start");
    assert_eq!(error, Error::UnknownCity { id: 42 });

    let error = service
        .query(1, 42, &RoutingContext::default())
        .expect_err("unknown goal");
    assert_eq!(error, Error::UnknownCity { id: 42 });
}

#[test]
fn avoid_tolls_is_a_hard_constraint() {
    let mut service = service(toll_only_network());
    let context = RoutingContext {
        avoid_tolls: true,
        ..RoutingContext::default()
    };

    let error = service.query(1, 2, &context).expect_err("no toll-free route");
    assert_eq!(error, Error::NoPathFound { start: 1, goal: 2 });

    // Without the preference the same edge is perfectly usable.
    let summary = service
        .query(1, 2, &RoutingContext::default())
        .expect("route exists");
    assert_eq!(summary.steps, vec![1, 2]);
}

#[test]
fn avoided_city_blocks_the_only_route_through_it() {
    let mut service = service(star_bridge_network());
    let context = RoutingContext {
        avoid_cities: [2].into_iter().collect(),
        ..RoutingContext::default()
    };

    // The bridge via 2 is gone; only the expensive direct edge remains.
    let summary = service.query(1, 5, &context).expect("direct route");
    assert_eq!(summary.steps, vec![1, 5]);
    assert_eq!(summary.total_cost, 10.0);
}

#[test]
fn risk_ceiling_prunes_dangerous_shortcut_by_default() {
    let mut service = service(preference_network());

    let summary = service
        .query(1, 4, &RoutingContext::default())
        .expect("route exists");
    assert_eq!(summary.steps, vec![1, 2, 4], "shortcut is pruned");

    let daredevil = RoutingContext {
        max_accident_risk_percent: 95,
        ..RoutingContext::default()
    };
    let summary = service.query(1, 4, &daredevil).expect("route exists");
    assert_eq!(summary.steps, vec![1, 4], "shortcut allowed at higher ceiling");
}

#[test]
fn goals_steer_route_choice() {
    let mut service = service(preference_network());

    let shortest = service
        .query(1, 4, &context_for(OptimizationGoal::ShortestDistance))
        .expect("route exists");
    assert_eq!(shortest.steps, vec![1, 2, 4]);

    let cheapest = service
        .query(1, 4, &context_for(OptimizationGoal::LowestCost))
        .expect("route exists");
    assert_eq!(cheapest.steps, vec![1, 3, 4], "tolls push the route local");

    let greenest = service
        .query(1, 4, &context_for(OptimizationGoal::EcoFriendly))
        .expect("route exists");
    assert_eq!(greenest.steps, vec![1, 3, 4], "transit leg wins");
}

#[test]
fn compare_goals_returns_an_outcome_per_goal() {
    let mut service = service(preference_network());
    let goals = [
        OptimizationGoal::ShortestDistance,
        OptimizationGoal::FastestTime,
        OptimizationGoal::LowestCost,
        OptimizationGoal::SafestRoute,
        OptimizationGoal::EcoFriendly,
    ];

    let results = service.compare_goals(1, 4, TimeOfDay::Morning, false, &goals);

    assert_eq!(results.len(), goals.len());
    for goal in goals {
        let outcome = results.get(&goal).expect("entry per goal");
        assert!(outcome.is_ok(), "goal {goal} should find a route");
    }
}

#[test]
fn compare_goals_reports_no_path_as_data_not_failure() {
    let mut service = service(common::chain_network());
    let results = service.compare_goals(
        1,
        9,
        TimeOfDay::Evening,
        true,
        &[OptimizationGoal::ShortestDistance, OptimizationGoal::LowestCost],
    );

    assert_eq!(results.len(), 2);
    for outcome in results.values() {
        assert_eq!(
            outcome.as_ref().expect_err("island city is unreachable"),
            &Error::NoPathFound { start: 1, goal: 9 }
        );
    }
}

#[test]
fn dijkstra_service_mode_matches_a_star_costs() {
    let mut a_star = service(star_bridge_network());
    let mut dijkstra = RoutingService::new(
        star_bridge_network(),
        ServiceOptions {
            algorithm: RouteAlgorithm::Dijkstra,
            ..ServiceOptions::default()
        },
    );

    let guided = a_star
        .query(1, 5, &RoutingContext::default())
        .expect("route exists");
    let unguided = dijkstra
        .query(1, 5, &RoutingContext::default())
        .expect("route exists");

    assert_eq!(unguided.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(guided.steps, unguided.steps);
    assert!((guided.total_cost - unguided.total_cost).abs() < 1e-9);
}

#[test]
fn summaries_serialize_for_exporters() {
    let mut service = service(star_bridge_network());
    let summary = service
        .query(1, 5, &RoutingContext::default())
        .expect("route exists");

    let json = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(json["algorithm"], "a-star");
    assert_eq!(json["steps"], serde_json::json!([1, 2, 5]));
    assert_eq!(json["total_cost"], 5.0);
}
