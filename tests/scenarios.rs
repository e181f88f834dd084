//! End-to-end itineraries on small hand-checked instances, run through
//! every public entry point.

use itinerary_engine::adaptive::{solve_with_mode, SelectorConfig, SolverMode};
use itinerary_engine::distance::{CostMatrix, DistanceMatrix};
use itinerary_engine::models::{
    SolveRequest, SolveResult, Strategy, Waypoint, LOOP_WARNING, TOO_FEW_WAYPOINTS_WARNING,
};
use itinerary_engine::{solve_adaptive, solve_exact, solve_heuristic};

/// Grid corners with Manhattan costs, in the order (0,0) (0,1) (1,1) (1,0).
fn corners() -> SolveRequest {
    let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
    let waypoints = coords
        .iter()
        .map(|&(lat, lon)| Waypoint::new(format!("{lat},{lon}"), format!("({lat}, {lon})"), lat, lon))
        .collect();
    let distances = DistanceMatrix::from_fn(4, |i, j| {
        (coords[i].0 - coords[j].0).abs() + (coords[i].1 - coords[j].1).abs()
    });
    SolveRequest::new(waypoints, CostMatrix::distances_only(distances))
}

fn all_solvers(request: &SolveRequest) -> Vec<SolveResult> {
    let config = SelectorConfig::default();
    vec![
        solve_exact(request),
        solve_heuristic(request),
        solve_adaptive(request).result,
        solve_with_mode(request, SolverMode::Heuristic, &config).result,
    ]
}

fn is_perimeter(ids: &[String]) -> bool {
    ids.windows(2).all(|pair| {
        let parse = |id: &str| -> (f64, f64) {
            let (a, b) = id.split_once(',').unwrap_or(("0", "0"));
            (a.parse().unwrap_or(0.0), b.parse().unwrap_or(0.0))
        };
        let (p, q) = (parse(&pair[0]), parse(&pair[1]));
        (p.0 - q.0).abs() + (p.1 - q.1).abs() == 1.0
    })
}

#[test]
fn unconstrained_square_follows_the_perimeter() {
    for result in all_solvers(&corners()) {
        assert_eq!(result.total_distance, 3.0, "{}", result.strategy);
        assert_eq!(result.len(), 4);
        assert!(is_perimeter(&result.ordered_ids));
    }
}

#[test]
fn fixed_start_and_end_walks_the_long_way_round() {
    let request = corners().with_start("0,0").with_end("1,0");
    for result in all_solvers(&request) {
        assert_eq!(result.ordered_ids, vec!["0,0", "0,1", "1,1", "1,0"]);
        assert_eq!(result.total_distance, 3.0);
        assert!(result.warnings.iter().all(|w| w != LOOP_WARNING));
    }
}

#[test]
fn loop_returns_to_start() {
    let request = corners().with_start("0,0").with_end("0,0");
    for result in all_solvers(&request) {
        assert_eq!(result.len(), 5);
        assert!(result.is_loop());
        assert_eq!(result.ordered_ids[0], "0,0");
        assert_eq!(result.total_distance, 4.0);
        assert!(result.warnings.iter().any(|w| w == LOOP_WARNING));
    }
}

#[test]
fn single_waypoint_passes_through() {
    let mut request = corners();
    request.waypoints.truncate(1);
    for result in all_solvers(&request) {
        assert_eq!(result.ordered_ids, vec!["0,0"]);
        assert_eq!(result.ordered_points, request.waypoints);
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.warnings, vec![TOO_FEW_WAYPOINTS_WARNING]);
    }
}

#[test]
fn empty_request_passes_through() {
    let request = SolveRequest::new(Vec::new(), CostMatrix::distances_only(DistanceMatrix::new(0)));
    for result in all_solvers(&request) {
        assert!(result.is_empty());
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.warnings, vec![TOO_FEW_WAYPOINTS_WARNING]);
    }
}

#[test]
fn two_waypoints_have_no_return_edge() {
    let waypoints = vec![Waypoint::new("x", "X", 0.0, 0.0), Waypoint::new("y", "Y", 0.0, 1.0)];
    let matrix = CostMatrix::from_rows(vec![vec![0.0, 7.0], vec![9.0, 0.0]], None).expect("square");
    let request = SolveRequest::new(waypoints, matrix);
    for result in all_solvers(&request) {
        assert_eq!(result.ordered_ids, vec!["x", "y"]);
        assert_eq!(result.total_distance, 7.0);
    }
}

#[test]
fn unknown_ids_leave_the_request_unconstrained() {
    let constrained = corners().with_start("nowhere").with_end("elsewhere");
    let free = corners();
    assert_eq!(solve_exact(&constrained), solve_exact(&free));
    assert_eq!(solve_heuristic(&constrained), solve_heuristic(&free));
}

#[test]
fn durations_are_reported_along_the_chosen_route() {
    let mut request = corners();
    let durations = DistanceMatrix::from_fn(4, |i, j| 60.0 * request.matrix.distances().get(i, j));
    request.matrix = CostMatrix::new(request.matrix.distances().clone(), Some(durations))
        .expect("same size")
        .with_provider("manhattan");
    let request = request.with_start("0,0").with_end("1,0");
    for result in all_solvers(&request) {
        assert_eq!(result.total_duration, Some(180.0));
    }
}

#[test]
fn adaptive_outcome_serializes_flat() {
    let outcome = solve_adaptive(&corners().with_start("0,0").with_end("0,0"));
    let value = serde_json::to_value(&outcome).expect("serializable");
    assert_eq!(value["strategy"], "exact");
    assert_eq!(value["totalDistance"], 4.0);
    assert_eq!(value["orderedIds"][4], "0,0");
    assert_eq!(value["warnings"][0], LOOP_WARNING);
    assert_eq!(value["notes"][0], "Exact strategy selected for 4 locations.");
}

#[test]
fn request_round_trips_through_json() {
    let request = corners().with_start("0,1");
    let json = serde_json::to_string(&request).expect("serializable");
    let decoded: SolveRequest = serde_json::from_str(&json).expect("decodable");
    assert_eq!(solve_exact(&decoded), solve_exact(&request));
    assert_eq!(decoded.regime(), request.regime());
}

#[test]
fn heuristic_strategy_is_labelled() {
    let result = solve_heuristic(&corners());
    assert_eq!(result.strategy, Strategy::Heuristic);
    assert_eq!(solve_exact(&corners()).strategy, Strategy::Exact);
}
