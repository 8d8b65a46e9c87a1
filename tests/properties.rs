use std::collections::HashSet;

use proptest::prelude::*;
use route_optimizer::distance::DistanceMatrix;
use route_optimizer::evaluation::route_cost;
use route_optimizer::local_search::{improve, SearchConfig};
use route_optimizer::models::{LocalSearchKind, Location, Options};
use route_optimizer::optimize;

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

prop_compose! {
    fn locations(max: usize)
    (coords in prop::collection::vec((37.40..37.70f64, 126.80..127.10f64), 1..=max))
    -> Vec<Location> {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lng))| Location::new(format!("p{i}"), format!("Stop {i}"), lat, lng))
            .collect()
    }
}

prop_compose! {
    fn asymmetric_matrix(max: usize)
    (n in 2..=max)
    (costs in prop::collection::vec(0.0..100.0f64, n * n), n in Just(n))
    -> DistanceMatrix {
        let mut dm = DistanceMatrix::from_data(n, costs).expect("non-negative");
        for i in 0..n {
            dm.set(i, i, 0.0);
        }
        dm
    }
}

fn local_search_kind() -> impl Strategy<Value = LocalSearchKind> {
    prop_oneof![
        Just(LocalSearchKind::None),
        Just(LocalSearchKind::TwoOpt),
        Just(LocalSearchKind::ThreeOpt),
    ]
}

/// Options with pins valid for `n` stops.
fn pinned_options(n: usize) -> impl Strategy<Value = Options> {
    (
        1..8usize,
        any::<bool>(),
        prop::option::of(0..n),
        prop::option::of(0..n),
        local_search_kind(),
    )
        .prop_map(|(max_alternatives, round_trip, start, end, kind)| {
            let mut options = Options::default()
                .with_max_alternatives(max_alternatives)
                .with_round_trip(round_trip)
                .with_local_search(kind);
            options.start_point = start;
            options.end_point = end.filter(|&e| Some(e) != start);
            options
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn routes_are_ranked_distinct_permutations(
        (stops, options) in locations(9).prop_flat_map(|stops| {
            let n = stops.len();
            (Just(stops), pinned_options(n))
        })
    ) {
        let dm = DistanceMatrix::haversine(&stops);
        let n = stops.len();
        let result = optimize(&dm, &stops, &options).expect("valid input");

        prop_assert!(result.len() <= options.max_alternatives);
        let mut seen = HashSet::new();
        let mut previous = f64::NEG_INFINITY;
        for route in result.routes() {
            prop_assert!(is_permutation(route.order(), n));
            prop_assert!(seen.insert(route.order().to_vec()));
            prop_assert!(route.total_cost() >= previous);
            previous = route.total_cost();

            if let Some(start) = options.start_point {
                prop_assert_eq!(route.order()[0], start);
            }
            if let Some(end) = options.end_point {
                prop_assert_eq!(route.order()[n - 1], end);
            }
        }
    }

    #[test]
    fn route_cost_is_sum_of_legs(dm in asymmetric_matrix(8), round_trip in any::<bool>()) {
        let options = Options::default().with_round_trip(round_trip);
        let result = optimize(&dm, &[], &options).expect("valid input");
        for route in result.routes() {
            let n = route.len();
            let expected_legs = if round_trip { n } else { n - 1 };
            prop_assert_eq!(route.legs().len(), expected_legs);
            let sum: f64 = route.legs().iter().map(|l| l.distance).sum();
            prop_assert!((route.total_cost() - sum).abs() < 1e-9);
            prop_assert!((route.total_cost() - route_cost(route.order(), &dm, round_trip)).abs() < 1e-9);
            for leg in route.legs() {
                prop_assert_eq!(leg.distance, dm.get(leg.from, leg.to));
            }
        }
    }

    #[test]
    fn optimize_is_deterministic(dm in asymmetric_matrix(8), restarts in 0..4usize) {
        let options = Options::default().with_random_restarts(restarts, 7);
        let a = optimize(&dm, &[], &options).expect("valid input");
        let b = optimize(&dm, &[], &options).expect("valid input");
        let orders_a: Vec<_> = a.routes().map(|r| r.order().to_vec()).collect();
        let orders_b: Vec<_> = b.routes().map(|r| r.order().to_vec()).collect();
        prop_assert_eq!(orders_a, orders_b);
    }

    #[test]
    fn local_search_never_worsens(
        dm in asymmetric_matrix(9),
        kind in local_search_kind(),
        round_trip in any::<bool>(),
        fixed_end in any::<bool>(),
    ) {
        let n = dm.size();
        let order: Vec<usize> = (0..n).rev().collect();
        let config = SearchConfig::new(200)
            .with_round_trip(round_trip)
            .with_fixed_end(fixed_end);
        let result = improve(kind, &order, &dm, &config);

        prop_assert!(is_permutation(&result.order, n));
        prop_assert_eq!(result.order[0], order[0]);
        if fixed_end {
            prop_assert_eq!(result.order[n - 1], order[n - 1]);
        }
        prop_assert!(result.cost <= route_cost(&order, &dm, round_trip) + 1e-9);
        prop_assert_eq!(result.cost, route_cost(&result.order, &dm, round_trip));
    }
}
