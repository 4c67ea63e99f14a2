use std::collections::BTreeSet;

use proptest::prelude::*;

use u_delivery::constructive::{find_optimized_route, RouteOptimizer};
use u_delivery::distance::{shortest_paths, DistanceMatrix};
use u_delivery::graph::LocationGraph;

fn code(i: usize) -> String {
    format!("L{i}")
}

fn build(n: usize, edges: &[(usize, usize, u8)]) -> LocationGraph {
    let mut g = LocationGraph::new();
    for i in 0..n {
        g.add_location(code(i));
    }
    for &(a, b, w) in edges {
        g.add_edge(&code(a), &code(b), f64::from(w)).expect("registered endpoints");
    }
    g
}

/// Minimum over every simple path from `source` to `target`.
fn brute_force(g: &LocationGraph, source: usize, target: usize) -> f64 {
    fn walk(g: &LocationGraph, at: usize, target: usize, seen: &mut [bool], acc: f64, best: &mut f64) {
        if at == target {
            *best = best.min(acc);
            return;
        }
        for e in g.neighbors(at) {
            if !seen[e.to] {
                seen[e.to] = true;
                walk(g, e.to, target, seen, acc + e.weight, best);
                seen[e.to] = false;
            }
        }
    }
    let mut seen = vec![false; g.size()];
    seen[source] = true;
    let mut best = f64::INFINITY;
    walk(g, source, target, &mut seen, 0.0, &mut best);
    best
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
    (1usize..=6).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u8..20);
        (Just(n), prop::collection::vec(edge, 0..10))
    })
}

proptest! {
    #[test]
    fn prop_size_counts_distinct_codes(codes in prop::collection::vec(0usize..8, 0..20)) {
        let mut g = LocationGraph::new();
        for &c in &codes {
            g.add_location(code(c));
        }
        let distinct: BTreeSet<usize> = codes.iter().copied().collect();
        prop_assert_eq!(g.size(), distinct.len());
        for &c in &codes {
            let before = g.index_of(&code(c)).unwrap();
            prop_assert_eq!(g.add_location(code(c)), before);
        }
        prop_assert_eq!(g.size(), distinct.len());
    }

    #[test]
    fn prop_edges_symmetric((n, edges) in graph_strategy()) {
        let g = build(n, &edges);
        for &(a, b, w) in &edges {
            let w = f64::from(w);
            prop_assert!(g.neighbors(a).iter().any(|e| e.to == b && e.weight == w));
            prop_assert!(g.neighbors(b).iter().any(|e| e.to == a && e.weight == w));
        }
        prop_assert_eq!(g.num_edges(), edges.len());
    }

    #[test]
    fn prop_dijkstra_matches_brute_force((n, edges) in graph_strategy(), source in 0usize..6) {
        let g = build(n, &edges);
        let source = source % n;
        let sp = shortest_paths(&g, source).unwrap();

        prop_assert_eq!(sp.distance(source), 0.0);
        for v in 0..n {
            let d = sp.distance(v);
            prop_assert!(d >= 0.0);
            prop_assert_eq!(d, brute_force(&g, source, v));
            for e in g.neighbors(v) {
                prop_assert!(sp.distance(e.to) <= d + e.weight);
            }
            if let Some(path) = sp.path_to(v) {
                prop_assert_eq!(path[0], source);
                prop_assert_eq!(*path.last().unwrap(), v);
                let len: f64 = path
                    .windows(2)
                    .map(|p| g.edge_weight(p[0], p[1]).unwrap())
                    .sum();
                prop_assert_eq!(len, d);
            }
        }
    }

    #[test]
    fn prop_matrix_symmetric((n, edges) in graph_strategy()) {
        let g = build(n, &edges);
        let dm = DistanceMatrix::from_graph(&g).unwrap();
        prop_assert!(dm.is_symmetric(1e-9));
    }

    #[test]
    fn prop_route_visits_reachable_once(
        (n, edges) in graph_strategy(),
        start in 0usize..6,
        dests in prop::collection::vec(0usize..6, 0..8),
    ) {
        let g = build(n, &edges);
        let start = start % n;
        let dests: Vec<String> = dests.into_iter().map(|d| code(d % n)).collect();
        let route = find_optimized_route(&g, &dests, &code(start)).unwrap();

        let from_start = shortest_paths(&g, start).unwrap();
        let distinct: BTreeSet<usize> = dests
            .iter()
            .map(|d| g.index_of(d).unwrap())
            .filter(|&i| i != start)
            .collect();
        let reachable: BTreeSet<usize> = distinct
            .iter()
            .copied()
            .filter(|&i| from_start.is_reachable(i))
            .collect();

        prop_assert_eq!(route.len(), 2 + reachable.len());
        prop_assert_eq!(route.stops().first(), Some(g.address_of(start).unwrap()));
        prop_assert_eq!(route.stops().last(), Some(g.address_of(start).unwrap()));

        let visited: Vec<usize> = route
            .destinations()
            .iter()
            .map(|l| g.index_of(l.code()).unwrap())
            .collect();
        let visited_set: BTreeSet<usize> = visited.iter().copied().collect();
        prop_assert_eq!(visited.len(), visited_set.len());
        prop_assert_eq!(&visited_set, &reachable);

        let unreached: BTreeSet<usize> = route
            .unreached()
            .iter()
            .map(|l| g.index_of(l.code()).unwrap())
            .collect();
        prop_assert_eq!(unreached.len() + reachable.len(), distinct.len());
        prop_assert!(route.total_distance().is_finite());
    }

    #[test]
    fn prop_precomputed_matches_on_demand(
        (n, edges) in graph_strategy(),
        dests in prop::collection::vec(0usize..6, 0..8),
    ) {
        let g = build(n, &edges);
        let dests: Vec<String> = dests.into_iter().map(|d| code(d % n)).collect();
        let on_demand = RouteOptimizer::new(&g).find_optimized_route(&dests, "L0").unwrap();
        let precomputed = RouteOptimizer::new(&g)
            .with_precomputed_distances()
            .unwrap()
            .find_optimized_route(&dests, "L0")
            .unwrap();
        prop_assert_eq!(on_demand, precomputed);
    }
}
