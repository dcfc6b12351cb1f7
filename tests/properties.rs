//! Property tests over random small graphs.

use proptest::prelude::*;
use u_graphcolor::coloring::{validate_coloring, GraphColoring};
use u_graphcolor::graph::{Graph, Node};
use u_graphcolor::{ExactColoring, GreedyColoring, WelshPowellColoring};

fn build(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new();
    let nodes: Vec<Node> = (0..n).map(|i| Node::new(format!("n{i}"))).collect();
    for node in &nodes {
        graph.add_node(node.clone()).unwrap();
    }
    for &(a, b) in pairs {
        let (a, b) = (a % n, b % n);
        if a != b {
            graph.add_edge(&nodes[a], &nodes[b]).unwrap();
        }
    }
    graph
}

fn small_graph() -> impl Strategy<Value = Graph> {
    (1usize..9).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..(n * 3)).prop_map(move |pairs| build(n, &pairs))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_solver_returns_a_complete_proper_coloring(graph in small_graph()) {
        let mut greedy = GreedyColoring::new(&graph).unwrap();
        let mut wp = WelshPowellColoring::new(&graph).unwrap();
        let mut exact = ExactColoring::new(&graph).unwrap();
        let solvers: [&mut dyn GraphColoring; 3] = [&mut greedy, &mut wp, &mut exact];
        for solver in solvers {
            let coloring = solver.color().unwrap().clone();
            prop_assert!(validate_coloring(&graph, &coloring).is_empty());
            prop_assert!(solver.validate(None));
            prop_assert_eq!(coloring.len(), graph.node_count());
        }
    }

    #[test]
    fn exact_never_uses_more_colors_than_heuristics(graph in small_graph()) {
        let mut greedy = GreedyColoring::new(&graph).unwrap();
        let mut wp = WelshPowellColoring::new(&graph).unwrap();
        let mut exact = ExactColoring::new(&graph).unwrap();
        greedy.color().unwrap();
        wp.color().unwrap();
        exact.color().unwrap();

        prop_assert!(exact.chromatic_count() <= greedy.chromatic_count());
        prop_assert!(exact.chromatic_count() <= wp.chromatic_count());
        prop_assert!(exact.chromatic_count() <= exact.upper_bound());
    }

    #[test]
    fn heuristics_respect_degree_bound(graph in small_graph()) {
        let mut greedy = GreedyColoring::new(&graph).unwrap();
        let mut wp = WelshPowellColoring::new(&graph).unwrap();
        greedy.color().unwrap();
        wp.color().unwrap();

        let bound = graph.max_degree() + 1;
        prop_assert!(greedy.chromatic_count() <= bound);
        prop_assert!(wp.chromatic_count() <= bound);
        prop_assert!(greedy.coloring().values().all(|&c| (1..=bound).contains(&c)));
        prop_assert!(wp.coloring().values().all(|&c| (1..=bound).contains(&c)));
    }

    #[test]
    fn exact_colors_are_contiguous_from_zero(graph in small_graph()) {
        let mut exact = ExactColoring::new(&graph).unwrap();
        exact.color().unwrap();
        let classes = exact.color_classes();
        let colors: Vec<usize> = classes.keys().copied().collect();
        let expected: Vec<usize> = (0..exact.chromatic_count()).collect();
        prop_assert_eq!(colors, expected);
    }

    #[test]
    fn repeated_runs_are_identical(graph in small_graph()) {
        let mut wp = WelshPowellColoring::new(&graph).unwrap();
        let first = wp.color().unwrap().clone();
        let second = wp.color().unwrap().clone();
        prop_assert_eq!(first, second);

        let mut exact = ExactColoring::new(&graph).unwrap();
        let first = exact.color().unwrap().clone();
        let second = exact.color().unwrap().clone();
        prop_assert_eq!(first, second);
    }
}
