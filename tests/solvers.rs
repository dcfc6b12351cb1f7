//! Cross-solver behavior on known graph families.

use std::collections::HashSet;

use u_graphcolor::coloring::{ColorBase, GraphColoring};
use u_graphcolor::graph::{generators, Graph, Node};
use u_graphcolor::welsh_powell::{first_available_color, sorted_nodes_by_degree};
use u_graphcolor::{ColoringError, ExactColoring, GreedyColoring, WelshPowellColoring};

struct Counts {
    greedy: usize,
    welsh_powell: usize,
    exact: usize,
}

fn counts(graph: &Graph) -> Counts {
    let mut greedy = GreedyColoring::new(graph).unwrap();
    let mut wp = WelshPowellColoring::new(graph).unwrap();
    let mut exact = ExactColoring::new(graph).unwrap();
    greedy.color().unwrap();
    wp.color().unwrap();
    exact.color().unwrap();
    assert!(greedy.validate(None));
    assert!(wp.validate(None));
    assert!(exact.validate(None));
    Counts {
        greedy: greedy.chromatic_count(),
        welsh_powell: wp.chromatic_count(),
        exact: exact.chromatic_count(),
    }
}

#[test]
fn complete_graphs_need_n_colors_from_every_solver() {
    for n in 1..=7 {
        let (g, _) = generators::complete(n).unwrap();
        let c = counts(&g);
        assert_eq!(c.greedy, n);
        assert_eq!(c.welsh_powell, n);
        assert_eq!(c.exact, n);
    }
}

#[test]
fn cycles_by_parity() {
    for n in 3..=11 {
        let (g, _) = generators::cycle(n).unwrap();
        let expected = if n % 2 == 0 { 2 } else { 3 };
        assert_eq!(counts(&g).exact, expected, "C{n}");
    }
}

#[test]
fn stars_are_two_colored() {
    for n in 2..=9 {
        let (g, nodes) = generators::star(n).unwrap();
        let mut wp = WelshPowellColoring::new(&g).unwrap();
        let mut exact = ExactColoring::new(&g).unwrap();
        wp.color().unwrap();
        exact.color().unwrap();
        for solver in [&wp as &dyn GraphColoring, &exact] {
            assert_eq!(solver.chromatic_count(), 2);
            let hub = solver.coloring()[&nodes[0]];
            let leaves: HashSet<usize> = nodes[1..].iter().map(|n| solver.coloring()[n]).collect();
            assert_eq!(leaves.len(), 1);
            assert!(!leaves.contains(&hub));
        }
    }
}

#[test]
fn edgeless_graphs_use_one_color() {
    for n in 1..=6 {
        let (g, _) = generators::empty(n).unwrap();
        let c = counts(&g);
        assert_eq!((c.greedy, c.welsh_powell, c.exact), (1, 1, 1));
    }
}

#[test]
fn empty_graph_handling_differs_by_solver() {
    let g = Graph::new();
    let mut exact = ExactColoring::new(&g).unwrap();
    assert!(exact.color().unwrap().is_empty());
    assert_eq!(exact.chromatic_count(), 0);

    assert!(matches!(
        GreedyColoring::new(&g),
        Err(ColoringError::InvalidInput(_))
    ));
    assert!(matches!(
        WelshPowellColoring::new(&g),
        Err(ColoringError::InvalidInput(_))
    ));
}

#[test]
fn exact_is_a_lower_bound_on_mixed_families() {
    let graphs = [
        generators::petersen().unwrap().0,
        generators::wheel(8).unwrap().0,
        generators::complete_bipartite(4, 3).unwrap().0,
        generators::path(9).unwrap().0,
        generators::random(11, 0.35, 42).unwrap().0,
        generators::random(11, 0.6, 7).unwrap().0,
    ];
    for g in &graphs {
        let c = counts(g);
        assert!(c.exact <= c.greedy, "{g}: exact {} > greedy {}", c.exact, c.greedy);
        assert!(
            c.exact <= c.welsh_powell,
            "{g}: exact {} > welsh-powell {}",
            c.exact,
            c.welsh_powell
        );
    }
}

#[test]
fn petersen_graph() {
    let (g, _) = generators::petersen().unwrap();
    let c = counts(&g);
    assert_eq!(c.exact, 3);
    assert!(c.greedy >= 3);
    assert!(c.welsh_powell >= 3);
}

#[test]
fn color_bases_are_reported() {
    let (g, _) = generators::path(2).unwrap();
    let mut greedy = GreedyColoring::new(&g).unwrap();
    let mut exact = ExactColoring::new(&g).unwrap();
    greedy.color().unwrap();
    exact.color().unwrap();

    assert_eq!(greedy.color_base(), ColorBase::One);
    assert_eq!(exact.color_base(), ColorBase::Zero);
    assert_eq!(greedy.color_classes().keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(exact.color_classes().keys().copied().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn degree_sort_on_small_star() {
    let mut g = Graph::new();
    let center = Node::new("center");
    g.add_node(center.clone()).unwrap();
    for id in ["leaf2", "leaf3", "leaf1"] {
        let leaf = Node::new(id);
        g.add_node(leaf.clone()).unwrap();
        g.add_edge(&center, &leaf).unwrap();
    }
    let order: Vec<String> = sorted_nodes_by_degree(&g)
        .unwrap()
        .into_iter()
        .map(|n| n.id.to_string())
        .collect();
    assert_eq!(order, ["center", "leaf1", "leaf2", "leaf3"]);
}

#[test]
fn first_available_color_examples() {
    assert_eq!(first_available_color(&HashSet::from([1, 2, 4])), 3);
    assert_eq!(first_available_color(&HashSet::new()), 1);
    assert_eq!(first_available_color(&HashSet::from([1, 2, 3])), 4);
}

#[test]
fn timing_is_recorded_per_run() {
    let (g, _) = generators::complete(6).unwrap();
    let mut exact = ExactColoring::new(&g).unwrap();
    assert_eq!(exact.elapsed_time(), 0.0);
    exact.color().unwrap();
    let first = exact.elapsed_time();
    assert!(first >= 0.0);
    exact.color().unwrap();
    assert_eq!(exact.runs(), 2);
}
