//! Cross-checks both graphs against petgraph on random inputs.

use adjacency::{DirectedWeightedGraph, Distance, UndirectedGraph};
use petgraph::algo::{connected_components, dijkstra, is_cyclic_directed, is_cyclic_undirected};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

const N: usize = 10;

fn to_digraph(g: &DirectedWeightedGraph<u32>) -> DiGraph<(), u32> {
    let mut pg = DiGraph::with_capacity(g.vertex_count(), g.edge_count());
    for _ in 0..g.vertex_count() {
        pg.add_node(());
    }
    for edge in g.get_edges() {
        pg.add_edge(NodeIndex::new(edge.src), NodeIndex::new(edge.dst), edge.weight);
    }
    pg
}

fn to_ungraph(g: &UndirectedGraph<u8>) -> UnGraph<u8, ()> {
    let vertices = g.get_vertices();
    let mut pg = UnGraph::with_capacity(vertices.len(), g.edge_count());
    for &v in &vertices {
        pg.add_node(v);
    }
    let index = |label: &u8| {
        let pos = vertices.iter().position(|v| v == label).unwrap();
        NodeIndex::new(pos)
    };
    for (u, v) in g.get_edges() {
        pg.add_edge(index(&u), index(&v), ());
    }
    pg
}

proptest! {
    #[test]
    fn dijkstra_agrees(
        edges in proptest::collection::vec((0..N, 0..N, 1u32..100), 0..40),
        source in 0..N,
    ) {
        let mut g = DirectedWeightedGraph::from_edges(edges);
        while g.vertex_count() < N {
            g.add_vertex();
        }
        let pg = to_digraph(&g);
        let expected = dijkstra(&pg, NodeIndex::new(source), None, |e| *e.weight());

        let ours = g.dijkstra(source);
        for (v, d) in ours.into_iter().enumerate() {
            prop_assert_eq!(d.finite(), expected.get(&NodeIndex::new(v)).copied(), "vertex {}", v);
        }
    }

    #[test]
    fn directed_cycles_agree(edges in proptest::collection::vec((0..N, 0..N, 1u32..5), 0..15)) {
        let g = DirectedWeightedGraph::from_edges(edges);
        prop_assert_eq!(g.has_cycle(), is_cyclic_directed(&to_digraph(&g)));
    }

    #[test]
    fn undirected_cycles_and_components_agree(
        edges in proptest::collection::vec((0u8..12, 0u8..12), 0..14),
        isolated in proptest::collection::vec(0u8..16, 0..4),
    ) {
        let mut g: UndirectedGraph<u8> = edges.into_iter().collect();
        for v in isolated {
            g.add_vertex(v);
        }
        let pg = to_ungraph(&g);
        prop_assert_eq!(g.has_cycle(), is_cyclic_undirected(&pg));
        prop_assert_eq!(g.count_connected_components(), connected_components(&pg));
    }
}

#[test]
fn dijkstra_agrees_on_the_sample_graph() {
    let g = DirectedWeightedGraph::<u32>::from_edges([
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ]);
    let pg = to_digraph(&g);
    for source in 0..g.vertex_count() {
        let expected = dijkstra(&pg, NodeIndex::new(source), None, |e| *e.weight());
        let ours: Vec<Option<u32>> = g.dijkstra(source).into_iter().map(Distance::finite).collect();
        let theirs: Vec<Option<u32>> = (0..g.vertex_count())
            .map(|v| expected.get(&NodeIndex::new(v)).copied())
            .collect();
        assert_eq!(ours, theirs, "source {source}");
    }
}
