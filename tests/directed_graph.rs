use adjacency::{DirectedWeightedGraph, Distance, GraphError, WeightedEdge};

const EDGES: [(usize, usize, i64); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

fn distances(values: &[Option<i64>]) -> Vec<Distance<i64>> {
    values
        .iter()
        .map(|v| v.map_or(Distance::Infinite, Distance::Finite))
        .collect()
}

fn triples(g: &DirectedWeightedGraph) -> Vec<(usize, usize, i64)> {
    g.get_edges().into_iter().map(Into::into).collect()
}

#[test]
fn build_by_hand_matches_from_edges() {
    let mut g = DirectedWeightedGraph::<i64>::new();
    assert_eq!(g.to_string(), "EMPTY GRAPH\n");
    for _ in 0..5 {
        g.add_vertex();
    }
    for (src, dst, weight) in EDGES {
        g.add_edge(src, dst, weight);
    }
    assert_eq!(g, DirectedWeightedGraph::from_edges(EDGES));
    assert_eq!(
        g.to_string(),
        "GRAPH (5 vertices):\n   | 0  1  2  3  4\n------------------\n 0 | 0 10  0  0  0\n 1 | 0  0  0  0 15\n 2 | 0 23  0  0  0\n 3 | 0  5  7  0  0\n 4 |12  0  0  3  0\n"
    );
}

#[test]
fn edges_are_row_major() {
    let g = DirectedWeightedGraph::from_edges(EDGES);
    assert_eq!(
        triples(&g),
        vec![
            (0, 1, 10),
            (1, 4, 15),
            (2, 1, 23),
            (3, 1, 5),
            (3, 2, 7),
            (4, 0, 12),
            (4, 3, 3),
        ]
    );
    assert_eq!(g.get_vertices(), vec![0, 1, 2, 3, 4]);
    assert!(DirectedWeightedGraph::<i64>::new().get_edges().is_empty());
}

#[test]
fn traversals_from_every_start() {
    let g = DirectedWeightedGraph::from_edges(EDGES);
    let expected: [(&[usize], &[usize]); 5] = [
        (&[0, 1, 4, 3, 2], &[0, 1, 4, 3, 2]),
        (&[1, 4, 0, 3, 2], &[1, 4, 0, 3, 2]),
        (&[2, 1, 4, 0, 3], &[2, 1, 4, 0, 3]),
        (&[3, 1, 4, 0, 2], &[3, 1, 2, 4, 0]),
        (&[4, 0, 1, 3, 2], &[4, 0, 3, 1, 2]),
    ];
    for (start, (dfs, bfs)) in expected.into_iter().enumerate() {
        assert_eq!(g.dfs(start, None), dfs, "dfs from {start}");
        assert_eq!(g.bfs(start, None), bfs, "bfs from {start}");
    }
}

#[test]
fn bfs_stops_at_end_but_dfs_does_not() {
    let g = DirectedWeightedGraph::from_edges(EDGES);
    assert_eq!(g.bfs(3, Some(2)), vec![3, 1, 2]);
    assert_eq!(g.dfs(3, Some(2)), vec![3, 1, 4, 0, 2]);
    assert_eq!(g.bfs(3, Some(3)), vec![3]);

    // 2 is no longer reachable, so the order comes back whole.
    let mut g = g;
    g.remove_edge(3, 2);
    assert_eq!(g.bfs(0, Some(2)), vec![0, 1, 4, 3]);
}

#[test]
fn cycle_toggles_with_edges() {
    let mut g = DirectedWeightedGraph::from_edges(EDGES);
    let mut observed = Vec::new();

    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        g.remove_edge(src, dst);
        observed.push(g.has_cycle());
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        g.add_edge(src, dst, 1);
        observed.push(g.has_cycle());
    }

    assert_eq!(observed, vec![true, true, false, false, false, false, true]);
    assert_eq!(
        triples(&g),
        vec![
            (0, 1, 10),
            (1, 3, 1),
            (1, 4, 15),
            (2, 1, 23),
            (2, 3, 1),
            (4, 0, 1),
            (4, 3, 1),
        ]
    );
}

#[test]
fn empty_graph_has_no_cycle() {
    assert!(!DirectedWeightedGraph::<i64>::new().has_cycle());
    assert!(!DirectedWeightedGraph::<i64>::with_vertices(3).has_cycle());
}

#[test]
fn cycles_found_in_any_component() {
    let mut g = DirectedWeightedGraph::<u32>::with_vertices(6);
    g.add_edge(0, 1, 1);
    g.add_edge(1, 2, 1);
    assert!(!g.has_cycle());
    g.add_edge(4, 5, 1);
    g.add_edge(5, 3, 1);
    g.add_edge(3, 4, 1);
    assert!(g.has_cycle());
}

#[test]
fn dijkstra_before_and_after_removal() {
    let mut g = DirectedWeightedGraph::from_edges(EDGES);
    let before = [
        [Some(0), Some(10), Some(35), Some(28), Some(25)],
        [Some(27), Some(0), Some(25), Some(18), Some(15)],
        [Some(50), Some(23), Some(0), Some(41), Some(38)],
        [Some(32), Some(5), Some(7), Some(0), Some(20)],
        [Some(12), Some(8), Some(10), Some(3), Some(0)],
    ];
    for (src, row) in before.iter().enumerate() {
        assert_eq!(g.dijkstra(src), distances(row), "source {src}");
    }

    g.remove_edge(4, 3);
    let after = [
        [Some(0), Some(10), None, None, Some(25)],
        [Some(27), Some(0), None, None, Some(15)],
        [Some(50), Some(23), Some(0), None, Some(38)],
        [Some(32), Some(5), Some(7), Some(0), Some(20)],
        [Some(12), Some(22), None, None, Some(0)],
    ];
    for (src, row) in after.iter().enumerate() {
        assert_eq!(g.dijkstra(src), distances(row), "source {src}");
    }
    assert_eq!(
        g.all_pairs_dijkstra(),
        after.iter().map(|row| distances(row)).collect::<Vec<_>>()
    );
}

#[test]
fn unreachable_distances_render_as_infinity() {
    let g = DirectedWeightedGraph::<i64>::with_vertices(2);
    let dist: Vec<f64> = g.dijkstra(0).into_iter().map(Distance::to_f64).collect();
    assert_eq!(dist, vec![0.0, f64::INFINITY]);
}

#[test]
fn strict_api_reports_what_permissive_api_swallows() {
    let mut g = DirectedWeightedGraph::from_edges(EDGES);
    assert_eq!(
        g.try_dfs(5, None),
        Err(GraphError::VertexOutOfRange { vertex: 5, vertex_count: 5 })
    );
    assert_eq!(g.try_add_edge(2, 2, 4), Err(GraphError::SelfLoop { vertex: "2".into() }));
    assert_eq!(
        g.try_add_edge(2, 0, -1),
        Err(GraphError::NonPositiveWeight { src: 2, dst: 0 })
    );
    assert_eq!(g.try_remove_edge(0, 1), Ok(true));
    assert_eq!(g.weight(0, 1), None);
    assert_eq!(
        g.get_edges().first(),
        Some(&WeightedEdge { src: 1, dst: 4, weight: 15 })
    );
}

#[test]
fn edges_serialize_as_plain_records() {
    let g = DirectedWeightedGraph::from_edges([(0, 1, 7i64)]);
    let json = serde_json::to_string(&g.get_edges()).unwrap();
    assert_eq!(json, r#"[{"src":0,"dst":1,"weight":7}]"#);

    let edges: Vec<WeightedEdge<i64>> = serde_json::from_str(&json).unwrap();
    let rebuilt = DirectedWeightedGraph::<i64>::from_edges(edges.into_iter().map(Into::into));
    assert_eq!(rebuilt, g);
}
