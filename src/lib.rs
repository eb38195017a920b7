//! # `adjacency` - Textbook Graphs
//!
//! Two classic graph representations with the algorithms usually taught
//! alongside them:
//!
//! - [`DirectedWeightedGraph`]: dense adjacency matrix over vertex indices,
//!   strictly positive integer weights, Dijkstra shortest paths.
//! - [`UndirectedGraph`]: labeled adjacency list, vertex removal, connected
//!   component counting.
//!
//! Both offer depth-first and breadth-first traversal, path validation and
//! cycle detection.
//!
//! ## Error Handling
//!
//! Every mutator comes in two flavors. The plain one is permissive: an invalid
//! index, an unknown label, a self-loop or a non-positive weight is logged at
//! `debug` level through `tracing` and otherwise ignored, and traversals from an
//! invalid start return an empty order. The `try_*` flavor reports the same
//! conditions as a [`GraphError`].
//!
//! ## Determinism
//!
//! Traversals visit neighbors in ascending order (index for the matrix graph,
//! label for the list graph), so every operation returns the same result for
//! the same sequence of calls. Depth-first algorithms run on explicit stacks,
//! so deep graphs do not exhaust the call stack.
//!
//! ## Features
//!
//! - `parallel`: computes [`DirectedWeightedGraph::all_pairs_dijkstra`] rows on
//!   the rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use adjacency::{DirectedWeightedGraph, Distance, UndirectedGraph};
//!
//! let g = DirectedWeightedGraph::from_edges([(0, 1, 10), (1, 2, 5), (0, 2, 20)]);
//! assert_eq!(
//!     g.dijkstra(0),
//!     vec![Distance::Finite(0), Distance::Finite(10), Distance::Finite(15)]
//! );
//! assert!(!g.has_cycle());
//!
//! let mut u = UndirectedGraph::<String>::from_edges([("A", "B"), ("C", "D")]);
//! assert_eq!(u.count_connected_components(), 2);
//! u.add_edge("B", "C");
//! assert_eq!(u.bfs("A", None), vec!["A", "B", "C", "D"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{DirectedWeightedGraph, Distance, UndirectedGraph, WeightedEdge};
