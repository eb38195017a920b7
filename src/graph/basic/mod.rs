//! Basic graph implementations.
//!
//! This module contains the two textbook representations and the traversal
//! kernels they share.

pub mod algorithms;
pub mod directed_graph;
pub mod undirected_graph;

pub use algorithms::Distance;
pub use directed_graph::{DirectedWeightedGraph, WeightedEdge};
pub use undirected_graph::UndirectedGraph;
