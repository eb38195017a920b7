//! Graph representations and the algorithms that run on them.
//!
//! - `basic`: the adjacency-matrix and adjacency-list graphs
//! - `access`: traversal scratch state shared by both

pub mod basic;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{DirectedWeightedGraph, Distance, UndirectedGraph, WeightedEdge};
