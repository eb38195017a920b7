//! A directed, weighted graph stored as a dense adjacency matrix.
//!
//! Vertices are dense indices `0..n` handed out in creation order and are never
//! removed. Cell `[i][j]` of the matrix holds the weight of the edge `i -> j`;
//! zero is the "no edge" sentinel, so every stored weight is strictly positive.
//!
//! The plain mutators are permissive: an invalid index, a self-loop or a
//! non-positive weight is logged and ignored. Each of them has a `try_*`
//! counterpart that reports the rejection as a [`GraphError`] instead.

use core::fmt;

use num_traits::PrimInt;
use serde::{Deserialize, Serialize};

use crate::collections::SquareMatrix;
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::algorithms::{self, Bfs, Distance};

/// A directed edge together with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// Tail of the edge.
    pub src: usize,
    /// Head of the edge.
    pub dst: usize,
    /// Strictly positive weight.
    pub weight: W,
}

impl<W> From<(usize, usize, W)> for WeightedEdge<W> {
    fn from((src, dst, weight): (usize, usize, W)) -> Self {
        Self { src, dst, weight }
    }
}

impl<W> From<WeightedEdge<W>> for (usize, usize, W) {
    fn from(edge: WeightedEdge<W>) -> Self {
        (edge.src, edge.dst, edge.weight)
    }
}

/// A directed weighted graph backed by an adjacency matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(n^2)\) | Re-lays the matrix one row/column larger |
/// | `add_edge` / `remove_edge` | \(O(1)\) | Direct cell write |
/// | `get_edges` | \(O(n^2)\) | Row-major scan |
/// | `dfs` / `bfs` / `has_cycle` | \(O(n^2)\) | Each row is scanned once |
/// | `dijkstra` | \(O(n^2 + m \log m)\) | Binary heap, stale entries skipped |
#[derive(Clone, PartialEq, Eq)]
pub struct DirectedWeightedGraph<W = i64> {
    adj_matrix: SquareMatrix<W>,
}

impl<W: PrimInt> DirectedWeightedGraph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adj_matrix: SquareMatrix::default(),
        }
    }

    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Fails with [`GraphError::CapacityOverflow`] if the matrix cannot be
    /// allocated.
    pub fn try_with_vertices(vertex_count: usize) -> Result<Self> {
        SquareMatrix::filled(vertex_count, W::zero())
            .map(|adj_matrix| Self { adj_matrix })
            .ok_or(GraphError::CapacityOverflow { vertex_count })
    }

    /// Creates a graph with `vertex_count` vertices and no edges; an
    /// unallocatable size yields an empty graph.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self::try_with_vertices(vertex_count).unwrap_or_else(|err| {
            tracing::debug!(%err, "with_vertices fell back to an empty graph");
            Self::new()
        })
    }

    /// Builds a graph from `(src, dst, weight)` triples.
    ///
    /// Allocates `max(src, dst) + 1` vertices, then adds every triple with
    /// [`add_edge`](Self::add_edge), so invalid triples are skipped silently.
    /// Triples whose endpoints would need an unallocatable matrix are skipped
    /// the same way, and the graph is sized for the remaining ones.
    pub fn from_edges<E>(edges: E) -> Self
    where
        E: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let mut sizes: Vec<usize> = edges
            .iter()
            .filter_map(|&(src, dst, _)| src.max(dst).checked_add(1))
            .collect();
        sizes.sort_unstable();
        sizes.dedup();

        let mut graph = Self::new();
        while let Some(size) = sizes.pop() {
            match Self::try_with_vertices(size) {
                Ok(sized) => {
                    graph = sized;
                    break;
                }
                Err(err) => tracing::debug!(%err, "from_edges skips oversized triples"),
            }
        }
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj_matrix.side()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj_matrix.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj_matrix
            .rows()
            .map(|row| row.iter().filter(|w| !w.is_zero()).count())
            .sum()
    }

    /// Returns `true` if `vertex` is a valid index.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the weight of `src -> dst`, or `None` if there is no such edge.
    pub fn weight(&self, src: usize, dst: usize) -> Option<W> {
        self.adj_matrix
            .get(src, dst)
            .copied()
            .filter(|w| !w.is_zero())
    }

    /// Returns `true` if the edge `src -> dst` exists.
    #[inline]
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.weight(src, dst).is_some()
    }

    /// Returns the out-edges of `vertex` as `(dst, weight)` in ascending `dst`
    /// order. Yields nothing for an out-of-range vertex.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.adj_matrix
            .row(vertex)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(dst, &w)| (dst, w))
    }

    fn neighbor_indices(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(vertex).map(|(dst, _)| dst)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    fn check_endpoints(&self, src: usize, dst: usize) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if src == dst {
            return Err(GraphError::self_loop(&src));
        }
        Ok(())
    }

    /// Appends a vertex and returns the new vertex count.
    ///
    /// Every existing row gains a zero cell and an all-zero row is appended, so
    /// existing weights keep their positions.
    pub fn try_add_vertex(&mut self) -> Result<usize> {
        self.adj_matrix
            .grow_with(W::zero())
            .ok_or(GraphError::CapacityOverflow {
                vertex_count: self.vertex_count().saturating_add(1),
            })
    }

    /// Appends a vertex and returns the new vertex count; if the matrix cannot
    /// grow, the graph is left as is and the old count is returned.
    pub fn add_vertex(&mut self) -> usize {
        self.try_add_vertex().unwrap_or_else(|err| {
            tracing::warn!(%err, "add_vertex ignored");
            self.vertex_count()
        })
    }

    /// Sets the weight of `src -> dst`, overwriting any previous weight.
    pub fn try_add_edge(&mut self, src: usize, dst: usize, weight: W) -> Result<()> {
        self.check_endpoints(src, dst)?;
        if weight <= W::zero() {
            return Err(GraphError::NonPositiveWeight { src, dst });
        }
        if let Some(cell) = self.adj_matrix.get_mut(src, dst) {
            *cell = weight;
        }
        Ok(())
    }

    /// Sets the weight of `src -> dst`; invalid input is ignored.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) {
        if let Err(err) = self.try_add_edge(src, dst, weight) {
            tracing::debug!(%err, "add_edge ignored");
        }
    }

    /// Removes `src -> dst`, returning whether an edge was present.
    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> Result<bool> {
        self.check_endpoints(src, dst)?;
        Ok(self
            .adj_matrix
            .get_mut(src, dst)
            .is_some_and(|cell| !core::mem::replace(cell, W::zero()).is_zero()))
    }

    /// Removes `src -> dst`; invalid input is ignored.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if let Err(err) = self.try_remove_edge(src, dst) {
            tracing::debug!(%err, "remove_edge ignored");
        }
    }

    /// Returns the vertex indices `0..n`.
    pub fn get_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count()).collect()
    }

    /// Returns every edge in row-major order.
    pub fn get_edges(&self) -> Vec<WeightedEdge<W>> {
        (0..self.vertex_count())
            .flat_map(|src| {
                self.neighbors(src)
                    .map(move |(dst, weight)| WeightedEdge { src, dst, weight })
            })
            .collect()
    }

    /// Returns `true` if every step of `path` follows an existing edge.
    ///
    /// The empty path is valid; a single vertex is valid iff it exists.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        match path {
            [] => true,
            [only] => self.contains_vertex(*only),
            _ => path
                .windows(2)
                .all(|step| self.has_edge(step[0], step[1])),
        }
    }

    /// Depth-first order from `start`, following out-edges in ascending order.
    ///
    /// The whole reachable set is returned; `end` is validated but does not
    /// cut the traversal short.
    pub fn try_dfs(&self, start: usize, end: Option<usize>) -> Result<Vec<usize>> {
        self.check_vertex(start)?;
        if let Some(end) = end {
            self.check_vertex(end)?;
        }
        let mut visited = VisitedFlags::new(self.vertex_count());
        let mut order = Vec::new();
        algorithms::dfs_preorder_into(
            &mut visited,
            start,
            |u| self.neighbor_indices(u),
            &mut order,
        );
        Ok(order)
    }

    /// Depth-first order from `start`; empty if `start` is out of range.
    ///
    /// An `end` that is not a vertex is ignored.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        self.try_dfs(start, end.filter(|&e| self.contains_vertex(e)))
            .unwrap_or_else(|err| {
                tracing::debug!(%err, "dfs start rejected");
                Vec::new()
            })
    }

    /// Breadth-first order from `start`, following out-edges in ascending order.
    ///
    /// If `end` is reached the order stops right after it.
    pub fn try_bfs(&self, start: usize, end: Option<usize>) -> Result<Vec<usize>> {
        self.check_vertex(start)?;
        if let Some(end) = end {
            self.check_vertex(end)?;
        }
        let mut order = Bfs::new(self.vertex_count(), start, |u| {
            Some(self.neighbor_indices(u))
        })
        .collect_checked()
        .unwrap_or_default();
        if let Some(end) = end {
            algorithms::truncate_after(&mut order, &end);
        }
        Ok(order)
    }

    /// Breadth-first order from `start`; empty if `start` is out of range.
    ///
    /// An `end` that is never reached leaves the order untouched.
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        self.try_bfs(start, end.filter(|&e| self.contains_vertex(e)))
            .unwrap_or_else(|err| {
                tracing::debug!(%err, "bfs start rejected");
                Vec::new()
            })
    }

    /// Returns `true` if some edge leads back to a vertex on the active DFS path.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_directed_cycle(self.vertex_count(), |u| self.neighbor_indices(u))
    }

    /// Shortest distances from `source` to every vertex.
    pub fn try_dijkstra(&self, source: usize) -> Result<Vec<Distance<W>>> {
        self.check_vertex(source)?;
        Ok(algorithms::dijkstra(self.vertex_count(), source, |u| {
            self.neighbors(u)
        }))
    }

    /// Shortest distances from `source`; all `Infinite` if `source` is out of
    /// range.
    pub fn dijkstra(&self, source: usize) -> Vec<Distance<W>> {
        self.try_dijkstra(source).unwrap_or_else(|err| {
            tracing::debug!(%err, "dijkstra source rejected");
            vec![Distance::Infinite; self.vertex_count()]
        })
    }

    /// Shortest distances between every ordered pair; row `i` equals
    /// `dijkstra(i)`.
    #[cfg(not(feature = "parallel"))]
    pub fn all_pairs_dijkstra(&self) -> Vec<Vec<Distance<W>>> {
        (0..self.vertex_count()).map(|src| self.dijkstra(src)).collect()
    }
}

#[cfg(feature = "parallel")]
impl<W: PrimInt + Send + Sync> DirectedWeightedGraph<W> {
    /// Shortest distances between every ordered pair; row `i` equals
    /// `dijkstra(i)`. Rows are computed on the rayon pool.
    pub fn all_pairs_dijkstra(&self) -> Vec<Vec<Distance<W>>> {
        use rayon::prelude::*;

        (0..self.vertex_count())
            .into_par_iter()
            .map(|src| self.dijkstra(src))
            .collect()
    }
}

impl<W: PrimInt> Default for DirectedWeightedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PrimInt> FromIterator<(usize, usize, W)> for DirectedWeightedGraph<W> {
    fn from_iter<T: IntoIterator<Item = (usize, usize, W)>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

impl<W: PrimInt + fmt::Display> fmt::Display for DirectedWeightedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        if n == 0 {
            return f.write_str("EMPTY GRAPH\n");
        }
        writeln!(f, "GRAPH ({n} vertices):")?;
        f.write_str("   |")?;
        let header: Vec<String> = (0..n).map(|i| format!("{i:2}")).collect();
        writeln!(f, "{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.adj_matrix.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{w:2}")).collect();
            writeln!(f, "{i:2} |{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl<W: PrimInt + fmt::Debug> fmt::Debug for DirectedWeightedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedWeightedGraph")
            .field("vertex_count", &self.vertex_count())
            .field("edges", &self.get_edges())
            .finish()
    }
}
