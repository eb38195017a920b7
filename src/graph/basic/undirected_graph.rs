//! An undirected, unweighted graph stored as a labeled adjacency list.
//!
//! Vertices are identified by labels (any `Clone + Eq + Hash + Ord` type,
//! `String` by default). The adjacency list is an insertion-ordered map from a
//! label to the insertion-ordered set of its neighbors; every edge is stored on
//! both endpoints, so `u` is a neighbor of `v` iff `v` is a neighbor of `u`.
//!
//! Traversals visit neighbors in ascending label order. Insertion order is kept
//! only for listing (`get_vertices`, `get_edges`, `Display`).
//!
//! Lookups accept any borrowed form of the label, like the standard maps:
//! a `UndirectedGraph<String>` can be queried with `&str`.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::algorithms::{self, Bfs};

/// An undirected graph backed by a symmetric adjacency list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Hash insert |
/// | `add_edge` / `remove_edge` | \(O(\text{degree})\) | Order-preserving set updates |
/// | `remove_vertex` | \(O(n + m)\) | Shifts later entries to keep insertion order |
/// | `dfs` / `bfs` | \(O(n + m \log m)\) | Neighbor lists are sorted per visit |
/// | `count_connected_components` | \(O(n + m \log m)\) | One DFS per component |
#[derive(Clone)]
pub struct UndirectedGraph<L = String> {
    adj_list: IndexMap<L, IndexSet<L>>,
}

impl<L> UndirectedGraph<L>
where
    L: Clone + Eq + Hash + Ord + fmt::Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adj_list: IndexMap::new(),
        }
    }

    /// Builds a graph by adding every `(u, v)` pair in order.
    ///
    /// Self-loops and duplicate edges are skipped, as with
    /// [`add_edge`](Self::add_edge).
    pub fn from_edges<E, A>(edges: E) -> Self
    where
        E: IntoIterator<Item = (A, A)>,
        A: Into<L>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj_list.is_empty()
    }

    /// Returns the number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.adj_list.values().map(IndexSet::len).sum::<usize>() / 2
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adj_list.contains_key(vertex)
    }

    /// Returns `true` if `u` and `v` are adjacent.
    pub fn has_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adj_list
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Returns the neighbors of `vertex` in insertion order.
    pub fn neighbors<Q>(&self, vertex: &Q) -> impl Iterator<Item = &L> + '_
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adj_list.get(vertex).into_iter().flatten()
    }

    /// Returns the number of neighbors of `vertex` (zero if absent).
    pub fn degree<Q>(&self, vertex: &Q) -> usize
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adj_list.get(vertex).map_or(0, IndexSet::len)
    }

    /// Adds `vertex` with no neighbors.
    ///
    /// Returns `false` (and keeps the existing edges) if it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<L>) -> bool {
        let vertex = vertex.into();
        if self.adj_list.contains_key(&vertex) {
            return false;
        }
        self.adj_list.insert(vertex, IndexSet::new());
        true
    }

    /// Connects `u` and `v`, creating missing endpoints.
    ///
    /// Returns `Ok(false)` if the edge already existed.
    pub fn try_add_edge(&mut self, u: impl Into<L>, v: impl Into<L>) -> Result<bool> {
        let (u, v) = (u.into(), v.into());
        if u == v {
            return Err(GraphError::self_loop(&u));
        }
        if self.has_edge(&u, &v) || self.has_edge(&v, &u) {
            return Ok(false);
        }
        self.adj_list.entry(u.clone()).or_default().insert(v.clone());
        self.adj_list.entry(v).or_default().insert(u);
        Ok(true)
    }

    /// Connects `u` and `v`; self-loops are ignored.
    pub fn add_edge(&mut self, u: impl Into<L>, v: impl Into<L>) {
        if let Err(err) = self.try_add_edge(u, v) {
            tracing::debug!(%err, "add_edge ignored");
        }
    }

    /// Disconnects `u` and `v`, returning whether an edge was removed.
    pub fn try_remove_edge<Q>(&mut self, u: &Q, v: &Q) -> Result<bool>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        for endpoint in [u, v] {
            if !self.adj_list.contains_key(endpoint) {
                return Err(GraphError::unknown(&endpoint));
            }
        }
        let mut removed = false;
        if let Some(neighbors) = self.adj_list.get_mut(u) {
            removed |= neighbors.shift_remove(v);
        }
        if let Some(neighbors) = self.adj_list.get_mut(v) {
            removed |= neighbors.shift_remove(u);
        }
        Ok(removed)
    }

    /// Disconnects `u` and `v`; unknown endpoints are ignored.
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q)
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        if let Err(err) = self.try_remove_edge(u, v) {
            tracing::debug!(%err, "remove_edge ignored");
        }
    }

    /// Removes `vertex` and every edge touching it.
    pub fn try_remove_vertex<Q>(&mut self, vertex: &Q) -> Result<()>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        let neighbors = self
            .adj_list
            .shift_remove(vertex)
            .ok_or_else(|| GraphError::unknown(&vertex))?;
        for neighbor in &neighbors {
            if let Some(back) = self.adj_list.get_mut(neighbor) {
                back.shift_remove(vertex);
            }
        }
        Ok(())
    }

    /// Removes `vertex` and every edge touching it; unknown vertices are ignored.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q)
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        if let Err(err) = self.try_remove_vertex(vertex) {
            tracing::debug!(%err, "remove_vertex ignored");
        }
    }

    /// Returns the vertex labels in insertion order.
    pub fn get_vertices(&self) -> Vec<L> {
        self.adj_list.keys().cloned().collect()
    }

    /// Returns every edge once, listed at its earlier-inserted endpoint.
    pub fn get_edges(&self) -> Vec<(L, L)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (i, (u, neighbors)) in self.adj_list.iter().enumerate() {
            for v in neighbors {
                if self.adj_list.get_index_of(v).is_some_and(|j| j > i) {
                    edges.push((u.clone(), v.clone()));
                }
            }
        }
        edges
    }

    /// Returns `true` if `path` walks along existing edges.
    ///
    /// The empty path is valid; a single vertex is valid iff it exists.
    pub fn is_valid_path<'q, Q, P>(&self, path: P) -> bool
    where
        P: IntoIterator<Item = &'q Q>,
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'q,
    {
        let mut prev: Option<&IndexSet<L>> = None;
        for vertex in path {
            let Some(neighbors) = self.adj_list.get(vertex) else {
                return false;
            };
            if prev.is_some_and(|p| !p.contains(vertex)) {
                return false;
            }
            prev = Some(neighbors);
        }
        true
    }

    /// Neighbor positions of the vertex at position `u`, by ascending label.
    fn sorted_neighbor_indices(&self, u: usize) -> Option<Vec<usize>> {
        let (_, neighbors) = self.adj_list.get_index(u)?;
        let mut labels: Vec<&L> = neighbors.iter().collect();
        labels.sort_unstable();
        labels
            .into_iter()
            .map(|label| self.adj_list.get_index_of(label))
            .collect()
    }

    fn label_at(&self, idx: usize) -> Option<L> {
        self.adj_list.get_index(idx).map(|(label, _)| label.clone())
    }

    fn to_labels(&self, order: Vec<usize>, end: Option<usize>) -> Vec<L> {
        let mut order = order;
        if let Some(end) = end {
            algorithms::truncate_after(&mut order, &end);
        }
        order
            .into_iter()
            .filter_map(|idx| self.label_at(idx))
            .collect()
    }

    fn start_index<Q>(&self, start: &Q) -> Result<usize>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        self.adj_list
            .get_index_of(start)
            .ok_or_else(|| GraphError::unknown(&start))
    }

    /// Depth-first order from `start`, neighbors by ascending label.
    ///
    /// If `end` was visited the order stops right after it.
    pub fn try_dfs<Q>(&self, start: &Q, end: Option<&Q>) -> Result<Vec<L>>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        let start = self.start_index(start)?;
        let mut visited = VisitedFlags::new(self.vertex_count());
        let mut order = Vec::new();
        algorithms::dfs_preorder_into(
            &mut visited,
            start,
            |u| self.sorted_neighbor_indices(u).unwrap_or_default(),
            &mut order,
        );
        let end = end.and_then(|e| self.adj_list.get_index_of(e));
        Ok(self.to_labels(order, end))
    }

    /// Depth-first order from `start`; empty if `start` is not a vertex.
    pub fn dfs<Q>(&self, start: &Q, end: Option<&Q>) -> Vec<L>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        self.try_dfs(start, end).unwrap_or_else(|err| {
            tracing::debug!(%err, "dfs start rejected");
            Vec::new()
        })
    }

    /// Breadth-first order from `start`, neighbors by ascending label.
    ///
    /// If `end` was visited the order stops right after it. A vertex whose
    /// adjacency entry cannot be found aborts the traversal with an empty order.
    pub fn try_bfs<Q>(&self, start: &Q, end: Option<&Q>) -> Result<Vec<L>>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        let start = self.start_index(start)?;
        let Some(order) = Bfs::new(self.vertex_count(), start, |u| {
            self.sorted_neighbor_indices(u)
        })
        .collect_checked() else {
            tracing::warn!("adjacency list lost symmetry; bfs aborted");
            return Ok(Vec::new());
        };
        let end = end.and_then(|e| self.adj_list.get_index_of(e));
        Ok(self.to_labels(order, end))
    }

    /// Breadth-first order from `start`; empty if `start` is not a vertex.
    pub fn bfs<Q>(&self, start: &Q, end: Option<&Q>) -> Vec<L>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        self.try_bfs(start, end).unwrap_or_else(|err| {
            tracing::debug!(%err, "bfs start rejected");
            Vec::new()
        })
    }

    /// Number of connected components.
    pub fn count_connected_components(&self) -> usize {
        algorithms::count_components(self.vertex_count(), |u| {
            self.sorted_neighbor_indices(u).unwrap_or_default()
        })
    }

    /// Returns `true` if some edge reaches an explored vertex other than the
    /// one it was entered from.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_undirected_cycle(self.vertex_count(), |u| {
            self.sorted_neighbor_indices(u).unwrap_or_default()
        })
    }
}

impl<L> Default for UndirectedGraph<L>
where
    L: Clone + Eq + Hash + Ord + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

// Order-insensitive: two graphs are equal when they have the same vertices and
// the same neighbor sets, whatever order they were built in.
impl<L: Eq + Hash> PartialEq for UndirectedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.adj_list == other.adj_list
    }
}

impl<L: Eq + Hash> Eq for UndirectedGraph<L> {}

impl<L> FromIterator<(L, L)> for UndirectedGraph<L>
where
    L: Clone + Eq + Hash + Ord + fmt::Debug,
{
    fn from_iter<T: IntoIterator<Item = (L, L)>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

impl<L: fmt::Display> fmt::Display for UndirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .adj_list
            .iter()
            .map(|(v, neighbors)| {
                let neighbors: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
                format!("{v}: [{}]", neighbors.join(", "))
            })
            .collect();
        let out = entries.join("\n  ");
        if out.chars().count() < 70 {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {out}}}")
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for UndirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.adj_list.iter()).finish()
    }
}
