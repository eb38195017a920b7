//! Traversal and shortest-path kernels shared by both graph representations.
//!
//! Every kernel works on dense vertex positions (`0..n`) and takes the graph as a
//! neighbor function, so the adjacency matrix and the labeled adjacency list run
//! the exact same code. Neighbor functions must yield vertices in the order the
//! traversal is expected to follow (ascending index or ascending label).
//!
//! All depth-first kernels keep an explicit stack of `(vertex, neighbors)`
//! frames instead of recursing, so their depth is bounded by the heap rather
//! than the call stack while visiting vertices in recursive pre-order.

use core::cmp::Reverse;
use core::fmt;
use std::collections::{BinaryHeap, VecDeque};

use num_traits::PrimInt;
use serde::{Deserialize, Serialize};

use crate::graph::access::visited::VisitedFlags;

/// A shortest-path distance: either a finite weight sum or unreachable.
///
/// `Finite` orders before `Infinite`, so comparisons read like comparisons on
/// the extended reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance<W> {
    /// Reachable at this total weight.
    Finite(W),
    /// Not reachable from the source (positive infinity).
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns the finite distance, or `None` when unreachable.
    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Infinite => None,
        }
    }

    /// Returns `true` for a reachable vertex.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl<W: PrimInt> Distance<W> {
    /// Converts to `f64`, mapping `Infinite` to `f64::INFINITY`.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Finite(w) => w.to_f64().unwrap_or(f64::INFINITY),
            Self::Infinite => f64::INFINITY,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => fmt::Display::fmt(w, f),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Cuts `order` right after the first occurrence of `end`.
///
/// When `end` never occurs the order is left untouched.
pub(crate) fn truncate_after<T: PartialEq>(order: &mut Vec<T>, end: &T) {
    if let Some(pos) = order.iter().position(|v| v == end) {
        order.truncate(pos + 1);
    }
}

/// Breadth-first iterator over dense vertex positions.
pub(crate) struct Bfs<F> {
    neighbors: F,
    visited: VisitedFlags,
    queue: VecDeque<usize>,
}

impl<F, I> Bfs<F>
where
    F: FnMut(usize) -> Option<I>,
    I: IntoIterator<Item = usize>,
{
    /// Starts a BFS at `start`; the caller guarantees `start < n`.
    pub(crate) fn new(n: usize, start: usize, neighbors: F) -> Self {
        let mut visited = VisitedFlags::new(n);
        visited.mark(start);
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self {
            neighbors,
            visited,
            queue,
        }
    }

    /// Drains the traversal, returning `None` if the neighbor function ever
    /// reports a vertex without an adjacency entry.
    pub(crate) fn collect_checked(mut self) -> Option<Vec<usize>> {
        let mut order = Vec::new();
        while let Some(u) = self.queue.pop_front() {
            order.push(u);
            for v in (self.neighbors)(u)? {
                if self.visited.try_visit(v) {
                    self.queue.push_back(v);
                }
            }
        }
        Some(order)
    }
}

/// Recursive-order depth-first traversal from `start`, skipping (and marking)
/// vertices already in `visited`.
///
/// Appends the newly reached vertices to `out` in pre-order.
pub(crate) fn dfs_preorder_into<F, I>(
    visited: &mut VisitedFlags,
    start: usize,
    mut neighbors: F,
    out: &mut Vec<usize>,
) where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    if !visited.try_visit(start) {
        return;
    }
    out.push(start);

    let mut stack = vec![neighbors(start).into_iter()];
    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            Some(v) => {
                if visited.try_visit(v) {
                    out.push(v);
                    stack.push(neighbors(v).into_iter());
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Counts the depth-first restarts needed to cover all `n` vertices.
pub(crate) fn count_components<F, I>(n: usize, mut neighbors: F) -> usize
where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let mut visited = VisitedFlags::new(n);
    let mut scratch = Vec::new();
    let mut count = 0;
    let mut next = visited.first_unvisited(0);
    while let Some(start) = next {
        dfs_preorder_into(&mut visited, start, &mut neighbors, &mut scratch);
        scratch.clear();
        count += 1;
        next = visited.first_unvisited(start + 1);
    }
    count
}

/// Directed cycle detection.
///
/// A vertex stays on `track` while its frame is live; an edge into a tracked
/// vertex is a back-edge. Restarts from every unvisited vertex in ascending
/// order so disconnected parts are covered.
pub(crate) fn has_directed_cycle<F, I>(n: usize, mut neighbors: F) -> bool
where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let mut already = VisitedFlags::new(n);
    let mut track = VisitedFlags::new(n);

    for root in 0..n {
        if !already.try_visit(root) {
            continue;
        }
        track.mark(root);
        let mut stack = vec![(root, neighbors(root).into_iter())];

        while let Some((u, frame)) = stack.last_mut() {
            let u = *u;
            match frame.next() {
                Some(v) => {
                    if already.try_visit(v) {
                        track.mark(v);
                        stack.push((v, neighbors(v).into_iter()));
                    } else if track.is_visited(v) {
                        tracing::trace!(from = u, to = v, "back-edge closes a cycle");
                        return true;
                    }
                }
                None => {
                    track.unmark(u);
                    stack.pop();
                }
            }
        }
    }
    false
}

/// Undirected cycle detection.
///
/// Each frame remembers the vertex it was entered from; reaching any visited
/// vertex other than that predecessor means the edge closes a cycle.
pub(crate) fn has_undirected_cycle<F, I>(n: usize, mut neighbors: F) -> bool
where
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let mut already = VisitedFlags::new(n);

    for root in 0..n {
        if !already.try_visit(root) {
            continue;
        }
        let mut stack = vec![(root, None, neighbors(root).into_iter())];

        while let Some((u, last, frame)) = stack.last_mut() {
            let (u, last) = (*u, *last);
            match frame.next() {
                Some(v) => {
                    if already.try_visit(v) {
                        stack.push((v, Some(u), neighbors(v).into_iter()));
                    } else if last != Some(v) {
                        tracing::trace!(from = u, to = v, "edge revisits an explored vertex");
                        return true;
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
    false
}

/// Single-source shortest paths over non-negative weights.
///
/// Uses a min-heap of `(distance, vertex)` without decrease-key: a popped entry
/// whose distance is worse than the best known one is stale and skipped. Sums
/// that overflow `W` are treated as unreachable.
pub(crate) fn dijkstra<W, F, I>(n: usize, source: usize, mut neighbors: F) -> Vec<Distance<W>>
where
    W: PrimInt,
    F: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, W)>,
{
    let mut dist = vec![Distance::Infinite; n];
    if source >= n {
        return dist;
    }
    dist[source] = Distance::Finite(W::zero());

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((W::zero(), source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if Distance::Finite(d) > dist[u] {
            continue;
        }
        for (v, w) in neighbors(u) {
            let Some(candidate) = d.checked_add(&w) else {
                continue;
            };
            if Distance::Finite(candidate) < dist[v] {
                dist[v] = Distance::Finite(candidate);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    tracing::trace!(
        source,
        reachable = dist.iter().filter(|d| d.is_finite()).count(),
        "dijkstra finished"
    );
    dist
}
