//! Dense per-vertex flags for graph traversals.
//!
//! Both graphs address vertices by a dense position (`0..n`): the matrix graph
//! natively, the list graph through its insertion-ordered map. Traversals keep
//! their visited set and their on-stack set in one of these.

/// A per-vertex flag vector, sized once per traversal.
#[derive(Debug, Clone)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, idx: usize) {
        self.flags[idx] = true;
    }

    #[inline(always)]
    pub(crate) fn unmark(&mut self, idx: usize) {
        self.flags[idx] = false;
    }

    /// Returns `true` iff the vertex was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        !core::mem::replace(&mut self.flags[idx], true)
    }

    /// Positions that have never been marked, in ascending order.
    pub(crate) fn first_unvisited(&self, from: usize) -> Option<usize> {
        self.flags
            .iter()
            .skip(from)
            .position(|&f| !f)
            .map(|offset| from + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_reports_first_visit_only() {
        let mut flags = VisitedFlags::new(3);
        assert!(flags.try_visit(1));
        assert!(!flags.try_visit(1));
        assert!(flags.is_visited(1));
        assert_eq!(flags.first_unvisited(0), Some(0));
        flags.mark(0);
        assert_eq!(flags.first_unvisited(0), Some(2));
        flags.mark(2);
        assert_eq!(flags.first_unvisited(0), None);
        flags.unmark(1);
        assert_eq!(flags.first_unvisited(2), None);
        assert_eq!(flags.first_unvisited(1), Some(1));
    }
}
