//! Traversal scratch state shared by both graph representations.

pub(crate) mod visited;
