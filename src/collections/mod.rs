//! Storage building blocks for the graph representations.

pub mod matrix;

pub use matrix::SquareMatrix;
