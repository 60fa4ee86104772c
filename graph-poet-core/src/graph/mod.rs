//! Generic weighted directed graph.
//!
//! The graph is keyed by any hashable label type and stores directed edges
//! with strictly positive integer weights. It is used by the poet to record
//! word adjacency counts, but knows nothing about words.

/// Mutable weighted directed graph (`WeightedDirectedGraph`).
///
/// Handles vertex/edge mutation, weight accounting, snapshot accessors
/// and merging of partial graphs.
pub mod weighted_graph;

pub use weighted_graph::{Weight, WeightedDirectedGraph};
