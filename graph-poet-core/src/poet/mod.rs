//! Word-adjacency poetry generation.
//!
//! This module provides:
//! - Corpus tokenization (`tokenizer`)
//! - Parallel construction of the word-adjacency graph (`corpus`)
//! - The bridge-word poem generator (`BridgeTextGenerator`)

/// Corpus line tokenization (lower-cased word tokens).
pub mod tokenizer;

/// Multi-threaded word-adjacency graph construction.
///
/// Splits the corpus into chunks, counts adjacencies in parallel
/// and merges the partial graphs.
pub mod corpus;

/// High-level poem generator built on top of the affinity graph.
pub mod generator;

pub use generator::BridgeTextGenerator;
