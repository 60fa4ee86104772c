//! Graph-based poetry generation library.
//!
//! This crate provides:
//! - A generic weighted directed graph
//! - Word-adjacency graph construction from a text corpus
//! - A poem generator inserting "bridge" words between input words
//! - Corpus I/O helpers (file loading, corpus listing)
//!
//! The generator owns its graph; nothing is shared between instances.

/// Error type and `Result` alias.
pub mod error;

/// Generic weighted directed graph.
pub mod graph;

/// Tokenization, corpus graph construction and poem generation.
pub mod poet;

/// I/O utilities (corpus loading, corpus listing, path helpers).
pub mod io;

pub use error::{PoetError, Result};
pub use graph::{Weight, WeightedDirectedGraph};
pub use poet::BridgeTextGenerator;
