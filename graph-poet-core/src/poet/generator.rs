use std::fmt;
use std::io::Read;
use std::path::Path;

use rand::seq::IndexedRandom;

use crate::error::Result;
use crate::graph::WeightedDirectedGraph;
use crate::io;
use super::corpus::build_adjacency_graph;

/// Graph-based poetry generator.
///
/// Vertices of the affinity graph are lower-cased corpus words; an edge
/// `a -> b` weighted `n` means `a` was directly followed by `b` `n` times
/// in the corpus.
///
/// # Responsibilities
/// - Build the affinity graph once from a corpus (file, stream or lines)
/// - Insert the best bridge word between each pair of input words
///
/// # Invariants
/// - The graph is never mutated after construction
/// - Every vertex is a non-empty lower-case token
#[derive(Clone, Debug)]
pub struct BridgeTextGenerator {
	graph: WeightedDirectedGraph<String>,
}

impl BridgeTextGenerator {
	/// Creates a generator from a corpus file.
	///
	/// # Errors
	/// Returns `IoFailure` if the file cannot be opened or read.
	pub fn new<P: AsRef<Path>>(corpus: P) -> Result<Self> {
		let lines = io::read_corpus(&corpus)?;
		log::debug!("Read corpus {} ({} lines)", corpus.as_ref().display(), lines.len());
		Self::from_lines(&lines)
	}

	/// Creates a generator from a corpus stream, read until EOF.
	///
	/// # Errors
	/// Returns `IoFailure` if the stream fails or is not valid UTF-8.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let lines = io::read_corpus_from(reader)?;
		Self::from_lines(&lines)
	}

	/// Creates a generator from in-memory corpus lines.
	pub fn from_lines<S>(lines: &[S]) -> Result<Self>
	where
		S: AsRef<str> + Sync,
	{
		Ok(Self { graph: build_adjacency_graph(lines)? })
	}

	/// Read-only access to the affinity graph.
	pub fn graph(&self) -> &WeightedDirectedGraph<String> {
		&self.graph
	}

	/// Finds the bridge word between `first` and `second`.
	///
	/// A bridge is any `b` with edges `first -> b` and `b -> second`
	/// (looked up lower-cased). The candidate with the highest summed weight
	/// wins; equal scores go to the lexicographically smallest word.
	///
	/// Returns `None` if there is no two-hop path.
	pub fn bridge(&self, first: &str, second: &str) -> Option<String> {
		let source = first.to_lowercase();
		let target = second.to_lowercase();

		self.graph
			.targets(source.as_str())
			.filter_map(|(candidate, weight_in)| {
				let weight_out = self.graph.weight(candidate.as_str(), target.as_str());
				(weight_out > 0).then_some((candidate, weight_in + weight_out))
			})
			.max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
			.map(|(bridge, score)| {
				log::trace!("Bridge {} -> {} -> {} (score {})", source, bridge, target, score);
				bridge.clone()
			})
	}

	/// Generates a poem from `input`.
	///
	/// # Behavior
	/// - Splits the input on whitespace.
	/// - Between each pair of adjacent words, inserts the bridge word if any.
	/// - Input words keep their original casing; bridges are lower-case.
	/// - Words are joined by single spaces.
	///
	/// An empty (or blank) input gives an empty poem.
	pub fn poem(&self, input: &str) -> String {
		let words: Vec<&str> = input.split_whitespace().collect();
		let Some(last) = words.last() else {
			return String::new();
		};

		let mut poem: Vec<String> = Vec::with_capacity(words.len() * 2);
		for pair in words.windows(2) {
			poem.push(pair[0].to_owned());
			if let Some(bridge) = self.bridge(pair[0], pair[1]) {
				poem.push(bridge);
			}
		}
		poem.push((*last).to_owned());

		poem.join(" ")
	}

	/// Builds a phrase of `words` random corpus words (drawn with replacement).
	///
	/// Useful as a starting input when the caller has none.
	/// Returns an empty string if the graph has no vertices.
	pub fn random_phrase(&self, words: usize) -> String {
		let vertices: Vec<String> = self.graph.vertices().into_iter().collect();
		let mut rng = rand::rng();

		(0..words)
			.filter_map(|_| vertices.choose(&mut rng))
			.map(String::as_str)
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl fmt::Display for BridgeTextGenerator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BridgeTextGenerator with affinity graph:\n{}", self.graph)
	}
}
