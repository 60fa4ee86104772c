use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{PoetError, Result};

/// Edge weight. Signed so that negative inputs can be rejected explicitly;
/// stored weights are always `>= 1`.
pub type Weight = i64;

/// A mutable weighted directed graph with labeled vertices.
///
/// Each vertex owns the map of its outgoing edges (target -> weight).
/// Conceptually this is the same structure as a Markov chain state table:
/// every edge is weighted by how many times it was observed.
///
/// # Responsibilities
/// - Add and remove vertices
/// - Set, increment and remove edge weights
/// - Hand out snapshots of the vertex set and of outgoing edges
/// - Merge with another graph (ex. partial graphs built in parallel)
///
/// # Invariants
/// - Every edge endpoint is a vertex of the graph
/// - Every stored weight is strictly positive (weight 0 means "no edge")
/// - Self-loops are allowed
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeightedDirectedGraph<L>
where
	L: Eq + Hash,
{
	/// Mapping from a source vertex to its outgoing edges.
	/// Example: { "brown" => { "jumps" => 2, "fox" => 1 } }
	adjacency: HashMap<L, HashMap<L, Weight>>,
}

impl<L> Default for WeightedDirectedGraph<L>
where
	L: Eq + Hash,
{
	fn default() -> Self {
		Self { adjacency: HashMap::new() }
	}
}

impl<L> WeightedDirectedGraph<L>
where
	L: Eq + Hash + Clone,
{
	/// Creates an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a vertex to the graph.
	///
	/// Returns `true` if the vertex was added, `false` if it was already present.
	pub fn add_vertex(&mut self, vertex: L) -> bool {
		if self.adjacency.contains_key(&vertex) {
			return false;
		}
		self.adjacency.insert(vertex, HashMap::new());
		true
	}

	/// Sets the weight of the edge `source -> target`.
	///
	/// - Both endpoints are added as vertices if missing.
	/// - A weight of 0 removes the edge.
	/// - Returns the previous weight of the edge, or 0 if there was none.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `weight` is negative. The graph is left
	/// untouched in that case.
	pub fn set_edge_weight(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
		if weight < 0 {
			return Err(PoetError::invalid_argument(format!(
				"weight must be non-negative, got {}",
				weight
			)));
		}

		self.add_vertex(target.clone());
		let edges = self.adjacency.entry(source).or_default();

		let previous = if weight == 0 {
			edges.remove(&target)
		} else {
			edges.insert(target, weight)
		};
		Ok(previous.unwrap_or(0))
	}

	/// Adds `by` to the weight of the edge `source -> target`.
	///
	/// Returns the new weight.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `by` is negative or the new weight overflows.
	pub fn increment_edge(&mut self, source: L, target: L, by: Weight) -> Result<Weight> {
		if by < 0 {
			return Err(PoetError::invalid_argument(format!(
				"increment must be non-negative, got {}",
				by
			)));
		}
		let weight = self
			.weight(&source, &target)
			.checked_add(by)
			.ok_or_else(|| PoetError::invalid_argument("weight overflow"))?;
		self.set_edge_weight(source, target, weight)?;
		Ok(weight)
	}

	/// Removes a vertex and every edge where it is the source or the target.
	///
	/// Returns `true` if the vertex was removed, `false` if it was absent.
	///
	/// # Notes
	/// - O(V): every other vertex is scanned for edges pointing to `vertex`.
	pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
	where
		L: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		if self.adjacency.remove(vertex).is_none() {
			return false;
		}
		for edges in self.adjacency.values_mut() {
			edges.remove(vertex);
		}
		true
	}

	/// Returns a copy of the vertex set.
	///
	/// Mutating the returned set does not affect the graph.
	pub fn vertices(&self) -> HashSet<L> {
		self.adjacency.keys().cloned().collect()
	}

	/// Returns a copy of the outgoing edges of `source` (target -> weight).
	///
	/// Returns an empty map if `source` is absent or has no outgoing edges.
	pub fn targets_of<Q>(&self, source: &Q) -> HashMap<L, Weight>
	where
		L: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.adjacency.get(source).cloned().unwrap_or_default()
	}

	/// Iterates over the outgoing edges of `source` without copying them.
	pub fn targets<'a, Q>(&'a self, source: &Q) -> impl Iterator<Item = (&'a L, Weight)>
	where
		L: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.adjacency
			.get(source)
			.into_iter()
			.flat_map(|edges| edges.iter().map(|(target, weight)| (target, *weight)))
	}

	/// Returns the weight of the edge `source -> target`, or 0 if there is none.
	pub fn weight<Q>(&self, source: &Q, target: &Q) -> Weight
	where
		L: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.adjacency
			.get(source)
			.and_then(|edges| edges.get(target))
			.copied()
			.unwrap_or(0)
	}

	/// Returns `true` if `vertex` is part of the graph.
	pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
	where
		L: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.adjacency.contains_key(vertex)
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.adjacency.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.adjacency.values().map(HashMap::len).sum()
	}

	/// Merges another graph into this one.
	///
	/// Vertices are unioned and the weights of matching edges are summed.
	/// Intended for parallel construction, where several partial graphs
	/// are combined into a single one.
	///
	/// # Errors
	/// Returns `InvalidArgument` if a summed weight overflows. Every sum is
	/// checked first, so the graph is left untouched in that case.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		for (source, other_edges) in &other.adjacency {
			for (target, weight) in other_edges {
				if self.weight(source, target).checked_add(*weight).is_none() {
					return Err(PoetError::invalid_argument("weight overflow"));
				}
			}
		}

		for (source, other_edges) in &other.adjacency {
			for target in other_edges.keys() {
				self.add_vertex(target.clone());
			}
			let edges = self.adjacency.entry(source.clone()).or_default();
			for (target, weight) in other_edges {
				*edges.entry(target.clone()).or_insert(0) += *weight;
			}
		}
		Ok(())
	}
}

/// One line per vertex, sorted by label: `vertex -> {target: weight, ...}`.
impl<L> fmt::Display for WeightedDirectedGraph<L>
where
	L: Eq + Hash + Ord + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut sources: Vec<_> = self.adjacency.iter().collect();
		sources.sort_by(|a, b| a.0.cmp(b.0));

		for (index, (source, edges)) in sources.into_iter().enumerate() {
			if index > 0 {
				writeln!(f)?;
			}
			let mut targets: Vec<_> = edges.iter().collect();
			targets.sort_by(|a, b| a.0.cmp(b.0));

			write!(f, "{} -> {{", source)?;
			for (i, (target, weight)) in targets.into_iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "{}: {}", target, weight)?;
			}
			write!(f, "}}")?;
		}
		Ok(())
	}
}
