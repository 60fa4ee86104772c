use std::sync::mpsc;
use std::thread;

use crate::error::Result;
use crate::graph::WeightedDirectedGraph;
use super::tokenizer::tokenize;

/// Number of chunks per CPU core when splitting a corpus between workers.
const CHUNK_FACTOR: usize = 8;

/// Adjacency counts of one contiguous slice of corpus lines.
///
/// The first and last tokens are kept so that the adjacency crossing
/// two neighbouring chunks can be restored when merging.
#[derive(Debug)]
struct PartialCorpus {
	index: usize,
	first: Option<String>,
	last: Option<String>,
	graph: WeightedDirectedGraph<String>,
}

impl PartialCorpus {
	/// Tokenizes `lines` and counts every adjacency inside them.
	fn from_lines<S: AsRef<str>>(index: usize, lines: &[S]) -> Result<Self> {
		let mut graph = WeightedDirectedGraph::new();
		let mut first = None;
		let mut previous: Option<String> = None;

		for word in lines.iter().flat_map(|line| tokenize(line.as_ref())) {
			match previous.take() {
				Some(prev) => count_adjacency(&mut graph, prev, word.clone())?,
				None => first = Some(word.clone()),
			}
			previous = Some(word);
		}

		Ok(Self { index, first, last: previous, graph })
	}
}

/// Records one more observation of `source` directly followed by `target`.
fn count_adjacency(graph: &mut WeightedDirectedGraph<String>, source: String, target: String) -> Result<()> {
	graph.increment_edge(source, target, 1)?;
	Ok(())
}

/// Builds the word-adjacency graph of a corpus.
///
/// # Behavior
/// - Splits the lines into chunks (based on CPU cores * factor, at most one per line).
/// - Each worker tokenizes its chunk and counts its adjacencies in a partial graph.
/// - Partial graphs are collected over a channel, ordered by chunk and merged.
/// - The adjacency between the last token of a chunk and the first token of the
///   next non-empty chunk is added, so line and chunk boundaries never break
///   adjacency.
///
/// The result is the same as counting every consecutive pair sequentially.
pub fn build_adjacency_graph<S>(lines: &[S]) -> Result<WeightedDirectedGraph<String>>
where
	S: AsRef<str> + Sync,
{
	let mut graph = WeightedDirectedGraph::new();
	if lines.is_empty() {
		return Ok(graph);
	}

	let chunks = (num_cpus::get() * CHUNK_FACTOR).clamp(1, lines.len());
	let chunk_size = lines.len().div_ceil(chunks);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for (index, chunk) in lines.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			scope.spawn(move || {
				if tx.send(PartialCorpus::from_lines(index, chunk)).is_err() {
					log::warn!("Corpus chunk {} dropped: receiver closed", index);
				}
			});
		}
	});
	drop(tx);

	let mut partials = rx.iter().collect::<Result<Vec<_>>>()?;
	partials.sort_by_key(|partial| partial.index);
	let chunk_count = partials.len();

	let mut previous_last: Option<String> = None;
	for partial in partials {
		graph.merge(&partial.graph)?;

		// Empty chunks (blank lines only) keep the previous boundary alive
		if let (Some(first), Some(last)) = (partial.first, partial.last) {
			if let Some(previous) = previous_last.take() {
				count_adjacency(&mut graph, previous, first)?;
			}
			previous_last = Some(last);
		}
	}

	log::debug!(
		"Built adjacency graph from {} lines in {} chunks: {} vertices, {} edges",
		lines.len(),
		chunk_count,
		graph.vertex_count(),
		graph.edge_count()
	);

	Ok(graph)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_corpus() {
		let lines: Vec<String> = Vec::new();
		let graph = build_adjacency_graph(&lines).unwrap();
		assert_eq!(graph.vertex_count(), 0);
	}

	#[test]
	fn test_single_word_corpus_is_empty() {
		// A lone token never appears in a pair, so it is not recorded
		let graph = build_adjacency_graph(&["Alone"]).unwrap();
		assert_eq!(graph.vertex_count(), 0);
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn test_counts_repeated_pairs() {
		let graph = build_adjacency_graph(&["to be or not to be"]).unwrap();
		assert_eq!(graph.weight("to", "be"), 2);
		assert_eq!(graph.weight("be", "or"), 1);
		assert_eq!(graph.weight("not", "to"), 1);
		assert_eq!(graph.weight("be", "to"), 0);
	}

	#[test]
	fn test_adjacency_crosses_lines_and_blank_lines() {
		let graph = build_adjacency_graph(&["hello", "", "...", "world"]).unwrap();
		assert_eq!(graph.weight("hello", "world"), 1);
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn test_repeated_word_builds_self_loop() {
		let graph = build_adjacency_graph(&["the the", "the"]).unwrap();
		assert_eq!(graph.weight("the", "the"), 2);
	}

	#[test]
	fn test_accented_letters_break_words() {
		let graph = build_adjacency_graph(&["un café noir"]).unwrap();
		assert_eq!(graph.weight("un", "caf"), 1);
		assert_eq!(graph.weight("caf", "noir"), 1);
		assert!(!graph.contains_vertex("café"));
	}

	#[test]
	fn test_partial_corpus_keeps_boundaries() {
		let partial = PartialCorpus::from_lines(3, &["  , ", "One two", "three!"]).unwrap();
		assert_eq!(partial.index, 3);
		assert_eq!(partial.first.as_deref(), Some("one"));
		assert_eq!(partial.last.as_deref(), Some("three"));
		assert_eq!(partial.graph.edge_count(), 2);

		let empty = PartialCorpus::from_lines(0, &["!!"]).unwrap();
		assert!(empty.first.is_none());
		assert!(empty.last.is_none());
	}
}
