//! Integration tests for corpus loading and poem generation

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use graph_poet_core::*;

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests")
		.join("fixtures")
		.join(name)
}

#[test]
fn test_basic_poem_generation() {
	let poet = BridgeTextGenerator::new(fixture("basic-corpus.txt")).unwrap();

	assert_eq!(poet.poem("The quick brown fox"), "The quick brown jumps fox");
}

#[test]
fn test_no_bridge_words() {
	let poet = BridgeTextGenerator::new(fixture("basic-corpus.txt")).unwrap();

	assert_eq!(poet.poem("Hello world"), "Hello world");
}

#[test]
fn test_empty_input() {
	let poet = BridgeTextGenerator::new(fixture("basic-corpus.txt")).unwrap();

	assert_eq!(poet.poem(""), "");
}

#[test]
fn test_case_insensitivity_across_lines() {
	// One word per line, CRLF on one of them
	let poet = BridgeTextGenerator::new(fixture("case-corpus.txt")).unwrap();

	assert_eq!(poet.poem("Hello world"), "Hello beautiful world");
}

#[test]
fn test_several_bridges_in_one_poem() {
	let poet = BridgeTextGenerator::new(fixture("seek-corpus.txt")).unwrap();

	assert_eq!(
		poet.poem("Seek to explore new and exciting synergies!"),
		"Seek to explore strange new life and exciting synergies!"
	);
}

#[test]
fn test_punctuated_input_word_is_not_a_vertex() {
	let poet = BridgeTextGenerator::from_lines(&["hello cruel world"]).unwrap();

	assert_eq!(poet.poem("Hello world"), "Hello cruel world");
	// "world!" is looked up as-is and never matches a tokenized vertex
	assert_eq!(poet.poem("Hello world!"), "Hello world!");
}

#[test]
fn test_missing_corpus_is_io_failure() {
	let dir = tempfile::tempdir().unwrap();
	let err = BridgeTextGenerator::new(dir.path().join("missing.txt")).unwrap_err();

	assert!(matches!(err, PoetError::IoFailure(_)));
}

#[test]
fn test_directory_corpus_is_io_failure() {
	let dir = tempfile::tempdir().unwrap();
	let err = BridgeTextGenerator::new(dir.path()).unwrap_err();

	assert!(!err.is_invalid_argument());
}

#[test]
fn test_from_reader_matches_file() {
	let from_file = BridgeTextGenerator::new(fixture("seek-corpus.txt")).unwrap();
	let contents = fs::read_to_string(fixture("seek-corpus.txt")).unwrap();
	let from_reader = BridgeTextGenerator::from_reader(Cursor::new(contents)).unwrap();

	assert_eq!(from_file.graph(), from_reader.graph());
}

#[test]
fn test_corpus_written_to_temp_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tiny.txt");
	fs::write(&path, "night falls softly\nnight falls hard\n").unwrap();

	let poet = BridgeTextGenerator::new(&path).unwrap();
	assert_eq!(poet.graph().weight("night", "falls"), 2);
	assert_eq!(poet.graph().weight("softly", "night"), 1);
	assert_eq!(poet.poem("Night softly"), "Night falls softly");
}

#[test]
fn test_large_corpus_matches_sequential_count() {
	// Enough lines to be split between many workers
	let vocabulary = ["sun", "moon", "star", "sky", "sea", "the", "a"];
	let lines: Vec<String> = (0..2_000)
		.map(|i| {
			(0..(i % 5))
				.map(|j| vocabulary[(i * 7 + j * 3) % vocabulary.len()])
				.collect::<Vec<_>>()
				.join(" ")
		})
		.collect();

	let poet = BridgeTextGenerator::from_lines(&lines).unwrap();

	let tokens = poet::tokenizer::tokenize_lines(&lines);
	let mut expected: WeightedDirectedGraph<String> = WeightedDirectedGraph::new();
	for pair in tokens.windows(2) {
		expected
			.increment_edge(pair[0].clone(), pair[1].clone(), 1)
			.unwrap();
	}

	assert_eq!(poet.graph(), &expected);
}

#[test]
fn test_graph_debug_representations() {
	let poet = BridgeTextGenerator::from_lines(&["b a", "b"]).unwrap();

	assert_eq!(poet.graph().to_string(), "a -> {b: 1}\nb -> {a: 1}");

	let json = serde_json::to_value(poet.graph()).unwrap();
	assert_eq!(json, serde_json::json!({ "a": { "b": 1 }, "b": { "a": 1 } }));
}
