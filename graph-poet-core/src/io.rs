use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Reads a corpus file and returns all its lines.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	read_corpus_from(File::open(filename)?)
}

/// Reads a corpus from any stream until EOF and returns its lines.
///
/// Fails if the stream errors or is not valid UTF-8.
pub fn read_corpus_from<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	reader.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Extracts the corpus name (file stem) from a path.
///
/// Examples:
/// - `"./data/sonnets.txt"` → `"sonnets"`
/// - `"sonnets.txt"` → `"sonnets"`
pub fn corpus_name<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists the corpus names (file stems) with a given extension in a directory.
///
/// Subdirectories are ignored. Names are sorted.
pub fn list_corpora<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut names = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			names.push(corpus_name(&path)?);
		}
	}

	names.sort();
	Ok(names)
}
