//! Error types shared by the graph and the poet.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PoetError>;

/// Failures raised by the graph or while building a generator.
///
/// Poem generation itself never fails; only graph mutation with an
/// invalid weight and corpus reading can.
#[derive(Error, Debug)]
pub enum PoetError {
	/// A caller-supplied argument was rejected before any mutation happened.
	#[error("Invalid argument: {message}")]
	InvalidArgument { message: String },

	/// The corpus could not be opened or read to completion.
	#[error("Corpus I/O failure: {0}")]
	IoFailure(#[from] std::io::Error),
}

impl PoetError {
	/// Create an invalid argument error
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument {
			message: message.into(),
		}
	}

	/// Check if this error was raised by argument validation
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io;

	#[test]
	fn test_error_display() {
		let err = PoetError::invalid_argument("weight must be non-negative, got -3");
		assert!(err.to_string().contains("Invalid argument"));
		assert!(err.to_string().contains("-3"));

		let err = PoetError::from(io::Error::new(io::ErrorKind::NotFound, "missing.txt"));
		assert!(err.to_string().contains("missing.txt"));
	}

	#[test]
	fn test_is_invalid_argument() {
		assert!(PoetError::invalid_argument("x").is_invalid_argument());

		let err = PoetError::from(io::Error::other("boom"));
		assert!(!err.is_invalid_argument());
		assert!(matches!(err, PoetError::IoFailure(_)));
	}
}
