use std::env;
use std::io;
use std::path::PathBuf;

/// Server settings, read from the environment.
///
/// | variable        | default     |
/// |-----------------|-------------|
/// | `POET_HOST`     | `127.0.0.1` |
/// | `POET_PORT`     | `5000`      |
/// | `POET_DATA_DIR` | `./data`    |
/// | `POET_CORPUS`   | (none)      |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Folder holding the `.txt` corpora.
	pub data_dir: PathBuf,
	/// Corpus loaded at start-up, if any.
	pub corpus: Option<String>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			data_dir: PathBuf::from("./data"),
			corpus: None,
		}
	}
}

impl ServerConfig {
	/// Reads the configuration from the process environment.
	///
	/// # Errors
	/// Returns `InvalidInput` if `POET_PORT` is not a valid port number.
	pub fn from_env() -> io::Result<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary variable lookup.
	fn from_lookup<F>(lookup: F) -> io::Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(host) = lookup("POET_HOST") {
			config.host = host;
		}
		if let Some(port) = lookup("POET_PORT") {
			config.port = port.trim().parse().map_err(|_| {
				io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid POET_PORT: {}", port))
			})?;
		}
		if let Some(dir) = lookup("POET_DATA_DIR") {
			config.data_dir = PathBuf::from(dir);
		}
		config.corpus = lookup("POET_CORPUS").filter(|name| !name.trim().is_empty());

		Ok(config)
	}

	/// Path of the corpus file named `name` in the data folder.
	pub fn corpus_path(&self, name: &str) -> PathBuf {
		self.data_dir.join(format!("{}.txt", name))
	}
}
