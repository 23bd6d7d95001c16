use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while locating, parsing or extracting a layout configuration.
#[derive(Debug, Error)]
pub enum Error {
	/// The supplied path could not be turned into an absolute path.
	#[error("failed to resolve an absolute path for {path:?}: {source}")]
	Absolute {
		path: String,
		#[source]
		source: io::Error,
	},

	/// The existence check on the caller supplied path failed.
	#[error("can't find file for {path:?}")]
	NotFound { path: String },

	/// The resolved file exists but could not be opened.
	#[error("failed to open {}: {source}", path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The opened file could not be read to completion.
	#[error("failed to read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The compiled-in default document is missing or not valid UTF-8.
	#[error("embedded default configuration `{name}` is unavailable; the build is corrupt")]
	EmbeddedAsset { name: &'static str },

	/// No decoder exists for the format tag derived from the path.
	#[error("unsupported configuration format {format:?}")]
	UnsupportedFormat { format: String },

	/// The document was rejected by the configuration parser.
	#[error(transparent)]
	Parse(config::ConfigError),

	/// A sub-tree of a parsed document could not be decoded into the requested type.
	#[error("failed to decode `{key}`: {source}")]
	Decode {
		key: String,
		#[source]
		source: config::ConfigError,
	},

	/// The requested language has no definition in the configuration.
	#[error("no layout is defined for language `{language}`")]
	UnknownLanguage { language: String },
}
