//! Resolve a configuration path into a parsed document.

use std::io::Read;
use std::path::Path;

use config::{Config, File};
use tracing::{debug, trace};

use super::format::{file_format, format_tag};
use super::source::{ConfigSource, DEFAULT_CONFIG_FILE, OsFs, SourceFs, default_source};
use super::store::ParsedConfig;
use crate::error::{Error, Result};

/// Loads configuration documents from the embedded default or the filesystem.
///
/// Every call re-reads and re-parses its source; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver<F = OsFs> {
	fs: F,
}

impl ConfigResolver {
	pub fn new() -> Self {
		Self::default()
	}
}

impl<F: SourceFs> ConfigResolver<F> {
	/// Build a resolver over a custom filesystem.
	pub fn with_fs(fs: F) -> Self {
		Self { fs }
	}

	/// Resolve `path` and parse the document it names.
	///
	/// [`DEFAULT_CONFIG_FILE`] selects the embedded default. Any other value is
	/// treated as a filesystem path whose extension selects the format.
	pub fn resolve(&self, path: &str) -> Result<ParsedConfig> {
		let source = self.locate(path)?;
		let contents = self.read_source(&source)?;

		let tag = format_tag(source.format_name());
		trace!(tag, source = %source.describe(), "parsing configuration");
		let format = file_format(tag)?;

		let config = Config::builder()
			.add_source(File::from_str(&contents, format))
			.build()
			.map_err(Error::Parse)?;

		Ok(ParsedConfig::new(config, source))
	}

	/// Decide where the document for `path` comes from.
	pub fn locate(&self, path: &str) -> Result<ConfigSource> {
		if path == DEFAULT_CONFIG_FILE {
			let document = default_source()?;
			debug!(asset = document.name(), "using embedded default configuration");
			return Ok(ConfigSource::Embedded(document));
		}

		let original = Path::new(path);
		let absolute = self
			.fs
			.absolute(original)
			.map_err(|source| Error::Absolute {
				path: path.to_string(),
				source,
			})?;

		if !self.fs.exists(original) {
			return Err(Error::NotFound {
				path: path.to_string(),
			});
		}

		debug!(path, absolute = %absolute.display(), "using configuration file");
		Ok(ConfigSource::File {
			original: path.to_string(),
			absolute,
		})
	}

	fn read_source(&self, source: &ConfigSource) -> Result<String> {
		match source {
			ConfigSource::Embedded(document) => Ok(document.contents().to_string()),
			ConfigSource::File { absolute, .. } => {
				let mut reader = self.fs.open(absolute).map_err(|source| Error::Open {
					path: absolute.clone(),
					source,
				})?;

				let mut contents = String::new();
				reader
					.read_to_string(&mut contents)
					.map_err(|source| Error::Read {
						path: absolute.clone(),
						source,
					})?;
				Ok(contents)
			}
		}
	}
}

/// Resolve `path` with a resolver over the real filesystem.
pub fn read_config(path: &str) -> Result<ParsedConfig> {
	ConfigResolver::new().resolve(path)
}
