//! Where a configuration document comes from.
//!
//! A resolution call reads from exactly one [`ConfigSource`]: either the
//! compiled-in default document, addressed through the reserved
//! [`DEFAULT_CONFIG_FILE`] name, or a file on disk. Filesystem access goes
//! through the [`SourceFs`] seam so the resolver can be driven by a double.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};

use crate::error::{Error, Result};

/// Reserved name that selects the compiled-in default document.
///
/// Never pass a real file with this name; it will not be read.
pub const DEFAULT_CONFIG_FILE: &str = "default_swagger_config.yaml";

const DEFAULT_ASSET_NAME: &str = "swagger.yaml";

static ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// A read-only document baked into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedDocument {
	name: &'static str,
	contents: &'static str,
}

impl EmbeddedDocument {
	/// File name the document was embedded from. Its extension fixes the format.
	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn contents(&self) -> &'static str {
		self.contents
	}
}

/// Return the compiled-in default configuration document.
pub fn default_source() -> Result<EmbeddedDocument> {
	let contents = ASSET_DIR
		.get_file(DEFAULT_ASSET_NAME)
		.and_then(|file| file.contents_utf8())
		.ok_or(Error::EmbeddedAsset {
			name: DEFAULT_ASSET_NAME,
		})?;

	Ok(EmbeddedDocument {
		name: DEFAULT_ASSET_NAME,
		contents,
	})
}

/// The byte source selected for one resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
	Embedded(EmbeddedDocument),
	File {
		/// Path exactly as the caller supplied it.
		original: String,
		absolute: PathBuf,
	},
}

impl ConfigSource {
	/// Name used to derive the format tag.
	pub fn format_name(&self) -> &str {
		match self {
			ConfigSource::Embedded(document) => document.name(),
			ConfigSource::File { original, .. } => original,
		}
	}

	pub fn is_embedded(&self) -> bool {
		matches!(self, ConfigSource::Embedded(_))
	}

	/// Human readable description, used in summaries and log events.
	pub fn describe(&self) -> String {
		match self {
			ConfigSource::Embedded(document) => format!("<embedded {}>", document.name()),
			ConfigSource::File { absolute, .. } => absolute.display().to_string(),
		}
	}
}

/// Filesystem operations the resolver depends on.
pub trait SourceFs {
	type Reader: Read;

	/// Normalise `path` against the working directory.
	fn absolute(&self, path: &Path) -> io::Result<PathBuf>;

	/// Report whether `path` exists. Errors other than "not found" count as existing.
	fn exists(&self, path: &Path) -> bool;

	fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}

/// [`SourceFs`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl SourceFs for OsFs {
	type Reader = File;

	fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
		// `std::path::absolute` rejects the empty path; treat it as the working directory.
		if path.as_os_str().is_empty() {
			return std::env::current_dir();
		}
		std::path::absolute(path)
	}

	fn exists(&self, path: &Path) -> bool {
		match fs::metadata(path) {
			Ok(_) => true,
			Err(err) => err.kind() != io::ErrorKind::NotFound,
		}
	}

	fn open(&self, path: &Path) -> io::Result<File> {
		File::open(path)
	}
}
