use std::path::{Path, PathBuf};

use super::source::DEFAULT_CONFIG_FILE;

/// File names looked up in the working directory, in priority order.
pub const CANDIDATE_NAMES: &[&str] = &[
	"swagger.yaml",
	"swagger.yml",
	"swagger.json",
	"swagger.toml",
	"swagger.hcl",
	"swagger.properties",
];

/// List the locations consulted when no configuration path is given.
pub fn candidate_files(working_dir: &Path, config_dir: Option<&Path>) -> Vec<PathBuf> {
	let mut files: Vec<PathBuf> = CANDIDATE_NAMES
		.iter()
		.map(|name| working_dir.join(name))
		.collect();

	if let Some(dir) = config_dir {
		files.push(dir.join("swagger.yaml"));
	}

	files
}

/// Pick the first existing candidate, or the embedded default when none exist.
///
/// Only one source is ever selected; candidates are not merged.
pub fn discover(working_dir: &Path, config_dir: Option<&Path>) -> String {
	candidate_files(working_dir, config_dir)
		.into_iter()
		.filter(|path| path.is_file())
		.find_map(|path| path.to_str().map(str::to_string))
		.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
}
