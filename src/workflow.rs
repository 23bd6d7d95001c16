use std::env;

use anyhow::{Context, Result, anyhow};
use genlayout::generator::discover;
use genlayout::{ConfigResolver, ConfigStore, DEFAULT_CONFIG_FILE, GenOpts, app_dirs};
use tracing::debug;

use crate::cli::CliArgs;

/// Everything the CLI reports after loading a layout.
#[derive(Debug)]
pub(crate) struct LayoutOutcome {
	pub(crate) source: String,
	pub(crate) languages: Vec<String>,
	pub(crate) opts: GenOpts,
}

/// Coordinates choosing a configuration path and applying one language from it.
pub(crate) struct LayoutWorkflow {
	path: String,
	language: String,
}

impl LayoutWorkflow {
	pub(crate) fn from_cli(cli: &CliArgs) -> Result<Self> {
		Ok(Self {
			path: select_path(cli)?,
			language: cli.language.clone(),
		})
	}

	/// Names of every language defined by the selected configuration, sorted.
	pub(crate) fn languages(&self) -> Result<Vec<String>> {
		let store = ConfigResolver::new().resolve(&self.path)?;
		sorted_languages(&store)
	}

	pub(crate) fn run(self) -> Result<LayoutOutcome> {
		let store = ConfigResolver::new().resolve(&self.path)?;
		let languages = sorted_languages(&store)?;

		let mut opts = GenOpts {
			config_file: self.path,
			language_name: self.language,
			..GenOpts::default()
		};
		opts.apply_language(&store)?;

		Ok(LayoutOutcome {
			source: store.origin().describe(),
			languages,
			opts,
		})
	}
}

fn sorted_languages<S: ConfigStore>(store: &S) -> Result<Vec<String>> {
	let mut names: Vec<String> = store.language_config()?.into_keys().collect();
	names.sort();
	Ok(names)
}

/// `--default` wins over `--config`, which wins over discovery.
fn select_path(cli: &CliArgs) -> Result<String> {
	if cli.use_default {
		return Ok(DEFAULT_CONFIG_FILE.to_string());
	}

	if let Some(path) = &cli.config {
		return path
			.to_str()
			.map(str::to_string)
			.ok_or_else(|| anyhow!("configuration path {} is not valid UTF-8", path.display()));
	}

	let working_dir = env::current_dir().context("failed to determine working directory")?;
	let config_dir = app_dirs::get_config_dir().ok();
	let path = discover(&working_dir, config_dir.as_deref());
	debug!(path = %path, "discovered configuration");
	Ok(path)
}
