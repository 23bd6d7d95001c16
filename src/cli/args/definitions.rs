use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `genlayout` binary.
#[derive(Parser, Debug)]
#[command(
	name = "genlayout",
	version,
	long_version = long_version(),
	about = "Resolve the layout configuration used by the swagger code generator",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GENLAYOUT_CONFIG",
		help = "Configuration file to load; the extension selects the format (default: discovered)"
	)]
	pub(crate) config: Option<PathBuf>,
	#[arg(
		short = 'd',
		long = "default",
		help = "Load the embedded default configuration, ignoring --config and discovery (default: disabled)"
	)]
	pub(crate) use_default: bool,
	#[arg(
		short = 'l',
		long,
		value_name = "NAME",
		default_value = "golang",
		help = "Language whose layout should be applied"
	)]
	pub(crate) language: String,
	#[arg(
		long = "list-languages",
		help = "List the languages defined by the configuration and exit (default: disabled)"
	)]
	pub(crate) list_languages: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short,
		long,
		action = ArgAction::Count,
		help = "Increase diagnostic output; repeat for more detail"
	)]
	pub(crate) verbose: u8,
}
