use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use genlayout::generator::CANDIDATE_NAMES;
use genlayout::{DEFAULT_CONFIG_FILE, app_dirs};

/// Produce the version banner listing where configuration is looked up, in order.
pub(super) fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("genlayout {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "lookup order:");
	for name in CANDIDATE_NAMES {
		let _ = writeln!(details, "  ./{name}");
	}
	let _ = writeln!(details, "  {config_dir}/swagger.yaml");
	let _ = writeln!(details, "  embedded default ({DEFAULT_CONFIG_FILE})");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
