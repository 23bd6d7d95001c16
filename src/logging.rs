//! Diagnostic output for the command line tool.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed here.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "GENLAYOUT_LOG";

/// Map the number of `-v` flags to a default level.
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Install a stderr subscriber. Calling this more than once is a no-op.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::builder()
		.with_default_directive(level_for(verbosity).into())
		.with_env_var(LOG_ENV)
		.from_env_lossy();

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
