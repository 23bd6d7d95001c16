//! Resolve and load the layout configuration used by the swagger code generator.
//!
//! The root module re-exports the generator types so that embedders can load a
//! layout without digging through the module hierarchy.

pub mod app_dirs;
mod error;
pub mod generator;
pub mod logging;

pub use error::{Error, Result};
pub use generator::{
	ConfigResolver, ConfigSource, ConfigStore, DEFAULT_CONFIG_FILE, GenOpts, LanguageConfig,
	LanguageDefinition, LanguageOpts, ParsedConfig, SectionOpts, TemplateOpts, read_config,
};
