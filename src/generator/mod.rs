//! Layout configuration for the code generator.
//!
//! [`ConfigResolver`] turns a path, or the reserved [`DEFAULT_CONFIG_FILE`]
//! name, into a [`ParsedConfig`]. The parsed store is then decoded into a
//! [`LanguageConfig`] whose entries configure [`GenOpts`].

mod discover;
mod format;
mod language;
mod opts;
mod resolver;
mod source;
mod store;

pub use discover::{CANDIDATE_NAMES, candidate_files, discover};
pub use format::{DocumentFormat, file_format, format_tag};
pub use language::{LanguageConfig, LanguageDefinition};
pub use opts::{GenOpts, LanguageOpts, SectionOpts, TemplateOpts};
pub use resolver::{ConfigResolver, read_config};
pub use source::{ConfigSource, DEFAULT_CONFIG_FILE, EmbeddedDocument, OsFs, SourceFs, default_source};
pub use store::{ConfigStore, ParsedConfig};
