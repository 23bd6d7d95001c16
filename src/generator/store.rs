use config::{Config, ConfigError};
use serde::de::DeserializeOwned;

use super::language::{LanguageConfig, LanguageDefinition};
use super::source::ConfigSource;
use crate::error::{Error, Result};

const ROOT_KEY: &str = "(root)";

/// A parsed document that can be decoded into typed structures.
pub trait ConfigStore {
	/// Decode the whole document.
	fn decode<T: DeserializeOwned>(&self) -> Result<T>;

	/// Decode the sub-tree at a dotted `key`.
	fn decode_key<T: DeserializeOwned>(&self, key: &str) -> Result<T>;

	fn language_config(&self) -> Result<LanguageConfig> {
		self.decode()
	}

	/// Decode the definition stored under `name`.
	fn language(&self, name: &str) -> Result<LanguageDefinition> {
		match self.decode_key(name) {
			Err(Error::Decode {
				source: ConfigError::NotFound(_),
				..
			}) => Err(Error::UnknownLanguage {
				language: name.to_string(),
			}),
			other => other,
		}
	}
}

/// Result of one resolution call. Owned by the caller and never shared.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
	config: Config,
	origin: ConfigSource,
}

impl ParsedConfig {
	pub(crate) fn new(config: Config, origin: ConfigSource) -> Self {
		Self { config, origin }
	}

	/// The source this document was read from.
	pub fn origin(&self) -> &ConfigSource {
		&self.origin
	}
}

impl ConfigStore for ParsedConfig {
	fn decode<T: DeserializeOwned>(&self) -> Result<T> {
		self.config
			.clone()
			.try_deserialize()
			.map_err(|source| Error::Decode {
				key: ROOT_KEY.to_string(),
				source,
			})
	}

	fn decode_key<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
		self.config.get(key).map_err(|source| Error::Decode {
			key: key.to_string(),
			source,
		})
	}
}
