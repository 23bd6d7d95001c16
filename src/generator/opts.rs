//! Generation option types that consume a resolved layout.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::source::DEFAULT_CONFIG_FILE;
use super::store::ConfigStore;
use crate::error::Result;

/// One template rendered by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOpts {
	pub name: String,
	pub source: String,
	pub target: String,
	pub file_name: String,
	pub skip_exists: bool,
	pub skip_format: bool,
}

/// The generator's layout sections. Passed through without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOpts {
	pub application: Vec<TemplateOpts>,
	pub operations: Vec<TemplateOpts>,
	pub operation_groups: Vec<TemplateOpts>,
	pub models: Vec<TemplateOpts>,
}

impl SectionOpts {
	pub fn template_count(&self) -> usize {
		self.application.len()
			+ self.operations.len()
			+ self.operation_groups.len()
			+ self.models.len()
	}
}

/// Behaviour defaults for a target output language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOpts {
	pub name: String,
	pub file_extension: String,
	pub reserved_words: BTreeSet<String>,
}

const GO_RESERVED_WORDS: &[&str] = &[
	"break",
	"case",
	"chan",
	"const",
	"continue",
	"default",
	"defer",
	"else",
	"fallthrough",
	"for",
	"func",
	"go",
	"goto",
	"if",
	"import",
	"interface",
	"map",
	"package",
	"range",
	"return",
	"select",
	"struct",
	"switch",
	"type",
	"var",
];

impl LanguageOpts {
	/// Options for generating Go code, the default target.
	pub fn golang() -> Self {
		Self {
			name: "golang".to_string(),
			file_extension: "go".to_string(),
			reserved_words: GO_RESERVED_WORDS.iter().map(|word| word.to_string()).collect(),
		}
	}

	pub fn is_reserved(&self, word: &str) -> bool {
		self.reserved_words.contains(word)
	}
}

/// Options for one generation run. Owned by the caller; layout loading only
/// fills in `sections` and, when unset, `language_opts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenOpts {
	pub target: PathBuf,
	pub config_file: String,
	pub language_name: String,
	pub sections: SectionOpts,
	pub language_opts: Option<LanguageOpts>,
}

impl Default for GenOpts {
	fn default() -> Self {
		Self {
			target: PathBuf::from("."),
			config_file: DEFAULT_CONFIG_FILE.to_string(),
			language_name: "golang".to_string(),
			sections: SectionOpts::default(),
			language_opts: None,
		}
	}
}

impl GenOpts {
	/// Look up `language_name` in `store` and apply its definition.
	pub fn apply_language<S: ConfigStore>(&mut self, store: &S) -> Result<()> {
		let definition = store.language(&self.language_name)?;
		definition.configure_opts(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn golang_reserves_keywords() {
		let opts = LanguageOpts::golang();
		assert_eq!(opts.file_extension, "go");
		assert!(opts.is_reserved("func"));
		assert!(!opts.is_reserved("model"));
	}

	#[test]
	fn default_opts_use_the_embedded_layout() {
		let opts = GenOpts::default();
		assert_eq!(opts.config_file, DEFAULT_CONFIG_FILE);
		assert_eq!(opts.language_name, "golang");
		assert!(opts.language_opts.is_none());
	}

	#[test]
	fn template_count_covers_every_section() {
		let template = TemplateOpts::default();
		let sections = SectionOpts {
			application: vec![template.clone()],
			operations: vec![template.clone(), template.clone()],
			operation_groups: vec![],
			models: vec![template],
		};
		assert_eq!(sections.template_count(), 4);
	}
}
