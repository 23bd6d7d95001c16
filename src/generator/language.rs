use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::opts::{GenOpts, LanguageOpts, SectionOpts};
use crate::error::Result;

/// Layout definition for one target language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDefinition {
	#[serde(default)]
	pub layout: SectionOpts,
}

/// Language name to definition, as decoded from a configuration document.
pub type LanguageConfig = HashMap<String, LanguageDefinition>;

impl LanguageDefinition {
	/// Copy this layout into `opts`, replacing its sections, and fill in the
	/// Go language options when none are set.
	///
	/// Currently infallible.
	pub fn configure_opts(&self, opts: &mut GenOpts) -> Result<()> {
		opts.sections = self.layout.clone();
		if opts.language_opts.is_none() {
			opts.language_opts = Some(LanguageOpts::golang());
		}
		Ok(())
	}
}
