use anyhow::Result;
use genlayout::TemplateOpts;
use serde_json::json;

use crate::workflow::LayoutOutcome;

/// Print a plain-text summary of the applied layout.
pub(crate) fn print_plain(outcome: &LayoutOutcome) {
	let opts = &outcome.opts;
	println!("Configuration: {}", outcome.source);
	println!("Languages: {}", outcome.languages.join(", "));
	println!("Language: {}", opts.language_name);
	if let Some(language) = &opts.language_opts {
		println!(
			"  Options: {} (*.{}, {} reserved words)",
			language.name,
			language.file_extension,
			language.reserved_words.len()
		);
	}
	println!("  Templates: {}", opts.sections.template_count());
	print_section("application", &opts.sections.application);
	print_section("operations", &opts.sections.operations);
	print_section("operation_groups", &opts.sections.operation_groups);
	print_section("models", &opts.sections.models);
}

fn print_section(name: &str, templates: &[TemplateOpts]) {
	if templates.is_empty() {
		println!("  {name}: (none)");
		return;
	}
	println!("  {name}:");
	for template in templates {
		println!("    {} <- {}", template.name, template.source);
	}
}

/// Format the applied layout as a JSON string.
pub(crate) fn format_outcome_json(outcome: &LayoutOutcome) -> Result<String> {
	let payload = json!({
		"source": outcome.source,
		"languages": outcome.languages,
		"language": outcome.opts.language_name,
		"language_opts": outcome.opts.language_opts,
		"sections": outcome.opts.sections,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the applied layout.
pub(crate) fn print_json(outcome: &LayoutOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use genlayout::{GenOpts, LanguageOpts};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_sections_and_language() {
		let mut opts = GenOpts::default();
		opts.language_opts = Some(LanguageOpts::golang());
		opts.sections.models.push(TemplateOpts {
			name: "definition".into(),
			..TemplateOpts::default()
		});
		let outcome = LayoutOutcome {
			source: "<embedded swagger.yaml>".into(),
			languages: vec!["golang".into()],
			opts,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["language"], "golang");
		assert_eq!(value["language_opts"]["file_extension"], "go");
		assert_eq!(value["sections"]["models"][0]["name"], "definition");
	}
}
