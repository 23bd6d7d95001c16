use std::error::Error as StdError;
use std::path::Path;

use config::{FileFormat, FileStoredFormat, Format, Map, Value, ValueKind};

use crate::error::{Error, Result};

type ParseResult = std::result::Result<Map<String, Value>, Box<dyn StdError + Send + Sync>>;

/// Derive the format tag from the extension of `path`.
///
/// The tag is whatever follows the last `.` in the final path component, so
/// `conf/.yaml` yields `yaml` and a name without a dot yields an empty tag.
pub fn format_tag(path: &str) -> &str {
	let name = Path::new(path)
		.file_name()
		.and_then(|name| name.to_str())
		.unwrap_or_default();

	match name.rfind('.') {
		Some(index) => &name[index + 1..],
		None => "",
	}
}

/// A document format understood by the resolver.
///
/// Wraps the formats built into `config` and adds HCL and Java properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
	Builtin(FileFormat),
	Hcl,
	Properties,
}

/// Map a format tag onto a parser. Tags are matched case-insensitively.
///
/// Empty and unknown tags are rejected rather than guessed.
pub fn file_format(tag: &str) -> Result<DocumentFormat> {
	let format = match tag.to_ascii_lowercase().as_str() {
		"yaml" | "yml" => DocumentFormat::Builtin(FileFormat::Yaml),
		"json" => DocumentFormat::Builtin(FileFormat::Json),
		"toml" => DocumentFormat::Builtin(FileFormat::Toml),
		"ini" => DocumentFormat::Builtin(FileFormat::Ini),
		"ron" => DocumentFormat::Builtin(FileFormat::Ron),
		"json5" => DocumentFormat::Builtin(FileFormat::Json5),
		"hcl" | "tfvars" => DocumentFormat::Hcl,
		"properties" | "props" | "prop" => DocumentFormat::Properties,
		_ => {
			return Err(Error::UnsupportedFormat {
				format: tag.to_string(),
			});
		}
	};
	Ok(format)
}

impl Format for DocumentFormat {
	fn parse(&self, uri: Option<&String>, text: &str) -> ParseResult {
		match self {
			DocumentFormat::Builtin(format) => format.parse(uri, text),
			DocumentFormat::Hcl => parse_hcl(uri, text),
			DocumentFormat::Properties => parse_properties(uri, text),
		}
	}
}

impl FileStoredFormat for DocumentFormat {
	fn file_extensions(&self) -> &'static [&'static str] {
		match self {
			DocumentFormat::Builtin(format) => format.file_extensions(),
			DocumentFormat::Hcl => &["hcl", "tfvars"],
			DocumentFormat::Properties => &["properties", "props", "prop"],
		}
	}
}

fn parse_hcl(uri: Option<&String>, text: &str) -> ParseResult {
	let document: serde_json::Value = hcl::from_str(text)?;
	match from_json(uri, document).kind {
		ValueKind::Table(table) => Ok(table),
		_ => Err("HCL document must be a body of attributes and blocks".into()),
	}
}

fn from_json(uri: Option<&String>, value: serde_json::Value) -> Value {
	let kind = match value {
		serde_json::Value::Null => ValueKind::Nil,
		serde_json::Value::Bool(value) => ValueKind::Boolean(value),
		serde_json::Value::Number(number) => {
			if let Some(value) = number.as_i64() {
				ValueKind::I64(value)
			} else if let Some(value) = number.as_u64() {
				ValueKind::U64(value)
			} else {
				ValueKind::Float(number.as_f64().unwrap_or_default())
			}
		}
		serde_json::Value::String(value) => ValueKind::String(value),
		serde_json::Value::Array(items) => {
			ValueKind::Array(items.into_iter().map(|item| from_json(uri, item)).collect())
		}
		serde_json::Value::Object(entries) => ValueKind::Table(
			entries
				.into_iter()
				.map(|(key, item)| (key, from_json(uri, item)))
				.collect(),
		),
	};
	Value::new(uri, kind)
}

/// Dotted keys become nested tables; every value stays a string.
fn parse_properties(uri: Option<&String>, text: &str) -> ParseResult {
	let entries = java_properties::read(text.as_bytes())?;

	let mut keys: Vec<_> = entries.into_iter().collect();
	keys.sort_by(|a, b| a.0.cmp(&b.0));

	let mut root = Map::new();
	for (key, value) in keys {
		let segments: Vec<&str> = key.split('.').filter(|part| !part.is_empty()).collect();
		if segments.is_empty() {
			continue;
		}
		insert_path(&mut root, &segments, Value::new(uri, ValueKind::String(value)), uri);
	}
	Ok(root)
}

fn insert_path(table: &mut Map<String, Value>, segments: &[&str], value: Value, uri: Option<&String>) {
	let (head, rest) = match segments.split_first() {
		Some(split) => split,
		None => return,
	};

	if rest.is_empty() {
		table.insert(head.to_string(), value);
		return;
	}

	let entry = table
		.entry(head.to_string())
		.or_insert_with(|| Value::new(uri, ValueKind::Table(Map::new())));
	if !matches!(entry.kind, ValueKind::Table(_)) {
		*entry = Value::new(uri, ValueKind::Table(Map::new()));
	}
	if let ValueKind::Table(child) = &mut entry.kind {
		insert_path(child, rest, value, uri);
	}
}
