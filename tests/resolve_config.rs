use std::fs;
use std::path::Path;

use genlayout::{
	ConfigResolver, ConfigStore, DEFAULT_CONFIG_FILE, Error, GenOpts, LanguageConfig,
	LanguageOpts, read_config,
};
use tempfile::tempdir;

fn default_languages() -> LanguageConfig {
	read_config(DEFAULT_CONFIG_FILE)
		.expect("embedded default")
		.language_config()
		.expect("decodes")
}

fn path_str(path: &Path) -> &str {
	path.to_str().expect("utf-8 temp path")
}

#[test]
fn embedded_default_defines_golang() {
	let languages = default_languages();
	let golang = languages.get("golang").expect("golang entry");
	assert!(!golang.layout.application.is_empty());
	assert!(!golang.layout.models.is_empty());
}

#[test]
fn every_format_matches_the_embedded_default() {
	let expected = default_languages();
	let json = serde_json::to_string_pretty(&expected).unwrap();
	let toml = toml::to_string(&expected).unwrap();

	let dir = tempdir().unwrap();
	// JSON is also valid YAML flow syntax.
	for (name, contents) in [
		("swagger.json", &json),
		("swagger.yaml", &json),
		("swagger.yml", &json),
		("swagger.toml", &toml),
	] {
		let path = dir.path().join(name);
		fs::write(&path, contents).unwrap();

		let store = read_config(path_str(&path)).unwrap_or_else(|err| panic!("{name}: {err}"));
		assert_eq!(store.language_config().unwrap(), expected, "{name}");
	}
}

#[test]
fn missing_absolute_path_is_reported_verbatim() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("missing.yaml");
	let path = path_str(&path);

	let err = read_config(path).unwrap_err();
	assert_eq!(err.to_string(), format!("can't find file for \"{path}\""));
}

#[test]
fn missing_relative_path_is_reported_verbatim() {
	let err = read_config("no/such/dir/swagger.yml").unwrap_err();
	assert_eq!(err.to_string(), r#"can't find file for "no/such/dir/swagger.yml""#);
}

#[test]
fn empty_path_is_not_found() {
	let err = read_config("").unwrap_err();
	assert_eq!(err.to_string(), r#"can't find file for """#);
}

#[test]
fn resolving_twice_yields_equal_stores() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger.yaml");
	fs::write(
		&path,
		"golang:\n  layout:\n    models:\n      - name: definition\n        source: asset:model\n",
	)
	.unwrap();

	let resolver = ConfigResolver::new();
	let first = resolver.resolve(path_str(&path)).unwrap();
	let second = resolver.resolve(path_str(&path)).unwrap();
	assert_eq!(
		first.language_config().unwrap(),
		second.language_config().unwrap()
	);
}

#[test]
fn changes_on_disk_are_picked_up_without_caching() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger.json");
	fs::write(&path, r#"{"golang": {"layout": {}}}"#).unwrap();
	let before = read_config(path_str(&path)).unwrap().language_config().unwrap();

	fs::write(&path, r#"{"golang": {"layout": {}}, "python": {"layout": {}}}"#).unwrap();
	let after = read_config(path_str(&path)).unwrap().language_config().unwrap();

	assert_eq!(before.len(), 1);
	assert_eq!(after.len(), 2);
}

#[test]
fn file_without_extension_is_rejected() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger");
	fs::write(&path, "golang:\n  layout: {}\n").unwrap();

	match read_config(path_str(&path)) {
		Err(Error::UnsupportedFormat { format }) => assert_eq!(format, ""),
		other => panic!("expected unsupported format, got {other:?}"),
	}
}

#[test]
fn unsupported_extension_is_rejected() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger.txt");
	fs::write(&path, "golang: {}\n").unwrap();

	match read_config(path_str(&path)) {
		Err(Error::UnsupportedFormat { format }) => assert_eq!(format, "txt"),
		other => panic!("expected unsupported format, got {other:?}"),
	}
}

#[test]
fn malformed_document_is_a_parse_error() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger.json");
	fs::write(&path, "{ \"golang\": ").unwrap();

	let err = read_config(path_str(&path)).unwrap_err();
	assert!(matches!(err, Error::Parse(_)), "{err:?}");
}

#[test]
fn directory_path_fails_to_read() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("layouts.yaml");
	fs::create_dir(&path).unwrap();

	let err = read_config(path_str(&path)).unwrap_err();
	assert!(
		matches!(err, Error::Read { .. } | Error::Open { .. }),
		"{err:?}"
	);
}

#[test]
fn default_layout_configures_generation_options() {
	let store = read_config(DEFAULT_CONFIG_FILE).unwrap();
	let golang = store.language("golang").unwrap();

	let mut opts = GenOpts::default();
	golang.configure_opts(&mut opts).unwrap();
	assert_eq!(opts.sections, golang.layout);
	assert_eq!(opts.language_opts, Some(LanguageOpts::golang()));

	let mut opts = GenOpts::default();
	opts.apply_language(&store).unwrap();
	assert_eq!(opts.sections, golang.layout);
}

#[test]
fn hcl_layouts_are_loaded() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger.hcl");
	fs::write(
		&path,
		r#"
golang = {
  layout = {
    models = [
      { name = "definition", source = "asset:model", file_name = "{{ .Name }}.go" }
    ]
  }
}
"#,
	)
	.unwrap();

	let golang = read_config(path_str(&path)).unwrap().language("golang").unwrap();
	assert_eq!(golang.layout.models.len(), 1);
	assert_eq!(golang.layout.models[0].source, "asset:model");
	assert_eq!(golang.layout.models[0].file_name, "{{ .Name }}.go");
}

#[test]
fn properties_documents_are_loaded() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("swagger.properties");
	fs::write(&path, "golang.layout.target = ./gen\npython.layout.target = ./py\n").unwrap();

	let store = read_config(path_str(&path)).unwrap();
	let mut names: Vec<_> = store.language_config().unwrap().into_keys().collect();
	names.sort();
	assert_eq!(names, vec!["golang", "python"]);
	let target: String = store.decode_key("golang.layout.target").unwrap();
	assert_eq!(target, "./gen");
}
