//! Integration tests for merging files, defaults and environment variables.

use pretty_assertions::assert_eq;
use rstest::*;
use searchable_conf::prelude::*;
use serde_json::json;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

/// Fixture providing a directory with a TOML and a JSON settings file
#[fixture]
fn config_dir() -> TempDir {
	let dir = TempDir::new().expect("Failed to create temporary directory");

	let toml = r#"
[search]
default_operator = "LIKE"
min_term_length = 3
default_columns = { name = 1, sku = 2 }

[search.default_relations]
category = ["name"]
"#;
	fs::write(dir.path().join("search.toml"), toml).expect("Failed to write search.toml");

	let json = json!({
		"search": { "case_sensitive": true }
	});
	fs::write(
		dir.path().join("search.json"),
		serde_json::to_string_pretty(&json).expect("Failed to serialize JSON"),
	)
	.expect("Failed to write search.json");

	dir
}

#[rstest]
fn test_files_layer_over_defaults(config_dir: TempDir) {
	// Arrange
	let builder = SettingsBuilder::new()
		.add_source(DefaultSource::new().with_value(
			"search",
			json!({ "default_operator": "ILIKE", "case_sensitive": false, "min_term_length": 2 }),
		))
		.add_source(TomlFileSource::new(config_dir.path().join("search.toml")))
		.add_source(JsonFileSource::new(config_dir.path().join("search.json")));

	// Act
	let merged = builder.build().expect("Failed to build settings");

	// Assert
	assert_eq!(merged.get::<String>("search.default_operator").unwrap(), "LIKE");
	assert_eq!(merged.get::<u64>("search.min_term_length").unwrap(), 3);
	assert!(merged.get::<bool>("search.case_sensitive").unwrap());
	assert_eq!(
		merged.raw("search.default_columns"),
		Some(&json!({ "name": 1, "sku": 2 }))
	);
}

#[rstest]
fn test_table_order_is_preserved(config_dir: TempDir) {
	let merged = SettingsBuilder::new()
		.add_source(TomlFileSource::new(config_dir.path().join("search.toml")))
		.build()
		.unwrap();

	let keys: Vec<&String> = merged
		.raw("search")
		.and_then(|section| section.as_object())
		.map(|section| section.keys().collect())
		.unwrap_or_default();

	assert_eq!(
		keys,
		vec![
			"default_operator",
			"min_term_length",
			"default_columns",
			"default_relations"
		]
	);
}

#[rstest]
fn test_auto_source_detects_extension(config_dir: TempDir) {
	let merged = SettingsBuilder::new()
		.add_boxed_source(auto_source(config_dir.path().join("search.json")).unwrap())
		.build()
		.unwrap();

	assert!(merged.get::<bool>("search.case_sensitive").unwrap());
}

#[rstest]
fn test_invalid_toml_is_reported(config_dir: TempDir) {
	let path = config_dir.path().join("broken.toml");
	fs::write(&path, "[search\nmin_term_length = ").unwrap();

	let err = SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.build()
		.unwrap_err();

	assert!(matches!(
		err,
		SettingsError::Source {
			source: SourceError::Toml(_),
			..
		}
	));
}

#[rstest]
#[serial(search_env)]
fn test_env_overrides_files(config_dir: TempDir) {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("SEARCHABLE_TEST_SEARCH__MIN_TERM_LENGTH", "5");
		env::set_var("SEARCHABLE_TEST_SEARCH__DEFAULT_COLUMNS", r#"["title"]"#);
	}

	let merged = SettingsBuilder::new()
		.add_source(EnvSource::new().with_prefix("SEARCHABLE_TEST_"))
		.add_source(TomlFileSource::new(config_dir.path().join("search.toml")))
		.build();

	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::remove_var("SEARCHABLE_TEST_SEARCH__MIN_TERM_LENGTH");
		env::remove_var("SEARCHABLE_TEST_SEARCH__DEFAULT_COLUMNS");
	}

	let merged = merged.expect("Failed to build settings");
	assert_eq!(merged.get::<u64>("search.min_term_length").unwrap(), 5);
	assert_eq!(
		merged.get::<Vec<String>>("search.default_columns").unwrap(),
		vec!["title".to_string()]
	);
	// untouched keys still come from the file
	assert_eq!(merged.get::<String>("search.default_operator").unwrap(), "LIKE");
	assert_eq!(
		merged.raw("search.default_relations"),
		Some(&json!({ "category": ["name"] }))
	);
}
