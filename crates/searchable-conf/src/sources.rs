//! Configuration sources for layered settings
//!
//! Sources are merged together in priority order
//! (environment variables > config files > defaults).

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Separator that nests an environment key into sections
/// (`SEARCH__MIN_TERM_LENGTH` becomes `search.min_term_length`).
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Environment variable configuration source
///
/// Keys are lowercased after the prefix is stripped, and `__` splits a key
/// into nested sections. Values are sniffed: integers, floats and booleans
/// become typed values, JSON arrays and objects are parsed, anything else
/// stays a string.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
	prefix: Option<String>,
}

impl EnvSource {
	/// Create a new environment variable configuration source
	///
	/// # Examples
	///
	/// ```
	/// use searchable_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new();
	/// ```
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix filter for environment variables
	///
	/// # Examples
	///
	/// ```
	/// use searchable_conf::sources::EnvSource;
	///
	/// // Only loads env vars starting with APP_
	/// let source = EnvSource::new().with_prefix("APP_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn load_from<I>(&self, vars: I) -> IndexMap<String, Value>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut config = IndexMap::new();

		for (key, value) in vars {
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(rest) => rest,
					None => continue,
				},
				None => key.as_str(),
			};
			if clean_key.is_empty() {
				continue;
			}

			let lower_key = clean_key.to_lowercase();
			let mut path = lower_key
				.split(ENV_NESTING_SEPARATOR)
				.filter(|segment| !segment.is_empty());

			if let Some(head) = path.next() {
				let rest: Vec<&str> = path.collect();
				insert_nested(&mut config, head, &rest, sniff_value(&value));
			}
		}

		config
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.load_from(std::env::vars()))
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

fn insert_nested(config: &mut IndexMap<String, Value>, head: &str, rest: &[&str], value: Value) {
	if rest.is_empty() {
		config.insert(head.to_string(), value);
		return;
	}

	let entry = config
		.entry(head.to_string())
		.or_insert_with(|| Value::Object(Map::new()));
	if !entry.is_object() {
		*entry = Value::Object(Map::new());
	}
	if let Value::Object(section) = entry {
		insert_into_section(section, rest, value);
	}
}

fn insert_into_section(section: &mut Map<String, Value>, path: &[&str], value: Value) {
	match path {
		[] => {}
		[last] => {
			section.insert(last.to_string(), value);
		}
		[head, rest @ ..] => {
			let entry = section
				.entry(head.to_string())
				.or_insert_with(|| Value::Object(Map::new()));
			if !entry.is_object() {
				*entry = Value::Object(Map::new());
			}
			if let Value::Object(inner) = entry {
				insert_into_section(inner, rest, value);
			}
		}
	}
}

fn sniff_value(raw: &str) -> Value {
	let trimmed = raw.trim();

	if let Ok(num) = trimmed.parse::<i64>() {
		return Value::Number(num.into());
	}
	if let Ok(float) = trimmed.parse::<f64>()
		&& let Some(num) = serde_json::Number::from_f64(float)
	{
		return Value::Number(num);
	}
	match trimmed.to_lowercase().as_str() {
		"true" => return Value::Bool(true),
		"false" => return Value::Bool(false),
		_ => {}
	}
	if (trimmed.starts_with('[') || trimmed.starts_with('{'))
		&& let Ok(parsed) = serde_json::from_str::<Value>(trimmed)
	{
		return parsed;
	}

	Value::String(raw.to_string())
}

/// TOML file configuration source
#[derive(Debug, Clone)]
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// A missing file loads as empty configuration.
	///
	/// # Examples
	///
	/// ```
	/// use searchable_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("search.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Table = toml::from_str(&content)?;

		let json_value = serde_json::to_value(toml_value)?;
		object_to_map(json_value)
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON file configuration source
#[derive(Debug, Clone)]
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	/// Create a new JSON file configuration source
	///
	/// A missing file loads as empty configuration.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let json_value: Value = serde_json::from_str(&content)?;
		object_to_map(json_value)
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

fn object_to_map(value: Value) -> Result<IndexMap<String, Value>, SourceError> {
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SourceError::Parse("Expected object at root".to_string())),
	}
}

/// Default values configuration source
#[derive(Debug, Clone, Default)]
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create a new default values configuration source
	///
	/// # Examples
	///
	/// ```
	/// use searchable_conf::sources::DefaultSource;
	/// use serde_json::json;
	///
	/// let source = DefaultSource::new()
	///     .with_value("search", json!({ "min_term_length": 3 }));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}

	/// Add multiple default values
	pub fn with_defaults<I, K>(mut self, defaults: I) -> Self
	where
		I: IntoIterator<Item = (K, Value)>,
		K: Into<String>,
	{
		self.values
			.extend(defaults.into_iter().map(|(k, v)| (k.into(), v)));
		self
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// Auto-detect configuration source based on file extension
///
/// # Examples
///
/// ```
/// use searchable_conf::sources::{ConfigSource, auto_source};
///
/// let source = auto_source("search.toml").unwrap();
/// assert_eq!(source.priority(), 50);
///
/// assert!(auto_source("search.yaml").is_err());
/// ```
pub fn auto_source(path: impl AsRef<Path>) -> Result<Box<dyn ConfigSource>, SourceError> {
	let path = path.as_ref();
	let ext = path
		.extension()
		.and_then(|e| e.to_str())
		.ok_or_else(|| SourceError::InvalidSource("No file extension".to_string()))?;

	match ext {
		"toml" => Ok(Box::new(TomlFileSource::new(path))),
		"json" => Ok(Box::new(JsonFileSource::new(path))),
		_ => Err(SourceError::InvalidSource(format!(
			"Unsupported file extension: {}",
			ext
		))),
	}
}
