//! Settings builder merging configuration sources by priority

use crate::sources::{ConfigSource, SourceError};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errors raised while building or reading merged settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {description}: {source}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	#[error("Missing configuration key: {0}")]
	MissingKey(String),

	#[error("Invalid value for `{key}`: {source}")]
	Deserialize {
		key: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Invalid configuration: {0}")]
	Invalid(String),
}

/// Builder collecting configuration sources
///
/// # Examples
///
/// ```
/// use searchable_conf::builder::SettingsBuilder;
/// use searchable_conf::sources::DefaultSource;
/// use serde_json::json;
///
/// let merged = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("search", json!({ "min_term_length": 2 })))
///     .build()
///     .unwrap();
///
/// assert_eq!(merged.get::<u64>("search.min_term_length").unwrap(), 2);
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create an empty builder
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Add a configuration source
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Add an already boxed source, e.g. from [`auto_source`](crate::sources::auto_source)
	pub fn add_boxed_source(mut self, source: Box<dyn ConfigSource>) -> Self {
		self.sources.push(source);
		self
	}

	/// Load every source and merge them, lowest priority first
	///
	/// Objects are merged key by key; any other value from a higher
	/// priority source replaces the lower one. Sources with equal priority
	/// apply in the order they were added.
	pub fn build(mut self) -> Result<MergedSettings, SettingsError> {
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = Map::new();
		for source in &self.sources {
			let description = source.description();
			let values = source.load().map_err(|source| SettingsError::Source {
				description: description.clone(),
				source,
			})?;
			tracing::debug!(
				source = %description,
				priority = source.priority(),
				keys = values.len(),
				"loaded configuration source"
			);

			for (key, value) in values {
				merge_value(&mut merged, key, value);
			}
		}

		Ok(MergedSettings {
			values: merged.into_iter().collect(),
		})
	}
}

fn merge_value(target: &mut Map<String, Value>, key: String, value: Value) {
	match value {
		Value::Object(incoming) => match target.get_mut(&key) {
			Some(Value::Object(existing)) => {
				for (inner_key, inner_value) in incoming {
					merge_value(existing, inner_key, inner_value);
				}
			}
			_ => {
				target.insert(key, Value::Object(incoming));
			}
		},
		other => {
			target.insert(key, other);
		}
	}
}

/// Immutable result of merging all configuration sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedSettings {
	values: IndexMap<String, Value>,
}

impl MergedSettings {
	/// Borrow the merged top-level values
	pub fn as_map(&self) -> &IndexMap<String, Value> {
		&self.values
	}

	/// Look up a raw value by dotted key (`search.min_term_length`)
	pub fn raw(&self, key: &str) -> Option<&Value> {
		let mut segments = key.split('.');
		let head = segments.next()?;
		segments.try_fold(self.values.get(head)?, |value, segment| {
			value.as_object()?.get(segment)
		})
	}

	/// Whether a dotted key is present
	pub fn contains(&self, key: &str) -> bool {
		self.raw(key).is_some()
	}

	/// Deserialize the value stored under a dotted key
	pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, SettingsError> {
		let value = self
			.raw(key)
			.ok_or_else(|| SettingsError::MissingKey(key.to_string()))?;
		deserialize(key, value.clone())
	}

	/// Deserialize a value, falling back to `default` when the key is
	/// missing or holds the wrong shape
	pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
		self.get(key).unwrap_or(default)
	}

	/// Deserialize a whole section
	///
	/// A missing section deserializes from an empty object, so types with
	/// `#[serde(default)]` fields come back fully defaulted.
	pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<T, SettingsError> {
		let value = self
			.raw(key)
			.cloned()
			.unwrap_or_else(|| Value::Object(Map::new()));
		deserialize(key, value)
	}
}

fn deserialize<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, SettingsError> {
	serde_json::from_value(value).map_err(|source| SettingsError::Deserialize {
		key: key.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sources::DefaultSource;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde::Deserialize;
	use serde_json::json;

	struct FixedSource {
		priority: u8,
		values: Value,
	}

	impl ConfigSource for FixedSource {
		fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
			match &self.values {
				Value::Object(map) => Ok(map.clone().into_iter().collect()),
				_ => Err(SourceError::Parse("not an object".to_string())),
			}
		}

		fn priority(&self) -> u8 {
			self.priority
		}

		fn description(&self) -> String {
			format!("fixed source ({})", self.priority)
		}
	}

	fn fixed(priority: u8, values: Value) -> FixedSource {
		FixedSource { priority, values }
	}

	#[rstest]
	fn test_higher_priority_wins_regardless_of_order() {
		let merged = SettingsBuilder::new()
			.add_source(fixed(100, json!({ "operator": "ILIKE" })))
			.add_source(fixed(0, json!({ "operator": "LIKE", "limit": 2 })))
			.build()
			.unwrap();

		assert_eq!(merged.get::<String>("operator").unwrap(), "ILIKE");
		assert_eq!(merged.get::<u32>("limit").unwrap(), 2);
	}

	#[rstest]
	fn test_objects_are_deep_merged() {
		let merged = SettingsBuilder::new()
			.add_source(fixed(
				0,
				json!({ "search": { "case_sensitive": false, "default_columns": ["name"] } }),
			))
			.add_source(fixed(
				50,
				json!({ "search": { "default_columns": ["sku"], "min_term_length": 3 } }),
			))
			.build()
			.unwrap();

		assert_eq!(
			merged.raw("search"),
			Some(&json!({
				"case_sensitive": false,
				"default_columns": ["sku"],
				"min_term_length": 3,
			}))
		);
	}

	#[rstest]
	fn test_equal_priority_keeps_insertion_order() {
		let merged = SettingsBuilder::new()
			.add_source(fixed(50, json!({ "name": "first" })))
			.add_source(fixed(50, json!({ "name": "second" })))
			.build()
			.unwrap();

		assert_eq!(merged.get::<String>("name").unwrap(), "second");
	}

	#[rstest]
	fn test_source_error_names_source() {
		let err = SettingsBuilder::new()
			.add_source(fixed(7, json!(["not", "an", "object"])))
			.build()
			.unwrap_err();

		assert_eq!(
			err.to_string(),
			"Failed to load fixed source (7): Parse error: not an object"
		);
	}

	#[rstest]
	#[case("search.min_term_length", true)]
	#[case("search", true)]
	#[case("search.missing", false)]
	#[case("search.min_term_length.deeper", false)]
	#[case("", false)]
	fn test_contains_dotted_key(#[case] key: &str, #[case] expected: bool) {
		let merged = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("search", json!({ "min_term_length": 2 })))
			.build()
			.unwrap();

		assert_eq!(merged.contains(key), expected);
	}

	#[rstest]
	fn test_get_missing_and_mistyped() {
		let merged = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("port", json!("eighty")))
			.build()
			.unwrap();

		assert!(matches!(
			merged.get::<u16>("host"),
			Err(SettingsError::MissingKey(ref key)) if key == "host"
		));
		assert!(matches!(
			merged.get::<u16>("port"),
			Err(SettingsError::Deserialize { .. })
		));
		assert_eq!(merged.get_or("port", 80u16), 80);
	}

	#[derive(Debug, Deserialize, PartialEq)]
	struct Section {
		#[serde(default)]
		enabled: bool,
		#[serde(default = "default_depth")]
		depth: u8,
	}

	fn default_depth() -> u8 {
		4
	}

	#[rstest]
	fn test_missing_section_uses_serde_defaults() {
		let merged = SettingsBuilder::new().build().unwrap();

		let section: Section = merged.section("absent").unwrap();

		assert_eq!(
			section,
			Section {
				enabled: false,
				depth: 4
			}
		);
	}
}
