//! Search settings snapshot
//!
//! Settings live in the `search` section of the merged configuration:
//!
//! ```toml
//! [search]
//! default_operator = "LIKE"
//! case_sensitive = false
//! min_term_length = 2
//! default_columns = ["name", "sku"]
//!
//! [search.default_relations]
//! category = ["name"]
//! ```

use crate::column_spec::{ColumnSpec, RelationSpec};
use crate::error::{SearchConfigError, SearchConfigResult};
use crate::resolver::SearchTargets;
use searchable_conf::{DefaultSource, EnvSource, MergedSettings, SettingsBuilder, auto_source};
use searchable_query::BinOper;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Configuration section holding [`SearchSettings`]
pub const SETTINGS_SECTION: &str = "search";

/// Comparison applied between every searched column and the term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SearchOperator {
	/// `LIKE '%term%'`
	#[default]
	Like,
	/// `NOT LIKE '%term%'`
	NotLike,
	/// `ILIKE '%term%'`
	ILike,
	/// `= 'term'`
	Equal,
	/// `<> 'term'`
	NotEqual,
}

impl SearchOperator {
	/// SQL spelling of the operator
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Like => "LIKE",
			Self::NotLike => "NOT LIKE",
			Self::ILike => "ILIKE",
			Self::Equal => "=",
			Self::NotEqual => "<>",
		}
	}

	/// Pattern operators wrap the term in `%` wildcards
	pub fn is_pattern(&self) -> bool {
		matches!(self, Self::Like | Self::NotLike | Self::ILike)
	}

	/// The query-layer operator
	pub fn bin_oper(&self) -> BinOper {
		match self {
			Self::Like => BinOper::Like,
			Self::NotLike => BinOper::NotLike,
			Self::ILike => BinOper::ILike,
			Self::Equal => BinOper::Equal,
			Self::NotEqual => BinOper::NotEqual,
		}
	}
}

impl fmt::Display for SearchOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SearchOperator {
	type Err = SearchConfigError;

	/// Parse an SQL spelling, ignoring case and repeated whitespace
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s
			.split_whitespace()
			.collect::<Vec<_>>()
			.join(" ")
			.to_uppercase();

		match normalized.as_str() {
			"LIKE" => Ok(Self::Like),
			"NOT LIKE" => Ok(Self::NotLike),
			"ILIKE" => Ok(Self::ILike),
			"=" | "==" => Ok(Self::Equal),
			"!=" | "<>" => Ok(Self::NotEqual),
			_ => Err(SearchConfigError::UnknownOperator(s.to_string())),
		}
	}
}

impl TryFrom<String> for SearchOperator {
	type Error = SearchConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<SearchOperator> for String {
	fn from(operator: SearchOperator) -> Self {
		operator.as_str().to_string()
	}
}

/// Immutable search configuration injected into a
/// [`Searcher`](crate::Searcher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
	/// Operator used for every predicate
	pub default_operator: SearchOperator,
	/// When false, both sides are compared through `LOWER()`
	pub case_sensitive: bool,
	/// Terms with fewer characters skip the search entirely
	pub min_term_length: usize,
	/// Columns used in config-defaults mode
	pub default_columns: ColumnSpec,
	/// Relations used in config-defaults mode
	pub default_relations: RelationSpec,
}

impl Default for SearchSettings {
	fn default() -> Self {
		Self {
			default_operator: SearchOperator::Like,
			case_sensitive: false,
			min_term_length: 2,
			default_columns: ColumnSpec::default(),
			default_relations: RelationSpec::new(),
		}
	}
}

impl SearchSettings {
	/// Read the `search` section of merged settings and validate it
	///
	/// A missing section yields the defaults.
	pub fn from_settings(settings: &MergedSettings) -> SearchConfigResult<Self> {
		let search: Self = settings.section(SETTINGS_SECTION)?;
		search.validate()?;
		Ok(search)
	}

	/// Load from defaults, an optional TOML/JSON file and environment
	/// variables (highest priority)
	///
	/// With `env_prefix = Some("APP_")`, `APP_SEARCH__MIN_TERM_LENGTH=3`
	/// overrides `search.min_term_length`. Without a prefix the environment
	/// is not consulted.
	pub fn load(path: Option<&Path>, env_prefix: Option<&str>) -> SearchConfigResult<Self> {
		let defaults = serde_json::to_value(Self::default())
			.map_err(|e| SearchConfigError::Source(e.into()))?;
		let mut builder = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value(SETTINGS_SECTION, defaults));

		if let Some(path) = path {
			builder = builder.add_boxed_source(auto_source(path)?);
		}
		if let Some(prefix) = env_prefix {
			builder = builder.add_source(EnvSource::new().with_prefix(prefix));
		}

		Self::from_settings(&builder.build()?)
	}

	/// Reject empty column names, malformed relation paths and
	/// table-qualified relation columns
	///
	/// Base columns may be qualified (`products.name`). Relation columns are
	/// resolved against the aliased related table, so they must be bare.
	pub fn validate(&self) -> SearchConfigResult<()> {
		if self.default_columns.names().any(str::is_empty) {
			return Err(SearchConfigError::EmptyColumn("default_columns".to_string()));
		}

		for (path, columns) in &self.default_relations {
			if path.is_empty() || path.split('.').any(str::is_empty) {
				return Err(SearchConfigError::InvalidRelationPath(path.clone()));
			}
			if columns.names().any(str::is_empty) {
				return Err(SearchConfigError::EmptyColumn(format!(
					"default_relations.{}",
					path
				)));
			}
			if let Some(column) = columns.names().find(|column| column.contains('.')) {
				return Err(SearchConfigError::QualifiedRelationColumn {
					path: path.clone(),
					column: column.to_string(),
				});
			}
		}

		Ok(())
	}

	/// The config-defaults search targets
	pub fn config_targets(&self) -> SearchTargets {
		SearchTargets {
			columns: self.default_columns.clone(),
			relations: self.default_relations.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("LIKE", SearchOperator::Like)]
	#[case("like", SearchOperator::Like)]
	#[case("not   like", SearchOperator::NotLike)]
	#[case("ILike", SearchOperator::ILike)]
	#[case("=", SearchOperator::Equal)]
	#[case("!=", SearchOperator::NotEqual)]
	#[case(" <> ", SearchOperator::NotEqual)]
	fn test_operator_spellings(#[case] raw: &str, #[case] expected: SearchOperator) {
		assert_eq!(raw.parse::<SearchOperator>().unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_operator() {
		let err = "REGEXP".parse::<SearchOperator>().unwrap_err();
		assert!(matches!(err, SearchConfigError::UnknownOperator(ref op) if op == "REGEXP"));
	}

	#[rstest]
	#[case(SearchOperator::Like, true)]
	#[case(SearchOperator::NotLike, true)]
	#[case(SearchOperator::ILike, true)]
	#[case(SearchOperator::Equal, false)]
	#[case(SearchOperator::NotEqual, false)]
	fn test_is_pattern(#[case] operator: SearchOperator, #[case] expected: bool) {
		assert_eq!(operator.is_pattern(), expected);
	}

	#[rstest]
	fn test_defaults() {
		let settings = SearchSettings::default();

		assert_eq!(settings.default_operator, SearchOperator::Like);
		assert!(!settings.case_sensitive);
		assert_eq!(settings.min_term_length, 2);
		assert!(settings.default_columns.is_empty());
		assert!(settings.default_relations.is_empty());
	}

	#[rstest]
	fn test_partial_section_fills_defaults() {
		let settings: SearchSettings = serde_json::from_value(json!({
			"default_operator": "ilike",
			"default_relations": { "category": "name" },
		}))
		.unwrap();

		assert_eq!(settings.default_operator, SearchOperator::ILike);
		assert_eq!(settings.min_term_length, 2);
		assert_eq!(
			settings.default_relations.get("category"),
			Some(&ColumnSpec::from("name"))
		);
	}

	#[rstest]
	fn test_operator_serializes_as_sql() {
		let value = serde_json::to_value(SearchSettings::default()).unwrap();
		assert_eq!(value["default_operator"], json!("LIKE"));
	}

	#[rstest]
	#[case::empty_column(json!({ "default_columns": ["name", ""] }))]
	#[case::empty_path(json!({ "default_relations": { "": ["name"] } }))]
	#[case::empty_hop(json!({ "default_relations": { "category..parent": ["name"] } }))]
	#[case::empty_relation_column(json!({ "default_relations": { "category": { "": 1 } } }))]
	#[case::qualified_relation_column(json!({ "default_relations": { "category": ["categories.name"] } }))]
	#[case::qualified_ranked_relation_column(json!({ "default_relations": { "category": { "name": 1, "categories.slug": 2 } } }))]
	fn test_validate_rejects(#[case] raw: serde_json::Value) {
		let settings: SearchSettings = serde_json::from_value(raw).unwrap();
		assert!(settings.validate().is_err());
	}

	#[rstest]
	fn test_qualified_base_column_is_allowed() {
		let settings = SearchSettings {
			default_columns: ColumnSpec::from(["products.name"]),
			..Default::default()
		};

		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_config_targets() {
		let settings = SearchSettings {
			default_columns: ColumnSpec::from(["name"]),
			..Default::default()
		};

		let targets = settings.config_targets();

		assert_eq!(targets.columns, ColumnSpec::from(["name"]));
		assert!(targets.relations.is_empty());
	}
}
