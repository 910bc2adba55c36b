//! Target resolution
//!
//! Picks exactly one of the three candidate sources (request parameters,
//! model defaults, configuration defaults) and normalizes it. Sources are
//! never merged and an empty selected source is not backfilled.

use crate::column_spec::{ColumnSpec, RelationSpec, normalize_relations};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which source supplies the search targets for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriorityMode {
	/// Columns and relations passed with the request
	#[default]
	Params,
	/// Targets declared by the searched model
	ModelDefaults,
	/// Targets from the `search` configuration section
	ConfigDefaults,
}

impl PriorityMode {
	/// Canonical spelling
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Params => "params",
			Self::ModelDefaults => "model_defaults",
			Self::ConfigDefaults => "config_defaults",
		}
	}

	/// Parse a mode, mapping anything unrecognized to [`PriorityMode::Params`]
	///
	/// Case, `_`, `-` and spaces are ignored, and the short forms `model`
	/// and `config` are accepted.
	///
	/// # Examples
	///
	/// ```
	/// use searchable_filters::PriorityMode;
	///
	/// assert_eq!(PriorityMode::parse_lenient("modelDefaults"), PriorityMode::ModelDefaults);
	/// assert_eq!(PriorityMode::parse_lenient("config"), PriorityMode::ConfigDefaults);
	/// assert_eq!(PriorityMode::parse_lenient("whatever"), PriorityMode::Params);
	/// ```
	pub fn parse_lenient(value: &str) -> Self {
		let key: String = value
			.chars()
			.filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
			.flat_map(char::to_lowercase)
			.collect();

		match key.as_str() {
			"model" | "modeldefaults" | "models" => Self::ModelDefaults,
			"config" | "configdefaults" | "configuration" => Self::ConfigDefaults,
			_ => Self::Params,
		}
	}
}

impl fmt::Display for PriorityMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PriorityMode {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse_lenient(s))
	}
}

impl From<&str> for PriorityMode {
	fn from(value: &str) -> Self {
		Self::parse_lenient(value)
	}
}

impl From<String> for PriorityMode {
	fn from(value: String) -> Self {
		Self::parse_lenient(&value)
	}
}

impl From<PriorityMode> for String {
	fn from(mode: PriorityMode) -> Self {
		mode.as_str().to_string()
	}
}

/// One candidate source of search targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTargets {
	/// Columns on the searched table
	#[serde(default)]
	pub columns: ColumnSpec,
	/// Columns on related records, keyed by relation path
	#[serde(default)]
	pub relations: RelationSpec,
}

impl SearchTargets {
	/// Empty targets
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the searched columns
	pub fn columns(mut self, columns: impl Into<ColumnSpec>) -> Self {
		self.columns = columns.into();
		self
	}

	/// Add (or replace) the columns searched through one relation path
	///
	/// Columns are bare names on the related table (`name`, not
	/// `categories.name`); the related table is aliased in the generated
	/// subquery, so a table-qualified column fails at execution time.
	pub fn relation(mut self, path: impl Into<String>, columns: impl Into<ColumnSpec>) -> Self {
		self.relations.insert(path.into(), columns.into());
		self
	}

	/// Whether neither columns nor relations are declared
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty() && self.relations.is_empty()
	}

	/// Normalize into an effective configuration
	pub fn normalize(&self) -> EffectiveSearchConfig {
		EffectiveSearchConfig {
			columns: self.columns.normalize(),
			relations: normalize_relations(&self.relations),
		}
	}
}

/// Resolved, normalized search targets for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveSearchConfig {
	/// Base columns in search order
	pub columns: Vec<String>,
	/// Related columns in search order, keyed by relation path
	pub relations: IndexMap<String, Vec<String>>,
}

impl EffectiveSearchConfig {
	/// Whether nothing would be searched
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty() && self.relations.is_empty()
	}

	/// Number of column predicates the composed condition will hold
	pub fn predicate_count(&self) -> usize {
		self.columns.len() + self.relations.values().map(Vec::len).sum::<usize>()
	}
}

/// Select the source named by `mode` and normalize it
///
/// # Examples
///
/// ```
/// use searchable_filters::{PriorityMode, SearchTargets, resolve};
///
/// let params = SearchTargets::new().columns(["title"]);
/// let model = SearchTargets::new().columns([("sku", 2), ("name", 1)]);
/// let config = SearchTargets::new();
///
/// let effective = resolve(PriorityMode::ModelDefaults, &params, &model, &config);
/// assert_eq!(effective.columns, vec!["name", "sku"]);
/// ```
pub fn resolve(
	mode: PriorityMode,
	params: &SearchTargets,
	model: &SearchTargets,
	config: &SearchTargets,
) -> EffectiveSearchConfig {
	let selected = match mode {
		PriorityMode::Params => params,
		PriorityMode::ModelDefaults => model,
		PriorityMode::ConfigDefaults => config,
	};
	selected.normalize()
}
