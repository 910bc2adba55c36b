//! Column specifications and their normalization
//!
//! A [`ColumnSpec`] is either a plain ordered list of column names or a rank
//! map (column name to priority, lower first). Both normalize into the same
//! shape: an ordered list of names.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// Numeric rank of a column; integers and floats are both accepted
///
/// Ranks compare by numeric value under [`f64::total_cmp`], so `Int(1)` and
/// `Float(1.0)` are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
	Int(i64),
	Float(f64),
}

impl Rank {
	/// The rank as a float
	pub fn as_f64(&self) -> f64 {
		match *self {
			Self::Int(rank) => rank as f64,
			Self::Float(rank) => rank,
		}
	}
}

impl Ord for Rank {
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_f64().total_cmp(&other.as_f64())
	}
}

impl PartialOrd for Rank {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Rank {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Rank {}

impl From<i64> for Rank {
	fn from(rank: i64) -> Self {
		Self::Int(rank)
	}
}

impl From<i32> for Rank {
	fn from(rank: i32) -> Self {
		Self::Int(i64::from(rank))
	}
}

impl From<f64> for Rank {
	fn from(rank: f64) -> Self {
		Self::Float(rank)
	}
}

/// Mapping from relation path (`category` or `category.parent`) to the
/// columns searched on the related record.
pub type RelationSpec = IndexMap<String, ColumnSpec>;

/// Columns to search, either in the given order or ranked
///
/// # Examples
///
/// ```
/// use searchable_filters::ColumnSpec;
///
/// let ranked = ColumnSpec::ranked([("sku", 2), ("name", 1)]);
/// assert_eq!(ranked.normalize(), vec!["name", "sku"]);
///
/// let fractional = ColumnSpec::ranked([("sku", 1.5), ("name", 1.0), ("slug", 2.0)]);
/// assert_eq!(fractional.normalize(), vec!["name", "sku", "slug"]);
///
/// let ordered = ColumnSpec::from(["sku", "name"]);
/// assert_eq!(ordered.normalize(), vec!["sku", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColumnSpec {
	/// Column names searched in the given order
	Ordered(Vec<String>),
	/// Column names with a numeric rank; lower ranks come first
	Ranked(IndexMap<String, Rank>),
}

impl Default for ColumnSpec {
	fn default() -> Self {
		Self::Ordered(Vec::new())
	}
}

impl ColumnSpec {
	/// An ordered column list
	pub fn ordered<I, S>(columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Ordered(columns.into_iter().map(Into::into).collect())
	}

	/// A rank map, keeping the given entry order for ties
	pub fn ranked<I, S, R>(columns: I) -> Self
	where
		I: IntoIterator<Item = (S, R)>,
		S: Into<String>,
		R: Into<Rank>,
	{
		Self::Ranked(
			columns
				.into_iter()
				.map(|(name, rank)| (name.into(), rank.into()))
				.collect(),
		)
	}

	/// Number of columns named
	pub fn len(&self) -> usize {
		match self {
			Self::Ordered(columns) => columns.len(),
			Self::Ranked(columns) => columns.len(),
		}
	}

	/// Whether no column is named
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Flatten into column names in search order
	///
	/// `Ordered` passes through unchanged. `Ranked` is stable-sorted
	/// ascending by rank, so equal ranks keep their input order, and the
	/// ranks are dropped.
	pub fn normalize(&self) -> Vec<String> {
		match self {
			Self::Ordered(columns) => columns.clone(),
			Self::Ranked(columns) => {
				let mut entries: Vec<(&String, Rank)> =
					columns.iter().map(|(name, rank)| (name, *rank)).collect();
				entries.sort_by(|(_, left), (_, right)| left.cmp(right));
				entries.into_iter().map(|(name, _)| name.clone()).collect()
			}
		}
	}

	/// Normalize into an `Ordered` spec
	pub fn into_ordered(self) -> Self {
		match self {
			Self::Ordered(_) => self,
			Self::Ranked(_) => Self::Ordered(self.normalize()),
		}
	}

	/// Iterate over the named columns in declaration order (not rank order)
	pub fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
		match self {
			Self::Ordered(columns) => Box::new(columns.iter().map(String::as_str)),
			Self::Ranked(columns) => Box::new(columns.keys().map(String::as_str)),
		}
	}
}

/// Normalize every relation's columns, keeping relation order
pub fn normalize_relations(relations: &RelationSpec) -> IndexMap<String, Vec<String>> {
	relations
		.iter()
		.map(|(path, columns)| (path.clone(), columns.normalize()))
		.collect()
}

impl From<Vec<String>> for ColumnSpec {
	fn from(columns: Vec<String>) -> Self {
		Self::Ordered(columns)
	}
}

impl From<Vec<&str>> for ColumnSpec {
	fn from(columns: Vec<&str>) -> Self {
		Self::ordered(columns)
	}
}

impl<const N: usize> From<[&str; N]> for ColumnSpec {
	fn from(columns: [&str; N]) -> Self {
		Self::ordered(columns)
	}
}

impl From<&[&str]> for ColumnSpec {
	fn from(columns: &[&str]) -> Self {
		Self::ordered(columns.iter().copied())
	}
}

// A single column name becomes a one-element list.
impl From<&str> for ColumnSpec {
	fn from(column: &str) -> Self {
		Self::Ordered(vec![column.to_string()])
	}
}

impl From<String> for ColumnSpec {
	fn from(column: String) -> Self {
		Self::Ordered(vec![column])
	}
}

impl From<IndexMap<String, Rank>> for ColumnSpec {
	fn from(columns: IndexMap<String, Rank>) -> Self {
		Self::Ranked(columns)
	}
}

impl From<IndexMap<String, i64>> for ColumnSpec {
	fn from(columns: IndexMap<String, i64>) -> Self {
		Self::ranked(columns)
	}
}

impl<const N: usize> From<[(&str, i64); N]> for ColumnSpec {
	fn from(columns: [(&str, i64); N]) -> Self {
		Self::ranked(columns)
	}
}

impl<const N: usize> From<[(&str, f64); N]> for ColumnSpec {
	fn from(columns: [(&str, f64); N]) -> Self {
		Self::ranked(columns)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColumnSpec {
	Single(String),
	Ordered(Vec<String>),
	Ranked(IndexMap<String, Rank>),
}

impl<'de> Deserialize<'de> for ColumnSpec {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match RawColumnSpec::deserialize(deserializer)? {
			RawColumnSpec::Single(column) => Self::Ordered(vec![column]),
			RawColumnSpec::Ordered(columns) => Self::Ordered(columns),
			RawColumnSpec::Ranked(columns) => Self::Ranked(columns),
		})
	}
}
