//! Per-invocation search request

use crate::column_spec::{ColumnSpec, RelationSpec};
use crate::model::SearchableModel;
use crate::resolver::{PriorityMode, SearchTargets};

/// One search invocation: the term plus the candidate targets
///
/// Starts with no columns, no relations and [`PriorityMode::Params`].
///
/// # Examples
///
/// ```
/// use searchable_filters::{PriorityMode, SearchRequest};
///
/// let request = SearchRequest::new("lap")
///     .columns(["name", "sku"])
///     .relation("category", ["name"])
///     .priority("params");
///
/// assert_eq!(request.term(), Some("lap"));
/// assert_eq!(request.priority_mode(), PriorityMode::Params);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
	term: Option<String>,
	params: SearchTargets,
	priority_mode: PriorityMode,
	model: Option<SearchTargets>,
}

impl SearchRequest {
	/// A request for `term`
	pub fn new(term: impl Into<String>) -> Self {
		Self {
			term: Some(term.into()),
			..Default::default()
		}
	}

	/// A request whose term may be absent (e.g. an optional query parameter)
	pub fn from_term<S: Into<String>>(term: Option<S>) -> Self {
		Self {
			term: term.map(Into::into),
			..Default::default()
		}
	}

	/// Columns searched in params mode
	pub fn columns(mut self, columns: impl Into<ColumnSpec>) -> Self {
		self.params.columns = columns.into();
		self
	}

	/// Add related columns searched in params mode
	///
	/// Columns are bare names on the related table (`name`, not
	/// `categories.name`); the related table is aliased in the generated
	/// subquery, so a table-qualified column fails at execution time.
	pub fn relation(mut self, path: impl Into<String>, columns: impl Into<ColumnSpec>) -> Self {
		self.params.relations.insert(path.into(), columns.into());
		self
	}

	/// Replace all relations searched in params mode
	pub fn relations(mut self, relations: RelationSpec) -> Self {
		self.params.relations = relations;
		self
	}

	/// Select the target source; strings are parsed leniently
	pub fn priority(mut self, mode: impl Into<PriorityMode>) -> Self {
		self.priority_mode = mode.into();
		self
	}

	/// Use `M`'s declared targets as the model source
	pub fn model<M: SearchableModel>(mut self) -> Self {
		self.model = M::search_targets();
		self
	}

	/// Set the model source directly
	pub fn model_targets(mut self, targets: Option<SearchTargets>) -> Self {
		self.model = targets;
		self
	}

	/// The search term, if any
	pub fn term(&self) -> Option<&str> {
		self.term.as_deref()
	}

	/// Targets passed with the request
	pub fn params(&self) -> &SearchTargets {
		&self.params
	}

	/// Requested priority mode
	pub fn priority_mode(&self) -> PriorityMode {
		self.priority_mode
	}

	/// Targets declared by the model, if one was attached
	pub fn model_source(&self) -> Option<&SearchTargets> {
		self.model.as_ref()
	}
}
