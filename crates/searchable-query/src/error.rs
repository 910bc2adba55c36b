//! Error types for statement expansion and building.

use thiserror::Error;

/// Errors raised while lowering relation nodes into SQL.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
	/// A relation path names a relation that is not registered for the table
	#[error("unknown relation `{relation}` on table `{table}`")]
	UnknownRelation {
		/// Table the relation was looked up on
		table: String,
		/// Relation name that was not found
		relation: String,
	},

	/// A relation path is used in a statement that has no FROM table
	#[error("relation path `{path}` used in a statement without a FROM table")]
	MissingTable {
		/// The relation path that could not be anchored
		path: String,
	},
}

/// Result alias for query-layer operations.
pub type QueryResult<T> = Result<T, QueryError>;
