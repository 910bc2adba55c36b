use searchable_conf::{SettingsError, SourceError};
use thiserror::Error;

/// Errors raised while loading or validating search configuration
///
/// Searching itself never fails; these only come from building a
/// [`SearchSettings`](crate::SearchSettings) snapshot.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SearchConfigError {
	#[error(transparent)]
	Settings(#[from] SettingsError),

	#[error(transparent)]
	Source(#[from] SourceError),

	#[error("Unknown search operator: {0:?}")]
	UnknownOperator(String),

	#[error("Empty column name in {0}")]
	EmptyColumn(String),

	#[error("Invalid relation path: {0:?}")]
	InvalidRelationPath(String),

	#[error("Relation column {column:?} under {path:?} must be a bare column name")]
	QualifiedRelationColumn { path: String, column: String },
}

pub type SearchConfigResult<T> = Result<T, SearchConfigError>;
