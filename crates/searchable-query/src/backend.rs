//! Database backend query builders
//!
//! This module provides SQL generation for different database backends:
//! - [`PostgresQueryBuilder`]: PostgreSQL backend
//! - [`MySqlQueryBuilder`]: MySQL backend
//! - [`SqliteQueryBuilder`]: SQLite backend
//!
//! All backends share one renderer and differ only in identifier quoting,
//! placeholder format, and ILIKE support.

mod mysql;
mod postgres;
mod render;
mod sql_writer;
mod sqlite;

pub use mysql::MySqlQueryBuilder;
pub use postgres::PostgresQueryBuilder;
pub use sql_writer::SqlWriter;
pub use sqlite::SqliteQueryBuilder;

use crate::{
	error::QueryResult, query::SelectStatement, relation::RelationRegistry, value::Values,
};

/// Query builder trait for generating backend-specific SQL
pub trait QueryBuilder {
	/// Quote an identifier
	fn escape_identifier(&self, ident: &str) -> String;

	/// Format the placeholder for the 1-based parameter `index`
	fn format_placeholder(&self, index: usize) -> String;

	/// Whether the backend understands `ILIKE`.
	///
	/// Backends returning `false` render `a ILIKE b` as
	/// `LOWER(a) LIKE LOWER(b)`.
	fn supports_ilike(&self) -> bool {
		false
	}

	/// Build SELECT statement
	///
	/// # Panics
	///
	/// Panics if the statement still contains relation nodes; use
	/// [`QueryBuilder::try_build_select`] with a [`RelationRegistry`] for
	/// those.
	fn build_select(&self, stmt: &SelectStatement) -> (String, Values) {
		let mut writer = SqlWriter::new();
		render::write_select(self, &mut writer, stmt);
		writer.finish()
	}

	/// Expand relation nodes with `registry`, then build the statement
	///
	/// # Errors
	///
	/// Returns the [`QueryError`](crate::QueryError) raised by
	/// [`RelationRegistry::expand`].
	fn try_build_select(
		&self,
		stmt: &SelectStatement,
		registry: &RelationRegistry,
	) -> QueryResult<(String, Values)> {
		let expanded = registry.expand(stmt)?;
		Ok(self.build_select(&expanded))
	}
}
