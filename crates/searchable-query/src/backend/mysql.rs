//! MySQL query builder backend

use super::QueryBuilder;

/// MySQL query builder
///
/// This struct implements SQL generation for MySQL, using the following conventions:
/// - Identifiers: Backticks (`` `table_name` ``)
/// - Placeholders: Question marks (`?`)
/// - `ILIKE` is emulated with `LOWER(a) LIKE LOWER(b)`
#[derive(Debug, Clone, Default)]
pub struct MySqlQueryBuilder;

impl MySqlQueryBuilder {
	/// Create a new MySQL query builder
	pub fn new() -> Self {
		Self
	}
}

impl QueryBuilder for MySqlQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("`{}`", ident.replace('`', "``"))
	}

	fn format_placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}
}
