//! SQL Writer helper for constructing SQL strings
//!
//! [`SqlWriter`] accumulates SQL text and the values bound to its
//! placeholders. Subqueries are written into the same writer, so
//! placeholder numbering stays continuous across nesting levels.

use crate::value::{Value, Values};

/// SQL Writer for constructing SQL strings
///
/// # Examples
///
/// ```rust
/// use searchable_query::backend::SqlWriter;
/// use searchable_query::Value;
///
/// let mut writer = SqlWriter::new();
/// writer.push("SELECT");
/// writer.push_space();
/// writer.push_identifier("name", |s| format!("\"{}\"", s));
/// writer.push_keyword("FROM");
/// writer.push_space();
/// writer.push_identifier("products", |s| format!("\"{}\"", s));
/// writer.push_keyword("LIMIT");
/// writer.push_space();
/// writer.push_value(Value::Int(Some(5)), |i| format!("${}", i));
///
/// let (sql, values) = writer.finish();
/// assert_eq!(sql, "SELECT \"name\" FROM \"products\" LIMIT $1");
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SqlWriter {
	sql: String,
	values: Values,
	// 1-based index of the next placeholder
	param_index: usize,
}

impl SqlWriter {
	/// Create a new SQL writer
	pub fn new() -> Self {
		Self {
			sql: String::new(),
			values: Values::default(),
			param_index: 1,
		}
	}

	/// Push a string to SQL
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space unless the SQL is empty or already ends with one
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') && !self.sql.ends_with('(') {
			self.sql.push(' ');
		}
	}

	/// Push an identifier, escaped by `escape_fn`
	pub fn push_identifier<F>(&mut self, ident: &str, escape_fn: F)
	where
		F: FnOnce(&str) -> String,
	{
		self.sql.push_str(&escape_fn(ident));
	}

	/// Push a value placeholder and collect the value
	///
	/// Returns the placeholder index used, or `None` for NULL values, which
	/// are inlined as `NULL` without consuming a placeholder.
	pub fn push_value<F>(&mut self, value: Value, format_fn: F) -> Option<usize>
	where
		F: FnOnce(usize) -> String,
	{
		if value.is_null() {
			self.sql.push_str("NULL");
			return None;
		}

		let index = self.param_index;
		self.sql.push_str(&format_fn(index));
		self.values.push(value);
		self.param_index += 1;
		Some(index)
	}

	/// Push a keyword, preceded by a space when needed
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push a list of items with a separator
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item);
			first = false;
		}
	}

	/// Current SQL text
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Values collected so far
	pub fn values(&self) -> &Values {
		&self.values
	}

	/// Index the next placeholder will use
	pub fn param_index(&self) -> usize {
		self.param_index
	}

	/// Consume writer and return (SQL, Values)
	pub fn finish(self) -> (String, Values) {
		(self.sql, self.values)
	}
}

impl Default for SqlWriter {
	fn default() -> Self {
		Self::new()
	}
}
