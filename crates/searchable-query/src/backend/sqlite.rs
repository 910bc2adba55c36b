//! SQLite query builder backend

use super::QueryBuilder;

/// SQLite query builder
///
/// This struct implements SQL generation for SQLite, using the following conventions:
/// - Identifiers: Double quotes (`"table_name"`)
/// - Placeholders: Question marks (`?`)
/// - `ILIKE` is emulated with `LOWER(a) LIKE LOWER(b)`
///
/// SQLite's own `LIKE` ignores ASCII case unless `PRAGMA case_sensitive_like`
/// is enabled; explicit `LOWER()` comparisons behave the same either way.
///
/// Without the ICU extension, SQLite's `LOWER()` and `LIKE` only fold ASCII
/// letters. `LOWER('ÉCLAIR')` is `'Éclair'`, so a case-insensitive search
/// for `éclair` matches on PostgreSQL but not on SQLite.
#[derive(Debug, Clone, Default)]
pub struct SqliteQueryBuilder;

impl SqliteQueryBuilder {
	/// Create a new SQLite query builder
	pub fn new() -> Self {
		Self
	}
}

impl QueryBuilder for SqliteQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("\"{}\"", ident.replace('"', "\"\""))
	}

	fn format_placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		expr::{Cond, Expr, ExprTrait},
		query::Query,
		types::Order,
	};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_select_with_positional_placeholders() {
		let builder = SqliteQueryBuilder::new();
		let stmt = Query::select()
			.column(("products", "name"))
			.from("products")
			.cond_where(
				Cond::any()
					.add(Expr::col("name").like("%a%"))
					.add(Expr::col("sku").ne("b")),
			)
			.order_by("id", Order::Desc)
			.to_owned();

		let (sql, values) = builder.build_select(&stmt);

		assert_eq!(
			sql,
			r#"SELECT "products"."name" FROM "products" WHERE ("name" LIKE ? OR "sku" <> ?) ORDER BY "id" DESC"#
		);
		assert_eq!(values.len(), 2);
	}

	#[rstest]
	fn test_not_like_keeps_operator() {
		let builder = SqliteQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.and_where(Expr::col("name").not_like("%a%"))
			.to_owned();

		let (sql, _) = builder.build_select(&stmt);
		assert_eq!(sql, r#"SELECT * FROM "products" WHERE "name" NOT LIKE ?"#);
	}
}
