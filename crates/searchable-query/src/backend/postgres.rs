//! PostgreSQL query builder backend

use super::QueryBuilder;

/// PostgreSQL query builder
///
/// This struct implements SQL generation for PostgreSQL, using the following conventions:
/// - Identifiers: Double quotes (`"table_name"`)
/// - Placeholders: Numbered (`$1`, `$2`, ...)
/// - `ILIKE` is emitted natively
///
/// # Examples
///
/// ```rust
/// use searchable_query::backend::{PostgresQueryBuilder, QueryBuilder};
/// use searchable_query::Query;
///
/// let builder = PostgresQueryBuilder::new();
/// let stmt = Query::select().column("id").from("products").to_owned();
///
/// let (sql, _values) = builder.build_select(&stmt);
/// assert_eq!(sql, r#"SELECT "id" FROM "products""#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostgresQueryBuilder;

impl PostgresQueryBuilder {
	/// Create a new PostgreSQL query builder
	pub fn new() -> Self {
		Self
	}
}

impl QueryBuilder for PostgresQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("\"{}\"", ident.replace('"', "\"\""))
	}

	fn format_placeholder(&self, index: usize) -> String {
		format!("${}", index)
	}

	fn supports_ilike(&self) -> bool {
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		expr::{Cond, Expr, ExprTrait},
		query::Query,
		relation::{Relation, RelationRegistry},
		types::Order,
		value::Value,
	};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_escape_identifier_with_quotes() {
		let builder = PostgresQueryBuilder::new();
		assert_eq!(builder.escape_identifier("user\"name"), "\"user\"\"name\"");
	}

	#[rstest]
	fn test_select_with_where_order_limit() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.columns(["id", "name"])
			.from("products")
			.and_where(Expr::col("active").eq(true))
			.order_by("name", Order::Asc)
			.limit(10)
			.offset(20)
			.to_owned();

		let (sql, values) = builder.build_select(&stmt);

		assert_eq!(
			sql,
			r#"SELECT "id", "name" FROM "products" WHERE "active" = $1 ORDER BY "name" ASC LIMIT $2 OFFSET $3"#
		);
		assert_eq!(values.len(), 3);
	}

	#[rstest]
	fn test_lowered_like_any_group() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.cond_where(
				Cond::any()
					.add(Expr::col("name").lower().like(Expr::val("%Lap%").lower()))
					.add(Expr::col("sku").lower().like(Expr::val("%Lap%").lower())),
			)
			.to_owned();

		let (sql, values) = builder.build_select(&stmt);

		assert_eq!(
			sql,
			r#"SELECT * FROM "products" WHERE (LOWER("name") LIKE LOWER($1) OR LOWER("sku") LIKE LOWER($2))"#
		);
		assert_eq!(values.0[0], Value::String(Some(Box::new("%Lap%".to_string()))));
	}

	#[rstest]
	fn test_native_ilike() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.and_where(Expr::col("name").ilike("%lap%"))
			.to_owned();

		let (sql, _) = builder.build_select(&stmt);
		assert_eq!(sql, r#"SELECT * FROM "products" WHERE "name" ILIKE $1"#);
	}

	#[rstest]
	#[case::empty_any(Cond::any(), "1 = 0")]
	#[case::empty_all(Cond::all(), "1 = 1")]
	#[case::negated_empty_any(Cond::any().not(), "NOT (1 = 0)")]
	fn test_empty_condition_groups(#[case] cond: crate::expr::Condition, #[case] expected: &str) {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select().from("products").cond_where(cond).to_owned();

		let (sql, values) = builder.build_select(&stmt);

		assert_eq!(sql, format!(r#"SELECT * FROM "products" WHERE {expected}"#));
		assert!(values.is_empty());
	}

	#[rstest]
	fn test_existing_conditions_are_preserved() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.and_where(Expr::col("active").eq(true))
			.cond_where(
				Cond::any()
					.add(Expr::col("name").like("%a%"))
					.add(Expr::col("sku").like("%a%")),
			)
			.to_owned();

		let (sql, _) = builder.build_select(&stmt);

		assert_eq!(
			sql,
			r#"SELECT * FROM "products" WHERE "active" = $1 AND ("name" LIKE $2 OR "sku" LIKE $3)"#
		);
	}

	#[rstest]
	fn test_logical_binary_is_parenthesized_in_where() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.and_where(Expr::col("a").eq(1).or(Expr::col("b").eq(2)))
			.and_where(Expr::col("c").eq(3))
			.to_owned();

		let (sql, _) = builder.build_select(&stmt);

		assert_eq!(
			sql,
			r#"SELECT * FROM "products" WHERE ("a" = $1 OR "b" = $2) AND "c" = $3"#
		);
	}

	#[rstest]
	fn test_null_value_is_inlined() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.and_where(Expr::col("deleted_at").is_null())
			.to_owned();

		let (sql, values) = builder.build_select(&stmt);

		assert_eq!(sql, r#"SELECT * FROM "products" WHERE "deleted_at" IS NULL"#);
		assert!(values.is_empty());
	}

	#[rstest]
	fn test_try_build_select_expands_relation_path() {
		let builder = PostgresQueryBuilder::new();
		let registry = RelationRegistry::new()
			.with(
				"products",
				Relation::belongs_to("category", "categories", "category_id"),
			)
			.with(
				"categories",
				Relation::belongs_to("parent", "categories", "parent_id"),
			);
		let stmt = Query::select()
			.from("products")
			.cond_where(
				Cond::any()
					.add(Expr::col("name").like("%electro%"))
					.add(Expr::related(
						"category.parent",
						Cond::any().add(Expr::col("name").like("%electro%")),
					)),
			)
			.to_owned();

		let (sql, values) = builder.try_build_select(&stmt, &registry).unwrap();

		assert_eq!(
			sql,
			concat!(
				r#"SELECT * FROM "products" WHERE ("name" LIKE $1 OR "#,
				r#"EXISTS (SELECT 1 FROM "categories" AS "rel_1" "#,
				r#"WHERE "rel_1"."id" = "products"."category_id" "#,
				r#"AND EXISTS (SELECT 1 FROM "categories" AS "rel_2" "#,
				r#"WHERE "rel_2"."id" = "rel_1"."parent_id" AND "rel_2"."name" LIKE $2)))"#,
			)
		);
		assert_eq!(values.len(), 2);
	}

	#[rstest]
	fn test_has_many_relation_join_direction() {
		let builder = PostgresQueryBuilder::new();
		let registry = RelationRegistry::new().with(
			"categories",
			Relation::has_many("products", "products", "category_id"),
		);
		let stmt = Query::select()
			.from("categories")
			.and_where(Expr::related(
				"products",
				Cond::any().add(Expr::col("name").eq("Laptop")),
			))
			.to_owned();

		let (sql, _) = builder.try_build_select(&stmt, &registry).unwrap();

		assert_eq!(
			sql,
			concat!(
				r#"SELECT * FROM "categories" WHERE EXISTS (SELECT 1 FROM "products" AS "rel_1" "#,
				r#"WHERE "rel_1"."category_id" = "categories"."id" AND "rel_1"."name" = $1)"#,
			)
		);
	}

	#[rstest]
	#[should_panic(expected = "must be expanded with a RelationRegistry")]
	fn test_build_select_panics_on_unexpanded_relation() {
		let builder = PostgresQueryBuilder::new();
		let stmt = Query::select()
			.from("products")
			.and_where(Expr::related("category", Cond::any()))
			.to_owned();

		let _ = builder.build_select(&stmt);
	}
}
