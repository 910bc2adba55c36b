//! Shared SQLite fixtures for the search integration tests

// Each test binary compiles common.rs separately, so not every item is used
// everywhere.
#![allow(dead_code, unreachable_pub)]

use rstest::fixture;
use searchable_query::{
	QueryBuilder, Relation, RelationRegistry, SelectStatement, SqliteQueryBuilder, Value, Values,
};
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::{Row, Sqlite};

pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind builder values in placeholder order.
pub fn bind_values<'q>(mut query: SqliteQuery<'q>, values: &Values) -> SqliteQuery<'q> {
	for value in values.iter().cloned() {
		query = match value {
			Value::Bool(v) => query.bind(v),
			Value::Int(v) => query.bind(v),
			Value::BigInt(v) => query.bind(v),
			Value::Unsigned(v) => query.bind(v.map(i64::from)),
			Value::BigUnsigned(v) => {
				query.bind(v.map(|n| i64::try_from(n).expect("value fits in i64")))
			}
			Value::Float(v) => query.bind(v.map(f64::from)),
			Value::Double(v) => query.bind(v),
			Value::String(v) => query.bind(v.map(|s| *s)),
			Value::Bytes(v) => query.bind(v.map(|b| *b)),
		};
	}
	query
}

/// Relations declared on the catalog tables.
pub fn catalog_relations() -> RelationRegistry {
	RelationRegistry::new()
		.with(
			"products",
			Relation::belongs_to("category", "categories", "category_id"),
		)
		.with(
			"categories",
			Relation::belongs_to("parent", "categories", "parent_id"),
		)
}

/// Build `stmt` for SQLite and return the `name` column of every row.
pub async fn fetch_names(pool: &SqlitePool, stmt: &SelectStatement) -> Vec<String> {
	let (sql, values) = SqliteQueryBuilder::new()
		.try_build_select(stmt, &catalog_relations())
		.expect("Failed to build statement");

	bind_values(sqlx::query(&sql), &values)
		.fetch_all(pool)
		.await
		.expect("Failed to execute statement")
		.iter()
		.map(|row| row.get::<String, _>("name"))
		.collect()
}

/// In-memory catalog with nested categories.
///
/// | categories | parent |
/// |---|---|
/// | 1 Hardware | - |
/// | 2 Electro-misc | 1 |
/// | 3 Kitchen | - |
/// | 4 Portables | 5 |
/// | 5 Consumer Electronics | - |
///
/// | products | sku | category |
/// |---|---|---|
/// | 1 Electronics | EL-1 | - |
/// | 2 Tools | TL-2 | 2 |
/// | 3 LAPTOP | LP-3 | 4 |
/// | 4 laptop sleeve | LS-4 | 3 |
/// | 5 Blender | BL-5 | 3 |
#[fixture]
pub async fn catalog_pool() -> SqlitePool {
	// A single connection keeps every query on the same in-memory database.
	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.expect("Failed to open in-memory SQLite database");

	for statement in [
		"CREATE TABLE categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL, parent_id INTEGER)",
		"CREATE TABLE products (id INTEGER PRIMARY KEY, name TEXT NOT NULL, sku TEXT NOT NULL, category_id INTEGER)",
		"INSERT INTO categories (id, name, parent_id) VALUES \
			(1, 'Hardware', NULL), (2, 'Electro-misc', 1), (3, 'Kitchen', NULL), \
			(4, 'Portables', 5), (5, 'Consumer Electronics', NULL)",
		"INSERT INTO products (id, name, sku, category_id) VALUES \
			(1, 'Electronics', 'EL-1', NULL), (2, 'Tools', 'TL-2', 2), (3, 'LAPTOP', 'LP-3', 4), \
			(4, 'laptop sleeve', 'LS-4', 3), (5, 'Blender', 'BL-5', 3)",
	] {
		sqlx::query(statement)
			.execute(&pool)
			.await
			.expect("Failed to seed catalog");
	}

	pool
}
