//! Shared SQLite fixtures for the integration tests

// Each test binary compiles common.rs separately, so not every item is used
// everywhere.
#![allow(dead_code, unreachable_pub)]

use rstest::fixture;
use searchable_query::{Value, Values};
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

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

/// In-memory catalog with a two-level category tree.
///
/// | categories | parent |
/// |---|---|
/// | 1 Electronics | - |
/// | 2 Computers | 1 |
/// | 3 Kitchen | - |
///
/// | products | category |
/// |---|---|
/// | 1 Laptop | 2 |
/// | 2 Blender | 3 |
/// | 3 Desk Lamp | - |
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
		"INSERT INTO categories (id, name, parent_id) VALUES (1, 'Electronics', NULL), (2, 'Computers', 1), (3, 'Kitchen', NULL)",
		"INSERT INTO products (id, name, sku, category_id) VALUES (1, 'Laptop', 'LP-1', 2), (2, 'Blender', 'BL-2', 3), (3, 'Desk Lamp', 'DL-3', NULL)",
	] {
		sqlx::query(statement)
			.execute(&pool)
			.await
			.expect("Failed to seed catalog");
	}

	pool
}
