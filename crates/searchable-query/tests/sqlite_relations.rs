//! Executes relation-expanded statements against SQLite

mod common;

use common::{bind_values, catalog_pool};
use rstest::*;
use searchable_query::prelude::*;
use sqlx::{Row, SqlitePool};

fn catalog_relations() -> RelationRegistry {
	RelationRegistry::new()
		.with(
			"products",
			Relation::belongs_to("category", "categories", "category_id"),
		)
		.with(
			"categories",
			Relation::belongs_to("parent", "categories", "parent_id"),
		)
		.with(
			"categories",
			Relation::has_many("products", "products", "category_id"),
		)
}

async fn fetch_names(pool: &SqlitePool, stmt: &SelectStatement) -> Vec<String> {
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

#[rstest]
#[tokio::test]
async fn test_belongs_to_exists(#[future] catalog_pool: SqlitePool) {
	// Arrange
	let pool = catalog_pool.await;
	let stmt = Query::select()
		.column("name")
		.from("products")
		.and_where(Expr::related(
			"category",
			Cond::any().add(Expr::col("name").eq("Kitchen")),
		))
		.to_owned();

	// Act
	let names = fetch_names(&pool, &stmt).await;

	// Assert
	assert_eq!(names, vec!["Blender".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_two_hop_path(#[future] catalog_pool: SqlitePool) {
	// Arrange
	let pool = catalog_pool.await;
	let stmt = Query::select()
		.column("name")
		.from("products")
		.and_where(Expr::related(
			"category.parent",
			Cond::any().add(Expr::col("name").like("%Electro%")),
		))
		.to_owned();

	// Act
	let names = fetch_names(&pool, &stmt).await;

	// Assert
	assert_eq!(names, vec!["Laptop".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_has_many_exists(#[future] catalog_pool: SqlitePool) {
	// Arrange
	let pool = catalog_pool.await;
	let stmt = Query::select()
		.column("name")
		.from("categories")
		.and_where(Expr::related(
			"products",
			Cond::any().add(Expr::col("sku").like("LP%")),
		))
		.to_owned();

	// Act
	let names = fetch_names(&pool, &stmt).await;

	// Assert
	assert_eq!(names, vec!["Computers".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_empty_any_group_matches_nothing(#[future] catalog_pool: SqlitePool) {
	// Arrange
	let pool = catalog_pool.await;
	let stmt = Query::select()
		.column("name")
		.from("products")
		.cond_where(Cond::any())
		.to_owned();

	// Act
	let names = fetch_names(&pool, &stmt).await;

	// Assert
	assert!(names.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_relation_combined_with_order_and_limit(#[future] catalog_pool: SqlitePool) {
	// Arrange
	let pool = catalog_pool.await;
	let stmt = Query::select()
		.column("name")
		.from("products")
		.cond_where(
			Cond::any()
				.add(Expr::col("name").like("%Lamp%"))
				.add(Expr::related(
					"category",
					Cond::any().add(Expr::col("name").like("%Kitchen%")),
				)),
		)
		.order_by("name", Order::Desc)
		.limit(1)
		.to_owned();

	// Act
	let names = fetch_names(&pool, &stmt).await;

	// Assert
	assert_eq!(names, vec!["Desk Lamp".to_string()]);
}

#[rstest]
fn test_unknown_relation_surfaces_at_build_time() {
	let stmt = Query::select()
		.from("products")
		.and_where(Expr::related("supplier", Cond::any()))
		.to_owned();

	let err = SqliteQueryBuilder::new()
		.try_build_select(&stmt, &catalog_relations())
		.unwrap_err();

	assert!(matches!(
		err,
		QueryError::UnknownRelation { ref relation, .. } if relation == "supplier"
	));
	assert_eq!(
		err.to_string(),
		"unknown relation `supplier` on table `products`"
	);
}
