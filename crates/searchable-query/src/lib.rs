//! # searchable-query
//!
//! A parameterized SQL condition builder with relation-aware EXISTS
//! expansion.
//!
//! This crate builds SELECT statements for PostgreSQL, MySQL, and SQLite,
//! with proper identifier escaping and value placeholders for each backend.
//! Conditions may name related records by relation path (`category.parent`);
//! a [`RelationRegistry`] lowers those into correlated `EXISTS` subqueries.
//!
//! ## Architecture
//!
//! - [`value`]: Bound parameter values
//! - [`types`]: Identifiers, column and table references, operators
//! - [`expr`]: Expression AST, builders, and condition groups
//! - [`query`]: The [`SelectStatement`] builder
//! - [`relation`]: Relation declarations and EXISTS expansion
//! - [`backend`]: SQL generation per database
//!
//! ## Example
//!
//! ```rust
//! use searchable_query::prelude::*;
//!
//! let registry = RelationRegistry::new()
//!     .with("products", Relation::belongs_to("category", "categories", "category_id"));
//!
//! let stmt = Query::select()
//!     .from("products")
//!     .cond_where(
//!         Cond::any()
//!             .add(Expr::col("name").like("%lap%"))
//!             .add(Expr::related("category", Cond::any().add(Expr::col("name").like("%lap%")))),
//!     )
//!     .to_owned();
//!
//! let (sql, values) = SqliteQueryBuilder::new()
//!     .try_build_select(&stmt, &registry)
//!     .unwrap();
//! assert!(sql.contains("EXISTS (SELECT 1 FROM \"categories\" AS \"rel_1\""));
//! assert_eq!(values.len(), 2);
//! ```

// Core modules
pub mod types;
pub mod value;

// Expression module
pub mod expr;

// Query builders
pub mod query;

// Relation expansion
pub mod error;
pub mod relation;

// Backend implementations
pub mod backend;

/// Prelude module for convenient imports.
///
/// ```rust
/// use searchable_query::prelude::*;
/// ```
pub mod prelude {
	// Backend builders
	pub use crate::backend::{
		MySqlQueryBuilder, PostgresQueryBuilder, QueryBuilder, SqlWriter, SqliteQueryBuilder,
	};
	// Errors
	pub use crate::error::{QueryError, QueryResult};
	// Expression system
	pub use crate::expr::{
		Cond, Condition, ConditionExpression, ConditionHolder, ConditionType, Expr, ExprTrait,
		Func, IntoCondition, Keyword, RelatedExpr, SimpleExpr, SubQueryOper,
	};
	// Query builders
	pub use crate::query::{Query, SelectExpr, SelectStatement};
	// Relations
	pub use crate::relation::{Relation, RelationKind, RelationRegistry};
	// Type system
	pub use crate::types::{
		Alias, BinOper, ColumnRef, DynIden, Iden, IntoColumnRef, IntoIden, IntoTableRef,
		LogicalChainOper, Order, OrderExpr, TableRef, UnOper,
	};
	// Value system
	pub use crate::value::{IntoValue, Value, Values};
}

// Re-export commonly used types at crate root
pub use prelude::*;
