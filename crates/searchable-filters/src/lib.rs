//! # searchable-filters
//!
//! Free-text search across configured columns and related records.
//!
//! A search picks its targets from exactly one of three sources (request
//! parameters, model defaults, configuration defaults), normalizes ranked
//! column lists, and attaches one OR group to the caller's query: one
//! predicate per column plus one `EXISTS` per relation path.
//!
//! ## Architecture
//!
//! - [`column_spec`]: Ordered and ranked column lists, normalization
//! - [`resolver`]: Priority modes and target resolution
//! - [`composer`]: Predicate composition onto a query
//! - [`settings`]: The injected configuration snapshot
//! - [`searcher`]: [`Searcher`] and the chainable [`SearchExt`]
//! - [`model`]: Model-declared defaults
//! - [`trace`]: Observability hook
//!
//! ## Example
//!
//! ```rust
//! use searchable_filters::prelude::*;
//! use searchable_query::{Query, QueryBuilder, Relation, RelationRegistry, SqliteQueryBuilder};
//!
//! let registry = RelationRegistry::new()
//!     .with("products", Relation::belongs_to("category", "categories", "category_id"));
//! let searcher = Searcher::new(SearchSettings::default());
//!
//! let stmt = Query::select()
//!     .from("products")
//!     .search(
//!         &searcher,
//!         &SearchRequest::new("electro")
//!             .columns(["name"])
//!             .relation("category", ["name"]),
//!     )
//!     .to_owned();
//!
//! let (sql, values) = SqliteQueryBuilder::new()
//!     .try_build_select(&stmt, &registry)
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     concat!(
//!         r#"SELECT * FROM "products" WHERE (LOWER("name") LIKE LOWER(?) OR "#,
//!         r#"EXISTS (SELECT 1 FROM "categories" AS "rel_1" "#,
//!         r#"WHERE "rel_1"."id" = "products"."category_id" AND LOWER("rel_1"."name") LIKE LOWER(?)))"#,
//!     )
//! );
//! assert_eq!(values.len(), 2);
//! ```

pub mod column_spec;
pub mod composer;
pub mod error;
pub mod model;
pub mod request;
pub mod resolver;
pub mod searcher;
pub mod settings;
pub mod trace;

pub use column_spec::{ColumnSpec, Rank, RelationSpec, normalize_relations};
pub use composer::{Filterable, column_predicate, compose, compose_condition, search_pattern};
pub use error::{SearchConfigError, SearchConfigResult};
pub use model::SearchableModel;
pub use request::SearchRequest;
pub use resolver::{EffectiveSearchConfig, PriorityMode, SearchTargets, resolve};
pub use searcher::{SearchExt, Searcher};
pub use settings::{SETTINGS_SECTION, SearchOperator, SearchSettings};
pub use trace::{SearchTrace, TracingTrace};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::column_spec::{ColumnSpec, Rank, RelationSpec};
	pub use crate::composer::Filterable;
	pub use crate::model::SearchableModel;
	pub use crate::request::SearchRequest;
	pub use crate::resolver::{EffectiveSearchConfig, PriorityMode, SearchTargets};
	pub use crate::searcher::{SearchExt, Searcher};
	pub use crate::settings::{SearchOperator, SearchSettings};
	pub use crate::trace::{SearchTrace, TracingTrace};
}
