//! # Searchable
//!
//! Free-text search filters for SQL query builders.
//!
//! A search term is matched with `LIKE '%term%'` against a set of base
//! columns and against columns reached through relation paths, all joined
//! into a single OR group. The targets come from request parameters, model
//! defaults, or configuration defaults, chosen by a priority mode.
//!
//! ## Feature Flags
//!
//! - `query`: The query builder, relation expansion and SQL backends
//! - `filters`: [`Searcher`], [`SearchRequest`] and target resolution
//! - `conf`: Layered configuration sources (TOML, JSON, environment)
//! - `full` (default): All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "filters")]
//! # {
//! use searchable::prelude::*;
//!
//! let registry = RelationRegistry::new()
//!     .with("products", Relation::belongs_to("category", "categories", "category_id"));
//! let searcher = Searcher::new(SearchSettings::default());
//!
//! let stmt = Query::select()
//!     .column("name")
//!     .from("products")
//!     .search(
//!         &searcher,
//!         &SearchRequest::new("lap")
//!             .columns(["name", "sku"])
//!             .relation("category", ["name"]),
//!     )
//!     .to_owned();
//!
//! let (sql, values) = PostgresQueryBuilder::new()
//!     .try_build_select(&stmt, &registry)
//!     .unwrap();
//! assert!(sql.contains("EXISTS (SELECT 1 FROM \"categories\" AS \"rel_1\""));
//! assert_eq!(values.len(), 3);
//! # }
//! ```

#[cfg(feature = "query")]
pub use searchable_query as query;

#[cfg(feature = "filters")]
pub use searchable_filters as filters;

#[cfg(feature = "conf")]
pub use searchable_conf as conf;

// Re-export the search surface at the crate root
#[cfg(feature = "filters")]
pub use searchable_filters::{
	ColumnSpec, EffectiveSearchConfig, PriorityMode, Rank, SearchConfigError, SearchExt, SearchOperator,
	SearchRequest, SearchSettings, SearchTargets, SearchTrace, SearchableModel, Searcher,
	TracingTrace, resolve,
};

#[cfg(feature = "conf")]
pub use searchable_conf::{MergedSettings, SettingsBuilder, SettingsError};

/// Prelude module for convenient imports
pub mod prelude {
	#[cfg(feature = "query")]
	pub use searchable_query::prelude::*;

	#[cfg(feature = "filters")]
	pub use searchable_filters::prelude::*;

	#[cfg(feature = "conf")]
	pub use searchable_conf::prelude::*;
}
