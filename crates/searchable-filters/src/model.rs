//! Searchable model trait
//!
//! Lets a model declare its own default search targets, used when a
//! request asks for [`PriorityMode::ModelDefaults`](crate::PriorityMode).

use crate::resolver::{EffectiveSearchConfig, SearchTargets};

/// Trait for models that declare default search targets
///
/// # Examples
///
/// ```rust
/// use searchable_filters::{SearchTargets, SearchableModel};
///
/// struct Product;
///
/// impl SearchableModel for Product {
///     fn search_targets() -> Option<SearchTargets> {
///         Some(
///             SearchTargets::new()
///                 .columns([("name", 1), ("sku", 2)])
///                 .relation("category", ["name"]),
///         )
///     }
/// }
///
/// let effective = Product::default_search_config();
/// assert_eq!(effective.columns, vec!["name", "sku"]);
/// assert_eq!(effective.relations["category"], vec!["name"]);
/// ```
pub trait SearchableModel {
	/// Declared search targets
	///
	/// Returns `None` by default, which searches nothing in
	/// model-defaults mode.
	fn search_targets() -> Option<SearchTargets> {
		None
	}

	/// The declared targets, normalized
	fn default_search_config() -> EffectiveSearchConfig {
		Self::search_targets()
			.map(|targets| targets.normalize())
			.unwrap_or_default()
	}
}
