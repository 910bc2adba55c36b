//! Search entry points

use crate::composer::{Filterable, compose_condition};
use crate::request::SearchRequest;
use crate::resolver::{EffectiveSearchConfig, SearchTargets, resolve};
use crate::settings::SearchSettings;
use crate::trace::SearchTrace;
use searchable_query::Condition;
use std::fmt;
use std::sync::Arc;

/// Applies search requests to queries using one settings snapshot
///
/// Cheap to clone and safe to share between threads; every call resolves
/// its own [`EffectiveSearchConfig`].
///
/// # Examples
///
/// ```
/// use searchable_filters::{SearchExt, SearchRequest, SearchSettings, Searcher};
/// use searchable_query::{Order, Query};
///
/// let searcher = Searcher::new(SearchSettings::default());
///
/// let stmt = Query::select()
///     .from("products")
///     .search(&searcher, &SearchRequest::new("lap").columns(["name"]))
///     .order_by("name", Order::Asc)
///     .to_owned();
///
/// assert_eq!(stmt.r#where.len(), 1);
/// ```
#[derive(Clone)]
pub struct Searcher {
	settings: Arc<SearchSettings>,
	config_targets: SearchTargets,
	trace: Option<Arc<dyn SearchTrace + Send + Sync>>,
}

impl Searcher {
	/// Create a searcher over a settings snapshot
	pub fn new(settings: impl Into<Arc<SearchSettings>>) -> Self {
		let settings = settings.into();
		let config_targets = settings.config_targets();
		Self {
			settings,
			config_targets,
			trace: None,
		}
	}

	/// Install a hook that sees every composed condition
	pub fn with_trace<T>(mut self, trace: T) -> Self
	where
		T: SearchTrace + Send + Sync + 'static,
	{
		self.trace = Some(Arc::new(trace));
		self
	}

	/// The settings snapshot
	pub fn settings(&self) -> &SearchSettings {
		&self.settings
	}

	/// The term to search for, or `None` when the request short-circuits
	///
	/// Terms are counted in characters and never trimmed.
	pub fn effective_term<'r>(&self, request: &'r SearchRequest) -> Option<&'r str> {
		let term = request.term()?;
		(term.chars().count() >= self.settings.min_term_length).then_some(term)
	}

	/// Pick and normalize the targets named by the request's priority mode
	pub fn resolve(&self, request: &SearchRequest) -> EffectiveSearchConfig {
		let empty = SearchTargets::default();
		resolve(
			request.priority_mode(),
			request.params(),
			request.model_source().unwrap_or(&empty),
			&self.config_targets,
		)
	}

	/// Build the condition for a request without attaching it
	///
	/// Returns `None` when the term is absent or too short.
	pub fn condition(&self, request: &SearchRequest) -> Option<Condition> {
		self.build(request)
	}

	/// AND the search condition onto `query`
	///
	/// Returns whether a condition was attached; an absent or too short
	/// term leaves the query untouched.
	pub fn apply<Q>(&self, query: &mut Q, request: &SearchRequest) -> bool
	where
		Q: Filterable + ?Sized,
	{
		match self.build(request) {
			Some(condition) => {
				query.add_filter(condition);
				true
			}
			None => false,
		}
	}

	fn build(&self, request: &SearchRequest) -> Option<Condition> {
		let Some(term) = self.effective_term(request) else {
			tracing::trace!(
				term = ?request.term(),
				min_term_length = self.settings.min_term_length,
				"search term absent or too short, skipping"
			);
			return None;
		};

		let effective = self.resolve(request);
		let condition = compose_condition(
			&effective,
			term,
			self.settings.default_operator,
			self.settings.case_sensitive,
		);

		if let Some(trace) = &self.trace {
			trace.on_search(&effective, &condition);
		}

		Some(condition)
	}
}

impl Default for Searcher {
	fn default() -> Self {
		Self::new(SearchSettings::default())
	}
}

impl fmt::Debug for Searcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Searcher")
			.field("settings", &self.settings)
			.field("trace", &self.trace.is_some())
			.finish()
	}
}

/// Chainable `.search(..)` on any [`Filterable`] query
pub trait SearchExt: Filterable {
	/// Apply `request` through `searcher` and return the query for chaining
	fn search(&mut self, searcher: &Searcher, request: &SearchRequest) -> &mut Self {
		searcher.apply(&mut *self, request);
		self
	}
}

impl<T: Filterable + ?Sized> SearchExt for T {}
