//! Observability hook for composed searches

use crate::resolver::EffectiveSearchConfig;
use searchable_query::Condition;

/// Receives every resolved configuration together with the condition
/// built from it, just before the condition is attached
///
/// Closures taking `(&EffectiveSearchConfig, &Condition)` implement this.
pub trait SearchTrace {
	fn on_search(&self, effective: &EffectiveSearchConfig, condition: &Condition);
}

impl<F> SearchTrace for F
where
	F: Fn(&EffectiveSearchConfig, &Condition),
{
	fn on_search(&self, effective: &EffectiveSearchConfig, condition: &Condition) {
		self(effective, condition)
	}
}

/// Forwards every search to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl SearchTrace for TracingTrace {
	fn on_search(&self, effective: &EffectiveSearchConfig, condition: &Condition) {
		tracing::debug!(
			columns = ?effective.columns,
			relations = ?effective.relations,
			predicates = effective.predicate_count(),
			condition = ?condition,
			"composed search condition"
		);
	}
}
