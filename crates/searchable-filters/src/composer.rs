//! Predicate composition
//!
//! Turns an [`EffectiveSearchConfig`] and a term into one ANY group:
//!
//! ```text
//! col_1 <op> term OR ... OR EXISTS(rel_1 WHERE rel_col_1 <op> term OR ...) OR ...
//! ```
//!
//! Relation paths are passed through untouched as
//! [`Related`](searchable_query::SimpleExpr::Related) nodes; the query
//! layer lowers them into correlated subqueries.

use crate::resolver::EffectiveSearchConfig;
use crate::settings::SearchOperator;
use searchable_query::{Cond, Condition, Expr, ExprTrait, SelectStatement, SimpleExpr};

/// A query that accepts an extra AND-ed condition
pub trait Filterable {
	/// AND `condition` onto the existing filters
	fn add_filter(&mut self, condition: Condition);
}

impl Filterable for SelectStatement {
	fn add_filter(&mut self, condition: Condition) {
		self.cond_where(condition);
	}
}

/// The value compared against each column
///
/// Pattern operators wrap the term in `%` on both sides; `%` and `_`
/// inside the term keep their wildcard meaning.
pub fn search_pattern(term: &str, operator: SearchOperator) -> String {
	if operator.is_pattern() {
		format!("%{}%", term)
	} else {
		term.to_string()
	}
}

fn column_expr(column: &str) -> SimpleExpr {
	match column.split_once('.') {
		Some((table, name)) => Expr::tbl(table.to_string(), name.to_string()).into_simple_expr(),
		None => Expr::col(column.to_string()).into_simple_expr(),
	}
}

/// One `column <op> pattern` comparison
///
/// When `case_sensitive` is false both sides go through `LOWER()`.
pub fn column_predicate(
	column: &str,
	pattern: &str,
	operator: SearchOperator,
	case_sensitive: bool,
) -> SimpleExpr {
	let left = column_expr(column);
	let right = Expr::val(pattern).into_simple_expr();

	if case_sensitive {
		left.binary(operator.bin_oper(), right)
	} else {
		left.lower().binary(operator.bin_oper(), right.lower())
	}
}

fn any_of(columns: &[String], pattern: &str, operator: SearchOperator, case_sensitive: bool) -> Condition {
	columns.iter().fold(Cond::any(), |cond, column| {
		cond.add(column_predicate(column, pattern, operator, case_sensitive))
	})
}

/// Build the compound search condition without attaching it
///
/// Empty targets produce an empty ANY group, which matches no rows.
///
/// # Examples
///
/// ```
/// use searchable_filters::{SearchOperator, SearchTargets, compose_condition};
///
/// let effective = SearchTargets::new()
///     .columns(["name"])
///     .relation("category", ["name"])
///     .normalize();
///
/// let cond = compose_condition(&effective, "lap", SearchOperator::Like, false);
/// assert_eq!(cond.len(), 2);
/// assert!(cond.contains_related());
/// ```
pub fn compose_condition(
	effective: &EffectiveSearchConfig,
	term: &str,
	operator: SearchOperator,
	case_sensitive: bool,
) -> Condition {
	let pattern = search_pattern(term, operator);

	let base = any_of(&effective.columns, &pattern, operator, case_sensitive);
	effective.relations.iter().fold(base, |cond, (path, columns)| {
		cond.add(Expr::related(
			path.as_str(),
			any_of(columns, &pattern, operator, case_sensitive),
		))
	})
}

/// AND the compound search condition onto `query`
///
/// Existing conditions, ordering, limit and offset are left as they are.
pub fn compose<'q, Q>(
	query: &'q mut Q,
	effective: &EffectiveSearchConfig,
	term: &str,
	operator: SearchOperator,
	case_sensitive: bool,
) -> &'q mut Q
where
	Q: Filterable + ?Sized,
{
	query.add_filter(compose_condition(effective, term, operator, case_sensitive));
	query
}
