//! SQL scalar function builders.
//!
//! This module provides the [`Func`] struct with static methods for
//! constructing the string functions used by case-insensitive matching.

use super::simple_expr::SimpleExpr;
use crate::types::IntoIden;

/// SQL function builder.
///
/// # Examples
///
/// ```rust
/// use searchable_query::{Expr, Func};
///
/// // LOWER(name)
/// let lowered = Func::lower(Expr::col("name").into_simple_expr());
/// # let _ = lowered;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Func;

impl Func {
	/// Create a LOWER(expr) function call.
	pub fn lower(expr: SimpleExpr) -> SimpleExpr {
		SimpleExpr::FunctionCall("LOWER".into_iden(), vec![expr])
	}

	/// Create an UPPER(expr) function call.
	pub fn upper(expr: SimpleExpr) -> SimpleExpr {
		SimpleExpr::FunctionCall("UPPER".into_iden(), vec![expr])
	}

	/// Create a COALESCE(expr1, expr2, ...) function call.
	pub fn coalesce(exprs: Vec<SimpleExpr>) -> SimpleExpr {
		SimpleExpr::FunctionCall("COALESCE".into_iden(), exprs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::Expr;
	use rstest::rstest;

	#[rstest]
	#[case::lower(Func::lower(Expr::col("name").into_simple_expr()), "LOWER", 1)]
	#[case::upper(Func::upper(Expr::col("name").into_simple_expr()), "UPPER", 1)]
	#[case::coalesce(
		Func::coalesce(vec![Expr::col("a").into_simple_expr(), Expr::val("").into_simple_expr()]),
		"COALESCE",
		2
	)]
	fn test_func_builds_function_call(
		#[case] expr: SimpleExpr,
		#[case] name: &str,
		#[case] arity: usize,
	) {
		// Act / Assert
		if let SimpleExpr::FunctionCall(func, args) = expr {
			assert_eq!(func.to_string(), name);
			assert_eq!(args.len(), arity);
		} else {
			panic!("Expected FunctionCall variant");
		}
	}
}
