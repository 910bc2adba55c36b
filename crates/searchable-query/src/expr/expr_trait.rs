//! ExprTrait - operations shared by [`Expr`] and [`SimpleExpr`].

use super::expr::Expr;
use super::func::Func;
use super::simple_expr::{Keyword, SimpleExpr};
use crate::types::{BinOper, UnOper};

/// Expression operations.
///
/// Every method consumes the receiver and returns a new [`SimpleExpr`], so
/// calls chain: `Expr::col("name").lower().like("%lap%")`.
pub trait ExprTrait: Sized {
	/// Convert the receiver into the expression AST.
	fn into_simple_expr(self) -> SimpleExpr;

	/// `self <op> right`
	fn binary<R>(self, op: BinOper, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		SimpleExpr::Binary(
			Box::new(self.into_simple_expr()),
			op,
			Box::new(right.into()),
		)
	}

	/// `self = right`
	fn eq<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::Equal, right)
	}

	/// `self <> right`
	fn ne<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotEqual, right)
	}

	/// `self > right`
	fn gt<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::GreaterThan, right)
	}

	/// `self >= right`
	fn gte<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::GreaterThanOrEqual, right)
	}

	/// `self < right`
	fn lt<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::SmallerThan, right)
	}

	/// `self <= right`
	fn lte<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::SmallerThanOrEqual, right)
	}

	/// `self LIKE pattern`
	fn like<R>(self, pattern: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::Like, pattern)
	}

	/// `self NOT LIKE pattern`
	fn not_like<R>(self, pattern: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotLike, pattern)
	}

	/// `self ILIKE pattern`
	///
	/// Backends without a native ILIKE render `LOWER(self) LIKE LOWER(pattern)`.
	fn ilike<R>(self, pattern: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::ILike, pattern)
	}

	/// `self NOT ILIKE pattern`
	fn not_ilike<R>(self, pattern: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotILike, pattern)
	}

	/// `self IS NULL`
	fn is_null(self) -> SimpleExpr {
		self.binary(BinOper::Is, Keyword::Null)
	}

	/// `self IS NOT NULL`
	fn is_not_null(self) -> SimpleExpr {
		self.binary(BinOper::IsNot, Keyword::Null)
	}

	/// `self AND right`
	fn and<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::And, right)
	}

	/// `self OR right`
	fn or<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::Or, right)
	}

	/// `NOT self`
	fn not(self) -> SimpleExpr {
		SimpleExpr::Unary(UnOper::Not, Box::new(self.into_simple_expr()))
	}

	/// `LOWER(self)`
	fn lower(self) -> SimpleExpr {
		Func::lower(self.into_simple_expr())
	}

	/// `UPPER(self)`
	fn upper(self) -> SimpleExpr {
		Func::upper(self.into_simple_expr())
	}
}

impl ExprTrait for Expr {
	fn into_simple_expr(self) -> SimpleExpr {
		self.into()
	}
}

impl ExprTrait for SimpleExpr {
	fn into_simple_expr(self) -> SimpleExpr {
		self
	}
}
