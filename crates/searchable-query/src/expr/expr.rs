//! Expr - The expression builder.
//!
//! This module provides [`Expr`], a builder for creating SQL expressions.

use super::condition::Condition;
use super::simple_expr::{Keyword, RelatedExpr, SimpleExpr, SubQueryOper};
use crate::query::SelectStatement;
use crate::types::{IntoColumnRef, IntoIden};
use crate::value::IntoValue;

/// Expression builder for creating SQL expressions.
///
/// `Expr` provides static constructors; operations come from
/// [`ExprTrait`](super::ExprTrait) and produce a [`SimpleExpr`].
///
/// # Example
///
/// ```rust
/// use searchable_query::{Expr, ExprTrait};
///
/// let expr = Expr::col("name").lower().like(Expr::val("%lap%").lower());
/// # let _ = expr;
/// ```
#[derive(Debug, Clone)]
pub struct Expr(SimpleExpr);

impl Expr {
	/// Create an expression from a column reference.
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::Expr;
	///
	/// let expr = Expr::col("name");
	/// let qualified = Expr::col(("products", "name"));
	/// ```
	pub fn col<C>(col: C) -> Self
	where
		C: IntoColumnRef,
	{
		Self(SimpleExpr::Column(col.into_column_ref()))
	}

	/// Create a table-qualified column expression.
	pub fn tbl<T, C>(table: T, col: C) -> Self
	where
		T: IntoIden,
		C: IntoIden,
	{
		Self::col((table.into_iden(), col.into_iden()))
	}

	/// Create a value expression.
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::Expr;
	///
	/// let expr = Expr::val(42);
	/// let expr2 = Expr::val("hello");
	/// ```
	pub fn val<V>(val: V) -> Self
	where
		V: IntoValue,
	{
		Self(SimpleExpr::Value(val.into_value()))
	}

	/// Create a raw SQL expression written verbatim.
	pub fn cust<S>(sql: S) -> Self
	where
		S: Into<String>,
	{
		Self(SimpleExpr::Custom(sql.into()))
	}

	/// Create a tuple expression.
	pub fn tuple<I>(exprs: I) -> Self
	where
		I: IntoIterator<Item = Self>,
	{
		Self(SimpleExpr::Tuple(
			exprs.into_iter().map(Expr::into_simple_expr).collect(),
		))
	}

	/// Create an EXISTS subquery expression.
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::{Expr, ExprTrait, Query};
	///
	/// let subquery = Query::select()
	///     .expr(Expr::cust("1"))
	///     .from("orders")
	///     .and_where(Expr::col(("orders", "user_id")).eq(Expr::col(("users", "id"))))
	///     .to_owned();
	/// let exists = Expr::exists(subquery);
	/// # let _ = exists;
	/// ```
	pub fn exists(select: SelectStatement) -> Self {
		Self(SimpleExpr::SubQuery(
			Some(SubQueryOper::Exists),
			Box::new(select),
		))
	}

	/// Create a NOT EXISTS subquery expression.
	pub fn not_exists(select: SelectStatement) -> Self {
		Self(SimpleExpr::SubQuery(
			Some(SubQueryOper::NotExists),
			Box::new(select),
		))
	}

	/// "A related record reached through `path` satisfies `condition`."
	///
	/// The expression must be expanded by a
	/// [`RelationRegistry`](crate::RelationRegistry) before building.
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::{Cond, Expr, ExprTrait};
	///
	/// let related = Expr::related(
	///     "category.parent",
	///     Cond::any().add(Expr::col("name").like("%electro%")),
	/// );
	/// # let _ = related;
	/// ```
	pub fn related<P>(path: P, condition: Condition) -> Self
	where
		P: Into<String>,
	{
		Self(RelatedExpr::new(path, condition).into())
	}

	/// Create a NULL constant expression.
	pub fn null() -> Self {
		Self(SimpleExpr::Constant(Keyword::Null))
	}

	/// Convert this Expr into a SimpleExpr.
	#[must_use]
	pub fn into_simple_expr(self) -> SimpleExpr {
		self.0
	}

	/// Get a reference to the underlying SimpleExpr.
	#[must_use]
	pub fn as_simple_expr(&self) -> &SimpleExpr {
		&self.0
	}
}

impl From<Expr> for SimpleExpr {
	fn from(e: Expr) -> Self {
		e.0
	}
}

impl From<SimpleExpr> for Expr {
	fn from(e: SimpleExpr) -> Self {
		Self(e)
	}
}
