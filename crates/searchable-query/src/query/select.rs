//! SELECT statement builder
//!
//! This module provides the `SelectStatement` type for building SQL SELECT queries.

use crate::{
	expr::{Condition, ConditionHolder, IntoCondition, SimpleExpr},
	types::{DynIden, IntoColumnRef, IntoIden, IntoTableRef, Order, OrderExpr, TableRef},
	value::Value,
};

/// One entry of the SELECT list.
#[derive(Debug, Clone)]
pub struct SelectExpr {
	/// The selected expression
	pub expr: SimpleExpr,
	/// Optional output alias
	pub alias: Option<DynIden>,
}

/// SELECT statement builder
///
/// # Examples
///
/// ```rust
/// use searchable_query::{Expr, ExprTrait, Order, Query};
///
/// let query = Query::select()
///     .columns(["id", "name"])
///     .from("products")
///     .and_where(Expr::col("active").eq(true))
///     .order_by("name", Order::Asc)
///     .limit(10)
///     .to_owned();
/// assert_eq!(query.selects.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectStatement {
	/// SELECT list; empty means `*`
	pub selects: Vec<SelectExpr>,
	/// FROM tables
	pub from: Vec<TableRef>,
	/// WHERE clause, AND-ed
	pub r#where: ConditionHolder,
	/// ORDER BY entries
	pub orders: Vec<OrderExpr>,
	/// LIMIT value
	pub limit: Option<Value>,
	/// OFFSET value
	pub offset: Option<Value>,
}

impl SelectStatement {
	/// Create a new SELECT statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`SelectStatement`]
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Add a column to the SELECT list
	pub fn column<C>(&mut self, col: C) -> &mut Self
	where
		C: IntoColumnRef,
	{
		self.selects.push(SelectExpr {
			expr: SimpleExpr::Column(col.into_column_ref()),
			alias: None,
		});
		self
	}

	/// Add several columns to the SELECT list
	pub fn columns<I, C>(&mut self, cols: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: IntoColumnRef,
	{
		for col in cols {
			self.column(col);
		}
		self
	}

	/// Add an arbitrary expression to the SELECT list
	pub fn expr<E>(&mut self, expr: E) -> &mut Self
	where
		E: Into<SimpleExpr>,
	{
		self.selects.push(SelectExpr {
			expr: expr.into(),
			alias: None,
		});
		self
	}

	/// Add an aliased expression to the SELECT list
	pub fn expr_as<E, A>(&mut self, expr: E, alias: A) -> &mut Self
	where
		E: Into<SimpleExpr>,
		A: IntoIden,
	{
		self.selects.push(SelectExpr {
			expr: expr.into(),
			alias: Some(alias.into_iden()),
		});
		self
	}

	/// Add a table to the FROM clause
	pub fn from<T>(&mut self, tbl: T) -> &mut Self
	where
		T: IntoTableRef,
	{
		self.from.push(tbl.into_table_ref());
		self
	}

	/// Add an aliased table to the FROM clause
	pub fn from_as<T, A>(&mut self, tbl: T, alias: A) -> &mut Self
	where
		T: IntoIden,
		A: IntoIden,
	{
		self.from.push(TableRef::table_alias(tbl, alias));
		self
	}

	/// AND a condition onto the WHERE clause
	pub fn and_where<C>(&mut self, condition: C) -> &mut Self
	where
		C: IntoCondition,
	{
		self.r#where.add_and(condition);
		self
	}

	/// AND a condition onto the WHERE clause only if it is Some
	pub fn and_where_option<C>(&mut self, condition: Option<C>) -> &mut Self
	where
		C: IntoCondition,
	{
		if let Some(c) = condition {
			self.r#where.add_and(c);
		}
		self
	}

	/// AND a compound condition onto the WHERE clause
	pub fn cond_where(&mut self, condition: Condition) -> &mut Self {
		self.r#where.add_and(condition);
		self
	}

	/// Add an ORDER BY entry
	pub fn order_by<C>(&mut self, col: C, order: Order) -> &mut Self
	where
		C: IntoColumnRef,
	{
		self.orders.push(OrderExpr::new(col).order(order));
		self
	}

	/// Set the LIMIT
	pub fn limit(&mut self, limit: u64) -> &mut Self {
		self.limit = Some(Value::BigUnsigned(Some(limit)));
		self
	}

	/// Set the OFFSET
	pub fn offset(&mut self, offset: u64) -> &mut Self {
		self.offset = Some(Value::BigUnsigned(Some(offset)));
		self
	}

	/// The first FROM table, which relation paths are resolved against.
	pub fn primary_table(&self) -> Option<&TableRef> {
		self.from.first()
	}

	/// Returns true if the WHERE clause holds unexpanded relation nodes.
	pub fn has_relations(&self) -> bool {
		self.r#where.contains_related()
	}
}
