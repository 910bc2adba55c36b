//! Ordering types for ORDER BY clauses.

use super::column_ref::{ColumnRef, IntoColumnRef};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl Order {
	/// Returns the SQL keyword for this direction.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

/// A single ORDER BY entry.
#[derive(Debug, Clone)]
pub struct OrderExpr {
	/// Column to sort by
	pub column: ColumnRef,
	/// Sort direction
	pub order: Order,
}

impl OrderExpr {
	/// Create an ascending order entry for `column`.
	pub fn new<C: IntoColumnRef>(column: C) -> Self {
		Self {
			column: column.into_column_ref(),
			order: Order::Asc,
		}
	}

	/// Set the sort direction.
	#[must_use]
	pub fn order(mut self, order: Order) -> Self {
		self.order = order;
		self
	}
}
