//! SimpleExpr - The core expression AST.
//!
//! This module defines [`SimpleExpr`], which represents SQL expressions as an
//! abstract syntax tree (AST). All expression operations eventually produce
//! a `SimpleExpr`.

use super::condition::Condition;
use crate::types::{BinOper, ColumnRef, DynIden, UnOper};
use crate::value::Value;

/// Subquery operators used in SQL expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubQueryOper {
	/// EXISTS (subquery)
	Exists,
	/// NOT EXISTS (subquery)
	NotExists,
}

impl SubQueryOper {
	/// Returns the SQL keyword for this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Exists => "EXISTS",
			Self::NotExists => "NOT EXISTS",
		}
	}
}

/// "A related record exists satisfying `condition`".
///
/// `path` names a relation declared on the statement's table, or a dotted
/// chain of relations (`category.parent`). Columns inside `condition` refer
/// to the table at the end of the path. A [`RelationRegistry`] lowers this
/// node into correlated `EXISTS` subqueries before the statement is built.
///
/// [`RelationRegistry`]: crate::relation::RelationRegistry
#[derive(Debug, Clone)]
pub struct RelatedExpr {
	/// Relation name or dotted relation chain
	pub path: String,
	/// Condition evaluated against the related table
	pub condition: Condition,
}

impl RelatedExpr {
	/// Create a new related-record expression.
	pub fn new<P: Into<String>>(path: P, condition: Condition) -> Self {
		Self {
			path: path.into(),
			condition,
		}
	}

	/// The individual relation names of the path, outermost first.
	pub fn hops(&self) -> impl Iterator<Item = &str> {
		self.path.split('.')
	}
}

/// A simple SQL expression.
///
/// # Example
///
/// ```rust
/// use searchable_query::{BinOper, ColumnRef, SimpleExpr, Value};
///
/// // Column reference
/// let col = SimpleExpr::Column(ColumnRef::column("name"));
///
/// // Value literal
/// let val = SimpleExpr::Value(Value::Int(Some(42)));
///
/// // Binary operation (column = 42)
/// let eq = SimpleExpr::Binary(Box::new(col), BinOper::Equal, Box::new(val));
/// # let _ = eq;
/// ```
#[derive(Debug, Clone)]
pub enum SimpleExpr {
	/// A column reference (e.g., `name`, `products.name`)
	Column(ColumnRef),

	/// A literal value, bound as a parameter
	Value(Value),

	/// A unary operation (e.g., `NOT x`)
	Unary(UnOper, Box<SimpleExpr>),

	/// A binary operation (e.g., `x = y`, `a AND b`)
	Binary(Box<SimpleExpr>, BinOper, Box<SimpleExpr>),

	/// A function call (e.g., `LOWER(name)`)
	FunctionCall(DynIden, Vec<SimpleExpr>),

	/// A subquery, optionally introduced by an operator such as `EXISTS`
	SubQuery(Option<SubQueryOper>, Box<crate::query::SelectStatement>),

	/// A nested condition group
	Condition(Box<Condition>),

	/// A related record exists satisfying a condition
	Related(Box<RelatedExpr>),

	/// A tuple of expressions (e.g., `(1, 2, 3)`)
	Tuple(Vec<SimpleExpr>),

	/// Raw SQL written as-is (e.g., `1`)
	Custom(String),

	/// A constant (`TRUE`, `FALSE`, `NULL`)
	Constant(Keyword),
}

/// SQL keywords that can appear as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	/// SQL NULL
	Null,
	/// SQL TRUE
	True,
	/// SQL FALSE
	False,
}

impl Keyword {
	/// Returns the SQL representation of this keyword.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Null => "NULL",
			Self::True => "TRUE",
			Self::False => "FALSE",
		}
	}
}

impl SimpleExpr {
	/// Returns true if this expression, or any expression nested in it,
	/// is an unexpanded [`RelatedExpr`].
	///
	/// Subqueries are not inspected; they carry their own FROM clause.
	pub fn contains_related(&self) -> bool {
		match self {
			Self::Related(_) => true,
			Self::Unary(_, inner) => inner.contains_related(),
			Self::Binary(left, _, right) => left.contains_related() || right.contains_related(),
			Self::FunctionCall(_, args) | Self::Tuple(args) => {
				args.iter().any(SimpleExpr::contains_related)
			}
			Self::Condition(cond) => cond.contains_related(),
			Self::Column(_)
			| Self::Value(_)
			| Self::SubQuery(_, _)
			| Self::Custom(_)
			| Self::Constant(_) => false,
		}
	}
}

// Conversion implementations

impl From<Value> for SimpleExpr {
	fn from(v: Value) -> Self {
		Self::Value(v)
	}
}

impl From<ColumnRef> for SimpleExpr {
	fn from(c: ColumnRef) -> Self {
		Self::Column(c)
	}
}

impl From<Condition> for SimpleExpr {
	fn from(c: Condition) -> Self {
		Self::Condition(Box::new(c))
	}
}

impl From<RelatedExpr> for SimpleExpr {
	fn from(r: RelatedExpr) -> Self {
		Self::Related(Box::new(r))
	}
}

impl From<Keyword> for SimpleExpr {
	fn from(k: Keyword) -> Self {
		Self::Constant(k)
	}
}

impl From<bool> for SimpleExpr {
	fn from(b: bool) -> Self {
		Self::Value(Value::Bool(Some(b)))
	}
}

impl From<i32> for SimpleExpr {
	fn from(i: i32) -> Self {
		Self::Value(Value::Int(Some(i)))
	}
}

impl From<i64> for SimpleExpr {
	fn from(i: i64) -> Self {
		Self::Value(Value::BigInt(Some(i)))
	}
}

impl From<f64> for SimpleExpr {
	fn from(f: f64) -> Self {
		Self::Value(Value::Double(Some(f)))
	}
}

impl From<&str> for SimpleExpr {
	fn from(s: &str) -> Self {
		Self::Value(Value::String(Some(Box::new(s.to_string()))))
	}
}

impl From<String> for SimpleExpr {
	fn from(s: String) -> Self {
		Self::Value(Value::String(Some(Box::new(s))))
	}
}
