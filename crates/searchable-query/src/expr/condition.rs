//! Condition system for WHERE clauses.
//!
//! This module provides [`Condition`] and [`Cond`] for building compound
//! filter conditions.

use super::simple_expr::SimpleExpr;
use crate::types::LogicalChainOper;

/// Type of condition combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionType {
	/// All conditions must be true (AND)
	#[default]
	All,
	/// Any condition must be true (OR)
	Any,
}

/// A single condition expression in a condition chain.
#[derive(Debug, Clone)]
pub enum ConditionExpression {
	/// A simple expression
	SimpleExpr(SimpleExpr),
	/// A nested condition
	Condition(Condition),
}

impl ConditionExpression {
	fn contains_related(&self) -> bool {
		match self {
			Self::SimpleExpr(expr) => expr.contains_related(),
			Self::Condition(cond) => cond.contains_related(),
		}
	}
}

/// A condition chain for WHERE clauses.
///
/// An empty chain is still a valid condition: backends render an empty
/// `Any` chain as `1 = 0` (nothing matches) and an empty `All` chain as
/// `1 = 1`.
///
/// # Example
///
/// ```rust
/// use searchable_query::{Cond, Expr, ExprTrait};
///
/// // Any condition (OR)
/// let cond = Cond::any()
///     .add(Expr::col("name").like("%lap%"))
///     .add(Expr::col("description").like("%lap%"));
///
/// // Nested conditions
/// let cond = Cond::all()
///     .add(Expr::col("active").eq(true))
///     .add(cond);
/// assert_eq!(cond.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Condition {
	/// Type of condition chain (AND or OR)
	pub condition_type: ConditionType,
	/// Whether to negate the entire condition
	pub negate: bool,
	/// The conditions in this chain
	pub conditions: Vec<ConditionExpression>,
}

impl Condition {
	/// Create a new empty condition with the specified type.
	pub fn new(condition_type: ConditionType) -> Self {
		Self {
			condition_type,
			negate: false,
			conditions: Vec::new(),
		}
	}

	/// Create a new condition that requires all sub-conditions (AND).
	pub fn all() -> Self {
		Self::new(ConditionType::All)
	}

	/// Create a new condition that requires any sub-condition (OR).
	pub fn any() -> Self {
		Self::new(ConditionType::Any)
	}

	/// Add a condition expression.
	#[must_use]
	// Intentional builder-pattern method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add<C>(mut self, condition: C) -> Self
	where
		C: IntoCondition,
	{
		self.conditions.push(condition.into_condition_expression());
		self
	}

	/// Add a condition only if the option is Some.
	#[must_use]
	pub fn add_option<C>(self, condition: Option<C>) -> Self
	where
		C: IntoCondition,
	{
		match condition {
			Some(c) => self.add(c),
			None => self,
		}
	}

	/// Negate the entire condition.
	#[must_use]
	// Intentional builder-pattern method, not std::ops::Not
	#[allow(clippy::should_implement_trait)]
	pub fn not(mut self) -> Self {
		self.negate = !self.negate;
		self
	}

	/// Returns true if this condition has no sub-conditions.
	pub fn is_empty(&self) -> bool {
		self.conditions.is_empty()
	}

	/// Returns the number of sub-conditions.
	pub fn len(&self) -> usize {
		self.conditions.len()
	}

	/// Returns the logical operator for this condition type.
	pub fn logical_oper(&self) -> LogicalChainOper {
		match self.condition_type {
			ConditionType::All => LogicalChainOper::And,
			ConditionType::Any => LogicalChainOper::Or,
		}
	}

	/// Returns true if any sub-condition holds an unexpanded relation.
	pub fn contains_related(&self) -> bool {
		self.conditions
			.iter()
			.any(ConditionExpression::contains_related)
	}
}

/// Helper for creating conditions.
///
/// This is a convenience wrapper around [`Condition`].
pub struct Cond;

impl Cond {
	/// Create a condition that requires all sub-conditions (AND).
	pub fn all() -> Condition {
		Condition::all()
	}

	/// Create a condition that requires any sub-condition (OR).
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::{Cond, Expr, ExprTrait};
	///
	/// let cond = Cond::any()
	///     .add(Expr::col("role").eq("admin"))
	///     .add(Expr::col("role").eq("moderator"));
	/// assert_eq!(cond.len(), 2);
	/// ```
	pub fn any() -> Condition {
		Condition::any()
	}
}

/// Trait for types that can be converted into a condition expression.
pub trait IntoCondition {
	/// Convert into a ConditionExpression.
	fn into_condition_expression(self) -> ConditionExpression;

	/// Convert into a Condition (wrapping if necessary).
	fn into_condition(self) -> Condition
	where
		Self: Sized,
	{
		match self.into_condition_expression() {
			ConditionExpression::Condition(c) => c,
			ConditionExpression::SimpleExpr(e) => Condition::all().add(e),
		}
	}
}

impl IntoCondition for Condition {
	fn into_condition_expression(self) -> ConditionExpression {
		ConditionExpression::Condition(self)
	}

	fn into_condition(self) -> Condition {
		self
	}
}

impl IntoCondition for SimpleExpr {
	fn into_condition_expression(self) -> ConditionExpression {
		ConditionExpression::SimpleExpr(self)
	}
}

impl IntoCondition for super::expr::Expr {
	fn into_condition_expression(self) -> ConditionExpression {
		ConditionExpression::SimpleExpr(self.into_simple_expr())
	}
}

impl IntoCondition for super::simple_expr::RelatedExpr {
	fn into_condition_expression(self) -> ConditionExpression {
		ConditionExpression::SimpleExpr(self.into())
	}
}

impl IntoCondition for ConditionExpression {
	fn into_condition_expression(self) -> ConditionExpression {
		self
	}
}

/// Holder for the WHERE clause of a statement.
///
/// Every entry is AND-ed with the others when the statement is built.
#[derive(Debug, Clone, Default)]
pub struct ConditionHolder {
	/// The conditions
	pub conditions: Vec<ConditionExpression>,
}

impl ConditionHolder {
	/// Create a new empty condition holder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a condition with AND.
	pub fn add_and<C>(&mut self, condition: C)
	where
		C: IntoCondition,
	{
		self.conditions.push(condition.into_condition_expression());
	}

	/// Add a condition with OR (wraps existing conditions).
	pub fn add_or<C>(&mut self, condition: C)
	where
		C: IntoCondition,
	{
		if self.conditions.is_empty() {
			self.conditions.push(condition.into_condition_expression());
			return;
		}

		let mut existing = Condition::all();
		existing.conditions = std::mem::take(&mut self.conditions);
		let or_cond = Condition::any().add(existing).add(condition);
		self.conditions
			.push(ConditionExpression::Condition(or_cond));
	}

	/// Returns true if there are no conditions.
	pub fn is_empty(&self) -> bool {
		self.conditions.is_empty()
	}

	/// Returns the number of conditions.
	pub fn len(&self) -> usize {
		self.conditions.len()
	}

	/// Returns true if any held condition contains an unexpanded relation.
	pub fn contains_related(&self) -> bool {
		self.conditions
			.iter()
			.any(ConditionExpression::contains_related)
	}

	/// Build into a single Condition.
	pub fn into_condition(mut self) -> Option<Condition> {
		match self.conditions.len() {
			0 => None,
			1 => self.conditions.pop().map(IntoCondition::into_condition),
			_ => {
				let mut cond = Condition::all();
				cond.conditions = self.conditions;
				Some(cond)
			}
		}
	}
}

/// Create an ALL (AND) condition from multiple expressions.
///
/// # Example
///
/// ```rust
/// use searchable_query::{all, Expr, ExprTrait};
///
/// let cond = all![
///     Expr::col("active").eq(true),
///     Expr::col("verified").eq(true),
/// ];
/// assert_eq!(cond.len(), 2);
/// ```
#[macro_export]
macro_rules! all {
    ($($expr:expr),* $(,)?) => {
        {
            let mut cond = $crate::expr::Cond::all();
            $(
                cond = cond.add($expr);
            )*
            cond
        }
    };
}

/// Create an ANY (OR) condition from multiple expressions.
///
/// # Example
///
/// ```rust
/// use searchable_query::{any, Expr, ExprTrait};
///
/// let cond = any![
///     Expr::col("name").like("%lap%"),
///     Expr::col("sku").like("%lap%"),
/// ];
/// assert_eq!(cond.len(), 2);
/// ```
#[macro_export]
macro_rules! any {
    ($($expr:expr),* $(,)?) => {
        {
            let mut cond = $crate::expr::Cond::any();
            $(
                cond = cond.add($expr);
            )*
            cond
        }
    };
}
