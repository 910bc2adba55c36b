//! Relation declarations and EXISTS expansion.
//!
//! Statements may carry [`RelatedExpr`] nodes ("a related record exists
//! satisfying X"). Those nodes know only a relation path such as
//! `category.parent`; a [`RelationRegistry`] knows how tables join and
//! lowers every node into correlated subqueries:
//!
//! ```sql
//! EXISTS (SELECT 1 FROM "categories" AS "rel_1"
//!         WHERE "rel_1"."id" = "products"."category_id"
//!         AND EXISTS (SELECT 1 FROM "categories" AS "rel_2"
//!                     WHERE "rel_2"."id" = "rel_1"."parent_id"
//!                     AND ...))
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
	error::{QueryError, QueryResult},
	expr::{Condition, ConditionExpression, Expr, ExprTrait, RelatedExpr, SimpleExpr},
	query::{Query, SelectStatement},
	types::{DynIden, IntoIden},
};

/// Cardinality of a relation, as seen from the declaring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
	/// The declaring table holds the foreign key
	BelongsTo,
	/// The related table holds a foreign key back to the declaring table
	HasMany,
	/// Like `HasMany`, with at most one related row
	HasOne,
}

/// A named relation from one table to another.
///
/// The join predicate is always
/// `related_alias.related_column = parent.parent_column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
	name: String,
	kind: RelationKind,
	target: String,
	parent_column: String,
	related_column: String,
}

impl Relation {
	/// The declaring table holds `foreign_key`, pointing at `target.id`.
	///
	/// # Examples
	///
	/// ```
	/// use searchable_query::{Relation, RelationKind};
	///
	/// let category = Relation::belongs_to("category", "categories", "category_id");
	/// assert_eq!(category.kind(), RelationKind::BelongsTo);
	/// assert_eq!(category.parent_column(), "category_id");
	/// assert_eq!(category.related_column(), "id");
	/// ```
	pub fn belongs_to(
		name: impl Into<String>,
		target: impl Into<String>,
		foreign_key: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			kind: RelationKind::BelongsTo,
			target: target.into(),
			parent_column: foreign_key.into(),
			related_column: "id".to_string(),
		}
	}

	/// `target.foreign_key` points back at the declaring table's `id`.
	pub fn has_many(
		name: impl Into<String>,
		target: impl Into<String>,
		foreign_key: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			kind: RelationKind::HasMany,
			target: target.into(),
			parent_column: "id".to_string(),
			related_column: foreign_key.into(),
		}
	}

	/// Single-row variant of [`Relation::has_many`].
	pub fn has_one(
		name: impl Into<String>,
		target: impl Into<String>,
		foreign_key: impl Into<String>,
	) -> Self {
		Self {
			kind: RelationKind::HasOne,
			..Self::has_many(name, target, foreign_key)
		}
	}

	/// Override the referenced key on the target of a `BelongsTo` relation.
	#[must_use]
	pub fn owner_key(mut self, column: impl Into<String>) -> Self {
		if self.kind == RelationKind::BelongsTo {
			self.related_column = column.into();
		}
		self
	}

	/// Override the declaring table's key for `HasMany`/`HasOne` relations.
	#[must_use]
	pub fn local_key(mut self, column: impl Into<String>) -> Self {
		if self.kind != RelationKind::BelongsTo {
			self.parent_column = column.into();
		}
		self
	}

	/// Relation name used in paths
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Relation cardinality
	pub fn kind(&self) -> RelationKind {
		self.kind
	}

	/// Table the relation points to
	pub fn target(&self) -> &str {
		&self.target
	}

	/// Join column on the declaring side
	pub fn parent_column(&self) -> &str {
		&self.parent_column
	}

	/// Join column on the related side
	pub fn related_column(&self) -> &str {
		&self.related_column
	}
}

/// Relations declared per table, used to expand [`RelatedExpr`] nodes.
///
/// # Examples
///
/// ```
/// use searchable_query::{Relation, RelationRegistry};
///
/// let mut registry = RelationRegistry::new();
/// registry
///     .register("products", Relation::belongs_to("category", "categories", "category_id"))
///     .register("categories", Relation::belongs_to("parent", "categories", "parent_id"));
/// assert_eq!(registry.count(), 2);
/// assert!(registry.get("products", "category").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelationRegistry {
	tables: HashMap<String, IndexMap<String, Relation>>,
}

impl RelationRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare `relation` on `table`, replacing any relation of the same name.
	pub fn register(&mut self, table: impl Into<String>, relation: Relation) -> &mut Self {
		self.tables
			.entry(table.into())
			.or_default()
			.insert(relation.name.clone(), relation);
		self
	}

	/// Builder-style [`RelationRegistry::register`].
	#[must_use]
	pub fn with(mut self, table: impl Into<String>, relation: Relation) -> Self {
		self.register(table, relation);
		self
	}

	/// Look up a relation by table and name
	pub fn get(&self, table: &str, name: &str) -> Option<&Relation> {
		self.tables.get(table).and_then(|relations| relations.get(name))
	}

	/// Relations declared on `table`, in declaration order
	pub fn relations_of(&self, table: &str) -> impl Iterator<Item = &Relation> {
		self.tables
			.get(table)
			.into_iter()
			.flat_map(|relations| relations.values())
	}

	/// Total number of declared relations
	pub fn count(&self) -> usize {
		self.tables.values().map(IndexMap::len).sum()
	}

	/// Lower every [`RelatedExpr`] in `stmt` into correlated `EXISTS`
	/// subqueries.
	///
	/// Paths are resolved against the statement's first FROM table. Each
	/// hop gets a fresh alias (`rel_1`, `rel_2`, ...) unique within the
	/// statement, and bare columns in the related condition are qualified
	/// with the alias of the last hop. Statements without relation nodes
	/// are returned unchanged.
	///
	/// # Errors
	///
	/// - [`QueryError::UnknownRelation`] if a hop is not registered
	/// - [`QueryError::MissingTable`] if the statement has no FROM table
	pub fn expand(&self, stmt: &SelectStatement) -> QueryResult<SelectStatement> {
		let mut aliases = 0usize;
		self.expand_statement(stmt.clone(), &mut aliases)
	}

	fn expand_statement(
		&self,
		mut stmt: SelectStatement,
		aliases: &mut usize,
	) -> QueryResult<SelectStatement> {
		let scope = stmt
			.primary_table()
			.map(|table| Scope {
				table: table.table_name().to_string(),
				reference: table.reference_name().clone(),
			});

		let conditions = std::mem::take(&mut stmt.r#where.conditions);
		stmt.r#where.conditions = conditions
			.into_iter()
			.map(|cond| self.expand_condition_expr(cond, scope.as_ref(), aliases))
			.collect::<QueryResult<_>>()?;
		Ok(stmt)
	}

	fn expand_condition(
		&self,
		mut cond: Condition,
		scope: Option<&Scope>,
		aliases: &mut usize,
	) -> QueryResult<Condition> {
		cond.conditions = std::mem::take(&mut cond.conditions)
			.into_iter()
			.map(|child| self.expand_condition_expr(child, scope, aliases))
			.collect::<QueryResult<_>>()?;
		Ok(cond)
	}

	fn expand_condition_expr(
		&self,
		expr: ConditionExpression,
		scope: Option<&Scope>,
		aliases: &mut usize,
	) -> QueryResult<ConditionExpression> {
		Ok(match expr {
			ConditionExpression::Condition(cond) => {
				ConditionExpression::Condition(self.expand_condition(cond, scope, aliases)?)
			}
			ConditionExpression::SimpleExpr(expr) => {
				ConditionExpression::SimpleExpr(self.expand_expr(expr, scope, aliases)?)
			}
		})
	}

	fn expand_expr(
		&self,
		expr: SimpleExpr,
		scope: Option<&Scope>,
		aliases: &mut usize,
	) -> QueryResult<SimpleExpr> {
		Ok(match expr {
			SimpleExpr::Related(related) => {
				let scope = scope.ok_or_else(|| QueryError::MissingTable {
					path: related.path.clone(),
				})?;
				self.expand_related(*related, scope, aliases)?
			}
			SimpleExpr::Unary(op, inner) => {
				SimpleExpr::Unary(op, Box::new(self.expand_expr(*inner, scope, aliases)?))
			}
			SimpleExpr::Binary(left, op, right) => SimpleExpr::Binary(
				Box::new(self.expand_expr(*left, scope, aliases)?),
				op,
				Box::new(self.expand_expr(*right, scope, aliases)?),
			),
			SimpleExpr::FunctionCall(func, args) => SimpleExpr::FunctionCall(
				func,
				args.into_iter()
					.map(|arg| self.expand_expr(arg, scope, aliases))
					.collect::<QueryResult<_>>()?,
			),
			SimpleExpr::Tuple(items) => SimpleExpr::Tuple(
				items
					.into_iter()
					.map(|item| self.expand_expr(item, scope, aliases))
					.collect::<QueryResult<_>>()?,
			),
			SimpleExpr::Condition(cond) => {
				SimpleExpr::Condition(Box::new(self.expand_condition(*cond, scope, aliases)?))
			}
			// Subqueries resolve paths against their own FROM table.
			SimpleExpr::SubQuery(op, select) => {
				SimpleExpr::SubQuery(op, Box::new(self.expand_statement(*select, aliases)?))
			}
			other @ (SimpleExpr::Column(_)
			| SimpleExpr::Value(_)
			| SimpleExpr::Custom(_)
			| SimpleExpr::Constant(_)) => other,
		})
	}

	fn expand_related(
		&self,
		related: RelatedExpr,
		scope: &Scope,
		aliases: &mut usize,
	) -> QueryResult<SimpleExpr> {
		let RelatedExpr { path, condition } = related;
		let hops: Vec<&str> = path.split('.').collect();
		self.expand_hops(&hops, scope, condition, aliases)
	}

	fn expand_hops(
		&self,
		hops: &[&str],
		parent: &Scope,
		condition: Condition,
		aliases: &mut usize,
	) -> QueryResult<SimpleExpr> {
		let Some((name, rest)) = hops.split_first() else {
			return Ok(SimpleExpr::Condition(Box::new(condition)));
		};
		let relation = self
			.get(&parent.table, name)
			.ok_or_else(|| QueryError::UnknownRelation {
				table: parent.table.clone(),
				relation: (*name).to_string(),
			})?;

		*aliases += 1;
		let hop = Scope {
			table: relation.target.clone(),
			reference: format!("rel_{}", *aliases).into_iden(),
		};

		let inner = if rest.is_empty() {
			let qualified = qualify_condition(condition, &hop.reference);
			self.expand_condition(qualified, Some(&hop), aliases)?
		} else {
			Condition::all().add(self.expand_hops(rest, &hop, condition, aliases)?)
		};

		let subquery = Query::select()
			.expr(Expr::cust("1"))
			.from_as(relation.target.as_str(), hop.reference.clone())
			.and_where(
				Expr::col((hop.reference.clone(), relation.related_column.as_str()))
					.eq(Expr::col((parent.reference.clone(), relation.parent_column.as_str()))),
			)
			.cond_where(inner)
			.take();

		Ok(Expr::exists(subquery).into_simple_expr())
	}
}

/// The table a condition is evaluated against, and the name it is
/// referenced by (table name or alias).
#[derive(Debug)]
struct Scope {
	table: String,
	reference: DynIden,
}

fn qualify_condition(mut cond: Condition, table: &DynIden) -> Condition {
	cond.conditions = std::mem::take(&mut cond.conditions)
		.into_iter()
		.map(|child| match child {
			ConditionExpression::Condition(c) => {
				ConditionExpression::Condition(qualify_condition(c, table))
			}
			ConditionExpression::SimpleExpr(e) => {
				ConditionExpression::SimpleExpr(qualify_expr(e, table))
			}
		})
		.collect();
	cond
}

// Related nodes and subqueries are left alone: their columns belong to
// another table.
fn qualify_expr(expr: SimpleExpr, table: &DynIden) -> SimpleExpr {
	match expr {
		SimpleExpr::Column(col) => SimpleExpr::Column(col.qualified_with(table)),
		SimpleExpr::Unary(op, inner) => SimpleExpr::Unary(op, Box::new(qualify_expr(*inner, table))),
		SimpleExpr::Binary(left, op, right) => SimpleExpr::Binary(
			Box::new(qualify_expr(*left, table)),
			op,
			Box::new(qualify_expr(*right, table)),
		),
		SimpleExpr::FunctionCall(func, args) => SimpleExpr::FunctionCall(
			func,
			args.into_iter().map(|arg| qualify_expr(arg, table)).collect(),
		),
		SimpleExpr::Tuple(items) => {
			SimpleExpr::Tuple(items.into_iter().map(|item| qualify_expr(item, table)).collect())
		}
		SimpleExpr::Condition(cond) => {
			SimpleExpr::Condition(Box::new(qualify_condition(*cond, table)))
		}
		other => other,
	}
}
