//! Backend-independent SQL rendering.

use super::{QueryBuilder, SqlWriter};
use crate::{
	expr::{Condition, ConditionExpression, ConditionType, SimpleExpr},
	query::SelectStatement,
	types::{BinOper, ColumnRef, TableRef},
};

const MATCH_NOTHING: &str = "1 = 0";
const MATCH_EVERYTHING: &str = "1 = 1";

pub(super) fn write_select<B>(builder: &B, writer: &mut SqlWriter, stmt: &SelectStatement)
where
	B: QueryBuilder + ?Sized,
{
	writer.push_keyword("SELECT");
	writer.push_space();

	if stmt.selects.is_empty() {
		writer.push("*");
	} else {
		writer.push_list(&stmt.selects, ", ", |w, select| {
			write_simple_expr(builder, w, &select.expr);
			if let Some(alias) = &select.alias {
				w.push_keyword("AS");
				w.push_space();
				w.push_identifier(&alias.to_string(), |s| builder.escape_identifier(s));
			}
		});
	}

	if !stmt.from.is_empty() {
		writer.push_keyword("FROM");
		writer.push_space();
		writer.push_list(&stmt.from, ", ", |w, table| {
			write_table_ref(builder, w, table);
		});
	}

	if !stmt.r#where.is_empty() {
		writer.push_keyword("WHERE");
		writer.push_space();
		writer.push_list(&stmt.r#where.conditions, " AND ", |w, cond| {
			write_condition_expr(builder, w, cond, true);
		});
	}

	if !stmt.orders.is_empty() {
		writer.push_keyword("ORDER BY");
		writer.push_space();
		writer.push_list(&stmt.orders, ", ", |w, order| {
			write_column_ref(builder, w, &order.column);
			w.push_keyword(order.order.as_str());
		});
	}

	if let Some(limit) = &stmt.limit {
		writer.push_keyword("LIMIT");
		writer.push_space();
		writer.push_value(limit.clone(), |i| builder.format_placeholder(i));
	}

	if let Some(offset) = &stmt.offset {
		writer.push_keyword("OFFSET");
		writer.push_space();
		writer.push_value(offset.clone(), |i| builder.format_placeholder(i));
	}
}

fn write_table_ref<B>(builder: &B, writer: &mut SqlWriter, table: &TableRef)
where
	B: QueryBuilder + ?Sized,
{
	match table {
		TableRef::Table(iden) => {
			writer.push_identifier(&iden.to_string(), |s| builder.escape_identifier(s));
		}
		TableRef::SchemaTable(schema, iden) => {
			writer.push_identifier(&schema.to_string(), |s| builder.escape_identifier(s));
			writer.push(".");
			writer.push_identifier(&iden.to_string(), |s| builder.escape_identifier(s));
		}
		TableRef::TableAlias(iden, alias) => {
			writer.push_identifier(&iden.to_string(), |s| builder.escape_identifier(s));
			writer.push_keyword("AS");
			writer.push_space();
			writer.push_identifier(&alias.to_string(), |s| builder.escape_identifier(s));
		}
	}
}

fn write_column_ref<B>(builder: &B, writer: &mut SqlWriter, col: &ColumnRef)
where
	B: QueryBuilder + ?Sized,
{
	match col {
		ColumnRef::Column(iden) => {
			writer.push_identifier(&iden.to_string(), |s| builder.escape_identifier(s));
		}
		ColumnRef::TableColumn(table, iden) => {
			writer.push_identifier(&table.to_string(), |s| builder.escape_identifier(s));
			writer.push(".");
			writer.push_identifier(&iden.to_string(), |s| builder.escape_identifier(s));
		}
		ColumnRef::Asterisk => writer.push("*"),
		ColumnRef::TableAsterisk(table) => {
			writer.push_identifier(&table.to_string(), |s| builder.escape_identifier(s));
			writer.push(".*");
		}
	}
}

/// Write a condition group.
///
/// Empty groups still render a predicate: an empty `Any` group matches
/// nothing and an empty `All` group matches everything.
fn write_condition<B>(builder: &B, writer: &mut SqlWriter, condition: &Condition)
where
	B: QueryBuilder + ?Sized,
{
	if condition.negate {
		writer.push("NOT (");
	}

	match condition.conditions.as_slice() {
		[] => writer.push(match condition.condition_type {
			ConditionType::Any => MATCH_NOTHING,
			ConditionType::All => MATCH_EVERYTHING,
		}),
		[single] => write_condition_expr(builder, writer, single, true),
		children => {
			let separator = match condition.condition_type {
				ConditionType::All => " AND ",
				ConditionType::Any => " OR ",
			};
			if !condition.negate {
				writer.push("(");
			}
			writer.push_list(children, separator, |w, child| {
				write_condition_expr(builder, w, child, true);
			});
			if !condition.negate {
				writer.push(")");
			}
		}
	}

	if condition.negate {
		writer.push(")");
	}
}

// `grouped` is set when the expression sits next to AND/OR siblings, where a
// bare `a OR b` would bind wrongly.
fn write_condition_expr<B>(
	builder: &B,
	writer: &mut SqlWriter,
	cond: &ConditionExpression,
	grouped: bool,
) where
	B: QueryBuilder + ?Sized,
{
	match cond {
		ConditionExpression::Condition(c) => write_condition(builder, writer, c),
		ConditionExpression::SimpleExpr(expr) if grouped && is_logical(expr) => {
			writer.push("(");
			write_simple_expr(builder, writer, expr);
			writer.push(")");
		}
		ConditionExpression::SimpleExpr(expr) => write_simple_expr(builder, writer, expr),
	}
}

fn is_logical(expr: &SimpleExpr) -> bool {
	matches!(expr, SimpleExpr::Binary(_, BinOper::And | BinOper::Or, _))
}

fn write_simple_expr<B>(builder: &B, writer: &mut SqlWriter, expr: &SimpleExpr)
where
	B: QueryBuilder + ?Sized,
{
	match expr {
		SimpleExpr::Column(col) => write_column_ref(builder, writer, col),
		SimpleExpr::Value(value) => {
			writer.push_value(value.clone(), |i| builder.format_placeholder(i));
		}
		SimpleExpr::Unary(op, inner) => {
			writer.push(op.as_str());
			writer.push_space();
			if is_logical(inner) {
				writer.push("(");
				write_simple_expr(builder, writer, inner);
				writer.push(")");
			} else {
				write_simple_expr(builder, writer, inner);
			}
		}
		SimpleExpr::Binary(left, op @ (BinOper::ILike | BinOper::NotILike), right)
			if !builder.supports_ilike() =>
		{
			let like = if *op == BinOper::ILike {
				BinOper::Like
			} else {
				BinOper::NotLike
			};
			write_lowered(builder, writer, left);
			writer.push_space();
			writer.push(like.as_str());
			writer.push_space();
			write_lowered(builder, writer, right);
		}
		SimpleExpr::Binary(left, op, right) => {
			write_operand(builder, writer, left, *op);
			writer.push_space();
			writer.push(op.as_str());
			writer.push_space();
			write_operand(builder, writer, right, *op);
		}
		SimpleExpr::FunctionCall(func, args) => {
			writer.push(&func.to_string());
			writer.push("(");
			writer.push_list(args, ", ", |w, arg| write_simple_expr(builder, w, arg));
			writer.push(")");
		}
		SimpleExpr::SubQuery(op, select) => {
			if let Some(op) = op {
				writer.push(op.as_str());
				writer.push_space();
			}
			writer.push("(");
			write_select(builder, writer, select);
			writer.push(")");
		}
		SimpleExpr::Condition(cond) => write_condition(builder, writer, cond),
		SimpleExpr::Related(related) => panic!(
			"relation path `{}` must be expanded with a RelationRegistry before building; \
			 use QueryBuilder::try_build_select",
			related.path
		),
		SimpleExpr::Tuple(items) => {
			writer.push("(");
			writer.push_list(items, ", ", |w, item| write_simple_expr(builder, w, item));
			writer.push(")");
		}
		SimpleExpr::Custom(sql) => writer.push(sql),
		SimpleExpr::Constant(keyword) => writer.push(keyword.as_str()),
	}
}

// Parenthesize binary operands that bind looser than their parent.
fn write_operand<B>(builder: &B, writer: &mut SqlWriter, operand: &SimpleExpr, parent: BinOper)
where
	B: QueryBuilder + ?Sized,
{
	match operand {
		SimpleExpr::Binary(_, op, _) if op.precedence() < parent.precedence() => {
			writer.push("(");
			write_simple_expr(builder, writer, operand);
			writer.push(")");
		}
		_ => write_simple_expr(builder, writer, operand),
	}
}

// LOWER(x), without double-wrapping an operand that is already lowered.
fn write_lowered<B>(builder: &B, writer: &mut SqlWriter, operand: &SimpleExpr)
where
	B: QueryBuilder + ?Sized,
{
	match operand {
		SimpleExpr::FunctionCall(func, _) if func.to_string() == "LOWER" => {
			write_simple_expr(builder, writer, operand);
		}
		_ => {
			writer.push("LOWER(");
			write_simple_expr(builder, writer, operand);
			writer.push(")");
		}
	}
}
