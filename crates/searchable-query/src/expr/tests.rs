//! Integration tests for the expression module.

use super::*;
use crate::types::BinOper;
use crate::value::Value;
use crate::{all, any};
use rstest::rstest;

// =============================================================================
// Expr + ExprTrait
// =============================================================================

#[rstest]
fn test_expr_trait_on_expr() {
	let expr = Expr::col("age").gte(18);
	assert!(matches!(
		expr,
		SimpleExpr::Binary(_, BinOper::GreaterThanOrEqual, _)
	));
}

#[rstest]
fn test_expr_trait_on_simple_expr() {
	let simple = SimpleExpr::Column(crate::types::ColumnRef::column("age"));
	let expr = simple.lt(18);
	assert!(matches!(expr, SimpleExpr::Binary(_, BinOper::SmallerThan, _)));
}

#[rstest]
#[case::like(Expr::col("name").like("%a%"), BinOper::Like)]
#[case::not_like(Expr::col("name").not_like("%a%"), BinOper::NotLike)]
#[case::ilike(Expr::col("name").ilike("%a%"), BinOper::ILike)]
#[case::not_ilike(Expr::col("name").not_ilike("%a%"), BinOper::NotILike)]
#[case::eq(Expr::col("name").eq("a"), BinOper::Equal)]
#[case::ne(Expr::col("name").ne("a"), BinOper::NotEqual)]
#[case::is_null(Expr::col("name").is_null(), BinOper::Is)]
fn test_comparison_operators(#[case] expr: SimpleExpr, #[case] expected: BinOper) {
	match expr {
		SimpleExpr::Binary(_, op, _) => assert_eq!(op, expected),
		other => panic!("Expected Binary, got {other:?}"),
	}
}

#[rstest]
fn test_lowered_like_wraps_both_sides() {
	let expr = Expr::col("name").lower().like(Expr::val("%Lap%").lower());

	let SimpleExpr::Binary(left, BinOper::Like, right) = expr else {
		panic!("Expected LIKE binary");
	};
	assert!(matches!(*left, SimpleExpr::FunctionCall(ref f, _) if f.to_string() == "LOWER"));
	let SimpleExpr::FunctionCall(_, args) = *right else {
		panic!("Expected LOWER call on the pattern");
	};
	assert!(matches!(&args[0], SimpleExpr::Value(v) if v.as_str() == Some("%Lap%")));
}

#[rstest]
fn test_not_wraps_in_unary() {
	let expr = Expr::col("active").eq(true).not();
	assert!(matches!(expr, SimpleExpr::Unary(crate::types::UnOper::Not, _)));
}

// =============================================================================
// Expr + Condition
// =============================================================================

#[rstest]
fn test_nested_condition_with_related() {
	let cond = Cond::any()
		.add(Expr::col("name").like("%x%"))
		.add(Expr::related(
			"category",
			Cond::any().add(Expr::col("name").like("%x%")),
		));

	assert_eq!(cond.len(), 2);
	assert!(cond.contains_related());
	match &cond.conditions[1] {
		ConditionExpression::SimpleExpr(SimpleExpr::Related(related)) => {
			assert_eq!(related.path, "category");
			assert_eq!(related.condition.len(), 1);
		}
		other => panic!("Expected Related, got {other:?}"),
	}
}

#[rstest]
fn test_macros_match_builders() {
	let from_macro = any![Expr::col("a").eq(1), Expr::col("b").eq(2)];
	let from_builder = Cond::any()
		.add(Expr::col("a").eq(1))
		.add(Expr::col("b").eq(2));

	assert_eq!(from_macro.condition_type, from_builder.condition_type);
	assert_eq!(from_macro.len(), from_builder.len());
	assert_eq!(all![].len(), 0);
}

#[rstest]
fn test_value_binding_in_condition() {
	let cond = Cond::all().add(Expr::col("price").eq(Value::Double(Some(9.5))));
	match &cond.conditions[0] {
		ConditionExpression::SimpleExpr(SimpleExpr::Binary(_, _, right)) => {
			assert!(matches!(**right, SimpleExpr::Value(Value::Double(Some(_)))));
		}
		other => panic!("Expected Binary, got {other:?}"),
	}
}
