//! SQL operators for expressions.
//!
//! - [`UnOper`]: Unary operators (NOT)
//! - [`BinOper`]: Binary operators (AND, OR, =, LIKE, etc.)
//! - [`LogicalChainOper`]: Operators for chaining conditions

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOper {
	/// Logical NOT
	Not,
}

impl UnOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Not => "NOT",
		}
	}
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOper {
	// Logical operators
	/// Logical AND
	And,
	/// Logical OR
	Or,

	// Comparison operators
	/// Equal (=)
	Equal,
	/// Not equal (<>)
	NotEqual,
	/// Less than (<)
	SmallerThan,
	/// Less than or equal (<=)
	SmallerThanOrEqual,
	/// Greater than (>)
	GreaterThan,
	/// Greater than or equal (>=)
	GreaterThanOrEqual,

	// Pattern matching
	/// LIKE
	Like,
	/// NOT LIKE
	NotLike,
	/// ILIKE (native on PostgreSQL, emulated with LOWER() elsewhere)
	ILike,
	/// NOT ILIKE
	NotILike,

	// Set membership
	/// IN
	In,
	/// NOT IN
	NotIn,

	// NULL checks
	/// IS
	Is,
	/// IS NOT
	IsNot,
}

impl BinOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::SmallerThan => "<",
			Self::SmallerThanOrEqual => "<=",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::Like => "LIKE",
			Self::NotLike => "NOT LIKE",
			Self::ILike => "ILIKE",
			Self::NotILike => "NOT ILIKE",
			Self::In => "IN",
			Self::NotIn => "NOT IN",
			Self::Is => "IS",
			Self::IsNot => "IS NOT",
		}
	}

	/// Returns the precedence of this operator.
	///
	/// Higher values indicate higher precedence (binds more tightly).
	#[must_use]
	pub fn precedence(&self) -> u8 {
		match self {
			Self::Or => 1,
			Self::And => 2,
			Self::Is | Self::IsNot => 3,
			Self::In | Self::NotIn => 4,
			Self::Like | Self::NotLike | Self::ILike | Self::NotILike => 5,
			Self::Equal
			| Self::NotEqual
			| Self::SmallerThan
			| Self::SmallerThanOrEqual
			| Self::GreaterThan
			| Self::GreaterThanOrEqual => 6,
		}
	}

	/// Returns true for the LIKE family of operators.
	#[must_use]
	pub fn is_pattern(&self) -> bool {
		matches!(
			self,
			Self::Like | Self::NotLike | Self::ILike | Self::NotILike
		)
	}
}

/// Logical operators for chaining conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalChainOper {
	/// Logical AND
	And,
	/// Logical OR
	Or,
}

impl LogicalChainOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
		}
	}
}

impl From<LogicalChainOper> for BinOper {
	fn from(op: LogicalChainOper) -> Self {
		match op {
			LogicalChainOper::And => BinOper::And,
			LogicalChainOper::Or => BinOper::Or,
		}
	}
}
