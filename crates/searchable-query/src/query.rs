//! Query statement builders
//!
//! - Query Select: [`SelectStatement`]
//!
//! # Examples
//!
//! ```rust
//! use searchable_query::{Expr, ExprTrait, Query};
//!
//! let select_query = Query::select()
//!     .column("name")
//!     .from("products")
//!     .and_where(Expr::col("active").eq(true))
//!     .to_owned();
//! # let _ = select_query;
//! ```

mod select;

pub use select::{SelectExpr, SelectStatement};

/// Shorthand for constructing any table query
#[derive(Debug, Clone)]
pub struct Query;

impl Query {
	/// Construct a new [`SelectStatement`]
	pub fn select() -> SelectStatement {
		SelectStatement::new()
	}
}
