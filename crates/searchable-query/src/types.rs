//! Type definitions for identifiers, column references, and table references.
//!
//! This module provides the core type system for identifying SQL entities:
//!
//! - [`Iden`]: Trait for SQL identifiers (tables, columns, aliases)
//! - [`Alias`]: Dynamic identifier for runtime-determined names
//! - [`DynIden`]: Type-erased identifier for heterogeneous collections
//! - [`ColumnRef`]: Reference to a column (simple or table-qualified)
//! - [`TableRef`]: Reference to a table (simple, schema-qualified, or aliased)
//! - [`IntoIden`], [`IntoColumnRef`], [`IntoTableRef`]: Conversion traits

mod column_ref;
mod iden;
mod operators;
mod order;
mod table_ref;

pub use column_ref::{ColumnRef, IntoColumnRef};
pub use iden::{Alias, DynIden, Iden, IntoIden};
pub use operators::{BinOper, LogicalChainOper, UnOper};
pub use order::{Order, OrderExpr};
pub use table_ref::{IntoTableRef, TableRef};
