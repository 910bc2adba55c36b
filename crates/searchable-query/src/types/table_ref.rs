//! Table reference types for SQL queries.
//!
//! - [`TableRef`]: Reference to a table (simple, schema-qualified, aliased)
//! - [`IntoTableRef`]: Conversion trait for table references

use super::iden::{DynIden, IntoIden};

/// Reference to a table in a SQL query.
#[derive(Debug, Clone)]
pub enum TableRef {
	/// Simple table reference (e.g., `products`)
	Table(DynIden),
	/// Schema-qualified table reference (e.g., `public.products`)
	SchemaTable(DynIden, DynIden),
	/// Table with alias (e.g., `products AS p`)
	TableAlias(DynIden, DynIden),
}

impl TableRef {
	/// Create a simple table reference.
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::TableRef;
	///
	/// let table = TableRef::table("products");
	/// ```
	pub fn table<I: IntoIden>(table: I) -> Self {
		Self::Table(table.into_iden())
	}

	/// Create a schema-qualified table reference.
	pub fn schema_table<S: IntoIden, T: IntoIden>(schema: S, table: T) -> Self {
		Self::SchemaTable(schema.into_iden(), table.into_iden())
	}

	/// Create a table reference with an alias.
	///
	/// # Example
	///
	/// ```rust
	/// use searchable_query::TableRef;
	///
	/// let table = TableRef::table_alias("categories", "c");
	/// ```
	pub fn table_alias<T: IntoIden, A: IntoIden>(table: T, alias: A) -> Self {
		Self::TableAlias(table.into_iden(), alias.into_iden())
	}

	/// The underlying table name, ignoring schema and alias.
	pub fn table_name(&self) -> &DynIden {
		match self {
			Self::Table(table) | Self::SchemaTable(_, table) | Self::TableAlias(table, _) => table,
		}
	}

	/// The name other clauses use to refer to this table: the alias when
	/// one is set, otherwise the table name.
	pub fn reference_name(&self) -> &DynIden {
		match self {
			Self::TableAlias(_, alias) => alias,
			Self::Table(table) | Self::SchemaTable(_, table) => table,
		}
	}
}

/// Conversion trait for table references.
pub trait IntoTableRef {
	/// Convert this type into a `TableRef`.
	fn into_table_ref(self) -> TableRef;
}

impl IntoTableRef for TableRef {
	fn into_table_ref(self) -> TableRef {
		self
	}
}

impl<T: IntoIden> IntoTableRef for T {
	fn into_table_ref(self) -> TableRef {
		TableRef::Table(self.into_iden())
	}
}
