//! Identifier types.
//!
//! - [`Iden`]: Trait for SQL identifiers (tables, columns, aliases)
//! - [`DynIden`]: Type-erased, shareable identifier
//! - [`Alias`]: Identifier determined at runtime
//! - [`IntoIden`]: Conversion trait for identifier types

use std::fmt;
use std::sync::Arc;

/// A SQL identifier.
///
/// Identifiers are written unquoted here; each backend applies its own
/// quoting when the statement is built.
pub trait Iden: Send + Sync + fmt::Debug {
	/// Returns the raw identifier text.
	fn unquoted(&self) -> String;
}

/// Type-erased identifier for heterogeneous collections.
pub type DynIden = Arc<dyn Iden>;

impl fmt::Display for dyn Iden {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.unquoted())
	}
}

/// A runtime-determined identifier.
///
/// # Example
///
/// ```rust
/// use searchable_query::{Alias, Iden};
///
/// let alias = Alias::new("products");
/// assert_eq!(alias.unquoted(), "products");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
	/// Create a new alias.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self(name.into())
	}
}

impl Iden for Alias {
	fn unquoted(&self) -> String {
		self.0.clone()
	}
}

/// Conversion trait for identifier types.
pub trait IntoIden {
	/// Convert into a [`DynIden`].
	fn into_iden(self) -> DynIden;
}

impl IntoIden for DynIden {
	fn into_iden(self) -> DynIden {
		self
	}
}

impl IntoIden for Alias {
	fn into_iden(self) -> DynIden {
		Arc::new(self)
	}
}

impl IntoIden for &str {
	fn into_iden(self) -> DynIden {
		Arc::new(Alias::new(self))
	}
}

impl IntoIden for String {
	fn into_iden(self) -> DynIden {
		Arc::new(Alias(self))
	}
}

impl IntoIden for &String {
	fn into_iden(self) -> DynIden {
		Arc::new(Alias(self.clone()))
	}
}
