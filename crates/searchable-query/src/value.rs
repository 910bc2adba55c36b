//! Value types for SQL parameters.
//!
//! - [`Value`]: A single bound parameter
//! - [`Values`]: The ordered parameter list produced by a backend
//! - [`IntoValue`]: Conversion trait for Rust types

/// Core value representation for SQL parameters.
///
/// All variants use `Option<T>`; a `None` value is rendered as SQL `NULL`
/// without consuming a placeholder.
///
/// ## Example
///
/// ```rust
/// use searchable_query::Value;
///
/// let int_val = Value::Int(Some(42));
/// let null_int = Value::Int(None);
/// let string_val = Value::String(Some(Box::new("hello".to_string())));
/// assert!(null_int.is_null());
/// assert!(!string_val.is_null());
/// # let _ = int_val;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Boolean value
	Bool(Option<bool>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 32-bit unsigned integer
	Unsigned(Option<u32>),
	/// 64-bit unsigned integer
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),
}

impl Value {
	/// Returns `true` if this value is null.
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::Unsigned(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
		}
	}

	/// Returns the string payload, if this is a non-null string value.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(Some(s)) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Self::String(None)
	}
}

/// Ordered collection of bound parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Append a value.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of collected values.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no values were collected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the values in placeholder order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Conversion trait for types that can be bound as SQL parameters.
pub trait IntoValue {
	/// Convert into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! impl_into_value {
	($ty:ty, $variant:ident) => {
		impl IntoValue for $ty {
			fn into_value(self) -> Value {
				Value::$variant(Some(self))
			}
		}

		impl IntoValue for Option<$ty> {
			fn into_value(self) -> Value {
				Value::$variant(self)
			}
		}

		impl From<$ty> for Value {
			fn from(v: $ty) -> Self {
				v.into_value()
			}
		}
	};
}

impl_into_value!(bool, Bool);
impl_into_value!(i32, Int);
impl_into_value!(i64, BigInt);
impl_into_value!(u32, Unsigned);
impl_into_value!(u64, BigUnsigned);
impl_into_value!(f32, Float);
impl_into_value!(f64, Double);

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self)))
	}
}

impl IntoValue for Option<String> {
	fn into_value(self) -> Value {
		Value::String(self.map(Box::new))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for Vec<u8> {
	fn into_value(self) -> Value {
		Value::Bytes(Some(Box::new(self)))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		v.into_value()
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		v.into_value()
	}
}
