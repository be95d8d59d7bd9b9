//! Value node representing any already-decoded interchange data.

use crate::value::{Array, Object};
use anyhow::{Result, bail};

/// A node of a decoded interchange tree: arrays, objects, numbers,
/// strings, booleans, and null.
///
/// The tree is immutable value data; accessors borrow, conversions clone.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Array(Array),
	Boolean(bool),
	Null,
	Number(f64),
	Object(Object),
	String(String),
}

impl Value {
	/// Return the node type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use Value::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Borrow the [`Array`] if this node is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&Array> {
		if let Value::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found a {}", self.type_as_str())
		}
	}

	/// Borrow the [`Object`] if this node is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&Object> {
		if let Value::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found a {}", self.type_as_str())
		}
	}

	/// Return a string slice if this node is a string.
	///
	/// # Errors
	/// Returns an error if the node is not a string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			Value::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// Return the numeric value if this node is a number.
	///
	/// # Errors
	/// Returns an error if the node is not a number.
	pub fn as_f64(&self) -> Result<f64> {
		if let Value::Number(val) = self {
			Ok(*val)
		} else {
			bail!("expected a number, found a {}", self.type_as_str())
		}
	}
}

impl From<&str> for Value {
	fn from(input: &str) -> Self {
		Value::String(input.to_string())
	}
}

impl From<&String> for Value {
	fn from(input: &String) -> Self {
		Value::String(input.to_string())
	}
}

impl From<String> for Value {
	fn from(input: String) -> Self {
		Value::String(input)
	}
}

impl From<bool> for Value {
	fn from(input: bool) -> Self {
		Value::Boolean(input)
	}
}

impl From<&Value> for Value {
	fn from(input: &Value) -> Self {
		input.clone()
	}
}

impl From<Object> for Value {
	fn from(input: Object) -> Self {
		Value::Object(input)
	}
}

impl<I> From<I> for Value
where
	Array: From<I>,
{
	fn from(input: I) -> Self {
		Value::Array(input.into())
	}
}

macro_rules! impl_from_number {
	($($t:ty),*) => {$(
		impl From<$t> for Value {
			fn from(input: $t) -> Self {
				Value::Number(f64::from(input))
			}
		}
	)*}
}

impl_from_number!(f64, f32, i32, i16, i8, u32, u16, u8);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_str_and_string() {
		assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
		assert_eq!(Value::from(String::from("hello")), Value::String("hello".to_string()));
	}

	#[test]
	fn from_numbers() {
		assert_eq!(Value::from(23.42), Value::Number(23.42));
		assert_eq!(Value::from(42), Value::Number(42.0));
	}

	#[test]
	fn from_bool() {
		assert_eq!(Value::from(true), Value::Boolean(true));
		assert_eq!(Value::from(false), Value::Boolean(false));
	}

	#[test]
	fn from_vec_builds_array() {
		let value = Value::from(vec![1, 2, 3]);
		assert_eq!(
			value,
			Value::Array(Array(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]))
		);
	}

	#[test]
	fn from_nested_vec_builds_nested_arrays() {
		let value = Value::from(vec![vec![[0.0, 0.0], [1.0, 1.0]]]);
		let outer = value.as_array().unwrap();
		assert_eq!(outer.len(), 1);
		let ring = outer.0[0].as_array().unwrap();
		assert_eq!(ring.len(), 2);
		assert_eq!(ring.0[0], Value::from([0.0, 0.0]));
	}

	#[test]
	fn type_as_str() {
		assert_eq!(Value::String("value".to_string()).type_as_str(), "string");
		assert_eq!(Value::Number(42.0).type_as_str(), "number");
		assert_eq!(Value::Boolean(true).type_as_str(), "boolean");
		assert_eq!(Value::Null.type_as_str(), "null");
		assert_eq!(Value::Array(Array(vec![])).type_as_str(), "array");
		assert_eq!(Value::Object(Object::new()).type_as_str(), "object");
	}

	#[test]
	fn as_array() {
		let value = Value::Array(Array(vec![]));
		assert!(value.as_array().is_ok());

		let non_array = Value::from("not an array");
		assert_eq!(
			non_array.as_array().unwrap_err().to_string(),
			"expected an array, found a string"
		);
	}

	#[test]
	fn as_object() {
		let value = Value::Object(Object::new());
		assert!(value.as_object().is_ok());
		assert!(Value::Null.as_object().is_err());
	}

	#[test]
	fn as_str() {
		assert_eq!(Value::from("value").as_str().unwrap(), "value");
		assert_eq!(
			Value::Number(42.0).as_str().unwrap_err().to_string(),
			"expected a string, found a number"
		);
	}

	#[test]
	fn as_f64() {
		assert_eq!(Value::Number(42.0).as_f64().unwrap(), 42.0);
		assert!(Value::from("not a number").as_f64().is_err());
	}
}
