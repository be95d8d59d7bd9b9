//! Object node backed by a `BTreeMap<String, Value>`.

use crate::value::{Array, Value};
use anyhow::Result;
use std::{collections::BTreeMap, fmt::Debug};

/// A string-keyed mapping of [`Value`] nodes.
#[derive(Clone, Default, PartialEq)]
pub struct Object(pub BTreeMap<String, Value>);

impl Object {
	/// Create a new, empty `Object`.
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Get a reference to the raw [`Value`] for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Retrieve a string slice for the specified key.
	///
	/// # Errors
	/// Returns an error if the key is present but not a string.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(Value::as_str).transpose()
	}

	/// Retrieve an [`Array`] reference for the specified key.
	///
	/// # Errors
	/// Returns an error if the key is present but not an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&Array>> {
		self.get(key).map(Value::as_array).transpose()
	}

	/// Set the specified key to the given value, converting it into a [`Value`].
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		Value: From<T>,
	{
		self.0.insert(key.to_owned(), Value::from(value));
	}

	/// Return an iterator over key-value pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

/// Convert a `Vec<(&str, T)>` into a [`Value::Object`].
impl<T> From<Vec<(&str, T)>> for Value
where
	Value: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		Value::Object(Object::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into an [`Object`], consuming the pairs.
impl<T> From<Vec<(&str, T)>> for Object
where
	Value: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		Object(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), Value::from(value)))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_and_get() {
		let mut obj = Object::new();
		obj.set("key", "value");
		assert_eq!(obj.get("key"), Some(&Value::from("value")));
		assert_eq!(obj.get("missing"), None);
	}

	#[test]
	fn get_str() {
		let obj = Object::from(vec![("key", "value")]);
		assert_eq!(obj.get_str("key").unwrap(), Some("value"));
		assert_eq!(obj.get_str("missing").unwrap(), None);

		let obj = Object::from(vec![("key", 42)]);
		assert!(obj.get_str("key").is_err());
	}

	#[test]
	fn get_array() {
		let array = Array::from(vec![1, 2]);
		let obj = Object::from(vec![("key", Value::Array(array.clone()))]);
		assert_eq!(obj.get_array("key").unwrap(), Some(&array));
		assert_eq!(obj.get_array("missing").unwrap(), None);
	}

	#[test]
	fn from_pairs() {
		let value = Value::from(vec![("foo", 3), ("bar", 4)]);
		let Value::Object(obj) = value else {
			panic!("expected an object");
		};
		assert_eq!(obj.get("foo"), Some(&Value::from(3)));
		assert_eq!(obj.get("bar"), Some(&Value::from(4)));
	}

	#[test]
	fn iter_in_key_order() {
		let obj = Object::from(vec![("z", 1), ("a", 2)]);
		let keys: Vec<&String> = obj.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec![&"a".to_string(), &"z".to_string()]);
	}

	#[test]
	fn debug_fmt() {
		let obj = Object::from(vec![("k", 1)]);
		assert!(format!("{obj:?}").contains("\"k\""));
	}
}
