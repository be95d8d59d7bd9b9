//! Array node backed by a `Vec<Value>`.

use crate::value::Value;
use std::fmt::Debug;

/// An ordered sequence of [`Value`] nodes.
#[derive(Clone, Default, PartialEq)]
pub struct Array(pub Vec<Value>);

impl Array {
	/// Get a reference to the underlying `Vec<Value>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<Value> {
		&self.0
	}

	/// Return an iterator over the elements.
	pub fn iter(&self) -> impl Iterator<Item = &Value> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for Array {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for Array
where
	Value: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		Array(Vec::from_iter(input.into_iter().map(Value::from)))
	}
}

impl<T> From<&[T]> for Array
where
	Value: From<T>,
	T: Clone,
{
	fn from(input: &[T]) -> Self {
		Array(Vec::from_iter(input.iter().map(|v| Value::from(v.clone()))))
	}
}

impl<T, const N: usize> From<[T; N]> for Array
where
	Value: From<T>,
{
	fn from(input: [T; N]) -> Self {
		Array(Vec::from_iter(input.into_iter().map(Value::from)))
	}
}

impl<T, const N: usize> From<&[T; N]> for Array
where
	Value: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		Array(Vec::from_iter(input.iter().map(|v| Value::from(*v))))
	}
}
