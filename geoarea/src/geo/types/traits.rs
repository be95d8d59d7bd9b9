use anyhow::Result;
use std::fmt::Debug;

/// Surface area on the WGS-84 sphere, in square meters.
///
/// Implemented by every geometry kind so generic callers can take any of
/// them. Kinds without an enclosed area (points, lines) report `0.0`.
pub trait SphericalArea {
	/// Returns the spherical surface area of the geometry in square meters.
	///
	/// Ring areas are signed by winding direction (positive for clockwise
	/// in longitude/latitude space); polygon and aggregate areas are net
	/// values (exterior minus holes).
	///
	/// # Errors
	/// Fails for a polygon without any ring.
	fn area(&self) -> Result<f64>;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
