use super::{Coordinates, MultiPointGeometry, SphericalArea};
use anyhow::Result;
use std::fmt::Debug;

/// A single geographic position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.0.lon()
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0.lat()
	}

	/// Wraps this single point into a [`MultiPointGeometry`].
	#[must_use]
	pub fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl SphericalArea for PointGeometry {
	/// A point encloses nothing, so its area is always `0.0`.
	fn area(&self) -> Result<f64> {
		Ok(0.0)
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
