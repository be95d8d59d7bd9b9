use super::{CompositeGeometryTrait, Coordinates, SphericalArea};
use anyhow::Result;
use std::fmt::Debug;

/// A closed ring: a connected series of positions forming a loop, the
/// building block of polygons. By interchange convention the first and
/// last points coincide; rings that are not closed are still accepted,
/// the first point then anchors the wraparound.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Whether the ring follows the closed-ring convention
	/// (`first == last`, at least two points).
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.len() >= 2 && self.0.first() == self.0.last()
	}
}

impl SphericalArea for RingGeometry {
	/// Signed spherical area: positive for clockwise winding in
	/// longitude/latitude space, negative for counter-clockwise.
	fn area(&self) -> Result<f64> {
		Ok(crate::math::ring_area(self))
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]])
	}

	#[test]
	fn is_closed() {
		assert!(square().is_closed());
		assert!(!RingGeometry::from(&[[0, 0], [0, 1], [1, 1]]).is_closed());
		assert!(!RingGeometry::new().is_closed());
	}

	#[test]
	fn area_sign_follows_winding() {
		// north-then-east listing is clockwise in lon/lat space
		let clockwise = square();
		let counter_clockwise = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]);
		assert!(clockwise.area().unwrap() > 0.0);
		assert!(counter_clockwise.area().unwrap() < 0.0);
	}

	#[test]
	fn area_empty() {
		assert_eq!(RingGeometry::new().area().unwrap(), 0.0);
	}

	#[test]
	fn composite_push_and_len() {
		let mut ring = RingGeometry::new();
		assert!(ring.is_empty());
		ring.push(Coordinates::new(1.0, 2.0));
		ring.push(Coordinates::new(3.0, 4.0));
		assert_eq!(ring.len(), 2);
		assert_eq!(ring.first().unwrap().lon(), 1.0);
		assert_eq!(ring.last().unwrap().lat(), 4.0);
	}

	#[test]
	fn debug_format() {
		let ring = RingGeometry::from(&[[1, 2], [3, 4]]);
		assert!(format!("{ring:?}").contains("[1.0, 2.0]"));
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		let ring = RingGeometry::from(ls);
		assert_eq!(ring.len(), 2);
	}
}
