use super::{CompositeGeometryTrait, PointGeometry, SphericalArea};
use anyhow::Result;
use std::fmt::Debug;

/// A collection of points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl SphericalArea for MultiPointGeometry {
	/// Points enclose nothing, so the area is always `0.0`.
	fn area(&self) -> Result<f64> {
		Ok(0.0)
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn area_is_zero() {
		let multi = MultiPointGeometry::from(&[[0, 0], [10, 0], [10, 10]]);
		assert_eq!(multi.area().unwrap(), 0.0);
	}

	#[test]
	fn composite_ops() {
		let mut multi = MultiPointGeometry::new();
		assert!(multi.is_empty());
		multi.push(PointGeometry::from(&[1, 2]));
		assert_eq!(multi.len(), 1);
	}

	#[test]
	fn from_geo_multi_point() {
		let multi = MultiPointGeometry::from(geo::MultiPoint::from(vec![(1.0, 2.0), (3.0, 4.0)]));
		assert_eq!(multi.len(), 2);
	}
}
