use super::types::*;
use anyhow::Result;
use std::fmt::Debug;

/// The closed union of recognized geometry kinds.
///
/// This is the canonical, symbolic representation: a type tag is only
/// ever inspected while normalizing dynamic input
/// ([`Geometry::from_value`]); afterwards every dispatch is ordinary
/// pattern matching.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	#[must_use]
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(geometries)
	}

	/// The interchange type tag of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}
}

impl SphericalArea for Geometry {
	/// Dispatches to the kind's area; collections sum recursively.
	fn area(&self) -> Result<f64> {
		crate::math::geometry_area(self)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<geo::Geometry<f64>> for Geometry {
	fn from(geometry: geo::Geometry<f64>) -> Self {
		match geometry {
			geo::Geometry::Point(g) => Geometry::Point(PointGeometry::from(g)),
			geo::Geometry::Line(g) => Geometry::LineString(LineStringGeometry(vec![
				Coordinates::from(g.start),
				Coordinates::from(g.end),
			])),
			geo::Geometry::LineString(g) => Geometry::LineString(LineStringGeometry::from(g)),
			geo::Geometry::Polygon(g) => Geometry::Polygon(PolygonGeometry::from(g)),
			geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(MultiPointGeometry::from(g)),
			geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry::from(g)),
			geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry::from(g)),
			geo::Geometry::GeometryCollection(g) => {
				Geometry::GeometryCollection(g.into_iter().map(Geometry::from).collect())
			}
			geo::Geometry::Rect(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
			geo::Geometry::Triangle(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_name() {
		assert_eq!(Geometry::new_point([1.0, 2.0]).type_name(), "Point");
		assert_eq!(Geometry::new_collection(vec![]).type_name(), "GeometryCollection");
	}

	#[test]
	fn debug_format() {
		let geometry = Geometry::new_point([1.0, 2.0]);
		assert_eq!(format!("{geometry:?}"), "Point([1.0, 2.0])");
	}

	#[test]
	fn constructors_from_nested_arrays() {
		let polygon = Geometry::new_polygon(vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]]);
		assert_eq!(polygon.type_name(), "Polygon");

		let multi = Geometry::new_multi_polygon(vec![vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]]]);
		assert_eq!(multi.type_name(), "MultiPolygon");
	}

	#[test]
	fn from_geo_geometry() {
		let rect = geo::Rect::new(geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 });
		let geometry = Geometry::from(geo::Geometry::Rect(rect));
		assert_eq!(geometry.type_name(), "Polygon");

		let point = geo::Geometry::Point(geo::Point::new(1.0, 2.0));
		assert_eq!(Geometry::from(point).type_name(), "Point");
	}
}
