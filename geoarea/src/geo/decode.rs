//! Normalization of dynamic interchange trees into the typed geometry model.
//!
//! Callers that hold geometry data under string-literal keys (`"type"`,
//! `"coordinates"`, `"geometries"`) hand over a `geoarea_core` value tree;
//! this module turns it into the canonical [`Geometry`] union up front, so
//! every later dispatch is plain pattern matching.

use super::geometry::Geometry;
use super::types::*;
use anyhow::{Result, anyhow, bail, ensure};
use geoarea_core::value::{Object, Value};
use log::trace;

impl Geometry {
	/// Normalizes an already-decoded interchange tree into the canonical
	/// typed representation.
	///
	/// # Errors
	/// Fails on a non-object value, a missing or unsupported type tag, a
	/// missing `coordinates`/`geometries` payload, or a coordinates
	/// payload that does not match the tag's expected nesting.
	pub fn from_value(value: &Value) -> Result<Geometry> {
		let object = value.as_object()?;
		let type_tag = geometry_type(object)?;
		trace!("normalizing geometry of type '{type_tag}'");

		Ok(match type_tag {
			"Point" => Geometry::Point(PointGeometry(coordinates_from_value(coordinates_payload(object)?)?)),
			"LineString" => Geometry::LineString(LineStringGeometry(positions_from_value(
				coordinates_payload(object)?,
			)?)),
			"Polygon" => Geometry::Polygon(polygon_from_value(coordinates_payload(object)?)?),
			"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(
				positions_from_value(coordinates_payload(object)?)?
					.into_iter()
					.map(PointGeometry)
					.collect(),
			)),
			"MultiLineString" => {
				let lines = coordinates_payload(object)?
					.as_array()?
					.iter()
					.map(|line| Ok(LineStringGeometry(positions_from_value(line)?)))
					.collect::<Result<Vec<_>>>()?;
				Geometry::MultiLineString(MultiLineStringGeometry(lines))
			}
			"MultiPolygon" => Geometry::MultiPolygon(multi_polygon_from_value(coordinates_payload(object)?)?),
			"GeometryCollection" => {
				let geometries = geometries_payload(object)?
					.as_array()?
					.iter()
					.map(Geometry::from_value)
					.collect::<Result<Vec<_>>>()?;
				Geometry::GeometryCollection(geometries)
			}
			other => bail!("unsupported geometry type '{other}'"),
		})
	}
}

/// Reads the type tag of a geometry object.
pub(crate) fn geometry_type(object: &Object) -> Result<&str> {
	object
		.get_str("type")?
		.ok_or_else(|| anyhow!("geometry must have a type"))
}

/// Reads the `coordinates` payload of a geometry object.
pub(crate) fn coordinates_payload(object: &Object) -> Result<&Value> {
	object
		.get("coordinates")
		.ok_or_else(|| anyhow!("geometry must have coordinates"))
}

/// Reads the `geometries` payload of a geometry collection object.
pub(crate) fn geometries_payload(object: &Object) -> Result<&Value> {
	object
		.get("geometries")
		.ok_or_else(|| anyhow!("geometry collection must have geometries"))
}

fn coordinates_from_value(value: &Value) -> Result<Coordinates> {
	let array = value.as_array()?;
	ensure!(array.len() >= 2, "a position must have at least two components");
	// components beyond longitude and latitude (elevation) are dropped
	Ok(Coordinates::new(array.0[0].as_f64()?, array.0[1].as_f64()?))
}

fn positions_from_value(value: &Value) -> Result<Vec<Coordinates>> {
	value.as_array()?.iter().map(coordinates_from_value).collect()
}

fn ring_from_value(value: &Value) -> Result<RingGeometry> {
	let ring = RingGeometry(positions_from_value(value)?);
	if !ring.is_closed() {
		trace!("ring is not closed, its first point anchors the wraparound");
	}
	Ok(ring)
}

pub(crate) fn polygon_from_value(value: &Value) -> Result<PolygonGeometry> {
	let rings = value.as_array()?.iter().map(ring_from_value).collect::<Result<Vec<_>>>()?;
	Ok(PolygonGeometry(rings))
}

pub(crate) fn multi_polygon_from_value(value: &Value) -> Result<MultiPolygonGeometry> {
	let polygons = value
		.as_array()?
		.iter()
		.map(polygon_from_value)
		.collect::<Result<Vec<_>>>()?;
	Ok(MultiPolygonGeometry(polygons))
}
