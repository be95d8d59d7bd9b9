//! Spherical surface areas of the geometry model.
//!
//! Ring areas use the Chamberlain–Duquette spherical-excess
//! approximation: every vertex contributes the longitude span of its two
//! neighbors weighted by the sine of its own latitude, and the sum is
//! scaled by `R²/2` on the WGS-84 sphere.

use crate::geo::{
	Geometry, MultiPolygonGeometry, PolygonGeometry, RingGeometry, coordinates_payload, geometries_payload,
	geometry_type, multi_polygon_from_value, polygon_from_value,
};
use anyhow::{Result, bail};
use geoarea_core::value::Value;
use std::f64::consts::PI;

/// WGS-84 equatorial radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

// Kept as `deg * PI / 180.0` on purpose: `f64::to_radians` folds the
// factor into one constant and lands on different final bits.
fn rad(deg: f64) -> f64 {
	deg * PI / 180.0
}

/// Signed spherical area of one ring in square meters.
///
/// Positive when the ring is wound clockwise in longitude/latitude
/// space, negative when counter-clockwise; reversing the point order
/// negates the result up to summation rounding. Rings with fewer than 3
/// points are degenerate and contribute exactly `0.0`.
///
/// The ring is read cyclically with the first point anchoring the
/// wraparound, so the result is well-defined whether or not the closing
/// point is repeated.
pub fn ring_area(ring: &RingGeometry) -> f64 {
	let coords = &ring.0;
	let len = coords.len();
	if len < 3 {
		return 0.0;
	}

	let mut sum = 0.0;
	for i in 0..len {
		let (lower, middle, upper) = if i == len - 2 {
			(len - 2, len - 1, 0)
		} else if i == len - 1 {
			(len - 1, 0, 1)
		} else {
			(i, i + 1, i + 2)
		};
		sum += (rad(coords[upper].lon()) - rad(coords[lower].lon())) * rad(coords[middle].lat()).sin();
	}

	sum * EARTH_RADIUS * EARTH_RADIUS / 2.0
}

/// Net spherical area of a polygon: the absolute area of the exterior
/// ring minus the absolute area of every hole.
///
/// Taking absolute values makes the result independent of each ring's
/// winding direction; only the exterior-minus-holes composition matters.
/// A hole set larger than the exterior yields a negative result, which
/// is reported as-is.
///
/// # Errors
/// Fails if the polygon has no rings at all.
pub fn polygon_area(polygon: &PolygonGeometry) -> Result<f64> {
	let Some((exterior, holes)) = polygon.0.split_first() else {
		bail!("polygon must have at least one ring");
	};

	let mut sum = ring_area(exterior).abs();
	for hole in holes {
		sum -= ring_area(hole).abs();
	}
	Ok(sum)
}

/// Summed area of a multi-polygon, `0.0` when empty. Members are folded
/// left to right for reproducible output.
///
/// # Errors
/// Fails if any member polygon has no rings.
pub fn multi_polygon_area(multi_polygon: &MultiPolygonGeometry) -> Result<f64> {
	let mut sum = 0.0;
	for polygon in &multi_polygon.0 {
		sum += polygon_area(polygon)?;
	}
	Ok(sum)
}

/// Area of any typed geometry: `0.0` for the area-less kinds, the
/// composed area for polygons and multi-polygons, and the recursive
/// left-to-right sum for geometry collections.
///
/// # Errors
/// Fails if a contained polygon has no rings.
pub fn geometry_area(geometry: &Geometry) -> Result<f64> {
	Ok(match geometry {
		Geometry::Point(_) | Geometry::LineString(_) | Geometry::MultiPoint(_) | Geometry::MultiLineString(_) => 0.0,
		Geometry::Polygon(polygon) => polygon_area(polygon)?,
		Geometry::MultiPolygon(multi_polygon) => multi_polygon_area(multi_polygon)?,
		Geometry::GeometryCollection(geometries) => {
			let mut sum = 0.0;
			for geometry in geometries {
				sum += geometry_area(geometry)?;
			}
			sum
		}
	})
}

/// Area of a geometry given as a dynamic value tree under string-literal
/// keys.
///
/// Areal kinds have their `coordinates` payload decoded and composed;
/// the four area-less kinds only need the payload field to be present
/// and report `0.0` whatever its shape; collections recurse over their
/// `geometries`.
///
/// # Errors
/// Fails on a non-object value, a missing or unsupported type tag, a
/// missing payload field, or an areal payload that does not decode.
/// An unrecognized tag is always an error, never a silent zero.
pub fn geometry_value_area(value: &Value) -> Result<f64> {
	let object = value.as_object()?;

	match geometry_type(object)? {
		"Point" | "LineString" | "MultiPoint" | "MultiLineString" => {
			coordinates_payload(object)?;
			Ok(0.0)
		}
		"Polygon" => polygon_area(&polygon_from_value(coordinates_payload(object)?)?),
		"MultiPolygon" => multi_polygon_area(&multi_polygon_from_value(coordinates_payload(object)?)?),
		"GeometryCollection" => {
			let mut sum = 0.0;
			for geometry in geometries_payload(object)?.as_array()?.iter() {
				sum += geometry_value_area(geometry)?;
			}
			Ok(sum)
		}
		other => bail!("unsupported geometry type '{other}'"),
	}
}
