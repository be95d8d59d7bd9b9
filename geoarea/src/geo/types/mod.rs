// Core geometric types of the longitude/latitude interchange model:
// `PointGeometry`, `LineStringGeometry`, `RingGeometry`, `PolygonGeometry`
// and their multi-geometry counterparts. The types share the
// `SphericalArea` and `CompositeGeometryTrait` traits and are re-exported
// for convenient public access.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
