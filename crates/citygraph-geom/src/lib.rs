//! Geometry kernel for CityGraph.
//!
//! Thin, pure wrappers over the `geo` crate: ring-to-polygon construction,
//! area, containment, line intersection, intersection area, and the
//! boundary-contact classification that drives edge synthesis. No knowledge
//! of cities, systems, or regions lives here.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, BooleanOps, Contains, Coord, Intersects, LineString, Point, Polygon};
use thiserror::Error;

/// Tolerance for degenerate areas and zero-length overlaps.
pub const EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("polygon requires at least 3 vertices, got {got}")]
    InsufficientVertices { got: usize },
}

/// How the boundaries of two polygons touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No shared points at all.
    Disjoint,
    /// Exactly one shared point (a corner).
    Point,
    /// A shared segment of positive length (a wall), but no shared area.
    Line,
    /// Interiors overlap with positive area.
    Area,
}

/// Build a polygon from an ordered coordinate ring, auto-closing it.
///
/// Fewer than 3 coordinates cannot bound an area and is a caller error.
pub fn ring_polygon(coords: &[Coord<f64>]) -> Result<Polygon<f64>, GeomError> {
    if coords.len() < 3 {
        return Err(GeomError::InsufficientVertices { got: coords.len() });
    }
    // Polygon::new closes the exterior ring if the last point differs
    // from the first.
    Ok(Polygon::new(LineString::from(coords.to_vec()), vec![]))
}

/// Build an open line string over the same ordered ring.
///
/// Used by polyline regions, where the ring is traversed but not closed.
pub fn ring_line(coords: &[Coord<f64>]) -> LineString<f64> {
    LineString::from(coords.to_vec())
}

/// Unsigned area of a polygon.
pub fn area(polygon: &Polygon<f64>) -> f64 {
    polygon.unsigned_area()
}

/// Whether a polygon contains a point (interior; boundary points excluded).
pub fn contains_point(polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
    polygon.contains(&Point::from(point))
}

/// Whether a polygon and a line string share any point.
pub fn line_intersects(polygon: &Polygon<f64>, line: &LineString<f64>) -> bool {
    polygon.intersects(line)
}

/// Area of the boolean intersection of two polygons.
pub fn intersection_area(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    a.intersection(b).unsigned_area()
}

/// Intersection area over the smaller of the two input areas.
///
/// The min-of-areas denominator means a cell fully inside a larger region
/// scores 1.0 regardless of how large the region is. Returns 0.0 when
/// either input is degenerate.
pub fn overlap_fraction(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    let denom = area(a).min(area(b));
    if denom < EPS {
        return 0.0;
    }
    intersection_area(a, b) / denom
}

/// Classify how two polygons touch.
///
/// Positive intersection area is `Area`. Otherwise boundary segments are
/// enumerated pairwise: any collinear overlap of positive length is `Line`,
/// any remaining single-point crossing is `Point`.
pub fn boundary_contact(a: &Polygon<f64>, b: &Polygon<f64>) -> Contact {
    if intersection_area(a, b) > EPS {
        return Contact::Area;
    }

    let mut point_contact = false;
    for sa in a.exterior().lines() {
        for sb in b.exterior().lines() {
            match line_intersection(sa, sb) {
                Some(LineIntersection::Collinear { intersection }) => {
                    let len2 = intersection.dx() * intersection.dx()
                        + intersection.dy() * intersection.dy();
                    if len2 > EPS {
                        return Contact::Line;
                    }
                    point_contact = true;
                }
                Some(LineIntersection::SinglePoint { .. }) => {
                    point_contact = true;
                }
                None => {}
            }
        }
    }

    if point_contact {
        Contact::Point
    } else {
        Contact::Disjoint
    }
}
