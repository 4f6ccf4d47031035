//! Region definitions: user-authored geometry plus a tagged generation
//! strategy. Regions persist across generation runs and are only read by
//! the engine.

use citygraph_geom::{overlap_fraction, ring_polygon, GeomError};
use geo::{Coord, Polygon};
use serde::{Deserialize, Serialize};

use crate::ids::{EntityKind, IdAllocator};

use super::graph::EdgeDirection;

/// Strategy for placing nodes on cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeGenKind {
    /// Unset. Fatal at generation time.
    Undefined,
    /// No nodes created.
    None,
    /// A node on every cell whose overlap fraction with the region
    /// polygon exceeds 0.5 (strict).
    Polygon,
    /// A node on every cell intersected by the region's open polyline.
    Polyline,
    /// A node on every cell containing at least one region coordinate.
    Polypoint,
}

/// Strategy for connecting nodes into edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeGenKind {
    /// Unset. Fatal at generation time.
    Undefined,
    /// No edges created.
    None,
    /// Connect the nodes matched by consecutive ring coordinates.
    Sequential,
    /// Connect candidate pairs whose cells share a wall.
    Orthogonal,
    /// Connect candidate pairs whose cells share a wall or a corner.
    Adjacent,
    /// Complete graph over the candidates.
    Connected,
}

/// Parameters for single-layer node and edge synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntraLayerSpec {
    pub layer: u32,
    pub node_type: u32,
    pub edge_type: u32,
    pub direction: EdgeDirection,
    pub node_kind: NodeGenKind,
    pub edge_kind: EdgeGenKind,
}

/// Parameters for cross-layer edge bridging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterLayerSpec {
    pub origin_layer: u32,
    pub destination_layer: u32,
    pub edge_type: u32,
    pub direction: EdgeDirection,
}

/// What a region generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegionKind {
    /// Mesh-fill the region's bounding box into `rows` × `cols` cells.
    CellMesh { rows: u32, cols: u32 },
    /// Nodes and edges within a single layer.
    IntraLayer(IntraLayerSpec),
    /// Edges bridging matched coordinates across two layers.
    InterLayer(InterLayerSpec),
}

/// A user-authored geometric specification driving generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub description: String,
    /// Ordered coordinate ring (auto-closed when read as a polygon).
    pub coordinates: Vec<Coord<f64>>,
    pub kind: RegionKind,
}

impl Region {
    /// The region's coordinate ring as a closed polygon.
    pub fn polygon(&self) -> Result<Polygon<f64>, GeomError> {
        ring_polygon(&self.coordinates)
    }

    /// Area enclosed by the coordinate ring.
    pub fn area(&self) -> Result<f64, GeomError> {
        Ok(citygraph_geom::area(&self.polygon()?))
    }

    /// Whether the region polygon contains a coordinate.
    pub fn contains(&self, coordinate: Coord<f64>) -> Result<bool, GeomError> {
        Ok(citygraph_geom::contains_point(
            &self.polygon()?,
            coordinate,
        ))
    }

    /// Overlap fraction between the region polygon and another polygon
    /// (intersection area over the smaller of the two areas).
    pub fn overlap_fraction(&self, other: &Polygon<f64>) -> Result<f64, GeomError> {
        Ok(overlap_fraction(&self.polygon()?, other))
    }

    /// Copy this region as a template for a new one: fresh id from the
    /// allocator, description suffixed, coordinate ring deep-copied.
    /// The source id is never carried over.
    pub fn duplicate(&self, ids: &mut IdAllocator) -> Region {
        Region {
            id: ids.next(EntityKind::Region),
            description: format!("{} (copy)", self.description),
            coordinates: self.coordinates.clone(),
            kind: self.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn square_region(id: u32) -> Region {
        Region {
            id,
            description: "square".into(),
            coordinates: vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 2.0, y: 0.0 },
                coord! { x: 2.0, y: 2.0 },
                coord! { x: 0.0, y: 2.0 },
            ],
            kind: RegionKind::CellMesh { rows: 1, cols: 1 },
        }
    }

    #[test]
    fn region_area_and_containment() {
        let region = square_region(1);
        assert!((region.area().unwrap() - 4.0).abs() < 1e-9);
        assert!(region.contains(coord! { x: 1.0, y: 1.0 }).unwrap());
        assert!(!region.contains(coord! { x: 3.0, y: 1.0 }).unwrap());
    }

    #[test]
    fn short_ring_is_rejected() {
        let mut region = square_region(1);
        region.coordinates.truncate(2);
        assert_eq!(
            region.area(),
            Err(GeomError::InsufficientVertices { got: 2 })
        );
    }

    #[test]
    fn duplicate_gets_fresh_id_and_suffixed_description() {
        let mut ids = IdAllocator::new();
        let original = square_region(ids.next(EntityKind::Region));
        let copy = original.duplicate(&mut ids);

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.description, "square (copy)");
        assert_eq!(copy.coordinates, original.coordinates);
        assert_eq!(copy.kind, original.kind);
    }

    #[test]
    fn duplicate_ring_is_independent() {
        let mut ids = IdAllocator::new();
        let original = square_region(ids.next(EntityKind::Region));
        let mut copy = original.duplicate(&mut ids);
        copy.coordinates[0].x = 99.0;
        assert!((original.coordinates[0].x - 0.0).abs() < 1e-9);
    }
}
