//! The city surface: cells and the systems built over them.

use citygraph_geom::contains_point;
use geo::{Coord, Polygon};
use serde::{Deserialize, Serialize};

use super::region::Region;
use super::system::CitySystem;

/// Atomic convex tile of the city surface. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: u32,
    pub polygon: Polygon<f64>,
}

impl Cell {
    pub fn new(id: u32, polygon: Polygon<f64>) -> Self {
        Self { id, polygon }
    }

    /// Whether the cell's polygon contains a coordinate.
    pub fn contains(&self, coordinate: Coord<f64>) -> bool {
        contains_point(&self.polygon, coordinate)
    }

    pub fn area(&self) -> f64 {
        citygraph_geom::area(&self.polygon)
    }
}

// Equality by id only; the polygon is construction-time data.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cell {}

/// A city: the flat cell collection (no spatial index), the mesh regions
/// that produce it, and the infrastructure systems built over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// Cells are created only by mesh generation and only bulk-cleared,
    /// never removed individually.
    pub cells: Vec<Cell>,
    /// Mesh regions, run in authored order by [`City::generate`].
    pub cell_regions: Vec<Region>,
    pub systems: Vec<CitySystem>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up a cell by id. Flat scan; the cell collection is small and
    /// carries no spatial index.
    pub fn cell(&self, id: u32) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == id)
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Drop every cell. Callers re-mesh afterwards; repeated meshing
    /// without a clear accumulates overlapping cells.
    pub fn clear_cells(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citygraph_geom::ring_polygon;
    use geo::coord;

    fn unit_cell(id: u32) -> Cell {
        let polygon = ring_polygon(&[
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 0.0, y: 1.0 },
        ])
        .unwrap();
        Cell::new(id, polygon)
    }

    #[test]
    fn cell_equality_is_by_id() {
        let a = unit_cell(1);
        let mut b = unit_cell(1);
        b.polygon = ring_polygon(&[
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 2.0, y: 0.0 },
            coord! { x: 0.0, y: 2.0 },
        ])
        .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, unit_cell(2));
    }

    #[test]
    fn cell_lookup_and_clear() {
        let mut city = City::new("test");
        city.add_cell(unit_cell(1));
        city.add_cell(unit_cell(2));
        assert_eq!(city.cell(2).map(|c| c.id), Some(2));
        assert!(city.cell(9).is_none());
        city.clear_cells();
        assert!(city.cells.is_empty());
    }
}
