//! Generation engine: turns authored regions into cells, nodes, and edges.
//!
//! Pipeline, run in authored order:
//!   1. cell mesh regions  -- tile the city surface into cells
//!   2. intra-layer regions -- place nodes on cells, connect them within a layer
//!   3. inter-layer regions -- bridge matched coordinates across two layers
//!
//! All entry points run synchronously to completion on the caller's thread.
//! A failed generation leaves the system in its partially-mutated state;
//! there is no rollback.

mod inter;
mod intra;
mod mesh;

use geo::Coord;

use crate::error::GenerateError;
use crate::ids::IdAllocator;
use crate::model::{City, CitySystem, Region, RegionKind};

/// Run a single region against a city and system.
pub fn generate(
    region: &Region,
    city: &mut City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> Result<(), GenerateError> {
    match &region.kind {
        RegionKind::CellMesh { rows, cols } => mesh::generate_cells(region, *rows, *cols, city, ids),
        RegionKind::IntraLayer(spec) => intra::generate(region, spec, city, system, ids),
        RegionKind::InterLayer(spec) => inter::generate(region, spec, city, system, ids),
    }
}

impl CitySystem {
    /// Run every region of this system, in authored order.
    ///
    /// Callable repeatedly: node creation skips `(cell, layer)` pairs that
    /// already carry a node, so nodes never duplicate. Edges from
    /// overlapping regions may legitimately repeat; regenerate after
    /// [`CitySystem::clear_graph`] for a clean rebuild.
    pub fn generate(&mut self, city: &mut City, ids: &mut IdAllocator) -> Result<(), GenerateError> {
        let regions = self.regions.clone();
        for region in &regions {
            generate(region, city, self, ids)?;
        }
        Ok(())
    }
}

impl City {
    /// Mesh every cell region, then run every system's regions.
    pub fn generate(&mut self, ids: &mut IdAllocator) -> Result<(), GenerateError> {
        let cell_regions = self.cell_regions.clone();
        for region in &cell_regions {
            if let RegionKind::CellMesh { rows, cols } = region.kind {
                mesh::generate_cells(region, rows, cols, self, ids)?;
            }
        }

        let mut systems = std::mem::take(&mut self.systems);
        let mut result = Ok(());
        for system in &mut systems {
            if let Err(e) = system.generate(self, ids) {
                result = Err(e);
                break;
            }
        }
        self.systems = systems;
        result
    }
}

/// Lowest-id node on `layer` whose cell contains `coordinate`.
///
/// Lowest id wins, so matching is reproducible regardless of how the node
/// collection happens to be ordered.
pub(crate) fn node_at_coordinate(
    system: &CitySystem,
    city: &City,
    layer: u32,
    coordinate: Coord<f64>,
) -> Option<u32> {
    system
        .nodes
        .iter()
        .filter(|n| n.layer == layer)
        .filter(|n| city.cell(n.cell).is_some_and(|c| c.contains(coordinate)))
        .map(|n| n.id)
        .min()
}
