//! Cell mesh generation: fills a rectangular region with a rows × cols
//! grid of cells.

use citygraph_geom::{ring_polygon, GeomError};
use geo::coord;

use crate::error::GenerateError;
use crate::ids::{EntityKind, IdAllocator};
use crate::model::{Cell, City, Region};

/// Mesh-fill the bounding box of `region`'s coordinate ring into
/// `rows` × `cols` cells appended to `city.cells`.
///
/// The ring is assumed rectangular; only its bounding box is used and the
/// assumption is not validated. No dedup against existing cells: repeated
/// calls without a clear accumulate overlapping cells, and clearing first
/// is the caller's responsibility.
pub(crate) fn generate_cells(
    region: &Region,
    rows: u32,
    cols: u32,
    city: &mut City,
    ids: &mut IdAllocator,
) -> Result<(), GenerateError> {
    if region.coordinates.len() < 3 {
        return Err(GeomError::InsufficientVertices {
            got: region.coordinates.len(),
        }
        .into());
    }
    if rows == 0 || cols == 0 {
        return Err(GenerateError::EmptyMesh { region: region.id });
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for c in &region.coordinates {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }

    // Rows split the x extent, columns the y extent.
    let cell_w = (max_x - min_x) / rows as f64;
    let cell_h = (max_y - min_y) / cols as f64;

    for i in 0..rows {
        for j in 0..cols {
            let x = min_x + i as f64 * cell_w;
            let y = min_y + j as f64 * cell_h;
            let polygon = ring_polygon(&[
                coord! { x: x, y: y },
                coord! { x: x + cell_w, y: y },
                coord! { x: x + cell_w, y: y + cell_h },
                coord! { x: x, y: y + cell_h },
            ])?;
            city.add_cell(Cell::new(ids.next(EntityKind::Cell), polygon));
        }
    }

    log::debug!(
        "region {}: meshed {} cells ({} x {})",
        region.id,
        rows * cols,
        rows,
        cols
    );
    Ok(())
}
