//! Generation error taxonomy.
//!
//! Everything here is a caller or configuration error, not a transient
//! failure; no retry policy applies. Errors propagate synchronously out of
//! `generate` and leave the system in whatever partially-mutated state
//! existed at the throw point.

use citygraph_geom::GeomError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Polygon/area/containment requested on a ring with fewer than 3
    /// coordinates, or another geometric precondition failed.
    #[error(transparent)]
    Geometry(#[from] GeomError),

    /// A region's node or edge generation kind was left `Undefined`.
    #[error("region {region}: {what} generation kind is undefined")]
    UnsupportedRegionKind { region: u32, what: &'static str },

    /// A region references a layer or type id not present in the system.
    #[error("region {region}: {kind} {id} not present in system")]
    MissingReference {
        region: u32,
        kind: &'static str,
        id: u32,
    },

    /// A cell mesh was configured with zero rows or columns.
    #[error("region {region}: cell mesh has zero rows or columns")]
    EmptyMesh { region: u32 },
}
