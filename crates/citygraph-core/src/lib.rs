//! CityGraph Core - spatial graph synthesis for city infrastructure systems.
//!
//! A city surface is tiled into rectangular cells; user-authored regions
//! (polygons, polylines, point lists) describe where to place graph nodes
//! and how to connect them into edges, within a layer or bridging two
//! vertically-stacked layers. This crate holds the data model and the
//! generation engine; UI, persistence formats, and import/export are
//! external collaborators.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | Generation error taxonomy (all caller/config errors) |
//! | [`ids`] | Injected monotonic id allocation, one counter per entity kind |
//! | [`model`] | City, cells, systems, vocabulary, and region definitions |
//! | [`generation`] | Cell meshing and intra-/inter-layer node+edge synthesis |
//!
//! # Example
//!
//! ```rust
//! use citygraph_core::prelude::*;
//! use geo::coord;
//!
//! let mut ids = IdAllocator::new();
//! let mut city = City::new("Demo");
//! city.cell_regions.push(Region {
//!     id: ids.next(EntityKind::Region),
//!     description: "surface mesh".into(),
//!     coordinates: vec![
//!         coord! { x: 0.0, y: 0.0 },
//!         coord! { x: 1.0, y: 0.0 },
//!         coord! { x: 1.0, y: 1.0 },
//!         coord! { x: 0.0, y: 1.0 },
//!     ],
//!     kind: RegionKind::CellMesh { rows: 2, cols: 2 },
//! });
//! city.generate(&mut ids).unwrap();
//! assert_eq!(city.cells.len(), 4);
//! ```

pub mod error;
pub mod generation;
pub mod ids;
pub mod model;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::error::GenerateError;
    pub use crate::ids::{EntityKind, IdAllocator};
    pub use crate::model::{
        Attribute, Cell, City, CitySystem, Edge, EdgeDirection, EdgeGenKind, EdgeType,
        InterLayerSpec, IntraLayerSpec, Layer, Node, NodeGenKind, NodeType, Region, RegionKind,
    };
}
