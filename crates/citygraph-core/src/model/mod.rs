//! Data model: city surface, per-system graphs, classification vocabulary,
//! and the region definitions that drive generation.

mod city;
mod graph;
mod region;
mod system;
mod vocab;

pub use city::{Cell, City};
pub use graph::{Edge, EdgeDirection, Node};
pub use region::{EdgeGenKind, InterLayerSpec, IntraLayerSpec, NodeGenKind, Region, RegionKind};
pub use system::CitySystem;
pub use vocab::{Attribute, EdgeType, Layer, NodeType};
