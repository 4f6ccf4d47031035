//! An infrastructure system: the per-system graph, its vocabulary, and
//! the regions that generate it.

use serde::{Deserialize, Serialize};

use super::graph::{Edge, Node};
use super::region::Region;
use super::vocab::{EdgeType, Layer, NodeType};

/// One infrastructure system (transportation, water, power, ...) over the
/// shared city surface. Owns its graph and classification vocabulary;
/// nodes and edges are written only by generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitySystem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub layers: Vec<Layer>,
    pub node_types: Vec<NodeType>,
    pub edge_types: Vec<EdgeType>,
    /// Regions, run in authored order by generation.
    pub regions: Vec<Region>,
}

impl CitySystem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn layer(&self, id: u32) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn node_type(&self, id: u32) -> Option<&NodeType> {
        self.node_types.iter().find(|t| t.id == id)
    }

    pub fn edge_type(&self, id: u32) -> Option<&EdgeType> {
        self.edge_types.iter().find(|t| t.id == id)
    }

    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The node occupying `(cell, layer)`, if any. At most one exists;
    /// the generators enforce that invariant on every creation path.
    pub fn node_at(&self, cell: u32, layer: u32) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.cell == cell && n.layer == layer)
    }

    /// Bulk-clear the generated graph. Regions, layers, and types stay;
    /// "regenerate" is clear followed by a fresh generation run.
    pub fn clear_graph(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
