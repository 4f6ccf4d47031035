//! Graph elements written into a system by the generators.

use serde::{Deserialize, Serialize};

/// Whether an edge is traversable in one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDirection {
    Directed,
    Undirected,
}

/// A graph node placed on a cell within a layer.
///
/// At most one node may exist per `(cell, layer)` pair within a system;
/// the generators enforce this, not the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: u32,
    /// Id of the cell the node sits on.
    pub cell: u32,
    /// Id of the layer the node belongs to.
    pub layer: u32,
    /// Id of the node's classification type.
    pub node_type: u32,
}

/// A graph edge between two nodes. Never a self-loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: u32,
    /// Id of the origin node.
    pub origin: u32,
    /// Id of the destination node.
    pub destination: u32,
    /// Id of the edge's classification type.
    pub edge_type: u32,
    pub direction: EdgeDirection,
}
