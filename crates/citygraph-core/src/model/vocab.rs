//! Domain vocabulary: layers and node/edge type records.
//!
//! Pure classification data consumed by the generators; nothing here has
//! algorithmic behavior and nothing here is mutated by the engine.

use serde::{Deserialize, Serialize};

/// A vertical/logical stratum sharing the city's spatial footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Height at which the layer is drawn, in display units.
    pub display_height: f64,
}

impl Layer {
    pub fn new(id: u32, name: impl Into<String>, display_height: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            display_height,
        }
    }
}

/// A named attribute attached to a node or edge type schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub description: String,
    pub units: String,
    pub value: f64,
}

/// Classification record attached to generated nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeType {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Display color, as a hex string like `"#4488cc"`.
    pub color: String,
    pub attributes: Vec<Attribute>,
}

impl NodeType {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            color: String::new(),
            attributes: Vec::new(),
        }
    }
}

/// Classification record attached to generated edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeType {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Display color, as a hex string like `"#4488cc"`.
    pub color: String,
    pub attributes: Vec<Attribute>,
}

impl EdgeType {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            color: String::new(),
            attributes: Vec::new(),
        }
    }
}
