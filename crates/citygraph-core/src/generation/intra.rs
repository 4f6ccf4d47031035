//! Intra-layer synthesis: node placement on cells and edge connection
//! within a single layer.

use citygraph_geom::{boundary_contact, line_intersects, overlap_fraction, ring_line, Contact};
use geo::{Coord, LineString, Polygon};

use crate::error::GenerateError;
use crate::ids::{EntityKind, IdAllocator};
use crate::model::{
    Cell, City, CitySystem, Edge, EdgeGenKind, IntraLayerSpec, Node, NodeGenKind, Region,
};

use super::node_at_coordinate;

/// Overlap fraction above which a cell counts as inside the region.
/// Strict: a cell at exactly the threshold is excluded.
const OVERLAP_THRESHOLD: f64 = 0.5;

/// Containment predicate matching cells against a region.
///
/// Shared between node placement and pairwise edge candidate selection,
/// so edge endpoints are drawn from the node population the region's node
/// kind actually produces.
enum CellPredicate {
    /// Overlap fraction with the region polygon strictly above 0.5.
    Overlap(Polygon<f64>),
    /// Cell polygon intersects the region's open polyline.
    Polyline(LineString<f64>),
    /// Cell contains at least one region coordinate.
    Points(Vec<Coord<f64>>),
}

impl CellPredicate {
    fn for_node_kind(kind: NodeGenKind, region: &Region) -> Result<Self, GenerateError> {
        Ok(match kind {
            NodeGenKind::Polyline => Self::Polyline(ring_line(&region.coordinates)),
            NodeGenKind::Polypoint => Self::Points(region.coordinates.clone()),
            _ => Self::Overlap(region.polygon()?),
        })
    }

    fn matches(&self, cell: &Cell) -> bool {
        match self {
            Self::Overlap(region) => overlap_fraction(&cell.polygon, region) > OVERLAP_THRESHOLD,
            Self::Polyline(line) => line_intersects(&cell.polygon, line),
            Self::Points(points) => points.iter().any(|&p| cell.contains(p)),
        }
    }
}

pub(crate) fn generate(
    region: &Region,
    spec: &IntraLayerSpec,
    city: &City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> Result<(), GenerateError> {
    if spec.node_kind == NodeGenKind::Undefined {
        return Err(GenerateError::UnsupportedRegionKind {
            region: region.id,
            what: "node",
        });
    }
    if spec.edge_kind == EdgeGenKind::Undefined {
        return Err(GenerateError::UnsupportedRegionKind {
            region: region.id,
            what: "edge",
        });
    }
    if system.layer(spec.layer).is_none() {
        return Err(GenerateError::MissingReference {
            region: region.id,
            kind: "layer",
            id: spec.layer,
        });
    }
    if spec.node_kind != NodeGenKind::None && system.node_type(spec.node_type).is_none() {
        return Err(GenerateError::MissingReference {
            region: region.id,
            kind: "node type",
            id: spec.node_type,
        });
    }
    if spec.edge_kind != EdgeGenKind::None && system.edge_type(spec.edge_type).is_none() {
        return Err(GenerateError::MissingReference {
            region: region.id,
            kind: "edge type",
            id: spec.edge_type,
        });
    }

    let nodes_created = generate_nodes(region, spec, city, system, ids)?;
    let edges_created = generate_edges(region, spec, city, system, ids)?;
    log::debug!(
        "region {}: {} nodes, {} edges on layer {}",
        region.id,
        nodes_created,
        edges_created,
        spec.layer
    );
    Ok(())
}

/// Place a node on every matching cell that does not already carry one on
/// this layer.
fn generate_nodes(
    region: &Region,
    spec: &IntraLayerSpec,
    city: &City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> Result<usize, GenerateError> {
    if spec.node_kind == NodeGenKind::None {
        return Ok(0);
    }
    let predicate = CellPredicate::for_node_kind(spec.node_kind, region)?;

    let mut created = 0;
    for cell in &city.cells {
        if system.node_at(cell.id, spec.layer).is_some() {
            continue;
        }
        if predicate.matches(cell) {
            system.nodes.push(Node {
                id: ids.next(EntityKind::Node),
                cell: cell.id,
                layer: spec.layer,
                node_type: spec.node_type,
            });
            created += 1;
        }
    }
    Ok(created)
}

fn generate_edges(
    region: &Region,
    spec: &IntraLayerSpec,
    city: &City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> Result<usize, GenerateError> {
    match spec.edge_kind {
        EdgeGenKind::None => Ok(0),
        EdgeGenKind::Sequential => Ok(sequential_edges(region, spec, city, system, ids)),
        EdgeGenKind::Orthogonal | EdgeGenKind::Adjacent | EdgeGenKind::Connected => {
            pairwise_edges(region, spec, city, system, ids)
        }
        EdgeGenKind::Undefined => Err(GenerateError::UnsupportedRegionKind {
            region: region.id,
            what: "edge",
        }),
    }
}

/// Walk the coordinate ring in order, match each coordinate to the node
/// whose cell contains it, and connect each consecutive matched pair.
/// Consecutive coordinates landing on the same node produce no edge.
fn sequential_edges(
    region: &Region,
    spec: &IntraLayerSpec,
    city: &City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> usize {
    let mut chain = Vec::new();
    for &coordinate in &region.coordinates {
        if let Some(node) = node_at_coordinate(system, city, spec.layer, coordinate) {
            chain.push(node);
        }
    }

    let mut created = 0;
    for pair in chain.windows(2) {
        if pair[0] == pair[1] {
            continue;
        }
        system.edges.push(Edge {
            id: ids.next(EntityKind::Edge),
            origin: pair[0],
            destination: pair[1],
            edge_type: spec.edge_type,
            direction: spec.direction,
        });
        created += 1;
    }
    created
}

/// Connect candidate pairs by cell-boundary contact: Orthogonal requires a
/// shared wall, Adjacent accepts a wall or a corner, Connected takes every
/// distinct pair.
fn pairwise_edges(
    region: &Region,
    spec: &IntraLayerSpec,
    city: &City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> Result<usize, GenerateError> {
    let predicate = CellPredicate::for_node_kind(spec.node_kind, region)?;

    let mut candidates: Vec<(u32, &Cell)> = system
        .nodes
        .iter()
        .filter(|n| n.layer == spec.layer)
        .filter_map(|n| city.cell(n.cell).map(|cell| (n.id, cell)))
        .filter(|(_, cell)| predicate.matches(cell))
        .collect();
    // Stable pairing order run to run.
    candidates.sort_by_key(|&(id, _)| id);

    let mut created = 0;
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let (a, cell_a) = candidates[i];
            let (b, cell_b) = candidates[j];
            if a == b {
                continue;
            }
            let connect = match spec.edge_kind {
                EdgeGenKind::Orthogonal => {
                    boundary_contact(&cell_a.polygon, &cell_b.polygon) == Contact::Line
                }
                EdgeGenKind::Adjacent => matches!(
                    boundary_contact(&cell_a.polygon, &cell_b.polygon),
                    Contact::Line | Contact::Point
                ),
                _ => true,
            };
            if connect {
                system.edges.push(Edge {
                    id: ids.next(EntityKind::Edge),
                    origin: a,
                    destination: b,
                    edge_type: spec.edge_type,
                    direction: spec.direction,
                });
                created += 1;
            }
        }
    }
    Ok(created)
}
