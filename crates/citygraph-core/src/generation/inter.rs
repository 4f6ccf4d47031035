//! Inter-layer synthesis: edges bridging matched coordinates across two
//! layers.

use crate::error::GenerateError;
use crate::ids::{EntityKind, IdAllocator};
use crate::model::{City, CitySystem, Edge, InterLayerSpec, Region};

use super::node_at_coordinate;

/// For each coordinate except the last, find the node on the origin layer
/// and the node on the destination layer whose cells contain it; when both
/// exist and differ, bridge them with an edge.
///
/// The last coordinate is matched by position in the ring but never paired
/// into an edge; callers that want it bridged must repeat it.
pub(crate) fn generate(
    region: &Region,
    spec: &InterLayerSpec,
    city: &City,
    system: &mut CitySystem,
    ids: &mut IdAllocator,
) -> Result<(), GenerateError> {
    if system.layer(spec.origin_layer).is_none() {
        return Err(GenerateError::MissingReference {
            region: region.id,
            kind: "layer",
            id: spec.origin_layer,
        });
    }
    if system.layer(spec.destination_layer).is_none() {
        return Err(GenerateError::MissingReference {
            region: region.id,
            kind: "layer",
            id: spec.destination_layer,
        });
    }
    if system.edge_type(spec.edge_type).is_none() {
        return Err(GenerateError::MissingReference {
            region: region.id,
            kind: "edge type",
            id: spec.edge_type,
        });
    }

    let coordinates = &region.coordinates;
    let mut created = 0;
    for i in 0..coordinates.len().saturating_sub(1) {
        let origin = node_at_coordinate(system, city, spec.origin_layer, coordinates[i]);
        let destination =
            node_at_coordinate(system, city, spec.destination_layer, coordinates[i]);
        if let (Some(origin), Some(destination)) = (origin, destination) {
            if origin == destination {
                continue;
            }
            system.edges.push(Edge {
                id: ids.next(EntityKind::Edge),
                origin,
                destination,
                edge_type: spec.edge_type,
                direction: spec.direction,
            });
            created += 1;
        }
    }

    log::debug!(
        "region {}: {} edges bridging layer {} to layer {}",
        region.id,
        created,
        spec.origin_layer,
        spec.destination_layer
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::mesh::generate_cells;
    use crate::model::{EdgeDirection, EdgeType, Layer, Node, RegionKind};
    use geo::{coord, Coord};

    fn ring(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
        points.iter().map(|&(x, y)| coord! { x: x, y: y }).collect()
    }

    /// Two 1x1 cells side by side, cell ids 1 and 2.
    fn two_cell_city(ids: &mut IdAllocator) -> City {
        let mut city = City::new("test");
        let region = Region {
            id: ids.next(EntityKind::Region),
            description: "mesh".into(),
            coordinates: ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]),
            kind: RegionKind::CellMesh { rows: 2, cols: 1 },
        };
        generate_cells(&region, 2, 1, &mut city, ids).unwrap();
        city
    }

    fn layered_system() -> CitySystem {
        let mut system = CitySystem::new(1, "transit");
        system.layers.push(Layer::new(1, "surface", 0.0));
        system.layers.push(Layer::new(2, "underground", -10.0));
        system.edge_types.push(EdgeType::new(1, "elevator"));
        system
    }

    fn add_node(system: &mut CitySystem, id: u32, cell: u32, layer: u32) {
        system.nodes.push(Node {
            id,
            cell,
            layer,
            node_type: 1,
        });
    }

    fn inter_region(points: &[(f64, f64)]) -> (Region, InterLayerSpec) {
        let spec = InterLayerSpec {
            origin_layer: 1,
            destination_layer: 2,
            edge_type: 1,
            direction: EdgeDirection::Undirected,
        };
        let region = Region {
            id: 9,
            description: "shafts".into(),
            coordinates: ring(points),
            kind: RegionKind::InterLayer(spec),
        };
        (region, spec)
    }

    #[test]
    fn bridges_only_fully_matched_coordinates() {
        let mut ids = IdAllocator::new();
        let mut city = two_cell_city(&mut ids);
        let mut system = layered_system();
        // Point 0 (cell 1) has nodes on both layers; point 1 (cell 2)
        // only on the origin layer.
        add_node(&mut system, 1, 1, 1);
        add_node(&mut system, 2, 1, 2);
        add_node(&mut system, 3, 2, 1);

        let (region, spec) = inter_region(&[(0.5, 0.5), (1.5, 0.5)]);
        generate(&region, &spec, &mut city, &mut system, &mut ids).unwrap();

        assert_eq!(system.edges.len(), 1);
        assert_eq!(system.edges[0].origin, 1);
        assert_eq!(system.edges[0].destination, 2);
    }

    #[test]
    fn last_coordinate_is_never_bridged() {
        let mut ids = IdAllocator::new();
        let mut city = two_cell_city(&mut ids);
        let mut system = layered_system();
        // Both coordinates have full matches on both layers; only the
        // first produces an edge.
        add_node(&mut system, 1, 1, 1);
        add_node(&mut system, 2, 1, 2);
        add_node(&mut system, 3, 2, 1);
        add_node(&mut system, 4, 2, 2);

        let (region, spec) = inter_region(&[(0.5, 0.5), (1.5, 0.5)]);
        generate(&region, &spec, &mut city, &mut system, &mut ids).unwrap();

        assert_eq!(system.edges.len(), 1);
        assert_eq!(system.edges[0].origin, 1);
    }

    #[test]
    fn three_matched_coordinates_yield_two_edges() {
        let mut ids = IdAllocator::new();
        let mut city = two_cell_city(&mut ids);
        let mut system = layered_system();
        add_node(&mut system, 1, 1, 1);
        add_node(&mut system, 2, 1, 2);
        add_node(&mut system, 3, 2, 1);
        add_node(&mut system, 4, 2, 2);

        // Third coordinate revisits cell 1; indices 0 and 1 bridge.
        let (region, spec) = inter_region(&[(0.5, 0.5), (1.5, 0.5), (0.4, 0.4)]);
        generate(&region, &spec, &mut city, &mut system, &mut ids).unwrap();
        assert_eq!(system.edges.len(), 2);
    }

    #[test]
    fn single_coordinate_produces_no_edges() {
        let mut ids = IdAllocator::new();
        let mut city = two_cell_city(&mut ids);
        let mut system = layered_system();
        add_node(&mut system, 1, 1, 1);
        add_node(&mut system, 2, 1, 2);

        let (region, spec) = inter_region(&[(0.5, 0.5)]);
        generate(&region, &spec, &mut city, &mut system, &mut ids).unwrap();
        assert!(system.edges.is_empty());
    }

    #[test]
    fn same_node_on_both_layers_is_skipped() {
        let mut ids = IdAllocator::new();
        let mut city = two_cell_city(&mut ids);
        let mut system = layered_system();
        add_node(&mut system, 1, 1, 1);

        // Origin and destination resolve to the same node when the two
        // layer ids are equal: no self-loop.
        let (region, mut spec) = inter_region(&[(0.5, 0.5), (1.5, 0.5)]);
        spec.destination_layer = 1;
        generate(&region, &spec, &mut city, &mut system, &mut ids).unwrap();
        assert!(system.edges.is_empty());
    }

    #[test]
    fn unknown_layer_is_reported() {
        let mut ids = IdAllocator::new();
        let mut city = two_cell_city(&mut ids);
        let mut system = layered_system();

        let (region, mut spec) = inter_region(&[(0.5, 0.5), (1.5, 0.5)]);
        spec.destination_layer = 42;
        assert_eq!(
            generate(&region, &spec, &mut city, &mut system, &mut ids),
            Err(GenerateError::MissingReference {
                region: 9,
                kind: "layer",
                id: 42
            })
        );
    }
}
