use hermes_route_data::{
    FixedPointCoordinate, NameId, NodeId, PathSegment, PhantomNode, PhantomNodes, TurnInstruction,
};

//
//  Test road, nodes every 0.01 degree of longitude along lat 50.0:
//
//  0 ---- 1 ---- 2 ---- 3 ---- 4 ---- 5 ---- 6 ---- 7 ---- 8 ---- 9
//  4.00   4.01   4.02   ...
//
pub fn node_location(node: u32) -> FixedPointCoordinate {
    FixedPointCoordinate::from_degrees(50.0, 4.0 + node as f64 * 0.01)
}

/// Snaps a point onto the stored edge `start -> end` at `ratio`.
pub fn create_phantom(start: u32, end: u32, ratio: f64) -> PhantomNode {
    let from = node_location(start);
    let to = node_location(end);
    let lon = from.lon() + (to.lon() - from.lon()) * ratio;

    PhantomNode::new(
        FixedPointCoordinate::from_degrees(50.0, lon),
        NodeId::from_raw(start).unwrap(),
        NodeId::from_raw(end).unwrap(),
        NameId::from_raw(start).unwrap(),
        ratio,
    )
}

pub fn create_leg(source: PhantomNode, target: PhantomNode) -> PhantomNodes {
    PhantomNodes::new(source, target)
}

/// One segment per node, each taking `duration` and going straight, except
/// the last which reaches the destination.
pub fn create_segments(nodes: &[u32], duration: u32) -> Vec<PathSegment> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, &node)| {
            let turn = if index + 1 == nodes.len() {
                TurnInstruction::ReachedYourDestination
            } else {
                TurnInstruction::GoStraight
            };
            PathSegment::new(
                NodeId::from_raw(node).unwrap(),
                NameId::from_raw(node).unwrap(),
                turn,
                duration,
            )
        })
        .collect()
}
