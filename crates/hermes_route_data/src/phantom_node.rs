use serde::{Deserialize, Serialize};

use crate::{
    coordinate::FixedPointCoordinate,
    edge_direction::EdgeDirection,
    types::{NameId, NodeId},
};

/// A query location snapped onto the interior of a stored edge.
///
/// `start_node` and `end_node` are the edge's end nodes in its stored
/// direction; `ratio` is the offset of the snapped point from `start_node`,
/// as a fraction of the edge length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhantomNode {
    pub location: FixedPointCoordinate,
    pub start_node: NodeId,
    pub end_node: NodeId,
    pub name_id: NameId,
    pub ratio: f64,
}

impl PhantomNode {
    pub fn new(
        location: FixedPointCoordinate,
        start_node: NodeId,
        end_node: NodeId,
        name_id: NameId,
        ratio: f64,
    ) -> Self {
        PhantomNode {
            location,
            start_node,
            end_node,
            name_id,
            ratio,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.ratio.is_finite() && (0.0..=1.0).contains(&self.ratio) && self.location.is_valid()
    }

    /// End node lying behind the snapped point when the edge is traversed in `direction`.
    pub fn entry_node(&self, direction: EdgeDirection) -> NodeId {
        match direction {
            EdgeDirection::Forward => self.start_node,
            EdgeDirection::Backward => self.end_node,
        }
    }

    /// End node lying ahead of the snapped point when the edge is traversed in `direction`.
    pub fn exit_node(&self, direction: EdgeDirection) -> NodeId {
        self.entry_node(direction.opposite())
    }

    /// Fraction of the edge ahead of the snapped point in `direction`.
    pub fn remaining_ratio(&self, direction: EdgeDirection) -> f64 {
        match direction {
            EdgeDirection::Forward => 1.0 - self.ratio,
            EdgeDirection::Backward => self.ratio,
        }
    }
}

/// Snapped source and target of one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhantomNodes {
    pub source: PhantomNode,
    pub target: PhantomNode,
}

impl PhantomNodes {
    pub fn new(source: PhantomNode, target: PhantomNode) -> Self {
        PhantomNodes { source, target }
    }

    pub fn is_valid(&self) -> bool {
        self.source.is_valid() && self.target.is_valid()
    }
}
