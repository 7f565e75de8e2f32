use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    coordinate::FixedPointCoordinate,
    edge_direction::EdgeDirection,
    error::RouteDataError,
    path_segment::PathSegment,
    phantom_node::PhantomNodes,
    types::{Checksum, PathCost},
};

/// Whether the edges under a path's source and target phantom nodes are
/// traversed against their stored direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EndpointTraversal {
    pub source_reversed: bool,
    pub target_reversed: bool,
}

impl EndpointTraversal {
    pub fn new(source_reversed: bool, target_reversed: bool) -> Self {
        EndpointTraversal {
            source_reversed,
            target_reversed,
        }
    }

    pub fn source_direction(&self) -> EdgeDirection {
        EdgeDirection::from_reversed(self.source_reversed)
    }

    pub fn target_direction(&self) -> EdgeDirection {
        EdgeDirection::from_reversed(self.target_reversed)
    }
}

/// Unpacked result of one routing query.
///
/// Created empty with [`RouteResult::default`], filled in by the search stage
/// and then moved to response assembly, which only reads it. A missing path
/// is expressed by a `None` length, never by an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteResult {
    /// Segments of the primary path, one list per leg, in traversal order.
    pub primary_path: Vec<Vec<PathSegment>>,
    /// Alternatives are only computed for single-leg queries.
    pub alternative_path: Vec<PathSegment>,
    pub leg_endpoints: Vec<PhantomNodes>,
    pub via_coordinates: Vec<FixedPointCoordinate>,
    pub checksum: Option<Checksum>,
    pub primary_path_length: Option<PathCost>,
    pub alternative_path_length: Option<PathCost>,
    /// Only meaningful when a primary path exists.
    pub primary_traversal: EndpointTraversal,
    /// Only meaningful when an alternative path exists.
    pub alternative_traversal: EndpointTraversal,
}

impl RouteResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_primary_path(&self) -> bool {
        self.primary_path_length.is_some()
    }

    pub fn has_alternative_path(&self) -> bool {
        self.alternative_path_length.is_some()
    }

    pub fn leg_count(&self) -> usize {
        self.leg_endpoints.len()
    }

    pub fn primary_segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.primary_path.iter().flatten()
    }

    pub fn primary_segment_count(&self) -> usize {
        self.primary_path.iter().map(Vec::len).sum()
    }

    /// Sum of the primary segment durations, `None` when no path was found.
    pub fn primary_duration(&self) -> Option<u64> {
        if !self.has_primary_path() {
            return None;
        }

        Some(sum_durations(self.primary_segments()))
    }

    pub fn alternative_duration(&self) -> Option<u64> {
        if !self.has_alternative_path() {
            return None;
        }

        Some(sum_durations(self.alternative_path.iter()))
    }

    /// Checks the producer-side invariants before handing the result over.
    ///
    /// Nothing in this crate calls it; the search stage decides whether the
    /// check is worth its cost.
    pub fn validate(&self) -> Result<(), RouteDataError> {
        let segment_count = self.primary_segment_count();
        if self.has_primary_path() != (segment_count > 0) {
            debug!(
                has_length = self.has_primary_path(),
                segment_count, "primary path length does not match its segments"
            );
            return Err(RouteDataError::PrimaryLengthMismatch {
                has_length: self.has_primary_path(),
                segment_count,
            });
        }

        if self.has_primary_path() && self.primary_path.len() != self.leg_endpoints.len() {
            debug!(
                legs = self.primary_path.len(),
                endpoints = self.leg_endpoints.len(),
                "leg count does not match leg endpoints"
            );
            return Err(RouteDataError::LegCountMismatch {
                legs: self.primary_path.len(),
                endpoints: self.leg_endpoints.len(),
            });
        }

        for (leg, segments) in self.primary_path.iter().enumerate() {
            if let Some(index) = segments.iter().position(|segment| !segment.is_set()) {
                debug!(leg, index, "unset segment in primary path");
                return Err(RouteDataError::UnsetSegment { leg, index });
            }
        }

        let alternative_count = self.alternative_path.len();
        if self.has_alternative_path() != (alternative_count > 0) {
            debug!(
                has_length = self.has_alternative_path(),
                segment_count = alternative_count,
                "alternative path length does not match its segments"
            );
            return Err(RouteDataError::AlternativeLengthMismatch {
                has_length: self.has_alternative_path(),
                segment_count: alternative_count,
            });
        }

        if self.has_alternative_path() && self.leg_endpoints.len() != 1 {
            debug!(
                legs = self.leg_endpoints.len(),
                "alternative path on a multi-leg query"
            );
            return Err(RouteDataError::AlternativeOnMultiLegQuery {
                legs: self.leg_endpoints.len(),
            });
        }

        if let Some(index) = self
            .alternative_path
            .iter()
            .position(|segment| !segment.is_set())
        {
            debug!(index, "unset segment in alternative path");
            return Err(RouteDataError::UnsetAlternativeSegment { index });
        }

        if let Some(leg) = self
            .leg_endpoints
            .iter()
            .position(|endpoints| !endpoints.is_valid())
        {
            debug!(leg, "invalid phantom node");
            return Err(RouteDataError::InvalidPhantomNode { leg });
        }

        trace!(
            legs = self.leg_count(),
            segment_count,
            alternative_count,
            "route result is consistent"
        );

        Ok(())
    }
}

fn sum_durations<'a>(segments: impl Iterator<Item = &'a PathSegment>) -> u64 {
    segments
        .filter_map(PathSegment::segment_duration)
        .map(u64::from)
        .sum()
}
