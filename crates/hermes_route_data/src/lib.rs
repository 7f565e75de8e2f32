//! Result of a single shortest-path query, handed from search to response assembly.

pub mod constants;
pub mod coordinate;
pub mod edge_direction;
pub mod error;
pub mod path_segment;
pub mod phantom_node;
pub mod route_result;
pub mod turn_instruction;
pub mod types;

pub use coordinate::FixedPointCoordinate;
pub use edge_direction::EdgeDirection;
pub use error::RouteDataError;
pub use path_segment::{PathSegment, SegmentData};
pub use phantom_node::{PhantomNode, PhantomNodes};
pub use route_result::{EndpointTraversal, RouteResult};
pub use turn_instruction::TurnInstruction;
pub use types::{Checksum, NameId, NodeId, PathCost, SegmentDuration, path_cost_from_raw};
