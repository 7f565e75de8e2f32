use crate::types::{PathCost, SegmentDuration};

/// Fixed-point scale of [`crate::FixedPointCoordinate`] (1e-6 degrees).
pub const COORDINATE_PRECISION: f64 = 1_000_000.0;

// Raw "unset" values of the flat encoding produced by the search stage.
pub const INVALID_NODE_ID: u32 = u32::MAX;
pub const INVALID_NAME_ID: u32 = u32::MAX;
pub const INVALID_CHECKSUM: u32 = u32::MAX;
pub const INVALID_DURATION: SegmentDuration = SegmentDuration::MAX;
pub const INVALID_PATH_COST: PathCost = PathCost::MAX;
pub const INVALID_TURN_CODE: u8 = u8::MAX;
