use serde::{Deserialize, Serialize};

use crate::{
    constants::{INVALID_DURATION, INVALID_NAME_ID, INVALID_NODE_ID, INVALID_TURN_CODE},
    error::RouteDataError,
    turn_instruction::TurnInstruction,
    types::{NameId, NodeId, SegmentDuration},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentData {
    pub node: NodeId,
    pub name_id: NameId,
    pub segment_duration: SegmentDuration,
    pub turn_instruction: TurnInstruction,
}

/// One traversed edge of an unpacked path.
///
/// Either all fields are set or none is: a default segment marks an unused
/// slot and exposes no field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathSegment {
    data: Option<SegmentData>,
}

impl PathSegment {
    pub fn new(
        node: NodeId,
        name_id: NameId,
        turn_instruction: TurnInstruction,
        segment_duration: SegmentDuration,
    ) -> Self {
        PathSegment {
            data: Some(SegmentData {
                node,
                name_id,
                segment_duration,
                turn_instruction,
            }),
        }
    }

    pub fn unset() -> Self {
        PathSegment { data: None }
    }

    pub fn is_set(&self) -> bool {
        self.data.is_some()
    }

    pub fn data(&self) -> Option<&SegmentData> {
        self.data.as_ref()
    }

    pub fn node(&self) -> Option<NodeId> {
        self.data.map(|data| data.node)
    }

    pub fn name_id(&self) -> Option<NameId> {
        self.data.map(|data| data.name_id)
    }

    pub fn segment_duration(&self) -> Option<SegmentDuration> {
        self.data.map(|data| data.segment_duration)
    }

    pub fn turn_instruction(&self) -> Option<TurnInstruction> {
        self.data.map(|data| data.turn_instruction)
    }

    /// Flat `(node, name_id, segment_duration, turn_instruction)` encoding,
    /// with every field at its max-value sentinel for an unset segment.
    pub fn raw_parts(&self) -> (u32, u32, SegmentDuration, u8) {
        match self.data {
            Some(data) => (
                data.node.get(),
                data.name_id.get(),
                data.segment_duration,
                data.turn_instruction.code(),
            ),
            None => (
                INVALID_NODE_ID,
                INVALID_NAME_ID,
                INVALID_DURATION,
                INVALID_TURN_CODE,
            ),
        }
    }

    /// Inverse of [`PathSegment::raw_parts`].
    ///
    /// The node field decides whether the segment is set: a set segment may
    /// legitimately carry `u32::MAX` as its duration, while ids and turn codes
    /// never take their sentinel value.
    pub fn from_raw_parts(
        node: u32,
        name_id: u32,
        segment_duration: SegmentDuration,
        turn_instruction: u8,
    ) -> Result<Self, RouteDataError> {
        let Some(node) = NodeId::from_raw(node) else {
            if name_id == INVALID_NAME_ID
                && segment_duration == INVALID_DURATION
                && turn_instruction == INVALID_TURN_CODE
            {
                return Ok(PathSegment::unset());
            }
            return Err(RouteDataError::PartialSegment);
        };

        let name_id = NameId::from_raw(name_id).ok_or(RouteDataError::PartialSegment)?;
        if turn_instruction == INVALID_TURN_CODE {
            return Err(RouteDataError::PartialSegment);
        }
        let turn_instruction = TurnInstruction::try_from(turn_instruction)?;

        Ok(PathSegment::new(
            node,
            name_id,
            turn_instruction,
            segment_duration,
        ))
    }
}
