use serde::{Deserialize, Serialize};

use crate::error::RouteDataError;

/// Maneuver performed when reaching the node at the end of a segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TurnInstruction {
    NoTurn = 0,
    GoStraight = 1,
    TurnSlightRight = 2,
    TurnRight = 3,
    TurnSharpRight = 4,
    UTurn = 5,
    TurnSharpLeft = 6,
    TurnLeft = 7,
    TurnSlightLeft = 8,
    ReachViaPoint = 9,
    HeadOn = 10,
    EnterRoundAbout = 11,
    LeaveRoundAbout = 12,
    StayOnRoundAbout = 13,
    StartAtEndOfStreet = 14,
    ReachedYourDestination = 15,
    EnterAgainstAllowedDirection = 16,
    LeaveAgainstAllowedDirection = 17,
    InverseAccessRestrictionFlag = 127,
    AccessRestrictionFlag = 128,
    AccessRestrictionPenalty = 129,
}

impl TurnInstruction {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the maneuver has to be announced. Continuing on the same road
    /// or staying on a roundabout does not.
    pub fn is_necessary(self) -> bool {
        !matches!(
            self,
            TurnInstruction::NoTurn | TurnInstruction::StayOnRoundAbout
        )
    }
}

impl TryFrom<u8> for TurnInstruction {
    type Error = RouteDataError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let instruction = match code {
            0 => TurnInstruction::NoTurn,
            1 => TurnInstruction::GoStraight,
            2 => TurnInstruction::TurnSlightRight,
            3 => TurnInstruction::TurnRight,
            4 => TurnInstruction::TurnSharpRight,
            5 => TurnInstruction::UTurn,
            6 => TurnInstruction::TurnSharpLeft,
            7 => TurnInstruction::TurnLeft,
            8 => TurnInstruction::TurnSlightLeft,
            9 => TurnInstruction::ReachViaPoint,
            10 => TurnInstruction::HeadOn,
            11 => TurnInstruction::EnterRoundAbout,
            12 => TurnInstruction::LeaveRoundAbout,
            13 => TurnInstruction::StayOnRoundAbout,
            14 => TurnInstruction::StartAtEndOfStreet,
            15 => TurnInstruction::ReachedYourDestination,
            16 => TurnInstruction::EnterAgainstAllowedDirection,
            17 => TurnInstruction::LeaveAgainstAllowedDirection,
            127 => TurnInstruction::InverseAccessRestrictionFlag,
            128 => TurnInstruction::AccessRestrictionFlag,
            129 => TurnInstruction::AccessRestrictionPenalty,
            _ => return Err(RouteDataError::UnknownTurnInstruction(code)),
        };

        Ok(instruction)
    }
}
