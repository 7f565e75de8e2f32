use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteDataError {
    #[error("Unknown turn instruction code {0}")]
    UnknownTurnInstruction(u8),
    #[error("Id {0} is reserved as the unset marker")]
    ReservedId(u32),
    #[error("Segment fields are only partially populated")]
    PartialSegment,
    #[error(
        "Primary path length present: {has_length}, but path has {segment_count} segments"
    )]
    PrimaryLengthMismatch {
        has_length: bool,
        segment_count: usize,
    },
    #[error(
        "Alternative path length present: {has_length}, but path has {segment_count} segments"
    )]
    AlternativeLengthMismatch {
        has_length: bool,
        segment_count: usize,
    },
    #[error("Primary path has {legs} legs but {endpoints} leg endpoints")]
    LegCountMismatch { legs: usize, endpoints: usize },
    #[error("Unset segment at leg {leg}, index {index}")]
    UnsetSegment { leg: usize, index: usize },
    #[error("Unset alternative segment at index {index}")]
    UnsetAlternativeSegment { index: usize },
    #[error("Alternative path on a query with {legs} legs")]
    AlternativeOnMultiLegQuery { legs: usize },
    #[error("Invalid phantom node for leg {leg}")]
    InvalidPhantomNode { leg: usize },
}
