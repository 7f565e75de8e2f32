use crate::{
    constants::{INVALID_CHECKSUM, INVALID_NAME_ID, INVALID_NODE_ID, INVALID_PATH_COST},
    error::RouteDataError,
};

/// Travel time of a single segment, in deciseconds.
pub type SegmentDuration = u32;

/// Total cost of a path as reported by the search.
pub type PathCost = i32;

/// Maps the raw "no path" cost to `None`.
pub const fn path_cost_from_raw(raw: PathCost) -> Option<PathCost> {
    if raw == INVALID_PATH_COST {
        None
    } else {
        Some(raw)
    }
}

// The raw sentinel is never a valid id, so the flat encoding stays lossless.
macro_rules! define_id_newtype {
    ($name:ident, $invalid:expr) => {
        #[derive(
            serde::Serialize,
            serde::Deserialize,
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
        )]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $name {
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// Maps the raw sentinel to `None`.
            pub const fn from_raw(raw: u32) -> Option<Self> {
                if raw == $invalid {
                    None
                } else {
                    Some(Self(raw))
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = RouteDataError;

            fn try_from(raw: u32) -> Result<Self, Self::Error> {
                Self::from_raw(raw).ok_or(RouteDataError::ReservedId(raw))
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id_newtype!(NodeId, INVALID_NODE_ID);
define_id_newtype!(NameId, INVALID_NAME_ID);
define_id_newtype!(Checksum, INVALID_CHECKSUM);
