use serde::{Deserialize, Serialize};

/// Direction in which a route traverses a stored edge.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum EdgeDirection {
    #[default]
    Forward,
    Backward,
}

impl EdgeDirection {
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            EdgeDirection::Backward
        } else {
            EdgeDirection::Forward
        }
    }

    pub fn is_reversed(&self) -> bool {
        *self == EdgeDirection::Backward
    }

    pub fn opposite(&self) -> Self {
        match self {
            EdgeDirection::Forward => EdgeDirection::Backward,
            EdgeDirection::Backward => EdgeDirection::Forward,
        }
    }
}
