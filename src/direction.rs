use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::location::{Coord, Location};

/// The two orthogonal directions a word can run in the grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    /// The location `steps` letters along `self` from `start`.
    pub(crate) fn advance(&self, start: Location, steps: Coord) -> Location {
        match self {
            Self::Across => start.offset_by((steps, 0)),
            Self::Down => start.offset_by((0, steps)),
        }
    }

    /// Invert the direction specified by `self`.
    ///
    /// A word crossing an across target must run down, and vice versa.
    pub(crate) fn perpendicular(&self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// The two neighbors of `location` one step perpendicular to `self`.
    pub(crate) fn flanking(&self, location: Location) -> [Location; 2] {
        match self {
            Self::Across => [location.offset_by((0, -1)), location.offset_by((0, 1))],
            Self::Down => [location.offset_by((-1, 0)), location.offset_by((1, 0))],
        }
    }
}
