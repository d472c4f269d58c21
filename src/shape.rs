//! Headings, orientations and the conductors a pipe can carry.

use strum::{Display, EnumString, VariantArray};

use crate::location::Location;

/// One of the four edges of a square cell.
///
/// [`VARIANTS`](VariantArray::VARIANTS) lists them in port order, North, East, South, West,
/// which is also the index order of a [`Ports`](crate::connection::Ports) array.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Heading {
    /// Up, toward row 0.
    North,
    /// Right, toward higher columns.
    East,
    /// Down, toward higher rows.
    South,
    /// Left, toward column 0.
    West,
}

impl Heading {
    /// Position of this heading in a [`Ports`](crate::connection::Ports) array.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Inverse of [`Self::index`], reduced modulo 4.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::VARIANTS[index % Self::VARIANTS.len()]
    }

    /// The heading pointing back the way `self` came.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie off the board; callers check with [`Location::in_bounds`] or a board lookup.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((-1, 0)),
            Self::East => location.offset_by((0, 1)),
            Self::South => location.offset_by((1, 0)),
            Self::West => location.offset_by((0, -1)),
        }
    }
}

/// Clockwise rotation of a tile, in quarter turns.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Default, Ord, PartialOrd)]
pub enum Orientation {
    /// At rest.
    #[default]
    Deg0,
    /// One quarter turn.
    Deg90,
    /// Half a turn.
    Deg180,
    /// Three quarter turns.
    Deg270,
}

impl Orientation {
    /// Number of clockwise quarter turns, `0..4`.
    #[inline]
    pub fn steps(&self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// The rotation in degrees: 0, 90, 180 or 270.
    pub fn degrees(&self) -> u32 {
        self.steps() as u32 * 90
    }

    /// Build an orientation from an angle in degrees, taken modulo 360.
    ///
    /// Angles which are not a multiple of 90 round down to the previous quarter turn.
    pub fn from_degrees(degrees: u32) -> Self {
        Self::from_steps((degrees % 360 / 90) as usize)
    }

    /// Build an orientation from a number of clockwise quarter turns, taken modulo 4.
    pub fn from_steps(steps: usize) -> Self {
        Self::VARIANTS[steps % Self::VARIANTS.len()]
    }

    /// This orientation turned a further 90 degrees clockwise.
    pub fn turned(&self) -> Self {
        Self::from_steps(self.steps() + 1)
    }
}

/// The conductor drawn on a pipe tile.
#[derive(Copy, Clone, VariantArray, EnumString, Display, Eq, PartialEq, Hash, Debug, Default, Ord, PartialOrd)]
#[strum(serialize_all = "kebab-case")]
pub enum PipeShape {
    /// No conductor at all.
    #[default]
    None,
    /// North to South at rest.
    Straight,
    /// North to East at rest.
    Corner,
    /// North, East and West at rest.
    Tee,
    /// All four edges.
    Cross,
}
