use ndarray::Ix;

pub(crate) type Coord = usize;

/// Side length of every board.
pub const GRID_SIZE: Coord = 8;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
///
/// Locations order row-major, which is also the order the engine visits cells in.
pub struct Location(pub Coord, pub Coord);

impl Location {
    #[inline]
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Offset this location by `(rows, cols)`.
    ///
    /// Stepping off the top or left edge wraps around to a huge coordinate, which every board lookup rejects.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on a `GRID_SIZE` x `GRID_SIZE` board.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.0 < GRID_SIZE && self.1 < GRID_SIZE
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
