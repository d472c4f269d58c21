//! Fluent construction of boards, mostly for tests and level authoring.

use crate::board::Board;
use crate::edit::Piece;
use crate::location::Location;
use crate::shape::Orientation;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A piece was placed, turned or erased outside the board.
    FeatureOutOfBounds,
    /// An orientation was set on an empty cell, which has nothing to turn.
    OrientedEmptyCell,
}

/// A builder for boards, laying pieces down in editor order.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// The first problem encountered makes the builder invalid, after which every call does nothing.
#[derive(Clone, Default)]
pub struct BoardBuilder {
    board: Board,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    /// Construct a builder over an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building from an existing board.
    pub fn from_board(board: Board) -> Self {
        Self { board, invalid_reasons: Default::default() }
    }

    fn check_bounds(&mut self, location: Location) -> bool {
        if !self.invalid_reasons.is_empty() {
            return false;
        }

        if !location.in_bounds() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return false;
        }

        true
    }

    /// Place `piece` at `location`, at rest. Placing a source or sink removes any earlier one, as in the editor.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    pub fn place(&mut self, location: Location, piece: Piece) -> &mut Self {
        if self.check_bounds(location) {
            self.board = self.board.placed(location, piece);
        }

        self
    }

    /// Shorthand for [`Self::place`] followed by [`Self::orient`].
    pub fn place_oriented(&mut self, location: Location, piece: Piece, orientation: Orientation) -> &mut Self {
        self.place(location, piece).orient(location, orientation)
    }

    /// Set the orientation of the tile at `location` outright, whatever its material.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds,
    /// or an [`OrientedEmptyCell`](BuilderInvalidReason::OrientedEmptyCell) invalid state if the cell is empty.
    pub fn orient(&mut self, location: Location, orientation: Orientation) -> &mut Self {
        if !self.check_bounds(location) {
            return self;
        }

        match self.board.get_mut(location) {
            Some(tile) if !tile.is_empty() => tile.orientation = orientation,
            _ => self.invalid_reasons.push(BuilderInvalidReason::OrientedEmptyCell),
        }

        self
    }

    /// Reset the cell at `location` to empty.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    pub fn erase(&mut self, location: Location) -> &mut Self {
        if self.check_bounds(location) {
            self.board = self.board.erased(location);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        match self.is_valid() {
            Some(reasons) => Err(reasons),
            None => Ok(self.board.clone()),
        }
    }
}
