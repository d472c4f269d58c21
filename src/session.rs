use tracing::debug;

use crate::board::Board;
use crate::edit::{Edit, Mode};
use crate::propagation::{propagate, Powered};
use crate::seed::{self, SeedError};

/// The current state of a puzzle: the board, who is at the controls, and the last propagation pass.
///
/// All changes go through [`Self::apply`], which builds the next board and runs a full pass over it,
/// so the outcome can never go stale.
#[derive(Clone, Debug)]
pub struct Puzzle {
    mode: Mode,
    outcome: Powered,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle {
    /// An empty board in the editor.
    pub fn new() -> Self {
        Self::with_board(Board::new(), Mode::Edit)
    }

    /// Start from `board` in `mode`, with a pass already run over it.
    pub fn with_board(board: Board, mode: Mode) -> Self {
        Self { mode, outcome: propagate(&board) }
    }

    /// Load a level from its seed, ready to play.
    pub fn from_seed(seed: &str) -> Result<Self, SeedError> {
        Ok(Self::with_board(seed::decode(seed)?, Mode::Play))
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.outcome.board()
    }

    /// Who is at the controls.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch between editing and playing. The board is left as it is.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Result of the latest propagation pass.
    pub fn outcome(&self) -> &Powered {
        &self.outcome
    }

    /// Verdict of the latest pass.
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// The current board as a level seed.
    pub fn seed(&self) -> String {
        seed::encode(self.board())
    }

    /// Apply `edit` under the current mode, then recompute power over the whole board.
    pub fn apply(&mut self, edit: &Edit) -> &Powered {
        let next = self.board().apply(self.mode, edit);
        let changed = next != *self.board();
        self.outcome = propagate(&next);

        debug!(?edit, mode = %self.mode, changed, solved = self.outcome.is_solved(), "applied edit");
        &self.outcome
    }

    /// Replace the board with the level in `seed` and switch to [`Mode::Play`].
    ///
    /// A malformed seed leaves the puzzle untouched.
    pub fn load_seed(&mut self, seed: &str) -> Result<&Powered, SeedError> {
        let board = seed::decode(seed)?;
        self.mode = Mode::Play;
        Ok(self.apply(&Edit::Load(board)))
    }
}
