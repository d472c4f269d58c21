//! Browser bindings: a [`Puzzle`] driven from JavaScript.
//!
//! Every mutating method returns the solved verdict of the pass it triggered.

use js_sys::{Array, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::edit::{Edit, Mode, Piece};
use crate::location::Location;
use crate::session::Puzzle;

/// A puzzle session, exported to JavaScript as `Puzzle`.
#[wasm_bindgen(js_name = Puzzle)]
pub struct WasmPuzzle {
    inner: Puzzle,
}

impl Default for WasmPuzzle {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_class = Puzzle)]
impl WasmPuzzle {
    /// An empty board in the editor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Puzzle::new() }
    }

    /// Load a level, ready to play. Throws on a malformed seed.
    #[wasm_bindgen(js_name = fromSeed)]
    pub fn from_seed(seed: &str) -> Result<WasmPuzzle, JsError> {
        Ok(Self { inner: Puzzle::from_seed(seed)? })
    }

    /// Replace the board with a level and switch to play. Throws on a malformed seed and keeps the old board.
    #[wasm_bindgen(js_name = loadSeed)]
    pub fn load_seed(&mut self, seed: &str) -> Result<bool, JsError> {
        Ok(self.inner.load_seed(seed)?.is_solved())
    }

    /// The current board as a level seed.
    pub fn seed(&self) -> String {
        self.inner.seed()
    }

    /// Whether the player, rather than the editor, is at the controls.
    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool {
        self.inner.mode() == Mode::Play
    }

    /// Switch between play and the editor, keeping the board.
    #[wasm_bindgen(setter)]
    pub fn set_playing(&mut self, playing: bool) {
        self.inner.set_mode(if playing { Mode::Play } else { Mode::Edit });
    }

    /// Verdict of the latest pass.
    #[wasm_bindgen(getter)]
    pub fn solved(&self) -> bool {
        self.inner.is_solved()
    }

    /// Click a cell: turns it in the editor, or turns or activates it in play.
    pub fn interact(&mut self, row: usize, col: usize) -> bool {
        self.inner.apply(&Edit::Interact(Location(row, col))).is_solved()
    }

    /// Place a piece by name, e.g. `"source"` or `"corner:fixed"`.
    pub fn place(&mut self, row: usize, col: usize, piece: &str) -> Result<bool, JsError> {
        let piece: Piece = piece.parse()?;
        Ok(self.inner.apply(&Edit::Place(Location(row, col), piece)).is_solved())
    }

    /// Empty a cell. Ignored in play.
    pub fn erase(&mut self, row: usize, col: usize) -> bool {
        self.inner.apply(&Edit::Erase(Location(row, col))).is_solved()
    }

    /// Empty the whole board.
    pub fn clear(&mut self) -> bool {
        self.inner.apply(&Edit::Clear).is_solved()
    }

    /// Row-major power levels, with unpowered cells as 0 and powered cells as their level plus one.
    #[wasm_bindgen(js_name = powerLevels)]
    pub fn power_levels(&self) -> Uint32Array {
        let levels: Vec<u32> = self.inner.outcome()
            .charges()
            .iter()
            .map(|charge| if charge.powered { charge.level + 1 } else { 0 })
            .collect();

        Uint32Array::from(levels.as_slice())
    }

    /// Open ports of a cell as four booleans, North, East, South, West.
    pub fn ports(&self, row: usize, col: usize) -> Array {
        let ports = self.inner.board()
            .get(Location(row, col))
            .map(|tile| tile.ports())
            .unwrap_or_default();

        ports.iter().map(|open| JsValue::from_bool(*open)).collect()
    }

    /// Clockwise rotation of a cell in degrees, 0 off the board.
    pub fn orientation(&self, row: usize, col: usize) -> u32 {
        self.inner.board()
            .get(Location(row, col))
            .map_or(0, |tile| tile.orientation().degrees())
    }

    /// The board as text, one glyph per cell with powered pipes drawn heavy.
    pub fn render(&self) -> String {
        self.inner.outcome().to_string()
    }
}
