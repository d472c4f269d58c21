//! Level seeds: a board as a line of text, two characters per cell in row-major order.
//!
//! The first character names the piece:
//!
//! | code | piece |
//! |---|---|
//! | `X` | empty |
//! | `A` / `B` / `D` | source / sink / dead end |
//! | `I` / `i` | straight pipe, rotatable / fixed |
//! | `L` / `l` | corner pipe, rotatable / fixed |
//! | `S` / `s` | straight / corner switch |
//!
//! The second is the orientation: `0`, `9`, `1` and `2` for 0, 90, 180 and 270 degrees.
//!
//! The alphabet has no room for tees, crosses, blockers or switches of other shapes; those are written as `X`.
//! Unknown piece codes read back as empty cells and unknown orientation codes as 0 degrees.

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::board::Board;
use crate::cell::{Category, Material, NodeKind, Tile};
use crate::location::{Location, GRID_SIZE};
use crate::shape::{Orientation, PipeShape};

/// Characters in a seed.
pub const SEED_LENGTH: usize = 2 * GRID_SIZE * GRID_SIZE;

/// Reasons a seed cannot be read.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SeedError {
    /// The seed is not exactly [`SEED_LENGTH`] characters long.
    #[error("seed must be {expected} characters long, found {found}")]
    WrongLength {
        /// Always [`SEED_LENGTH`].
        expected: usize,
        /// Characters actually given.
        found: usize,
    },
}

fn piece_code(tile: &Tile) -> char {
    match (tile.category(), tile.material(), tile.shape()) {
        (Category::Node, ..) => match tile.node_kind() {
            Some(NodeKind::Source) => 'A',
            Some(NodeKind::Sink) => 'B',
            Some(NodeKind::DeadEnd) => 'D',
            None => 'X',
        },
        (_, Material::Switch, PipeShape::Straight) => 'S',
        (_, Material::Switch, PipeShape::Corner) => 's',
        (_, Material::Switch, _) => 'X',
        (_, Material::Rotatable, PipeShape::Straight) => 'I',
        (_, _, PipeShape::Straight) => 'i',
        (_, Material::Rotatable, PipeShape::Corner) => 'L',
        (_, _, PipeShape::Corner) => 'l',
        _ => 'X',
    }
}

fn orientation_code(orientation: Orientation) -> char {
    match orientation {
        Orientation::Deg0 => '0',
        Orientation::Deg90 => '9',
        Orientation::Deg180 => '1',
        Orientation::Deg270 => '2',
    }
}

fn decode_tile(piece: char, orientation: char) -> Tile {
    let tile = match piece {
        'A' => Tile::node(NodeKind::Source),
        'B' => Tile::node(NodeKind::Sink),
        'D' => Tile::node(NodeKind::DeadEnd),
        'I' => Tile::pipe(PipeShape::Straight, Material::Rotatable),
        'i' => Tile::pipe(PipeShape::Straight, Material::Fixed),
        'L' => Tile::pipe(PipeShape::Corner, Material::Rotatable),
        'l' => Tile::pipe(PipeShape::Corner, Material::Fixed),
        'S' => Tile::pipe(PipeShape::Straight, Material::Switch),
        's' => Tile::pipe(PipeShape::Corner, Material::Switch),
        _ => Tile::empty(),
    };

    tile.with_orientation(match orientation {
        '9' => Orientation::Deg90,
        '1' => Orientation::Deg180,
        '2' => Orientation::Deg270,
        _ => Orientation::Deg0,
    })
}

/// Write `board` as a seed of exactly [`SEED_LENGTH`] characters.
pub fn encode(board: &Board) -> String {
    let mut seed = String::with_capacity(SEED_LENGTH);
    for (_, tile) in board.iter() {
        seed.push(piece_code(tile));
        seed.push(orientation_code(tile.orientation()));
    }

    seed
}

/// Read a seed back into a board.
///
/// Fails without building anything if `seed` is not exactly [`SEED_LENGTH`] characters long.
pub fn decode(seed: &str) -> Result<Board, SeedError> {
    let found = seed.chars().count();
    if found != SEED_LENGTH {
        return Err(SeedError::WrongLength { expected: SEED_LENGTH, found });
    }

    let mut board = Board::new();
    for (index, (piece, orientation)) in seed.chars().tuples::<(char, char)>().enumerate() {
        if let Some(tile) = board.get_mut(Location(index / GRID_SIZE, index % GRID_SIZE)) {
            *tile = decode_tile(piece, orientation);
        }
    }

    Ok(board)
}

impl Board {
    /// Shorthand for [`encode`].
    pub fn to_seed(&self) -> String {
        encode(self)
    }
}

impl FromStr for Board {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::builder::BoardBuilder;
    use crate::edit::Piece;

    #[test]
    fn empty_board() {
        assert_eq!(Board::new().to_seed(), "X0".repeat(64));
        assert_eq!(decode(&"X0".repeat(64)), Ok(Board::new()));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(decode(""), Err(SeedError::WrongLength { expected: 128, found: 0 }));
        assert_eq!(decode(&"X0".repeat(63)), Err(SeedError::WrongLength { expected: 128, found: 126 }));
        assert_eq!(decode(&format!("{}X", "X0".repeat(64))), Err(SeedError::WrongLength { expected: 128, found: 129 }));
        // length counts characters, not bytes
        assert_eq!(decode(&"é0".repeat(64)).map(|board| board.to_seed()), Ok("X0".repeat(64)));
    }

    #[test]
    fn codes() {
        let board = BoardBuilder::new()
            .place_oriented(Location(0, 0), Piece::Node(NodeKind::Source), Orientation::Deg90)
            .place(Location(0, 1), Piece::Pipe { shape: PipeShape::Straight, material: Material::Rotatable })
            .place_oriented(Location(0, 2), Piece::Pipe { shape: PipeShape::Straight, material: Material::Fixed }, Orientation::Deg180)
            .place_oriented(Location(0, 3), Piece::Pipe { shape: PipeShape::Corner, material: Material::Rotatable }, Orientation::Deg270)
            .place(Location(0, 4), Piece::Pipe { shape: PipeShape::Corner, material: Material::Fixed })
            .place(Location(0, 5), Piece::Pipe { shape: PipeShape::Straight, material: Material::Switch })
            .place(Location(0, 6), Piece::Pipe { shape: PipeShape::Corner, material: Material::Switch })
            .place(Location(0, 7), Piece::Node(NodeKind::Sink))
            .place(Location(1, 0), Piece::Node(NodeKind::DeadEnd))
            // not representable
            .place(Location(1, 1), Piece::Pipe { shape: PipeShape::Tee, material: Material::Rotatable })
            .place(Location(1, 2), Piece::Blocker)
            .place(Location(1, 3), Piece::Pipe { shape: PipeShape::Cross, material: Material::Switch })
            .build()
            .unwrap();

        let seed = board.to_seed();
        assert_eq!(&seed[..32], "A9I0i1L2l0S0s0B0D0X0X0X0X0X0X0X0");
        assert_eq!(seed.len(), SEED_LENGTH);
    }

    #[test]
    fn unknown_codes_fall_back() {
        let seed = format!("Q9I7{}", "X0".repeat(62));
        let board: Board = seed.parse().unwrap();

        assert_eq!(board.get(Location(0, 0)), Some(&Tile::empty().with_orientation(Orientation::Deg90)));
        assert_eq!(board.get(Location(0, 1)), Some(&Tile::pipe(PipeShape::Straight, Material::Rotatable)));
    }

    fn any_seed() -> impl Strategy<Value=String> {
        let cell = (
            prop::sample::select(vec!['X', 'A', 'B', 'D', 'I', 'i', 'L', 'l', 'S', 's']),
            prop::sample::select(vec!['0', '9', '1', '2']),
        );
        prop::collection::vec(cell, GRID_SIZE * GRID_SIZE)
            .prop_map(|cells| cells.into_iter().flat_map(|(piece, orientation)| [piece, orientation]).collect())
    }

    proptest! {
        #[test]
        fn round_trip(seed in any_seed()) {
            let board = decode(&seed).unwrap();
            prop_assert_eq!(encode(&board), seed);
            prop_assert_eq!(decode(&encode(&board)).unwrap(), board);
        }
    }
}
