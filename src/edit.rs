//! Changes to a board: turning, switch activation, placing and erasing pieces, and clicks in either mode.

use std::str::FromStr;

use strum::{Display, EnumString};
use thiserror::Error;

use crate::board::Board;
use crate::cell::{Material, NodeKind, Tile};
use crate::location::Location;
use crate::shape::PipeShape;

/// Who is at the controls, which decides what an interaction with a cell does.
#[derive(Copy, Clone, Debug, Default, Display, EnumString, Eq, PartialEq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Level design: any non-empty cell turns on interaction, and pieces can be placed and erased.
    #[default]
    Edit,
    /// Solving: only rotatable pipes and switches respond.
    Play,
}

/// Something the editor can drop onto a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Piece {
    /// A pipe of some shape and material.
    Pipe {
        /// Conductor drawn on the pipe.
        shape: PipeShape,
        /// Who may turn the pipe.
        material: Material,
    },
    /// A source, sink or dead end.
    Node(NodeKind),
    /// A cell which never conducts.
    Blocker,
}

impl Piece {
    /// The tile this piece becomes, at rest. See [`Tile::pipe`] for how odd pipes are read.
    pub fn tile(&self) -> Tile {
        match *self {
            Self::Pipe { shape, material } => Tile::pipe(shape, material),
            Self::Node(kind) => Tile::node(kind),
            Self::Blocker => Tile::blocker(),
        }
    }
}

/// Reasons a [`Piece`] name fails to parse.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PieceParseError {
    /// Neither a node, a blocker nor a pipe shape.
    #[error("unknown piece `{0}`")]
    UnknownPiece(String),
    /// The part after `:` is not a material.
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),
}

impl FromStr for Piece {
    type Err = PieceParseError;

    /// Parse `source`, `sink`, `dead-end`, `blocker`, or a pipe shape optionally followed by `:material`,
    /// e.g. `corner:fixed`. Pipes default to rotatable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, material) = match s.split_once(':') {
            Some((name, material)) => (name, Some(material)),
            None => (s, None),
        };

        if name == "blocker" && material.is_none() {
            return Ok(Self::Blocker);
        }
        if let (Ok(kind), None) = (NodeKind::from_str(name), material) {
            return Ok(Self::Node(kind));
        }

        let shape = PipeShape::from_str(name).map_err(|_| PieceParseError::UnknownPiece(s.to_owned()))?;
        let material = match material {
            None => Material::Rotatable,
            Some(material) => Material::from_str(material).map_err(|_| PieceParseError::UnknownMaterial(material.to_owned()))?,
        };

        Ok(Self::Pipe { shape, material })
    }
}

/// A single change to a board. Every edit is followed by a full propagation pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Edit {
    /// A click on a cell; what happens depends on the [`Mode`].
    Interact(Location),
    /// Drop a piece, replacing whatever was there. Editor only.
    Place(Location, Piece),
    /// Reset a cell to empty. Editor only.
    Erase(Location),
    /// Replace the whole board, e.g. with a decoded seed.
    Load(Board),
    /// Replace the whole board with an empty one.
    Clear,
}

impl Board {
    /// Turn the tile at `location` 90 degrees clockwise.
    ///
    /// Empty cells and locations off the board leave the board unchanged.
    pub fn rotated(&self, location: Location) -> Board {
        let mut next = self.clone();
        if let Some(tile) = next.get_mut(location) {
            if !tile.is_empty() {
                tile.turn();
            }
        }

        next
    }

    /// Activate the switch at `location`.
    ///
    /// A switch with a shape turns itself. Whether or not it has a shape, every orthogonal neighbor which is a
    /// shaped pipe of rotatable or fixed material turns as well; this is the only way fixed pipes ever move.
    /// Anything other than a switch is left alone.
    pub fn activated(&self, location: Location) -> Board {
        let mut next = self.clone();
        match next.get_mut(location) {
            Some(tile) if tile.material() == Material::Switch => {
                if tile.shape() != PipeShape::None {
                    tile.turn();
                }
            }
            _ => return next,
        }

        for (_, neighbor_location) in self.neighbors_of(location) {
            if let Some(neighbor) = next.get_mut(neighbor_location) {
                if neighbor.is_shaped_pipe() && matches!(neighbor.material(), Material::Rotatable | Material::Fixed) {
                    neighbor.turn();
                }
            }
        }

        next
    }

    /// Reset the cell at `location` to empty.
    pub fn erased(&self, location: Location) -> Board {
        let mut next = self.clone();
        if let Some(tile) = next.get_mut(location) {
            *tile = Tile::empty();
        }

        next
    }

    /// Drop `piece` at `location` at rest.
    ///
    /// Only one source and one sink may exist: placing either erases every other cell of the same kind first.
    pub fn placed(&self, location: Location, piece: Piece) -> Board {
        if !location.in_bounds() {
            return self.clone();
        }

        let mut next = self.clone();
        if let Piece::Node(kind @ (NodeKind::Source | NodeKind::Sink)) = piece {
            for previous in self.locations_of(kind) {
                next = next.erased(previous);
            }
        }

        if let Some(tile) = next.get_mut(location) {
            *tile = piece.tile();
        }

        next
    }

    /// What a click on `location` does in `mode`.
    pub fn interacted(&self, mode: Mode, location: Location) -> Board {
        let Some(tile) = self.get(location) else {
            return self.clone();
        };

        match (mode, tile.material()) {
            (Mode::Edit, _) => self.rotated(location),
            (Mode::Play, Material::Rotatable) => self.rotated(location),
            (Mode::Play, Material::Switch) => self.activated(location),
            (Mode::Play, Material::Fixed | Material::Terminal | Material::Empty) => self.clone(),
        }
    }

    /// Apply `edit` in `mode`, producing the next board. Edits the mode forbids leave the board unchanged.
    pub fn apply(&self, mode: Mode, edit: &Edit) -> Board {
        match (edit, mode) {
            (Edit::Interact(location), _) => self.interacted(mode, *location),
            (Edit::Place(location, piece), Mode::Edit) => self.placed(*location, *piece),
            (Edit::Erase(location), Mode::Edit) => self.erased(*location),
            (Edit::Place(..) | Edit::Erase(..), Mode::Play) => self.clone(),
            (Edit::Load(board), _) => board.clone(),
            (Edit::Clear, _) => Board::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Category;
    use crate::shape::Orientation;

    fn with(board: &Board, location: Location, tile: Tile) -> Board {
        let mut next = board.clone();
        *next.get_mut(location).unwrap() = tile;
        next
    }

    #[test]
    fn parse_pieces() {
        assert_eq!("source".parse::<Piece>(), Ok(Piece::Node(NodeKind::Source)));
        assert_eq!("dead-end".parse::<Piece>(), Ok(Piece::Node(NodeKind::DeadEnd)));
        assert_eq!("blocker".parse::<Piece>(), Ok(Piece::Blocker));
        assert_eq!("tee".parse::<Piece>(), Ok(Piece::Pipe { shape: PipeShape::Tee, material: Material::Rotatable }));
        assert_eq!("corner:switch".parse::<Piece>(), Ok(Piece::Pipe { shape: PipeShape::Corner, material: Material::Switch }));
        assert_eq!("elbow".parse::<Piece>(), Err(PieceParseError::UnknownPiece("elbow".to_owned())));
        assert_eq!("straight:glass".parse::<Piece>(), Err(PieceParseError::UnknownMaterial("glass".to_owned())));
    }

    #[test]
    fn rotating_empty_is_a_no_op() {
        let board = Board::new();
        assert_eq!(board.rotated(Location(3, 3)), board);
        assert_eq!(board.rotated(Location(8, 0)), board);
    }

    #[test]
    fn rotation_wraps_after_four_turns() {
        let location = Location(2, 5);
        let mut board = Board::new().placed(location, Piece::Pipe { shape: PipeShape::Corner, material: Material::Fixed });
        for expected in [Orientation::Deg90, Orientation::Deg180, Orientation::Deg270, Orientation::Deg0] {
            board = board.rotated(location);
            assert_eq!(board.get(location).unwrap().orientation(), expected);
        }
    }

    #[test]
    fn play_mode_respects_materials() {
        let rotatable = Location(0, 0);
        let fixed = Location(0, 2);
        let terminal = Location(0, 4);
        let board = Board::new()
            .placed(rotatable, Piece::Pipe { shape: PipeShape::Straight, material: Material::Rotatable })
            .placed(fixed, Piece::Pipe { shape: PipeShape::Straight, material: Material::Fixed })
            .placed(terminal, Piece::Node(NodeKind::Sink));

        let played = board.interacted(Mode::Play, rotatable);
        assert_eq!(played.get(rotatable).unwrap().orientation(), Orientation::Deg90);

        assert_eq!(board.interacted(Mode::Play, fixed), board);
        assert_eq!(board.interacted(Mode::Play, terminal), board);
        assert_eq!(board.interacted(Mode::Play, Location(7, 7)), board);

        // the editor turns anything that isn't empty
        assert_eq!(board.interacted(Mode::Edit, fixed).get(fixed).unwrap().orientation(), Orientation::Deg90);
        assert_eq!(board.interacted(Mode::Edit, terminal).get(terminal).unwrap().orientation(), Orientation::Deg90);
        assert_eq!(board.interacted(Mode::Edit, Location(7, 7)), board);
    }

    #[test]
    fn switch_fans_out_to_pipe_neighbors() {
        let switch = Location(3, 3);
        let board = Board::new()
            .placed(switch, Piece::Pipe { shape: PipeShape::Straight, material: Material::Switch })
            .placed(Location(2, 3), Piece::Pipe { shape: PipeShape::Corner, material: Material::Rotatable })
            .placed(Location(3, 4), Piece::Pipe { shape: PipeShape::Straight, material: Material::Fixed })
            .placed(Location(4, 3), Piece::Pipe { shape: PipeShape::Tee, material: Material::Fixed })
            .placed(Location(3, 2), Piece::Pipe { shape: PipeShape::Cross, material: Material::Rotatable })
            // diagonal, out of reach
            .placed(Location(2, 2), Piece::Pipe { shape: PipeShape::Corner, material: Material::Rotatable });

        let activated = board.interacted(Mode::Play, switch);
        for location in [switch, Location(2, 3), Location(3, 4), Location(4, 3), Location(3, 2)] {
            assert_eq!(activated.get(location).unwrap().orientation(), Orientation::Deg90, "{location:?}");
        }
        assert_eq!(activated.get(Location(2, 2)).unwrap().orientation(), Orientation::Deg0);
    }

    #[test]
    fn switch_skips_blockers_nodes_and_empty_cells() {
        let switch = Location(1, 1);
        let board = Board::new()
            .placed(switch, Piece::Pipe { shape: PipeShape::Corner, material: Material::Switch })
            .placed(Location(0, 1), Piece::Blocker)
            .placed(Location(1, 2), Piece::Node(NodeKind::Source))
            .placed(Location(2, 1), Piece::Pipe { shape: PipeShape::Straight, material: Material::Switch });
        // an empty cell left turned by a seed
        let board = with(&board, Location(1, 0), Tile::empty().with_orientation(Orientation::Deg180));

        let activated = board.activated(switch);
        assert_eq!(activated.get(switch).unwrap().orientation(), Orientation::Deg90);
        assert_eq!(activated.get(Location(1, 0)).unwrap().orientation(), Orientation::Deg180);
        for location in [Location(0, 1), Location(1, 2), Location(2, 1), Location(1, 0)] {
            assert_eq!(activated.get(location), board.get(location));
        }
    }

    #[test]
    fn shapeless_switch_still_turns_neighbors() {
        let switch = Location(5, 5);
        let neighbor = Location(5, 6);
        // only reachable from inside the crate; the public constructors read this as empty
        let bare_switch = Tile { material: Material::Switch, ..Tile::empty() };
        let board = with(&Board::new(), switch, bare_switch)
            .placed(neighbor, Piece::Pipe { shape: PipeShape::Straight, material: Material::Fixed });

        let activated = board.interacted(Mode::Play, switch);
        assert_eq!(activated.get(switch).unwrap().orientation(), Orientation::Deg0);
        assert_eq!(activated.get(neighbor).unwrap().orientation(), Orientation::Deg90);
    }

    #[test]
    fn sources_and_sinks_are_unique() {
        let board = Board::new()
            .placed(Location(0, 0), Piece::Node(NodeKind::Source))
            .placed(Location(7, 7), Piece::Node(NodeKind::Sink))
            .placed(Location(1, 1), Piece::Node(NodeKind::DeadEnd))
            .placed(Location(2, 2), Piece::Node(NodeKind::DeadEnd))
            .rotated(Location(0, 0))
            .placed(Location(4, 4), Piece::Node(NodeKind::Source));

        assert_eq!(board.locations_of(NodeKind::Source), vec![Location(4, 4)]);
        assert_eq!(board.locations_of(NodeKind::Sink), vec![Location(7, 7)]);
        assert_eq!(board.locations_of(NodeKind::DeadEnd).len(), 2);
        assert_eq!(board.get(Location(0, 0)), Some(&Tile::empty()));
    }

    #[test]
    fn placement_resets_and_normalizes() {
        let location = Location(6, 1);
        let board = Board::new()
            .placed(location, Piece::Pipe { shape: PipeShape::Tee, material: Material::Rotatable })
            .rotated(location)
            .placed(location, Piece::Node(NodeKind::Sink));

        let tile = board.get(location).unwrap();
        assert_eq!(tile.category(), Category::Node);
        assert_eq!(tile.shape(), PipeShape::None);
        assert_eq!(tile.material(), Material::Terminal);
        assert_eq!(tile.orientation(), Orientation::Deg0);

        let erased = board.erased(location);
        assert_eq!(erased.get(location), Some(&Tile::empty()));
        assert_eq!(erased.get(location).unwrap().node_kind(), None);
    }

    #[test]
    fn play_mode_rejects_layout_changes() {
        let board = Board::new().placed(Location(1, 1), Piece::Blocker);

        assert_eq!(board.apply(Mode::Play, &Edit::Erase(Location(1, 1))), board);
        assert_eq!(board.apply(Mode::Play, &Edit::Place(Location(0, 0), Piece::Node(NodeKind::Sink))), board);
        assert_eq!(board.apply(Mode::Edit, &Edit::Erase(Location(1, 1))), Board::new());
        assert_eq!(board.apply(Mode::Play, &Edit::Clear), Board::new());
    }
}
