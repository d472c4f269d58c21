use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::cell::{Category, Charge, NodeKind, Tile};
use crate::connection::are_connected;
use crate::location::{Location, GRID_SIZE};
use crate::shape::{Heading, PipeShape};

/// Headings which lead from a cell to a cell later in row-major order.
/// Walking only these visits every orthogonal pair exactly once.
const FORWARD_HEADINGS: [Heading; 2] = [Heading::East, Heading::South];

// indexed by the port bitmask N=1, E=2, S=4, W=8
const LIGHT_GLYPHS: [char; 16] = [' ', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼'];
const HEAVY_GLYPHS: [char; 16] = [' ', '╹', '╺', '┗', '╻', '┃', '┏', '┣', '╸', '┛', '━', '┻', '┓', '┫', '┳', '╋'];

/// A `GRID_SIZE` x `GRID_SIZE` board of authored tiles.
///
/// Boards are values: edits produce a new board and [`propagate`](crate::propagate) reads one without changing it.
/// Power lives in the [`Powered`](crate::Powered) result of a propagation pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) tiles: Array2<Tile>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            tiles: Array2::from_shape_simple_fn((GRID_SIZE, GRID_SIZE), Tile::empty),
        }
    }

    /// The tile at `location`, or [`None`] off the board.
    pub fn get(&self, location: Location) -> Option<&Tile> {
        self.tiles.get(location.as_index())
    }

    pub(crate) fn get_mut(&mut self, location: Location) -> Option<&mut Tile> {
        self.tiles.get_mut(location.as_index())
    }

    /// Every tile with its location, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item=(Location, &Tile)> {
        self.tiles.indexed_iter().map(|(index, tile)| (Location::from(index), tile))
    }

    /// Locations of every node of the given kind, in row-major order.
    pub fn locations_of(&self, kind: NodeKind) -> Vec<Location> {
        self.iter()
            .filter(|(_, tile)| tile.category() == Category::Node && tile.node_kind() == Some(kind))
            .map(|(location, _)| location)
            .collect_vec()
    }

    /// Orthogonal neighbors of `location` which lie on the board, in port order.
    pub fn neighbors_of(&self, location: Location) -> impl Iterator<Item=(Heading, Location)> + '_ {
        Heading::VARIANTS.iter()
            .copied()
            .map(move |heading| (heading, heading.attempt_from(location)))
            .filter(|(_, neighbor)| neighbor.in_bounds())
    }

    /// The graph of live wires on this board.
    ///
    /// Every cell is a vertex. Two orthogonal neighbors share an edge when their ports face each other;
    /// the edge weight is the heading from the earlier cell in row-major order to the later one.
    pub fn conduction_graph(&self) -> UnGraphMap<Location, Heading> {
        let mut graph = UnGraphMap::with_capacity(
            self.tiles.len(),
            // "horizontal" edges
            (GRID_SIZE - 1) * GRID_SIZE
                // "vertical" edges
                + (GRID_SIZE - 1) * GRID_SIZE,
        );

        for (location, _) in self.iter() {
            graph.add_node(location);
        }

        for (location, tile) in self.iter() {
            for heading in FORWARD_HEADINGS {
                let neighbor_location = heading.attempt_from(location);
                if let Some(neighbor) = self.get(neighbor_location) {
                    if are_connected(tile, neighbor, heading) {
                        graph.add_edge(location, neighbor_location, heading);
                    }
                }
            }
        }

        graph
    }

    /// Every conducting pair of neighbors, regardless of whether power reaches it.
    pub fn links(&self) -> HashSet<UnorderedPair<Location>> {
        self.conduction_graph()
            .all_edges()
            .map(|(a, b, _)| UnorderedPair::from((a, b)))
            .collect()
    }

    /// Lay out one glyph per cell, highlighting powered cells if `charges` is given.
    pub(crate) fn render(&self, charges: Option<&Array2<Charge>>) -> String {
        let glyphs = Array2::from_shape_fn(self.tiles.raw_dim(), |index| {
            let powered = charges.and_then(|charges| charges.get(index)).is_some_and(|charge| charge.powered);
            glyph(&self.tiles[index], powered, charges.is_some())
        });

        let mut out = String::with_capacity(glyphs.nrows() * (glyphs.ncols() + 1));
        for row in glyphs.rows() {
            for glyph in row {
                out.push(*glyph);
            }
            out.push('\n');
        }

        out
    }
}

fn glyph(tile: &Tile, powered: bool, show_power: bool) -> char {
    match tile.category() {
        Category::Blocker => '#',
        Category::Node => match tile.node_kind() {
            Some(NodeKind::Source) => 'A',
            Some(NodeKind::Sink) => if show_power && !powered { 'b' } else { 'B' },
            Some(NodeKind::DeadEnd) | None => 'D',
        },
        Category::Pipe => {
            if tile.shape() == PipeShape::None {
                return '.';
            }

            let mask = tile.ports().iter()
                .enumerate()
                .filter(|(_, open)| **open)
                .fold(0, |mask, (index, _)| mask | 1 << index);
            if powered { HEAVY_GLYPHS[mask] } else { LIGHT_GLYPHS[mask] }
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(None))
    }
}
