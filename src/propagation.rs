use std::collections::{HashSet, VecDeque};
use std::fmt::{Display, Formatter};

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use tracing::debug;

use crate::board::Board;
use crate::cell::{Charge, NodeKind};
use crate::location::Location;
use crate::shape::Heading;

/// The outcome of one propagation pass: the board that was examined, the power state of every cell, and the verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Powered {
    board: Board,
    charges: Array2<Charge>,
    solved: bool,
    sources: usize,
    sinks: usize,
    powered_sinks: usize,
}

impl Powered {
    /// The board this pass examined. Feeding it back into [`propagate`] yields an equal result.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give back the examined board, dropping the power state.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Split into the examined board and the verdict.
    pub fn into_parts(self) -> (Board, bool) {
        (self.board, self.solved)
    }

    /// True when at least one sink exists and every sink is powered.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Power state of every cell, indexed `(row, col)`.
    pub fn charges(&self) -> &Array2<Charge> {
        &self.charges
    }

    /// Power state at `location`, or [`None`] off the board.
    pub fn charge(&self, location: Location) -> Option<Charge> {
        self.charges.get(location.as_index()).copied()
    }

    /// Whether power reaches `location`. Always false off the board.
    pub fn is_powered(&self, location: Location) -> bool {
        self.charge(location).is_some_and(|charge| charge.powered)
    }

    /// Steps from the nearest source; 0 for sources, unpowered cells and locations off the board.
    pub fn power_level(&self, location: Location) -> u32 {
        self.charge(location).map_or(0, |charge| charge.level)
    }

    /// Number of powered cells, sources included.
    pub fn powered_count(&self) -> usize {
        self.charges.iter().filter(|charge| charge.powered).count()
    }

    /// Number of sources on the board.
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// Number of sinks on the board.
    pub fn sinks(&self) -> usize {
        self.sinks
    }

    /// Number of sinks which ended up powered.
    pub fn powered_sinks(&self) -> usize {
        self.powered_sinks
    }
}

impl Display for Powered {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board.render(Some(&self.charges)))
    }
}

/// Breadth-first walk over a conduction graph from every source at once.
///
/// Each cell takes the level of the first wave that reaches it, which in an unweighted FIFO walk is its distance
/// to the nearest source.
pub(crate) struct Propagator<'a> {
    graph: &'a UnGraphMap<Location, Heading>,
    sources: Vec<Location>,
}

impl<'a> Propagator<'a> {
    pub(crate) fn new(graph: &'a UnGraphMap<Location, Heading>, sources: Vec<Location>) -> Self {
        Self { graph, sources }
    }

    /// Fill `charges`, which must start out fully unpowered.
    pub(crate) fn run(&self, charges: &mut Array2<Charge>) {
        let mut queue = VecDeque::with_capacity(charges.len());
        let mut visited = HashSet::with_capacity(charges.len());

        for source in &self.sources {
            if let Some(charge) = charges.get_mut(source.as_index()) {
                *charge = Charge { powered: true, level: 0 };
                queue.push_back(*source);
            }
        }

        while let Some(current) = queue.pop_front() {
            // each cell is finalized once; a repeat is a no-op
            if !visited.insert(current) {
                continue;
            }

            let level = charges[current.as_index()].level;
            for neighbor in self.graph.neighbors(current) {
                let charge = &mut charges[neighbor.as_index()];
                if !charge.powered {
                    *charge = Charge { powered: true, level: level + 1 };
                    queue.push_back(neighbor);
                }
            }
        }
    }
}

/// Compute which cells of `board` are powered and whether the puzzle is solved.
///
/// Every pass starts from scratch: nothing carries over from earlier passes, and `board` is left untouched.
pub fn propagate(board: &Board) -> Powered {
    let graph = board.conduction_graph();
    let sources = board.locations_of(NodeKind::Source);
    let sinks = board.locations_of(NodeKind::Sink);

    let mut charges = Array2::from_elem(board.tiles.raw_dim(), Charge::default());
    Propagator::new(&graph, sources.clone()).run(&mut charges);

    let powered_sinks = sinks.iter()
        .filter(|sink| charges[sink.as_index()].powered)
        .count();
    let solved = !sinks.is_empty() && powered_sinks == sinks.len();

    debug!(
        sources = sources.len(),
        sinks = sinks.len(),
        powered_sinks,
        links = graph.edge_count(),
        solved,
        "propagation pass"
    );

    Powered {
        board: board.clone(),
        charges,
        solved,
        sources: sources.len(),
        sinks: sinks.len(),
        powered_sinks,
    }
}
