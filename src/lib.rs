#![warn(missing_docs)]

//! # `junction-box`
//!
//! The engine behind a power-routing puzzle: an 8x8 board of pipes and terminals where power leaves a source,
//! runs through every pipe whose ports line up, and has to reach the sink.
//! Build a [`Board`] with a [`BoardBuilder`](builder::BoardBuilder), edits such as [`Board::rotated`] or a level seed
//! (see [`seed`]), then call [`propagate`] to learn which cells carry power and whether the puzzle is solved.
//! [`Puzzle`] ties the two together: it applies one [`Edit`] at a time and runs a fresh pass after each.
//!
//! # Internals
//! Every tile has up to four ports, North, East, South and West, decided by its shape and turned by its orientation
//! (see [`connections`]). Two neighbors conduct when each has a port facing the other.
//!
//! A propagation pass expresses the board as an undirected graph G: every cell is a vertex, and every conducting pair
//! of neighbors is an edge. Power is then a breadth-first walk over G starting from all sources at once:
//! 1. Every source is powered at level 0 and queued, in row-major order.
//! 2. Each dequeued cell powers its unpowered neighbors in G at its own level plus one and queues them.
//! 3. The board is solved when it has at least one sink and every sink got powered.
//!
//! Passes are stateless. Boards are values, so a pass never changes the board it reads, and running it again on the
//! same board gives the same answer.

pub use board::Board;
pub use cell::{Category, Charge, Material, NodeKind, Tile};
pub use connection::{are_connected, connections, open_headings, Ports};
pub use edit::{Edit, Mode, Piece};
pub use location::{Location, GRID_SIZE};
pub use propagation::{propagate, Powered};
pub use session::Puzzle;
pub use shape::{Heading, Orientation, PipeShape};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod connection;
pub mod edit;
pub(crate) mod location;
pub(crate) mod propagation;
pub mod shape;
pub mod builder;
pub mod seed;
pub(crate) mod session;
#[cfg(feature = "wasm")]
pub mod wasm;
