use strum::VariantArray;

use crate::cell::{Category, NodeKind, Tile};
use crate::shape::{Heading, Orientation, PipeShape};

/// Open ports of a cell, indexed by [`Heading::index`]: North, East, South, West.
pub type Ports = [bool; 4];

const CLOSED: Ports = [false; 4];

/// Ports of a tile at rest, before its orientation is applied.
fn base_ports(shape: PipeShape, category: Category, node_kind: Option<NodeKind>) -> Ports {
    match category {
        Category::Blocker => CLOSED,
        Category::Node => match node_kind {
            // source and sink terminals face north at rest
            Some(NodeKind::Source | NodeKind::Sink) => [true, false, false, false],
            Some(NodeKind::DeadEnd) | None => CLOSED,
        },
        Category::Pipe => match shape {
            PipeShape::Straight => [true, false, true, false],
            PipeShape::Corner => [true, true, false, false],
            PipeShape::Tee => [true, true, false, true],
            PipeShape::Cross => [true, true, true, true],
            PipeShape::None => CLOSED,
        },
    }
}

/// Which edges a tile conducts through.
///
/// Each quarter turn moves the port at index `i` to index `(i + 1) % 4`, so a straight pipe at 90 degrees
/// runs East to West and a corner at 90 degrees joins East and South.
/// Combinations that make no sense, such as a node without a kind, have no ports.
pub fn connections(shape: PipeShape, category: Category, node_kind: Option<NodeKind>, orientation: Orientation) -> Ports {
    let base = base_ports(shape, category, node_kind);
    let steps = orientation.steps();

    let mut rotated = CLOSED;
    for (index, open) in base.into_iter().enumerate() {
        if open {
            rotated[(index + steps) % 4] = true;
        }
    }

    rotated
}

/// Whether power flows from `from` into `to`, where `to` lies one step toward `heading` from `from`.
///
/// Both tiles have to face each other; a port meeting a closed edge does not conduct.
pub fn are_connected(from: &Tile, to: &Tile, heading: Heading) -> bool {
    from.ports()[heading.index()] && to.ports()[heading.invert().index()]
}

/// Headings of the open ports in `ports`, in port order.
pub fn open_headings(ports: Ports) -> impl Iterator<Item = Heading> {
    Heading::VARIANTS.iter()
        .copied()
        .filter(move |heading| ports[heading.index()])
}
