use strum::{Display, EnumString, VariantArray};

use crate::connection::{connections, Ports};
use crate::shape::{Orientation, PipeShape};

/// What a cell is, independent of how it is drawn or who may turn it.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Default)]
pub enum Category {
    /// Carries power along its [`PipeShape`].
    #[default]
    Pipe,
    /// A terminal; see [`NodeKind`].
    Node,
    /// Never conducts.
    Blocker,
}

/// The role of a [`Category::Node`] cell.
#[derive(Copy, Clone, VariantArray, EnumString, Display, Eq, PartialEq, Hash, Debug)]
#[strum(serialize_all = "kebab-case")]
pub enum NodeKind {
    /// Injects power at level 0.
    Source,
    /// Must receive power for the board to count as solved.
    Sink,
    /// Decorative terminal without ports.
    DeadEnd,
}

/// Interaction rules of a cell. Materials never change which ports a cell has.
#[derive(Copy, Clone, VariantArray, EnumString, Display, Eq, PartialEq, Hash, Debug, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum Material {
    /// Turned by the player.
    Rotatable,
    /// Only turned by a neighboring switch.
    Fixed,
    /// Turns itself and its pipe neighbors when activated.
    Switch,
    /// Carried by every node.
    Terminal,
    /// Nothing here.
    #[default]
    Empty,
}

/// The authored content of one board cell.
///
/// Power is never stored here; the engine reports it separately as a [`Charge`].
/// Constructors keep the invariants: nodes carry no shape and are always [`Material::Terminal`],
/// only nodes carry a [`NodeKind`], and an [`Material::Empty`] cell has no conductor and so no ports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Tile {
    pub(crate) category: Category,
    pub(crate) shape: PipeShape,
    pub(crate) node_kind: Option<NodeKind>,
    pub(crate) material: Material,
    pub(crate) orientation: Orientation,
}

impl Tile {
    /// An erased cell: a pipe with no conductor and no material.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A pipe at rest.
    ///
    /// A pipe without a shape or without a material is an empty cell, and pipes never carry
    /// [`Material::Terminal`], which is read as [`Material::Fixed`].
    pub fn pipe(shape: PipeShape, material: Material) -> Self {
        let material = match (shape, material) {
            (PipeShape::None, _) | (_, Material::Empty) => return Self::empty(),
            (_, Material::Terminal) => Material::Fixed,
            (_, material) => material,
        };

        Self {
            category: Category::Pipe,
            shape,
            node_kind: None,
            material,
            orientation: Orientation::Deg0,
        }
    }

    /// A terminal of the given kind, facing North at rest.
    pub fn node(kind: NodeKind) -> Self {
        Self {
            category: Category::Node,
            shape: PipeShape::None,
            node_kind: Some(kind),
            material: Material::Terminal,
            orientation: Orientation::Deg0,
        }
    }

    /// A blocker. Blockers count as fixed so that only the editor can turn them.
    pub fn blocker() -> Self {
        Self {
            category: Category::Blocker,
            shape: PipeShape::None,
            node_kind: None,
            material: Material::Fixed,
            orientation: Orientation::Deg0,
        }
    }

    /// This tile turned to `orientation`, whatever its material.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// What this cell is.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The pipe shape, which is always [`PipeShape::None`] off pipes.
    pub fn shape(&self) -> PipeShape {
        match self.category {
            Category::Pipe => self.shape,
            _ => PipeShape::None,
        }
    }

    /// The kind of terminal, only ever present on nodes.
    pub fn node_kind(&self) -> Option<NodeKind> {
        self.node_kind
    }

    /// Who may turn this cell.
    pub fn material(&self) -> Material {
        self.material
    }

    /// Clockwise rotation from rest.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether this cell holds nothing at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.material == Material::Empty
    }

    /// Whether this cell is a source node.
    #[inline]
    pub fn is_source(&self) -> bool {
        self.category == Category::Node && self.node_kind == Some(NodeKind::Source)
    }

    /// Whether this cell is a sink node.
    #[inline]
    pub fn is_sink(&self) -> bool {
        self.category == Category::Node && self.node_kind == Some(NodeKind::Sink)
    }

    /// A pipe with a conductor on it; the only kind of neighbor a switch turns.
    #[inline]
    pub(crate) fn is_shaped_pipe(&self) -> bool {
        self.category == Category::Pipe && self.shape != PipeShape::None
    }

    /// Turn this tile 90 degrees clockwise in place.
    pub(crate) fn turn(&mut self) {
        self.orientation = self.orientation.turned();
    }

    /// Ports this tile currently has open.
    pub fn ports(&self) -> Ports {
        connections(self.shape(), self.category, self.node_kind, self.orientation)
    }
}

/// Power state of one cell after a propagation pass.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Charge {
    /// Whether any source reaches this cell.
    pub powered: bool,
    /// Steps from the nearest source; 0 for sources and for unpowered cells.
    pub level: u32,
}
