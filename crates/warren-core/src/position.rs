//! Cell identity: coordinates, position kind, and owning-grid tags.

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A coordinate in grid space.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for the 2D
/// coordinates every bundled lattice uses, while still permitting
/// higher-dimensional shapes to spill transparently.
pub type Coord = SmallVec<[i32; 4]>;

/// A coordinate offset applied by [`Position::offset`].
pub type Direction = [i32; 2];

/// The four cardinal offsets in east, north, west, south order.
///
/// The order is load-bearing: offset `i` is opposite offset `(i + 2) % 4`,
/// which the weave tunneling rule and edge stitching both rely on.
pub const CARDINAL_DIRECTIONS: [Direction; 4] = [
    [1, 0],  // east
    [0, 1],  // north
    [-1, 0], // west
    [0, -1], // south
];

/// Identifies the sub-grid a position belongs to in a composite topology.
///
/// Cheaply cloneable (interned string); standalone grids leave positions
/// untagged.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridTag(Arc<str>);

impl GridTag {
    /// Create a tag from a sub-grid name.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The sub-grid name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GridTag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for GridTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for GridTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// Whether a position names an ordinary cell or a synthesized link cell.
///
/// `Link` is declared first so link positions sort before cell positions at
/// the same site, giving deterministic tie-breaking wherever positions are
/// ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionKind {
    /// A synthesized cell inserted between two non-adjacent cells to carry
    /// a weave crossing or partition link.
    Link,
    /// An ordinary cell enumerated by a lattice.
    Cell,
}

/// The immutable, hashable, totally ordered identifier of a cell.
///
/// Equality, ordering, and hashing depend on exactly
/// `(grid, kind, coords)`, in that significance order. Positions are created
/// by lattices and by the engine (for synthesized link cells) and are
/// otherwise plain value objects, safe to use as map keys and to share by
/// value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    grid: Option<GridTag>,
    kind: PositionKind,
    coords: Coord,
}

impl Position {
    /// An ordinary cell position with no grid tag.
    pub fn cell(coords: impl IntoIterator<Item = i32>) -> Self {
        Self {
            grid: None,
            kind: PositionKind::Cell,
            coords: coords.into_iter().collect(),
        }
    }

    /// An ordinary cell position owned by a tagged sub-grid.
    pub fn cell_in(tag: impl Into<GridTag>, coords: impl IntoIterator<Item = i32>) -> Self {
        Self {
            grid: Some(tag.into()),
            kind: PositionKind::Cell,
            coords: coords.into_iter().collect(),
        }
    }

    /// A link position with no grid tag.
    pub fn link(coords: impl IntoIterator<Item = i32>) -> Self {
        Self {
            grid: None,
            kind: PositionKind::Link,
            coords: coords.into_iter().collect(),
        }
    }

    /// The link position at the same site as `self`.
    pub fn link_at(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            kind: PositionKind::Link,
            coords: self.coords.clone(),
        }
    }

    /// The ordinary cell position at the same site as `self`.
    pub fn as_cell(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            kind: PositionKind::Cell,
            coords: self.coords.clone(),
        }
    }

    /// The position kind.
    pub fn kind(&self) -> PositionKind {
        self.kind
    }

    /// The coordinate tuple.
    pub fn coords(&self) -> &[i32] {
        &self.coords
    }

    /// The owning sub-grid tag, if any.
    pub fn grid(&self) -> Option<&GridTag> {
        self.grid.as_ref()
    }

    /// `true` when `self` and `other` name the same site, ignoring kind.
    ///
    /// A cell and the link cell synthesized over it share a site; the weave
    /// rule compares links site-wise so a passage carried by either one
    /// blocks tunneling the same way.
    pub fn same_site(&self, other: &Position) -> bool {
        self.grid == other.grid && self.coords == other.coords
    }

    /// This position re-tagged as belonging to `tag`.
    pub fn tagged(&self, tag: GridTag) -> Self {
        Self {
            grid: Some(tag),
            kind: self.kind,
            coords: self.coords.clone(),
        }
    }

    /// This position with its grid tag removed.
    pub fn untagged(&self) -> Self {
        Self {
            grid: None,
            kind: self.kind,
            coords: self.coords.clone(),
        }
    }

    /// The cell position reached by moving `direction` from this site.
    ///
    /// Coordinates beyond the direction's dimensionality pass through
    /// unchanged; the result keeps this position's grid tag and is always
    /// an ordinary cell position.
    pub fn offset(&self, direction: Direction) -> Self {
        let n = self.coords.len().max(direction.len());
        let mut coords = Coord::with_capacity(n);
        for i in 0..n {
            let c = self.coords.get(i).copied().unwrap_or(0);
            let d = direction.get(i).copied().unwrap_or(0);
            coords.push(c + d);
        }
        Self {
            grid: self.grid.clone(),
            kind: PositionKind::Cell,
            coords,
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.grid {
            write!(f, "{tag}:")?;
        }
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")?;
        if self.kind == PositionKind::Link {
            write!(f, "/link")?;
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
