//! The `Lattice` trait: the shape plug-in contract every grid topology
//! implements.

use crate::placement::Point;
use indexmap::IndexSet;
use smallvec::SmallVec;
use warren_core::Position;

/// Ordered candidate-neighbor list returned by [`Lattice::pos_adjacents`].
///
/// Inline capacity of 8 covers every bundled shape without heap
/// allocation (hex cells have 6 adjacents, polar cells rarely exceed 7).
pub type Adjacency = SmallVec<[Position; 8]>;

/// One boundary edge of a shape: the cells just inside it and the
/// would-be cells just outside it, in matching order.
///
/// Multi-grid stitching pairs one shape's `outer` sequence with another
/// shape's `inner` sequence, so the two must be equally long and traverse
/// the edge in a consistent direction (counterclockwise around the shape).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Boundary cells inside the shape.
    pub inner: Vec<Position>,
    /// Nonexistent positions one step outside, parallel to `inner`.
    pub outer: Vec<Position>,
}

/// A candidate bisection of a region, produced by
/// [`Lattice::region_divisions`] for the fractal partition algorithm.
#[derive(Clone, Debug)]
pub struct Division {
    /// Human-readable description of the cut, used in error reports.
    pub name: String,
    /// The two halves. Every cell of the input region appears in exactly
    /// one half, and both halves are non-empty.
    pub halves: [IndexSet<Position>; 2],
}

impl Division {
    /// A named division from its two halves.
    pub fn new(name: String, near: IndexSet<Position>, far: IndexSet<Position>) -> Self {
        Self {
            name,
            halves: [near, far],
        }
    }
}

/// The shape plug-in contract.
///
/// A lattice defines a topology: which cells exist, which positions are
/// candidate neighbors of which, where the shape's boundary edges and
/// corners are. It holds no mutable state — the grid engine owns the
/// cells — and it never deals in grid tags; composite grids strip and
/// re-apply tags around every lattice call.
///
/// # Contract
///
/// - `pos_adjacents` must return candidates in a fixed, shape-defined
///   order **including positions that do not exist in the grid**; callers
///   filter for existence. On 4-adjacent shapes the order must put each
///   direction opposite the one two slots away (mod 4) — the weave rule
///   and edge stitching rely on it.
/// - Adjacency must be symmetric between existing cells: if `b` is listed
///   for `a`, then `a` is listed for `b`. Violations produce undefined
///   mazes rather than errors.
/// - `edges` and `external_points` traverse the shape counterclockwise,
///   with edge `i` running from corner `i` to corner `i + 1`.
pub trait Lattice {
    /// Every cell position of this shape, in a fixed canonical order.
    ///
    /// The grid engine materializes one cell per entry; the order fixes
    /// the engine's iteration order and therefore seeded reproducibility.
    fn positions(&self) -> Vec<Position>;

    /// Ordered candidate neighbors of `start`, including nonexistent ones.
    fn pos_adjacents(&self, start: &Position) -> Adjacency;

    /// The shape's stitchable boundary edges, counterclockwise.
    ///
    /// Shapes that cannot participate in multi-grid composition return an
    /// empty list.
    fn edges(&self) -> Vec<Edge>;

    /// The shape's corner polygon, counterclockwise, in local coordinates.
    ///
    /// Used for geometric alignment of composite grids and for bounding
    /// boxes.
    fn external_points(&self) -> Vec<Point>;

    /// Candidate bisections of `region` for fractal partition.
    ///
    /// Only fractal-capable shapes implement this; the default offers no
    /// divisions. Every returned division must split `region` into two
    /// non-empty halves that share at least one adjacency crossing.
    fn region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        let _ = region;
        Vec::new()
    }

    /// Shape-specific override for the link cell joining two non-adjacent
    /// positions, consulted before the engine's general search.
    ///
    /// The polar family uses this to route "straight across the middle"
    /// connections through the center cell.
    fn link_pos_hint(&self, first: &Position, second: &Position) -> Option<Position> {
        let _ = (first, second);
        None
    }

    /// The two endpoints of boundary edge `edge_num`, in local
    /// coordinates: corners `edge_num` and `edge_num + 1` of
    /// [`external_points`](Lattice::external_points).
    fn points_for_edge(&self, edge_num: usize) -> [Point; 2] {
        let points = self.external_points();
        let a = points[edge_num % points.len()];
        let b = points[(edge_num + 1) % points.len()];
        [a, b]
    }
}
