//! A maze node: its position and the set of positions it is linked to.

use crate::position::Position;
use indexmap::IndexSet;

/// A node in the maze graph.
///
/// Owns its [`Position`] and the set of positions it has carved passages
/// to. Links are reciprocal by invariant: if A links to B then B links to
/// A. That invariant is maintained exclusively by the grid engine's
/// `connect`/`disconnect` operations — call those rather than
/// [`Cell::add_link`]/[`Cell::remove_link`] directly.
///
/// The link set is insertion-ordered (`IndexSet`) so every iteration over
/// links is deterministic for a fixed construction history, which is what
/// makes seeded maze generation reproducible.
#[derive(Clone, Debug)]
pub struct Cell {
    position: Position,
    links: IndexSet<Position>,
}

impl Cell {
    /// A new cell with no links.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            links: IndexSet::new(),
        }
    }

    /// The cell's own position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The positions this cell is linked to, in link-creation order.
    pub fn links(&self) -> &IndexSet<Position> {
        &self.links
    }

    /// Number of links (the cell's degree in the passage graph).
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// `true` if this cell is linked to exactly `other`.
    pub fn is_linked(&self, other: &Position) -> bool {
        self.links.contains(other)
    }

    /// `true` if any link shares a site with `other`, ignoring position
    /// kind.
    ///
    /// Weaving needs this view: a passage carved to the link cell over a
    /// site counts the same as one carved to the cell itself.
    pub fn is_linked_site(&self, other: &Position) -> bool {
        self.links.iter().any(|p| p.same_site(other))
    }

    /// Record a link. Prefer the grid engine's `connect`, which keeps
    /// links reciprocal.
    pub fn add_link(&mut self, other: Position) {
        self.links.insert(other);
    }

    /// Remove a link if present. Prefer the grid engine's `disconnect`.
    pub fn remove_link(&mut self, other: &Position) {
        self.links.shift_remove(other);
    }
}
