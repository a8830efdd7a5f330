//! Lattice contract compliance test helpers.
//!
//! These functions verify that a [`Lattice`] implementation satisfies the
//! invariants the grid engine relies on. Reused across all backend test
//! modules (Rect, Hex, Tri, Circle, Semicircle, Polygon, Composite).

use crate::lattice::Lattice;
use indexmap::IndexSet;
use warren_core::Position;

/// Assert that `positions` returns unique entries.
pub fn assert_positions_unique(lattice: &dyn Lattice) {
    let positions = lattice.positions();
    let unique: IndexSet<&Position> = positions.iter().collect();
    assert_eq!(
        unique.len(),
        positions.len(),
        "positions contains duplicates"
    );
}

/// Assert that two calls to `positions` return the same sequence.
pub fn assert_positions_deterministic(lattice: &dyn Lattice) {
    assert_eq!(
        lattice.positions(),
        lattice.positions(),
        "positions is non-deterministic"
    );
}

/// Assert that `pos_adjacents` returns the same sequence on every call.
pub fn assert_adjacents_deterministic(lattice: &dyn Lattice) {
    for position in lattice.positions() {
        let a: Vec<Position> = lattice.pos_adjacents(&position).into_iter().collect();
        let b: Vec<Position> = lattice.pos_adjacents(&position).into_iter().collect();
        assert_eq!(a, b, "pos_adjacents({position:?}) is non-deterministic");
    }
}

/// Assert that adjacency is symmetric between existing cells: if `b` is
/// listed for `a` and both exist, then `a` is listed for `b`.
pub fn assert_adjacency_symmetric(lattice: &dyn Lattice) {
    let positions: IndexSet<Position> = lattice.positions().into_iter().collect();
    for position in &positions {
        for neighbor in lattice.pos_adjacents(position) {
            if !positions.contains(&neighbor) {
                continue;
            }
            let back = lattice.pos_adjacents(&neighbor);
            assert!(
                back.contains(&position.as_cell()),
                "adjacency asymmetry: {neighbor:?} listed for {position:?} but not vice versa"
            );
        }
    }
}

/// Assert that every edge pairs an interior inner sequence with an
/// exterior outer sequence of the same length.
pub fn assert_edges_parallel(lattice: &dyn Lattice) {
    let positions: IndexSet<Position> = lattice.positions().into_iter().collect();
    for (index, edge) in lattice.edges().iter().enumerate() {
        assert_eq!(
            edge.inner.len(),
            edge.outer.len(),
            "edge {index}: inner and outer lengths differ"
        );
        for position in &edge.inner {
            assert!(
                positions.contains(position),
                "edge {index}: inner position {position:?} does not exist"
            );
        }
        for position in &edge.outer {
            assert!(
                !positions.contains(position),
                "edge {index}: outer position {position:?} exists in the grid"
            );
        }
    }
}

/// Run the adjacency-level compliance checks.
pub fn run_adjacency_compliance(lattice: &dyn Lattice) {
    assert_positions_unique(lattice);
    assert_positions_deterministic(lattice);
    assert_adjacents_deterministic(lattice);
    assert_adjacency_symmetric(lattice);
}

/// Run every compliance check, including edge membership.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    run_adjacency_compliance(lattice);
    assert_edges_parallel(lattice);
}
