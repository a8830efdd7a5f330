//! Warren: maze generation and analysis over arbitrary grid topologies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Warren sub-crates. For most users, adding `warren` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use warren::prelude::*;
//!
//! // Carve a 10x8 maze with the recursive backtracker. The seed fixes
//! // every random choice, so this maze is reproducible bit for bit.
//! let mut grid = Grid::new(Rect::new(10, 8), GridOptions::default());
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! Algorithm::Backtrack.carve(&mut grid, &mut rng).unwrap();
//!
//! // A spanning tree: every cell reachable, no loops.
//! assert_eq!(grid.passage_count(), grid.len() - 1);
//!
//! // Analyze it: distance field from one end of the longest path.
//! let path = grid.longest_path(&mut rng);
//! let field = grid.dijkstra(&path[0]);
//! assert_eq!(field.len(), path.len());
//! ```
//!
//! Composite surfaces work the same way:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use warren::prelude::*;
//!
//! let mut cube = warren::preset::cube(6, GridOptions::default()).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! Algorithm::Kruskal.carve(&mut cube, &mut rng).unwrap();
//! assert_eq!(cube.passage_count(), cube.len() - 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | `Position`, `Cell`, tags and coordinates |
//! | [`grid`] | `warren-grid` | the `Grid` engine, `Lattice` contract, shapes, composition |
//! | [`algorithms`] | `warren-algorithms` | generation algorithms and dispatch |
//! | [`preset`] | `warren-grid` | ready-made composite surfaces |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (re-export of `warren-core`).
pub mod types {
    pub use warren_core::*;
}

/// Grid engine, lattices, and composition (re-export of `warren-grid`).
pub mod grid {
    pub use warren_grid::*;
}

/// Generation algorithms (re-export of `warren-algorithms`).
pub mod algorithms {
    pub use warren_algorithms::*;
}

/// Preset composite surfaces (re-export of `warren_grid::preset`).
pub mod preset {
    pub use warren_grid::preset::*;
}

/// The types most programs need, importable in one line.
pub mod prelude {
    pub use warren_algorithms::{Algorithm, GrowthPolicy};
    pub use warren_core::{Cell, Coord, Direction, GridTag, Position, PositionKind};
    pub use warren_grid::{
        Composite, EdgeSpec, Grid, GridError, GridOptions, Lattice, Placement, Point, Rect,
        SubgridSpec,
    };
    pub use warren_grid::{Circle, Hex, Polygon, Semicircle, Tri};
}
