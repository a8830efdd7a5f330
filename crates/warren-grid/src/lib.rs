//! Grid engine and lattice backends for the Warren maze engine.
//!
//! This crate defines the [`Lattice`] trait — the shape plug-in contract
//! every grid topology implements — along with the [`Grid`] engine built
//! on top of it (passage carving, weave-aware neighbors, distance fields,
//! longest paths, braiding), multi-grid [`Composite`] assembly with
//! boundary stitching and geometric alignment, the bundled lattice
//! backends, and the [`preset`] composite surfaces.
//!
//! # Backends
//!
//! - [`Rect`]: 4-connected rectangle, optionally masked
//! - [`Hex`]: hexagon-shaped field of 6-connected cells
//! - [`Tri`]: triangle-shaped field of 3-connected triangle cells
//! - [`Circle`] / [`Semicircle`] / [`Polygon`]: the polar ring family
//! - [`Composite`]: any of the above stitched into one topology

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circle;
pub mod composite;
pub mod error;
pub mod grid;
pub mod hex;
pub mod lattice;
pub mod options;
pub mod placement;
pub mod preset;
pub mod rect;

#[cfg(test)]
pub(crate) mod compliance;

pub use circle::{Circle, Polygon, Semicircle};
pub use composite::{Composite, EdgeSpec, SubgridSpec};
pub use error::GridError;
pub use grid::Grid;
pub use hex::{Hex, Tri};
pub use lattice::{Adjacency, Division, Edge, Lattice};
pub use options::GridOptions;
pub use placement::{bounding_box, Placement, Point};
pub use rect::Rect;
