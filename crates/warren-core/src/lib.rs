//! Core types for the Warren maze engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by every other Warren crate: [`Position`] (the
//! immutable, totally ordered cell identifier), [`PositionKind`],
//! [`GridTag`], the [`Coord`]/[`Direction`] aliases, and [`Cell`] (a node
//! and its carved-passage link set).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod position;

pub use cell::Cell;
pub use position::{Coord, Direction, GridTag, Position, PositionKind, CARDINAL_DIRECTIONS};
