//! Error types for grid construction and generation.

use std::fmt;
use warren_core::Position;

/// Errors arising from grid operations and multi-grid assembly.
///
/// All of these indicate programming or configuration errors rather than
/// transient conditions: they are raised immediately, never retried, and
/// the fix is to correct the shape or the composition spec.
#[derive(Debug, Clone)]
pub enum GridError {
    /// `connect` was asked to join two positions with no unique shared
    /// boundary cell (zero or more-than-one candidate link point), or a
    /// position with no cell behind it.
    InvalidConnection {
        /// One endpoint of the failed connection.
        first: Position,
        /// The other endpoint.
        second: Position,
        /// What went wrong.
        reason: String,
    },
    /// A multi-grid edge correspondence is malformed: spec and lattice
    /// disagree on edge counts, a target grid or side does not exist, or
    /// the two boundary sequences differ in length.
    BoundaryMismatch {
        /// What went wrong.
        reason: String,
    },
    /// Multi-grid geometric alignment never reached a fixed point: some
    /// grids align to each other in a cycle with no anchored grid, or an
    /// alignment segment is degenerate.
    UnalignableGraph {
        /// Names of the sub-grids that could not be placed.
        unaligned: Vec<String>,
    },
    /// Fractal partition was handed a division with no crossable boundary,
    /// or a shape offered no divisions for a multi-cell region. Either way
    /// the shape's `region_divisions` contract was violated.
    EmptyBorder {
        /// The offending division, or a note that none were offered.
        division: String,
        /// Number of cells in the region being divided.
        region_size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection {
                first,
                second,
                reason,
            } => {
                write!(f, "cannot connect {first:?} and {second:?}: {reason}")
            }
            Self::BoundaryMismatch { reason } => {
                write!(f, "boundary mismatch: {reason}")
            }
            Self::UnalignableGraph { unaligned } => {
                write!(f, "unalignable multi-grid; unplaced sub-grids: {unaligned:?}")
            }
            Self::EmptyBorder {
                division,
                region_size,
            } => {
                write!(
                    f,
                    "division {division:?} of a {region_size}-cell region has no crossable border"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
