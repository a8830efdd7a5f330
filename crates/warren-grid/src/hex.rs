//! Hexagonal and triangular lattices on a shared skewed-axis coordinate
//! system.

use crate::lattice::{Adjacency, Edge, Lattice};
use crate::placement::Point;
use warren_core::{Direction, Position};

/// Hex offsets in counterclockwise order starting east-ish; opposite
/// directions sit three slots apart.
const HEX_DIRECTIONS: [Direction; 6] = [
    [1, 1],
    [0, 1],
    [-1, 0],
    [-1, -1],
    [0, -1],
    [1, 0],
];

/// Upward-pointing triangle offsets (cells whose coordinate sum is 0 mod 3).
const TRI_UP_DIRECTIONS: [Direction; 3] = [[1, 1], [-1, 0], [0, -1]];

/// Downward-pointing triangle offsets (coordinate sum 2 mod 3).
const TRI_DOWN_DIRECTIONS: [Direction; 3] = [[0, 1], [-1, -1], [1, 0]];

/// A hexagon-shaped field of hexagonal cells.
///
/// Cells live at `(i, j)` for `-radius <= i, j <= radius` with
/// `|i - j| <= radius`; every cell has the same six candidate directions.
/// Six adjacents means the weave rule never tunnels here, and the shape
/// exposes no stitchable edges — it is a standalone topology.
#[derive(Clone, Debug)]
pub struct Hex {
    radius: i32,
}

impl Hex {
    /// A hex field of the given radius (radius 0 is a single cell).
    pub fn new(radius: i32) -> Self {
        Self { radius }
    }

    /// The field radius.
    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Lattice for Hex {
    fn positions(&self) -> Vec<Position> {
        let r = self.radius;
        let mut positions = Vec::new();
        for i in -r..=r {
            for j in -r..=r {
                if (i - j).abs() <= r {
                    positions.push(Position::cell([i, j]));
                }
            }
        }
        positions
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        HEX_DIRECTIONS
            .iter()
            .map(|&direction| start.offset(direction))
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        Vec::new()
    }

    fn external_points(&self) -> Vec<Point> {
        // Bounding square only; good enough for bounding boxes, and the
        // shape is never stitched.
        let p = self.radius as f64 + 0.5;
        vec![
            Point::new(-p, -p),
            Point::new(p, -p),
            Point::new(p, p),
            Point::new(-p, p),
        ]
    }
}

/// A triangle-shaped field of triangular cells.
///
/// A `width`-cell base row of alternating up/down triangles, narrowing to
/// a point. A cell exists at `(i, j)` when `i + j` is 0 or 2 mod 3, with
/// up-triangles (sum 0 mod 3) and down-triangles (sum 2 mod 3) using
/// mirrored direction tables.
/// Three adjacents per cell, so corners are forced dead ends and weaving
/// never applies.
#[derive(Clone, Debug)]
pub struct Tri {
    width: i32,
}

impl Tri {
    /// A triangular field with `width` cells along each side.
    pub fn new(width: i32) -> Self {
        Self { width }
    }

    /// Cells along each side.
    pub fn width(&self) -> i32 {
        self.width
    }

    fn directions_for(start: &Position) -> &'static [Direction] {
        let sum = start.coords()[0] + start.coords()[1];
        match sum.rem_euclid(3) {
            0 => &TRI_UP_DIRECTIONS,
            2 => &TRI_DOWN_DIRECTIONS,
            _ => &[],
        }
    }
}

impl Lattice for Tri {
    fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for sum in 0..=(3 * (self.width - 1)) {
            if sum % 3 == 1 {
                continue;
            }
            let start_i = (sum + 1) / 3;
            for i in start_i..=(sum - start_i) {
                positions.push(Position::cell([i, sum - i]));
            }
        }
        positions
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        Self::directions_for(start)
            .iter()
            .map(|&direction| start.offset(direction))
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        let w = self.width;
        let inner_borders: [Vec<Position>; 3] = [
            (w - 1..2 * w - 1)
                .map(|i| Position::cell([2 * w - i, i]))
                .collect(),
            (0..w).rev().map(|i| Position::cell([i, 2 * i])).collect(),
            (0..w).map(|i| Position::cell([2 * i, i])).collect(),
        ];
        inner_borders
            .into_iter()
            .zip(TRI_UP_DIRECTIONS)
            .map(|(inner, direction)| {
                let outer = inner.iter().map(|p| p.offset(direction)).collect();
                Edge { inner, outer }
            })
            .collect()
    }

    fn external_points(&self) -> Vec<Point> {
        let w = self.width as f64;
        vec![
            Point::new(w, 0.0),
            Point::new(w / 2.0, w * 3.0_f64.sqrt() / 2.0),
            Point::new(0.0, 0.0),
        ]
    }
}
