//! Rectangular lattice with 4-connected cells, optional mask, and
//! stitchable edges.

use crate::lattice::{Adjacency, Division, Edge, Lattice};
use crate::placement::Point;
use indexmap::IndexSet;
use warren_core::{Position, CARDINAL_DIRECTIONS};

/// A rectangular grid of 4-connected cells.
///
/// Positions are `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// Adjacents come in east, north, west, south order, so direction `i` is
/// opposite direction `(i + 2) % 4` and the weave rule applies everywhere.
///
/// An optional mask restricts the universe to a subset of coordinates —
/// the shape a text or image stencil was loaded into upstream. Masked
/// grids keep the full rectangle's boundary edges and corner polygon, so
/// masking and multi-grid stitching are not meant to be combined.
///
/// The four boundary edges are indexed like the adjacency directions:
/// 0 = east, 1 = north, 2 = west, 3 = south, each traversed
/// counterclockwise (corner `i` to corner `i + 1`).
#[derive(Clone, Debug)]
pub struct Rect {
    width: i32,
    height: i32,
    mask: Option<IndexSet<(i32, i32)>>,
}

impl Rect {
    /// A full `width × height` rectangle.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            mask: None,
        }
    }

    /// A rectangle restricted to the masked coordinates.
    ///
    /// Coordinates outside `width × height` are ignored.
    pub fn with_mask(width: i32, height: i32, mask: IndexSet<(i32, i32)>) -> Self {
        Self {
            width,
            height,
            mask: Some(mask),
        }
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> i32 {
        self.height
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        0 <= x
            && x < self.width
            && 0 <= y
            && y < self.height
            && self.mask.as_ref().is_none_or(|m| m.contains(&(x, y)))
    }
}

impl Lattice for Rect {
    fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                if self.covers(x, y) {
                    positions.push(Position::cell([x, y]));
                }
            }
        }
        positions
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        CARDINAL_DIRECTIONS
            .iter()
            .map(|&direction| start.offset(direction))
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        let (w, h) = (self.width, self.height);
        let column = |x: i32, ys: Vec<i32>| -> Vec<Position> {
            ys.into_iter().map(|y| Position::cell([x, y])).collect()
        };
        let row = |y: i32, xs: Vec<i32>| -> Vec<Position> {
            xs.into_iter().map(|x| Position::cell([x, y])).collect()
        };
        let up: Vec<i32> = (0..h).collect();
        let down: Vec<i32> = (0..h).rev().collect();
        let right: Vec<i32> = (0..w).collect();
        let left: Vec<i32> = (0..w).rev().collect();
        vec![
            // east: corner (w, 0) toward (w, h)
            Edge {
                inner: column(w - 1, up.clone()),
                outer: column(w, up),
            },
            // north: corner (w, h) toward (0, h)
            Edge {
                inner: row(h - 1, left.clone()),
                outer: row(h, left),
            },
            // west: corner (0, h) toward (0, 0)
            Edge {
                inner: column(0, down.clone()),
                outer: column(-1, down),
            },
            // south: corner (0, 0) toward (w, 0)
            Edge {
                inner: row(0, right.clone()),
                outer: row(-1, right),
            },
        ]
    }

    fn external_points(&self) -> Vec<Point> {
        let (w, h) = (self.width as f64, self.height as f64);
        vec![
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
            Point::new(0.0, 0.0),
        ]
    }

    fn region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        let mut result = Vec::new();
        for axis in 0..2 {
            let mut values: Vec<i32> = region.iter().map(|p| p.coords()[axis]).collect();
            values.sort_unstable();
            values.dedup();
            if values.len() < 2 {
                continue;
            }
            for &cut in &values[..values.len() - 1] {
                let near: IndexSet<Position> = region
                    .iter()
                    .filter(|p| p.coords()[axis] <= cut)
                    .cloned()
                    .collect();
                let far: IndexSet<Position> = region
                    .iter()
                    .filter(|p| p.coords()[axis] > cut)
                    .cloned()
                    .collect();
                result.push(Division::new(
                    format!("cut axis {axis} at {cut}"),
                    near,
                    far,
                ));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn p(x: i32, y: i32) -> Position {
        Position::cell([x, y])
    }

    #[test]
    fn positions_enumerate_column_major() {
        let rect = Rect::new(2, 3);
        let positions = rect.positions();
        assert_eq!(
            positions,
            vec![p(0, 0), p(0, 1), p(0, 2), p(1, 0), p(1, 1), p(1, 2)]
        );
    }

    #[test]
    fn adjacents_are_east_north_west_south() {
        let rect = Rect::new(4, 4);
        let adjacents: Vec<Position> = rect.pos_adjacents(&p(1, 2)).into_iter().collect();
        assert_eq!(adjacents, vec![p(2, 2), p(1, 3), p(0, 2), p(1, 1)]);
    }

    #[test]
    fn adjacents_include_nonexistent_neighbors() {
        let rect = Rect::new(3, 3);
        let adjacents = rect.pos_adjacents(&p(0, 0));
        assert_eq!(adjacents.len(), 4);
        assert!(adjacents.contains(&p(-1, 0)));
        assert!(adjacents.contains(&p(0, -1)));
    }

    #[test]
    fn mask_restricts_the_universe() {
        let mask: IndexSet<(i32, i32)> = [(0, 0), (1, 0), (2, 0), (2, 1)].into_iter().collect();
        let rect = Rect::with_mask(3, 2, mask);
        let positions = rect.positions();
        assert_eq!(positions.len(), 4);
        assert!(!positions.contains(&p(0, 1)));
    }

    #[test]
    fn edges_traverse_counterclockwise() {
        let rect = Rect::new(4, 4);
        let edges = rect.edges();
        assert_eq!(edges.len(), 4);
        // east edge: inner column x = 3 ascending, outer column x = 4
        assert_eq!(edges[0].inner[0], p(3, 0));
        assert_eq!(edges[0].inner[3], p(3, 3));
        assert_eq!(edges[0].outer[0], p(4, 0));
        // north edge runs right-to-left
        assert_eq!(edges[1].inner[0], p(3, 3));
        assert_eq!(edges[1].inner[3], p(0, 3));
        assert_eq!(edges[1].outer[1], p(2, 4));
        // west edge runs top-to-bottom
        assert_eq!(edges[2].inner[0], p(0, 3));
        assert_eq!(edges[2].outer[3], p(-1, 0));
        // south edge runs left-to-right
        assert_eq!(edges[3].inner[0], p(0, 0));
        assert_eq!(edges[3].outer[3], p(3, -1));
    }

    #[test]
    fn corner_polygon_matches_edge_indices() {
        let rect = Rect::new(4, 3);
        let [a, b] = rect.points_for_edge(0);
        assert_eq!((a.x, a.y), (4.0, 0.0));
        assert_eq!((b.x, b.y), (4.0, 3.0));
        let [c, d] = rect.points_for_edge(3);
        assert_eq!((c.x, c.y), (0.0, 0.0));
        assert_eq!((d.x, d.y), (4.0, 0.0));
    }

    #[test]
    fn region_divisions_cut_both_axes() {
        let rect = Rect::new(3, 2);
        let region: IndexSet<Position> = rect.positions().into_iter().collect();
        let divisions = rect.region_divisions(&region);
        // x cuts at 0 and 1, y cut at 0.
        assert_eq!(divisions.len(), 3);
        for division in &divisions {
            assert!(!division.halves[0].is_empty());
            assert!(!division.halves[1].is_empty());
            assert_eq!(
                division.halves[0].len() + division.halves[1].len(),
                region.len()
            );
        }
    }

    #[test]
    fn compliance_full() {
        compliance::run_full_compliance(&Rect::new(5, 4));
    }

    #[test]
    fn compliance_masked() {
        let mask: IndexSet<(i32, i32)> =
            [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)].into_iter().collect();
        compliance::run_adjacency_compliance(&Rect::with_mask(3, 3, mask));
    }
}
