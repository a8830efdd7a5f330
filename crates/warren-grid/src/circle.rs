//! The polar lattice family: concentric rings of cells, full or partial,
//! round or polygonal.

use crate::lattice::{Adjacency, Division, Edge, Lattice};
use crate::placement::Point;
use indexmap::IndexSet;
use std::f64::consts::TAU;
use warren_core::Position;

/// A circular grid: rings of cells around an optional center cell.
///
/// Positions are `(ring, theta)`. Ring widths follow the classic rule:
/// each ring holds `round(circumference / previous cell width)` times the
/// previous ring's cell count, so cells stay roughly square. `ratios[r]`
/// is the width multiplier from ring `r − 1` to ring `r`; a cell's inward
/// neighbor is `(r − 1, theta / ratios[r])` and its outward children
/// enumerate the inverse.
///
/// `degrees < 360` truncates every ring to an arc, which is how the
/// semicircle and partial polygons are built.
#[derive(Clone, Debug)]
pub struct Circle {
    radius: i32,
    center_cell: bool,
    degrees: f64,
    widths: Vec<i32>,
    ratios: Vec<i32>,
    positions: Vec<Position>,
}

impl Circle {
    /// A full circle of the given ring count around a center cell.
    pub fn new(radius: i32) -> Self {
        Self::with_options(radius, None, true, 360.0)
    }

    /// A circle with explicit first-ring width, center-cell flag, and arc
    /// angle.
    pub fn with_options(
        radius: i32,
        first_ring: Option<i32>,
        center_cell: bool,
        degrees: f64,
    ) -> Self {
        let mut widths: Vec<i32> = Vec::new();
        let mut ratios: Vec<i32> = Vec::new();
        let mut positions: Vec<Position> = Vec::new();

        let (radius_offset, starting_r) = if center_cell {
            positions.push(Position::cell([0, 0]));
            widths.push(1);
            ratios.push(0);
            (0.0, 1)
        } else {
            (0.5, 0)
        };

        for r in starting_r..starting_r + radius {
            let (width, ratio) = match first_ring {
                Some(first) if r == starting_r => (first, first),
                _ => {
                    let circumference = (r as f64 + radius_offset) * TAU;
                    let last_width = if r == 0 {
                        1
                    } else {
                        widths[(r - 1) as usize]
                    };
                    let estimated_cell_width = circumference / last_width as f64;
                    let ratio = estimated_cell_width.round() as i32;
                    (last_width * ratio, ratio)
                }
            };
            widths.push(width);
            ratios.push(ratio);
            for theta in 0..width {
                if (theta as f64 + 0.5) * 360.0 / width as f64 >= degrees {
                    break;
                }
                positions.push(Position::cell([r, theta]));
            }
        }

        Self {
            radius,
            center_cell,
            degrees,
            widths,
            ratios,
            positions,
        }
    }

    /// Number of rings (excluding the center cell).
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// `true` when ring 0 is a single center cell.
    pub fn center_cell(&self) -> bool {
        self.center_cell
    }

    /// Arc angle; 360 for a full circle.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Cells per ring, indexed by ring (the center counts as width 1).
    pub fn widths(&self) -> &[i32] {
        &self.widths
    }

    /// Width multiplier from each ring to the one inside it.
    pub fn ratios(&self) -> &[i32] {
        &self.ratios
    }

    /// Shared ring adjacency: counterclockwise, inward, clockwise, then
    /// outward children (and the below-the-diameter stub for a partial
    /// grid's center).
    fn ring_adjacents(&self, start: &Position) -> Adjacency {
        let mut neighbors = Adjacency::new();
        let coords = start.coords();
        let (r, theta) = (coords[0], coords.get(1).copied().unwrap_or(0));
        if r < 0 || r as usize >= self.widths.len() {
            return neighbors;
        }
        let ring = r as usize;
        let is_center = r == 0 && self.center_cell;

        if self.widths[ring] > 1 {
            for dt in [1, -1] {
                let mut new_theta = theta + dt;
                if self.degrees == 360.0 {
                    new_theta = new_theta.rem_euclid(self.widths[ring]);
                }
                neighbors.push(Position::cell([r, new_theta]));
            }
        }
        if r > 0 {
            let inward = Position::cell([r - 1, theta / self.ratios[ring]]);
            let slot = neighbors.len().min(1);
            neighbors.insert(slot, inward);
        }
        let next_ratio = if ring + 1 < self.widths.len() {
            self.ratios[ring + 1]
        } else {
            1
        };
        let next_range = if is_center {
            (next_ratio * self.degrees as i32) / 360
        } else {
            next_ratio
        };
        for x in 0..next_range {
            neighbors.push(Position::cell([r + 1, theta * next_ratio + x]));
        }
        if is_center && self.degrees < 360.0 {
            neighbors.push(Position::cell([-1, 0]));
        }
        neighbors
    }

    /// Connections between first-ring cells of a 4-cell first ring run
    /// straight across the middle: route them through the center cell.
    fn center_hint(&self, first: &Position, second: &Position) -> Option<Position> {
        if self.center_cell
            && self.widths.len() > 1
            && self.widths[1] == 4
            && first.coords()[0] == 1
            && second.coords()[0] == 1
        {
            return Some(Position::cell([0, 0]));
        }
        None
    }

    /// Ring and angular cuts of a region.
    ///
    /// Radius cuts split inner rings from outer ones. Angular cuts follow
    /// the region's innermost ring: a full ring yields two-boundary cuts
    /// (enumerated pairwise from theta 0), a contiguous arc yields single
    /// cuts, and an arc wrapping across theta 0 is canonicalized into a
    /// contiguous run first.
    fn ring_region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        let mut result = Vec::new();
        let rs: Vec<i32> = {
            let mut rs: Vec<i32> = region.iter().map(|p| p.coords()[0]).collect();
            rs.sort_unstable();
            rs.dedup();
            rs
        };
        let (Some(&min_r), Some(&max_r)) = (rs.first(), rs.last()) else {
            return result;
        };

        for r in min_r..max_r {
            let near: IndexSet<Position> = region
                .iter()
                .filter(|p| p.coords()[0] <= r)
                .cloned()
                .collect();
            let far: IndexSet<Position> = region
                .iter()
                .filter(|p| p.coords()[0] > r)
                .cloned()
                .collect();
            result.push(Division::new(format!("cut ring at {r}"), near, far));
        }

        let inner_width = self.widths[min_r as usize];
        if inner_width <= 1 {
            return result;
        }
        let boundary = |theta: i32, r: i32| (theta + 1) * (self.widths[r as usize] / inner_width);
        let ring_theta = |p: &Position| (p.coords()[0], p.coords()[1]);

        let mut inner_thetas: Vec<i32> = region
            .iter()
            .filter(|p| p.coords()[0] == min_r)
            .map(|p| p.coords()[1])
            .collect();
        inner_thetas.sort_unstable();
        let Some((&first_theta, &last_theta)) = inner_thetas.first().zip(inner_thetas.last())
        else {
            return result;
        };

        if inner_thetas.len() as i32 == inner_width {
            // Full ring: a bisection needs two angular boundaries. Pair
            // theta 0 with every other cut.
            for k in 1..inner_width {
                let near: IndexSet<Position> = region
                    .iter()
                    .filter(|p| {
                        let (r, theta) = ring_theta(p);
                        boundary(0, r) <= theta && theta < boundary(k, r)
                    })
                    .cloned()
                    .collect();
                let far: IndexSet<Position> =
                    region.iter().filter(|p| !near.contains(*p)).cloned().collect();
                result.push(Division::new(
                    format!("cut full ring between 0 and {k}"),
                    near,
                    far,
                ));
            }
        } else if inner_thetas.contains(&0) && inner_thetas.contains(&(inner_width - 1)) {
            // Arc wrapping across theta 0: shift the high end negative
            // until the run is contiguous.
            let mut thetas = inner_thetas;
            let len = thetas.len() as i32;
            let mut canonical = true;
            loop {
                let last = thetas.len() - 1;
                if thetas[last] - thetas[0] == len - 1 {
                    break;
                }
                thetas[last] -= inner_width;
                thetas.sort_unstable();
                if thetas[thetas.len() - 1] < 0 {
                    canonical = false;
                    break;
                }
            }
            if canonical {
                let far_theta = thetas[thetas.len() - 1];
                let near_base = thetas[0].rem_euclid(inner_width) - 1;
                for theta in thetas[0]..far_theta {
                    let division = if theta >= 0 {
                        let near: IndexSet<Position> = region
                            .iter()
                            .filter(|p| {
                                let (r, th) = ring_theta(p);
                                boundary(theta, r) <= th && th < boundary(far_theta, r)
                            })
                            .cloned()
                            .collect();
                        let far: IndexSet<Position> = region
                            .iter()
                            .filter(|p| !near.contains(*p))
                            .cloned()
                            .collect();
                        Division::new(format!("cut wrapped arc at {theta}"), near, far)
                    } else {
                        let effective = theta.rem_euclid(inner_width);
                        let far: IndexSet<Position> = region
                            .iter()
                            .filter(|p| {
                                let (r, th) = ring_theta(p);
                                boundary(near_base, r) <= th && th < boundary(effective, r)
                            })
                            .cloned()
                            .collect();
                        let near: IndexSet<Position> = region
                            .iter()
                            .filter(|p| !far.contains(*p))
                            .cloned()
                            .collect();
                        Division::new(format!("cut wrapped arc at {theta}"), near, far)
                    };
                    result.push(division);
                }
            }
        } else {
            // Contiguous arc: single cuts between consecutive thetas.
            for theta in first_theta..last_theta {
                let far: IndexSet<Position> = region
                    .iter()
                    .filter(|p| {
                        let (r, th) = ring_theta(p);
                        th < boundary(theta, r)
                    })
                    .cloned()
                    .collect();
                let near: IndexSet<Position> = region
                    .iter()
                    .filter(|p| !far.contains(*p))
                    .cloned()
                    .collect();
                result.push(Division::new(format!("cut arc at {theta}"), near, far));
            }
        }
        result
    }
}

impl Lattice for Circle {
    fn positions(&self) -> Vec<Position> {
        self.positions.clone()
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        self.ring_adjacents(start)
    }

    fn edges(&self) -> Vec<Edge> {
        Vec::new()
    }

    fn external_points(&self) -> Vec<Point> {
        let p_radius = self.radius as f64 + if self.center_cell { 0.5 } else { 0.0 };
        let mut points = vec![Point::new(0.0, 0.0)];
        let mut angle = 0.0;
        while angle < self.degrees {
            let rad = f64::to_radians(angle);
            points.push(Point::new(rad.cos() * p_radius, rad.sin() * p_radius));
            angle += 10.0;
        }
        points
    }

    fn region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        self.ring_region_divisions(region)
    }

    fn link_pos_hint(&self, first: &Position, second: &Position) -> Option<Position> {
        self.center_hint(first, second)
    }
}

/// A half disc whose flat diameter edge can be stitched to another grid.
///
/// Built as a 180-degree [`Circle`]; odd diameters get a center cell,
/// even ones do not, so the diameter edge always spans exactly
/// `diameter` cells.
#[derive(Clone, Debug)]
pub struct Semicircle {
    circle: Circle,
    diameter: i32,
}

impl Semicircle {
    /// A semicircle whose flat edge spans `diameter` cells.
    pub fn new(diameter: i32) -> Self {
        Self::with_first_ring(diameter, 6)
    }

    /// A semicircle with an explicit innermost-ring width.
    pub fn with_first_ring(diameter: i32, first_ring: i32) -> Self {
        let center_cell = diameter % 2 == 1;
        let parent_radius = (diameter - i32::from(center_cell)) / 2;
        Self {
            circle: Circle::with_options(parent_radius, Some(first_ring), center_cell, 180.0),
            diameter,
        }
    }

    /// The diameter in cells.
    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    /// Ring widths of the underlying circle.
    pub fn widths(&self) -> &[i32] {
        self.circle.widths()
    }
}

impl Lattice for Semicircle {
    fn positions(&self) -> Vec<Position> {
        self.circle.positions()
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        self.circle.ring_adjacents(start)
    }

    fn edges(&self) -> Vec<Edge> {
        // The diameter edge, traversed left to right: down the theta-max
        // flank, across the center (if any), back up the theta-zero flank.
        let widths = self.circle.widths();
        let (first_r, last_r) = if self.circle.center_cell() {
            (1, self.circle.radius() + 1)
        } else {
            (0, self.circle.radius())
        };
        let mut inner = Vec::new();
        let mut outer = Vec::new();
        for r in (first_r..last_r).rev() {
            let half = widths[r as usize] / 2;
            inner.push(Position::cell([r, half]));
            outer.push(Position::cell([r, half + 1]));
        }
        if self.circle.center_cell() {
            inner.push(Position::cell([0, 0]));
            outer.push(Position::cell([-1, 0]));
        }
        for r in first_r..last_r {
            inner.push(Position::cell([r, 0]));
            outer.push(Position::cell([r, -1]));
        }
        vec![Edge { inner, outer }]
    }

    fn external_points(&self) -> Vec<Point> {
        let p_radius =
            self.circle.radius() as f64 + if self.circle.center_cell() { 0.5 } else { 0.0 };
        // The first two points are the edge endpoints; the arc follows.
        let mut points = vec![Point::new(-p_radius, 0.0), Point::new(p_radius, 0.0)];
        let mut angle = 10.0;
        while angle < 180.0 {
            let rad = f64::to_radians(angle);
            points.push(Point::new(rad.cos() * p_radius, rad.sin() * p_radius));
            angle += 10.0;
        }
        points
    }

    fn region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        self.circle.ring_region_divisions(region)
    }

    fn link_pos_hint(&self, first: &Position, second: &Position) -> Option<Position> {
        self.circle.center_hint(first, second)
    }
}

/// A regular polygon of ring cells, optionally truncated to a few slices.
///
/// The first ring holds one cell per side, so every outer ring's width is
/// a multiple of `sides` and the outermost ring divides evenly into
/// per-side boundary edges — one stitchable [`Edge`] per slice.
#[derive(Clone, Debug)]
pub struct Polygon {
    circle: Circle,
    sides: i32,
    slices: i32,
}

impl Polygon {
    /// A full polygon with the given ring count and side count.
    pub fn new(radius: i32, sides: i32) -> Self {
        Self::with_slices(radius, sides, sides)
    }

    /// A partial polygon spanning only `slices` of its sides.
    pub fn with_slices(radius: i32, sides: i32, slices: i32) -> Self {
        let degrees = 360.0 * slices as f64 / sides as f64;
        Self {
            circle: Circle::with_options(radius, Some(sides), true, degrees),
            sides,
            slices,
        }
    }

    /// Number of sides of the full polygon.
    pub fn sides(&self) -> i32 {
        self.sides
    }

    /// Number of sides actually present.
    pub fn slices(&self) -> i32 {
        self.slices
    }

    /// Ring widths of the underlying circle.
    pub fn widths(&self) -> &[i32] {
        self.circle.widths()
    }
}

impl Lattice for Polygon {
    fn positions(&self) -> Vec<Position> {
        self.circle.positions()
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        self.circle.ring_adjacents(start)
    }

    fn edges(&self) -> Vec<Edge> {
        let widths = self.circle.widths();
        let Some(&outer_width) = widths.last() else {
            return Vec::new();
        };
        let outer_r = widths.len() as i32 - 1;
        let side_len = outer_width / self.sides;
        (0..self.slices)
            .map(|side| {
                let inner: Vec<Position> = (0..side_len)
                    .map(|j| Position::cell([outer_r, side * side_len + j]))
                    .collect();
                let outer = inner.iter().map(|p| p.offset([1, 0])).collect();
                Edge { inner, outer }
            })
            .collect()
    }

    fn external_points(&self) -> Vec<Point> {
        let side_angle = TAU / self.sides as f64;
        let p_radius =
            self.circle.radius() as f64 + if self.circle.center_cell() { 0.5 } else { 0.0 };
        let mut points: Vec<Point> = (0..=self.slices)
            .map(|i| {
                let angle = side_angle * i as f64;
                Point::new(angle.cos() * p_radius, angle.sin() * p_radius)
            })
            .collect();
        points.push(Point::new(0.0, 0.0));
        points
    }

    fn region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        self.circle.ring_region_divisions(region)
    }

    fn link_pos_hint(&self, first: &Position, second: &Position) -> Option<Position> {
        self.circle.center_hint(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn p(r: i32, theta: i32) -> Position {
        Position::cell([r, theta])
    }

    #[test]
    fn circle_ring_widths_follow_the_book_rule() {
        let circle = Circle::new(3);
        assert_eq!(circle.widths(), &[1, 6, 12, 24]);
        assert_eq!(circle.positions().len(), 43);
    }

    #[test]
    fn circle_center_reaches_every_first_ring_cell() {
        let circle = Circle::new(3);
        let adjacents: Vec<Position> = circle.pos_adjacents(&p(0, 0)).into_iter().collect();
        assert_eq!(
            adjacents,
            vec![p(1, 0), p(1, 1), p(1, 2), p(1, 3), p(1, 4), p(1, 5)]
        );
    }

    #[test]
    fn circle_ring_cell_adjacency_order() {
        let circle = Circle::new(3);
        // ccw, inward, cw, then outward children.
        let adjacents: Vec<Position> = circle.pos_adjacents(&p(1, 0)).into_iter().collect();
        assert_eq!(adjacents, vec![p(1, 1), p(0, 0), p(1, 5), p(2, 0), p(2, 1)]);
    }

    #[test]
    fn circle_outermost_ring_is_four_way() {
        let circle = Circle::new(3);
        let adjacents: Vec<Position> = circle.pos_adjacents(&p(3, 0)).into_iter().collect();
        assert_eq!(adjacents, vec![p(3, 1), p(2, 0), p(3, 23), p(4, 0)]);
    }

    #[test]
    fn circle_compliance() {
        compliance::run_adjacency_compliance(&Circle::new(3));
    }

    #[test]
    fn four_cell_first_ring_routes_across_the_center() {
        let circle = Circle::with_options(2, Some(4), true, 360.0);
        assert_eq!(circle.widths()[1], 4);
        assert_eq!(circle.link_pos_hint(&p(1, 0), &p(1, 2)), Some(p(0, 0)));
        assert_eq!(circle.link_pos_hint(&p(2, 0), &p(2, 2)), None);
    }

    #[test]
    fn even_semicircle_matches_fixture() {
        let semi = Semicircle::new(6);
        assert_eq!(semi.widths(), &[6, 12, 12]);
        assert_eq!(semi.positions().len(), 15);

        let edges = semi.edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[0].inner,
            vec![p(2, 6), p(1, 6), p(0, 3), p(0, 0), p(1, 0), p(2, 0)]
        );
        assert_eq!(
            edges[0].outer,
            vec![p(2, 7), p(1, 7), p(0, 4), p(0, -1), p(1, -1), p(2, -1)]
        );

        let adjacents: Vec<Position> = semi.pos_adjacents(&p(0, 0)).into_iter().collect();
        assert_eq!(adjacents, vec![p(0, 1), p(0, -1), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn odd_semicircle_matches_fixture() {
        let semi = Semicircle::new(5);
        assert_eq!(semi.widths(), &[1, 6, 12]);
        assert_eq!(semi.positions().len(), 10);

        let edges = semi.edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[0].inner,
            vec![p(2, 6), p(1, 3), p(0, 0), p(1, 0), p(2, 0)]
        );
        assert_eq!(
            edges[0].outer,
            vec![p(2, 7), p(1, 4), p(-1, 0), p(1, -1), p(2, -1)]
        );

        let adjacents: Vec<Position> = semi.pos_adjacents(&p(0, 0)).into_iter().collect();
        assert_eq!(adjacents, vec![p(1, 0), p(1, 1), p(1, 2), p(-1, 0)]);
    }

    #[test]
    fn semicircle_compliance() {
        compliance::run_adjacency_compliance(&Semicircle::new(6));
        compliance::run_adjacency_compliance(&Semicircle::new(5));
    }

    #[test]
    fn pentagon_matches_fixture() {
        let polygon = Polygon::new(3, 5);
        assert_eq!(polygon.widths(), &[1, 5, 15, 15]);
        assert_eq!(polygon.positions().len(), 36);

        let edges = polygon.edges();
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0].inner.len(), 3);
        let positions = polygon.positions();
        assert!(positions.contains(&edges[0].inner[0]));
        assert!(!positions.contains(&edges[0].outer[0]));
    }

    #[test]
    fn partial_pentagon_matches_fixture() {
        let partial = Polygon::with_slices(3, 5, 4);
        assert_eq!(partial.widths(), &[1, 5, 15, 15]);
        assert_eq!(partial.positions().len(), 29);
        assert_eq!(partial.edges().len(), 4);
    }

    #[test]
    fn polygon_compliance() {
        compliance::run_adjacency_compliance(&Polygon::new(3, 5));
        compliance::run_adjacency_compliance(&Polygon::with_slices(3, 5, 1));
    }

    #[test]
    fn full_ring_divisions_have_two_boundaries() {
        let circle = Circle::new(2);
        // Rings only: with the center included the innermost "ring" has
        // width 1 and no angular cut exists.
        let region: IndexSet<Position> = circle
            .positions()
            .into_iter()
            .filter(|p| p.coords()[0] > 0)
            .collect();
        let divisions = circle.region_divisions(&region);
        // One radius cut plus a two-boundary angular cut per pairing.
        assert_eq!(divisions.len(), 6);
        for division in &divisions {
            assert!(!division.halves[0].is_empty(), "{}", division.name);
            assert!(!division.halves[1].is_empty(), "{}", division.name);
            assert_eq!(
                division.halves[0].len() + division.halves[1].len(),
                region.len(),
                "{}",
                division.name
            );
        }
    }

    #[test]
    fn arc_region_divisions_partition_the_region() {
        let circle = Circle::new(2);
        // A wedge: thetas 1..=3 of ring 1 plus their ring-2 children.
        let mut region: IndexSet<Position> = IndexSet::new();
        for theta in 1..=3 {
            region.insert(p(1, theta));
            region.insert(p(2, 2 * theta));
            region.insert(p(2, 2 * theta + 1));
        }
        let divisions = circle.region_divisions(&region);
        assert!(!divisions.is_empty());
        for division in &divisions {
            assert!(!division.halves[0].is_empty(), "{}", division.name);
            assert!(!division.halves[1].is_empty(), "{}", division.name);
            assert_eq!(
                division.halves[0].len() + division.halves[1].len(),
                region.len(),
                "{}",
                division.name
            );
        }
    }

    #[test]
    fn wrapped_arc_divisions_partition_the_region() {
        let circle = Circle::new(2);
        // Ring-1 thetas 4, 5, 0 (wrapping across zero) and their children.
        let mut region: IndexSet<Position> = IndexSet::new();
        for theta in [4, 5, 0] {
            region.insert(p(1, theta));
            region.insert(p(2, 2 * theta));
            region.insert(p(2, 2 * theta + 1));
        }
        let divisions = circle.region_divisions(&region);
        let angular: Vec<&Division> = divisions
            .iter()
            .filter(|d| d.name.contains("arc"))
            .collect();
        assert!(!angular.is_empty(), "wrapped arc produced no angular cuts");
        for division in &divisions {
            assert!(!division.halves[0].is_empty(), "{}", division.name);
            assert!(!division.halves[1].is_empty(), "{}", division.name);
            assert_eq!(
                division.halves[0].len() + division.halves[1].len(),
                region.len(),
                "{}",
                division.name
            );
        }
    }
}
