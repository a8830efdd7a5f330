//! The grid engine: cell storage, passage carving, weave-aware neighbor
//! computation, and graph analysis.

use crate::error::GridError;
use crate::lattice::{Adjacency, Division, Lattice};
use crate::options::GridOptions;
use crate::placement::{bounding_box, Point};
use indexmap::{IndexMap, IndexSet};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use warren_core::{Cell, Position};

/// A maze grid: a universe of cells over some [`Lattice`], plus the engine
/// operations every generation algorithm and analysis routine goes
/// through.
///
/// The cell map is insertion-ordered, so for a fixed lattice and a fixed
/// sequence of operations every iteration order — and therefore every
/// seeded random choice — is reproducible.
///
/// # Preconditions
///
/// Generation algorithms assume a non-empty grid whose adjacency is
/// symmetric. Neither is validated; a violating lattice produces undefined
/// mazes rather than errors.
pub struct Grid {
    cells: IndexMap<Position, Cell>,
    lattice: Box<dyn Lattice>,
    options: GridOptions,
}

impl Grid {
    /// Build a grid over `lattice`, materializing one unlinked cell per
    /// position the shape enumerates.
    pub fn new(lattice: impl Lattice + 'static, options: GridOptions) -> Self {
        Self::from_boxed(Box::new(lattice), options)
    }

    /// [`Grid::new`] for an already-boxed lattice.
    pub fn from_boxed(lattice: Box<dyn Lattice>, options: GridOptions) -> Self {
        let mut cells = IndexMap::new();
        for position in lattice.positions() {
            cells.insert(position.clone(), Cell::new(position));
        }
        Self {
            cells,
            lattice,
            options,
        }
    }

    /// Number of cells currently in the grid. Grows when weaving or
    /// partition-linking synthesizes link cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if `position` has a cell.
    pub fn contains(&self, position: &Position) -> bool {
        self.cells.contains_key(position)
    }

    /// The cell at `position`, if it exists.
    pub fn cell(&self, position: &Position) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// All cells with their positions, in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = (&Position, &Cell)> {
        self.cells.iter()
    }

    /// All cell positions, in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.cells.keys()
    }

    /// The grid's configuration.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// The underlying shape.
    pub fn lattice(&self) -> &dyn Lattice {
        &*self.lattice
    }

    /// Total number of carved passages (reciprocal link pairs).
    pub fn passage_count(&self) -> usize {
        self.cells.values().map(Cell::link_count).sum::<usize>() / 2
    }

    /// Raw candidate neighbors of `start` in shape order, including
    /// positions that do not exist in the grid.
    pub fn pos_adjacents(&self, start: &Position) -> Adjacency {
        self.lattice.pos_adjacents(start)
    }

    /// The usable neighbors of `start` for carving and pathfinding.
    ///
    /// Without weaving this is the existing raw adjacents. With weaving, a
    /// 4-adjacent neighbor whose two links form the perpendicular passage
    /// across our approach is replaced by the cell straight beyond it —
    /// the tunnel move — provided that cell exists and neither end of the
    /// tunnel is already linked through the crossing.
    pub fn pos_neighbors(&self, start: &Position) -> Vec<Position> {
        let adjacents = self.lattice.pos_adjacents(start);
        if !self.options.weave {
            return adjacents
                .into_iter()
                .filter(|p| self.cells.contains_key(p))
                .collect();
        }
        let mut neighbors = Vec::new();
        for target in adjacents {
            if !self.cells.contains_key(&target) {
                continue;
            }
            let target_adjacents = self.lattice.pos_adjacents(&target);
            // Only 4-way cells can carry a crossing.
            if target_adjacents.len() != 4 {
                neighbors.push(target);
                continue;
            }
            let Some(target_cell) = self.cells.get(&target) else {
                continue;
            };
            // Tunnelable only when exactly the perpendicular pair is carved.
            if target_cell.link_count() != 2 {
                neighbors.push(target);
                continue;
            }
            let Some(back_index) = target_adjacents.iter().position(|p| p.same_site(start)) else {
                continue;
            };
            let other_side = target_adjacents[(back_index + 2) % 4].clone();
            if self.cells.contains_key(&other_side)
                && !target_cell.is_linked_site(start)
                && !target_cell.is_linked_site(&other_side)
            {
                neighbors.push(other_side);
            }
        }
        neighbors
    }

    /// Carve a reciprocal passage between `first` and `second`.
    ///
    /// Directly adjacent positions link to each other. Non-adjacent
    /// positions link through the unique cell on their shared boundary:
    /// the engine locates or creates a link cell there
    /// ([`find_link_pos`](Grid::find_link_pos)) and links both endpoints
    /// to it.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidConnection`] when no unique shared boundary
    /// cell exists, or when an endpoint has no cell.
    pub fn connect(&mut self, first: &Position, second: &Position) -> Result<(), GridError> {
        if self.lattice.pos_adjacents(first).contains(&second.as_cell()) {
            return self.link_pair(first, second);
        }
        let link_pos = self.find_link_pos(first, second)?;
        if !self.cells.contains_key(&link_pos) {
            self.cells
                .insert(link_pos.clone(), Cell::new(link_pos.clone()));
        }
        self.link_pair(first, &link_pos)?;
        self.link_pair(second, &link_pos)
    }

    /// Remove the reciprocal link between `first` and `second`, leaving
    /// both cells in place. Removing an absent link is a no-op.
    pub fn disconnect(&mut self, first: &Position, second: &Position) {
        if let Some(cell) = self.cells.get_mut(first) {
            cell.remove_link(second);
        }
        if let Some(cell) = self.cells.get_mut(second) {
            cell.remove_link(first);
        }
    }

    /// Ensure a link cell exists over `site` and return its position.
    ///
    /// Weave injection uses this to seed a crossing before carving its
    /// lanes; an existing link cell is reused untouched.
    pub fn ensure_link_cell(&mut self, site: &Position) -> Position {
        let link = site.link_at();
        if !self.cells.contains_key(&link) {
            self.cells.insert(link.clone(), Cell::new(link.clone()));
        }
        link
    }

    /// The position of the link cell joining two non-adjacent positions:
    /// the unique shared entry of both adjacency lists, preferring 4-way
    /// candidates when several exist.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidConnection`] when there is no candidate or more
    /// than one survives disambiguation.
    pub fn find_link_pos(
        &self,
        first: &Position,
        second: &Position,
    ) -> Result<Position, GridError> {
        if let Some(hint) = self.lattice.link_pos_hint(first, second) {
            return Ok(hint);
        }
        let first_adjacents = self.lattice.pos_adjacents(first);
        let second_adjacents = self.lattice.pos_adjacents(second);
        let mut common: IndexSet<Position> = first_adjacents
            .iter()
            .filter(|p| second_adjacents.contains(*p))
            .cloned()
            .collect();
        if common.is_empty() {
            return Err(GridError::InvalidConnection {
                first: first.clone(),
                second: second.clone(),
                reason: "no shared boundary cell".into(),
            });
        }
        if common.len() > 1 {
            common.retain(|p| self.lattice.pos_adjacents(p).len() == 4);
        }
        if common.len() != 1 {
            return Err(GridError::InvalidConnection {
                first: first.clone(),
                second: second.clone(),
                reason: format!("no unique shared boundary cell (candidates: {common:?})"),
            });
        }
        let site = &common[0];
        Ok(site.link_at())
    }

    fn link_pair(&mut self, a: &Position, b: &Position) -> Result<(), GridError> {
        if !self.cells.contains_key(a) || !self.cells.contains_key(b) {
            return Err(GridError::InvalidConnection {
                first: a.clone(),
                second: b.clone(),
                reason: "endpoint has no cell".into(),
            });
        }
        if let Some(cell) = self.cells.get_mut(a) {
            cell.add_link(b.clone());
        }
        if let Some(cell) = self.cells.get_mut(b) {
            cell.add_link(a.clone());
        }
        Ok(())
    }

    /// A uniformly random cell position, or `None` for an empty grid.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Option<Position> {
        if self.cells.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cells.len());
        self.cells.get_index(index).map(|(p, _)| p.clone())
    }

    /// Breadth-first layering of the *link* graph from `start`.
    ///
    /// Layer 0 is `{start}`; layer k is every unseen cell exactly one
    /// link-hop from layer k−1. The name is kept from the source domain —
    /// this is an unweighted distance field, not a weighted shortest-path
    /// search.
    pub fn dijkstra(&self, start: &Position) -> Vec<IndexSet<Position>> {
        let mut seen: IndexSet<Position> = IndexSet::new();
        seen.insert(start.clone());
        let mut current: IndexSet<Position> = IndexSet::new();
        current.insert(start.clone());
        let mut layers = vec![current.clone()];
        loop {
            let mut frontier = IndexSet::new();
            for point in &current {
                let Some(cell) = self.cells.get(point) else {
                    continue;
                };
                for link in cell.links() {
                    if seen.insert(link.clone()) {
                        frontier.insert(link.clone());
                    }
                }
            }
            if frontier.is_empty() {
                break;
            }
            layers.push(frontier.clone());
            current = frontier;
        }
        layers
    }

    /// A heuristic pseudo-diameter path: BFS from a random start to find a
    /// far cell, BFS again from there, then walk back layer by layer.
    ///
    /// Exact on trees — which is what the spanning-tree algorithms
    /// produce — and a lower bound on general graphs. Ties are broken by
    /// position order, so for a fixed seed the result is reproducible.
    pub fn longest_path<R: Rng>(&self, rng: &mut R) -> Vec<Position> {
        let Some(start) = self.random_point(rng) else {
            return Vec::new();
        };
        let first_field = self.dijkstra(&start);
        let Some(first_far) = first_field.last().and_then(|l| l.iter().min()).cloned() else {
            return Vec::new();
        };
        let field = self.dijkstra(&first_far);
        let Some(second_far) = field.last().and_then(|l| l.iter().min()).cloned() else {
            return Vec::new();
        };
        let mut path = vec![second_far];
        for distance in (0..field.len().saturating_sub(1)).rev() {
            let Some(cell) = path.last().and_then(|p| self.cells.get(p)) else {
                break;
            };
            let next = cell
                .links()
                .iter()
                .filter(|p| field[distance].contains(*p))
                .min()
                .cloned();
            match next {
                Some(next) => path.push(next),
                None => break,
            }
        }
        path
    }

    /// Degree histogram: how many cells have 0, 1, 2, … links.
    pub fn node_analysis(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for cell in self.cells.values() {
            *histogram.entry(cell.link_count()).or_insert(0) += 1;
        }
        histogram
    }

    /// Positions of all cells with exactly one link, in cell order.
    pub fn dead_ends(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.link_count() == 1)
            .map(|(position, _)| position.clone())
            .collect()
    }

    /// Remove dead ends by adding extra connections until only
    /// `round(count * (1 - proportion))` braidable ones remain.
    ///
    /// Forced dead ends — cells with at most one possible neighbor, like
    /// sharp shape corners — are never braided. Each step picks a random
    /// remaining dead end and connects it to a random unlinked neighbor,
    /// preferring neighbors that are themselves dead ends; a target that
    /// stops being a dead end mid-run simply leaves the pool.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError::InvalidConnection`] from the underlying
    /// connect, which indicates a shape bug rather than a braid failure.
    pub fn braid<R: Rng>(&mut self, proportion: f64, rng: &mut R) -> Result<(), GridError> {
        let mut pool: Vec<Position> = self
            .dead_ends()
            .into_iter()
            .filter(|p| self.pos_neighbors(p).len() > 1)
            .collect();
        let target_count = (pool.len() as f64 * (1.0 - proportion)).round() as usize;
        while pool.len() > target_count {
            let index = rng.random_range(0..pool.len());
            let braidable = pool[index].clone();
            let Some(cell) = self.cells.get(&braidable) else {
                pool.remove(index);
                continue;
            };
            let current_links = cell.links().clone();
            let possible_targets: Vec<Position> = self
                .pos_neighbors(&braidable)
                .into_iter()
                .filter(|p| !current_links.contains(p))
                .collect();
            let (dead_targets, other_targets): (Vec<Position>, Vec<Position>) = possible_targets
                .into_iter()
                .partition(|p| self.cells.get(p).is_some_and(|c| c.link_count() == 1));
            let candidates = if dead_targets.is_empty() {
                other_targets
            } else {
                dead_targets
            };
            let Some(target) = candidates.choose(rng).cloned() else {
                pool.remove(index);
                continue;
            };
            self.connect(&braidable, &target)?;
            pool.remove(index);
            if let Some(target_index) = pool.iter().position(|p| *p == target) {
                pool.remove(target_index);
            }
        }
        Ok(())
    }

    /// Candidate bisections of `region`, delegated to the shape.
    pub fn region_divisions(&self, region: &IndexSet<Position>) -> Vec<Division> {
        self.lattice.region_divisions(region)
    }

    /// The shape's corner polygon in the shared plane.
    pub fn external_points(&self) -> Vec<Point> {
        self.lattice.external_points()
    }

    /// Bounding box of the shape's corner polygon as
    /// `[min_x, min_y, max_x, max_y]`.
    pub fn bounding_box(&self) -> [f64; 4] {
        bounding_box(&self.lattice.external_points())
    }
}

// Written by hand: the boxed lattice is not Debug.
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("cells", &self.cells.len())
            .field("passages", &self.passage_count())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn p(x: i32, y: i32) -> Position {
        Position::cell([x, y])
    }

    /// A fixed 4×3 maze in which every cell carved either north or east
    /// (the binary algorithm's shape), used as a known-answer fixture.
    fn golden_fixture() -> Grid {
        let mut grid = Grid::new(Rect::new(4, 3), GridOptions::default());
        let passages = [
            ((0, 0), (1, 0)),
            ((0, 1), (1, 1)),
            ((0, 2), (1, 2)),
            ((1, 0), (1, 1)),
            ((1, 1), (2, 1)),
            ((1, 2), (2, 2)),
            ((2, 0), (2, 1)),
            ((2, 1), (3, 1)),
            ((2, 2), (3, 2)),
            ((3, 0), (3, 1)),
            ((3, 1), (3, 2)),
        ];
        for ((ax, ay), (bx, by)) in passages {
            grid.connect(&p(ax, ay), &p(bx, by)).unwrap();
        }
        grid
    }

    #[test]
    fn golden_fixture_links_match_recorded_maze() {
        let grid = golden_fixture();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.passage_count(), 11);

        let expected: [((i32, i32), &[(i32, i32)]); 12] = [
            ((0, 0), &[(1, 0)]),
            ((0, 1), &[(1, 1)]),
            ((0, 2), &[(1, 2)]),
            ((1, 0), &[(0, 0), (1, 1)]),
            ((1, 1), &[(0, 1), (1, 0), (2, 1)]),
            ((1, 2), &[(0, 2), (2, 2)]),
            ((2, 0), &[(2, 1)]),
            ((2, 1), &[(1, 1), (2, 0), (3, 1)]),
            ((2, 2), &[(1, 2), (3, 2)]),
            ((3, 0), &[(3, 1)]),
            ((3, 1), &[(2, 1), (3, 0), (3, 2)]),
            ((3, 2), &[(2, 2), (3, 1)]),
        ];
        for ((x, y), links) in expected {
            let cell = grid.cell(&p(x, y)).unwrap();
            let mut got: Vec<Position> = cell.links().iter().cloned().collect();
            got.sort();
            let want: Vec<Position> = links.iter().map(|&(lx, ly)| p(lx, ly)).collect();
            assert_eq!(got, want, "links of {:?}", (x, y));
        }
    }

    #[test]
    fn golden_fixture_distance_field() {
        let grid = golden_fixture();
        let field = grid.dijkstra(&p(0, 0));
        let expected: Vec<Vec<(i32, i32)>> = vec![
            vec![(0, 0)],
            vec![(1, 0)],
            vec![(1, 1)],
            vec![(0, 1), (2, 1)],
            vec![(2, 0), (3, 1)],
            vec![(3, 0), (3, 2)],
            vec![(2, 2)],
            vec![(1, 2)],
            vec![(0, 2)],
        ];
        assert_eq!(field.len(), expected.len());
        for (layer, want) in field.iter().zip(&expected) {
            let want: IndexSet<Position> = want.iter().map(|&(x, y)| p(x, y)).collect();
            assert_eq!(layer, &want);
        }
    }

    #[test]
    fn golden_fixture_longest_path_is_nine_cells() {
        let grid = golden_fixture();
        // The fixture is a tree, so the double-BFS diameter is exact
        // whatever the random start.
        for seed in 0..4 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let path = grid.longest_path(&mut rng);
            assert_eq!(path.len(), 9);
            let ends: IndexSet<Position> =
                [path[0].clone(), path[8].clone()].into_iter().collect();
            let want: IndexSet<Position> = [p(0, 0), p(0, 2)].into_iter().collect();
            assert_eq!(ends, want);
            // Consecutive path entries are linked.
            for pair in path.windows(2) {
                assert!(grid.cell(&pair[0]).unwrap().is_linked(&pair[1]));
            }
        }
    }

    #[test]
    fn golden_fixture_degree_histogram() {
        let grid = golden_fixture();
        let histogram = grid.node_analysis();
        assert_eq!(histogram.get(&1), Some(&5));
        assert_eq!(histogram.get(&2), Some(&4));
        assert_eq!(histogram.get(&3), Some(&3));
        assert_eq!(grid.dead_ends().len(), 5);
    }

    #[test]
    fn connect_is_reciprocal_and_disconnect_undoes_it() {
        let mut grid = Grid::new(Rect::new(3, 3), GridOptions::default());
        grid.connect(&p(0, 0), &p(1, 0)).unwrap();
        assert!(grid.cell(&p(0, 0)).unwrap().is_linked(&p(1, 0)));
        assert!(grid.cell(&p(1, 0)).unwrap().is_linked(&p(0, 0)));
        grid.disconnect(&p(0, 0), &p(1, 0));
        assert_eq!(grid.cell(&p(0, 0)).unwrap().link_count(), 0);
        assert_eq!(grid.cell(&p(1, 0)).unwrap().link_count(), 0);
        assert_eq!(grid.len(), 9, "disconnect never removes cells");
    }

    #[test]
    fn connect_rejects_disjoint_and_ambiguous_pairs() {
        let mut grid = Grid::new(Rect::new(4, 4), GridOptions::default());
        // No shared boundary cell at all.
        assert!(matches!(
            grid.connect(&p(0, 0), &p(3, 3)),
            Err(GridError::InvalidConnection { .. })
        ));
        // Two equally-plausible 4-way candidates across the diagonal.
        assert!(matches!(
            grid.connect(&p(1, 1), &p(2, 2)),
            Err(GridError::InvalidConnection { .. })
        ));
    }

    #[test]
    fn weave_offers_tunnel_through_a_perpendicular_passage() {
        let mut grid = Grid::new(Rect::new(5, 5), GridOptions::weaving());
        // Vertical corridor through the middle cell.
        grid.connect(&p(2, 1), &p(2, 2)).unwrap();
        grid.connect(&p(2, 2), &p(2, 3)).unwrap();

        let neighbors = grid.pos_neighbors(&p(1, 2));
        assert!(
            !neighbors.contains(&p(2, 2)),
            "the crossing cell itself is not offered"
        );
        assert!(
            neighbors.contains(&p(3, 2)),
            "the cell beyond the crossing is offered instead"
        );
    }

    #[test]
    fn weave_connect_synthesizes_a_link_cell() {
        let mut grid = Grid::new(Rect::new(5, 5), GridOptions::weaving());
        grid.connect(&p(2, 1), &p(2, 2)).unwrap();
        grid.connect(&p(2, 2), &p(2, 3)).unwrap();
        grid.connect(&p(1, 2), &p(3, 2)).unwrap();

        assert_eq!(grid.len(), 26, "one link cell was synthesized");
        let link = p(2, 2).link_at();
        let link_cell = grid.cell(&link).expect("link cell exists");
        assert!(link_cell.is_linked(&p(1, 2)));
        assert!(link_cell.is_linked(&p(3, 2)));
        // The crossing cell keeps its own two perpendicular links.
        assert_eq!(grid.cell(&p(2, 2)).unwrap().link_count(), 2);
        // Both tunnel mouths link to the link cell, not to each other.
        assert!(grid.cell(&p(1, 2)).unwrap().is_linked(&link));
        assert!(!grid.cell(&p(1, 2)).unwrap().is_linked(&p(3, 2)));
    }

    #[test]
    fn weave_does_not_tunnel_through_a_corner_passage() {
        let mut grid = Grid::new(Rect::new(5, 5), GridOptions::weaving());
        // An L-shaped pair of links at the middle cell.
        grid.connect(&p(2, 2), &p(2, 3)).unwrap();
        grid.connect(&p(2, 2), &p(3, 2)).unwrap();

        let neighbors = grid.pos_neighbors(&p(1, 2));
        assert!(!neighbors.contains(&p(2, 2)));
        assert!(
            !neighbors.contains(&p(3, 2)),
            "far side already linked into the corner"
        );
    }

    #[test]
    fn weave_offers_lightly_linked_cells_normally() {
        let mut grid = Grid::new(Rect::new(5, 5), GridOptions::weaving());
        grid.connect(&p(2, 2), &p(2, 3)).unwrap();
        let neighbors = grid.pos_neighbors(&p(1, 2));
        assert!(neighbors.contains(&p(2, 2)), "one link is no obstacle");
    }

    #[test]
    fn weave_tunnel_carve_is_idempotent() {
        let mut grid = Grid::new(Rect::new(5, 5), GridOptions::weaving());
        grid.connect(&p(2, 1), &p(2, 2)).unwrap();
        grid.connect(&p(2, 2), &p(2, 3)).unwrap();
        grid.connect(&p(1, 2), &p(3, 2)).unwrap();

        // The crossing still offers the same tunnel; carving it again
        // reuses the existing link cell and adds nothing.
        let neighbors = grid.pos_neighbors(&p(1, 2));
        assert!(neighbors.contains(&p(3, 2)));
        let passages = grid.passage_count();
        grid.connect(&p(1, 2), &p(3, 2)).unwrap();
        assert_eq!(grid.len(), 26);
        assert_eq!(grid.passage_count(), passages);
    }

    #[test]
    fn braid_full_removes_every_braidable_dead_end() {
        let mut grid = golden_fixture();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        grid.braid(1.0, &mut rng).unwrap();
        let stubborn: Vec<Position> = grid
            .dead_ends()
            .into_iter()
            .filter(|p| grid.pos_neighbors(p).len() > 1)
            .collect();
        assert!(stubborn.is_empty(), "left braidable dead ends: {stubborn:?}");
    }

    #[test]
    fn braid_zero_changes_nothing() {
        let mut grid = golden_fixture();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        grid.braid(0.0, &mut rng).unwrap();
        assert_eq!(grid.passage_count(), 11);
        assert_eq!(grid.dead_ends().len(), 5);
    }

    #[test]
    fn random_point_is_none_on_an_empty_grid() {
        let grid = Grid::new(Rect::new(0, 0), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(grid.is_empty());
        assert_eq!(grid.random_point(&mut rng), None);
        assert!(grid.longest_path(&mut rng).is_empty());
    }

    #[test]
    fn reciprocity_holds_under_random_churn() {
        let mut grid = Grid::new(Rect::new(6, 6), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let positions: Vec<Position> = grid.positions().cloned().collect();
        for _ in 0..200 {
            let a = positions[rng.random_range(0..positions.len())].clone();
            let neighbors = grid.pos_neighbors(&a);
            if neighbors.is_empty() {
                continue;
            }
            let b = neighbors[rng.random_range(0..neighbors.len())].clone();
            if rng.random_range(0..4) == 0 {
                grid.disconnect(&a, &b);
            } else {
                grid.connect(&a, &b).unwrap();
            }
            for (position, cell) in grid.cells() {
                for link in cell.links() {
                    let back = grid.cell(link).expect("linked cell exists");
                    assert!(
                        back.is_linked(position),
                        "reciprocity violated between {position:?} and {link:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn dijkstra_layers_partition_reachable_cells() {
        let grid = golden_fixture();
        let field = grid.dijkstra(&p(1, 1));
        let mut seen: IndexSet<Position> = IndexSet::new();
        for layer in &field {
            for position in layer {
                assert!(seen.insert(position.clone()), "{position:?} in two layers");
            }
        }
        assert_eq!(seen.len(), 12, "all cells reachable in a spanning tree");
    }
}
