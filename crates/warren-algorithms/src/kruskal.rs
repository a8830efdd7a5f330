//! Randomized Kruskal over a shuffled edge pool, with optional weave
//! injection, plus the union-find `Groups` shared with Eller's algorithm.

use indexmap::{IndexMap, IndexSet};
use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// Union-find over positions: plain member sets plus a point → group-id
/// index. Merging reassigns every member of the larger-id group to the
/// smaller one.
pub(crate) struct Groups {
    groups: IndexMap<u32, IndexSet<Position>>,
    index: IndexMap<Position, u32>,
    next_id: u32,
}

impl Groups {
    pub(crate) fn new() -> Self {
        Self {
            groups: IndexMap::new(),
            index: IndexMap::new(),
            next_id: 0,
        }
    }

    pub(crate) fn contains(&self, position: &Position) -> bool {
        self.index.contains_key(position)
    }

    /// Open a new group over `members`.
    pub(crate) fn start(&mut self, members: Vec<Position>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let mut set = IndexSet::new();
        for member in members {
            self.index.insert(member.clone(), id);
            set.insert(member);
        }
        self.groups.insert(id, set);
        id
    }

    /// Group ids currently alive, in creation order.
    pub(crate) fn ids(&self) -> Vec<u32> {
        self.groups.keys().copied().collect()
    }

    pub(crate) fn members(&self, id: u32) -> Option<&IndexSet<Position>> {
        self.groups.get(&id)
    }

    fn join(&mut self, id: u32, position: Position) {
        self.index.insert(position.clone(), id);
        if let Some(set) = self.groups.get_mut(&id) {
            set.insert(position);
        }
    }

    /// Carve `first`–`second` unless both already share a group, opening
    /// and merging groups as needed. Returns whether a passage was
    /// carved.
    pub(crate) fn connect(
        &mut self,
        grid: &mut Grid,
        first: &Position,
        second: &Position,
    ) -> Result<bool, GridError> {
        let a = self.index.get(first).copied();
        let b = self.index.get(second).copied();
        match (a, b) {
            (None, None) => {
                grid.connect(first, second)?;
                self.start(vec![first.clone(), second.clone()]);
                Ok(true)
            }
            (Some(id), None) => {
                grid.connect(first, second)?;
                self.join(id, second.clone());
                Ok(true)
            }
            (None, Some(id)) => {
                grid.connect(first, second)?;
                self.join(id, first.clone());
                Ok(true)
            }
            (Some(first_id), Some(second_id)) if first_id != second_id => {
                grid.connect(first, second)?;
                let (keep, absorb) = if first_id < second_id {
                    (first_id, second_id)
                } else {
                    (second_id, first_id)
                };
                let members = self.groups.shift_remove(&absorb).unwrap_or_default();
                for member in members {
                    self.join(keep, member);
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn ordered_pair(a: &Position, b: &Position) -> (Position, Position) {
    if a < b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Randomized Kruskal: union-find over a shuffled pool of every
/// candidate passage, connecting exactly when the endpoints sit in
/// different components.
///
/// On a weaving grid a pre-pass first injects crossings at random 4-way
/// cells untouched by any group: a link cell is synthesized under the
/// cell and the four neighbors carve through the two lanes (even
/// adjacency indices through one, odd through the other, coin-flipped),
/// after which the crossing's own pool entries are retired.
pub fn kruskal<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let keys: Vec<Position> = grid.positions().cloned().collect();
    let mut pool: IndexSet<(Position, Position)> = IndexSet::new();
    for location in &keys {
        for neighbor in grid.pos_neighbors(location) {
            if neighbor > *location {
                pool.insert((location.clone(), neighbor));
            }
        }
    }

    let mut groups = Groups::new();
    if grid.options().weave {
        let mut candidates = keys.clone();
        candidates.shuffle(rng);
        let mut consumed: IndexSet<Position> = IndexSet::new();
        for weave_pos in candidates {
            if consumed.contains(&weave_pos) || groups.contains(&weave_pos) {
                continue;
            }
            let adjacents: Vec<Position> = grid.pos_adjacents(&weave_pos).into_iter().collect();
            if adjacents.len() != 4 {
                continue;
            }
            if adjacents.iter().any(|n| groups.contains(n)) {
                continue;
            }
            if adjacents.iter().any(|n| !grid.contains(n)) {
                continue;
            }
            consumed.insert(weave_pos.clone());
            consumed.extend(adjacents.iter().cloned());

            let link_pos = grid.ensure_link_cell(&weave_pos);
            let top_mod = rng.random_range(0..2);
            groups.start(vec![weave_pos.clone()]);
            groups.start(vec![link_pos.clone()]);
            for (i, neighbor) in adjacents.iter().enumerate() {
                let target = if i % 2 == top_mod {
                    &weave_pos
                } else {
                    &link_pos
                };
                groups.connect(grid, neighbor, target)?;
                pool.shift_remove(&ordered_pair(neighbor, &weave_pos));
            }
        }
    }

    let mut pool: Vec<(Position, Position)> = pool.into_iter().collect();
    pool.shuffle(rng);
    for (first, second) in pool {
        groups.connect(grid, &first, &second)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use warren_core::PositionKind;
    use warren_grid::{GridOptions, Rect};

    fn spanning_tree_holds(grid: &Grid) {
        assert_eq!(grid.passage_count(), grid.len() - 1);
        let start = grid.positions().next().unwrap().clone();
        let reached: usize = grid.dijkstra(&start).iter().map(IndexSet::len).sum();
        assert_eq!(reached, grid.len());
    }

    #[test]
    fn kruskal_spans_the_grid() {
        let mut grid = Grid::new(Rect::new(6, 6), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        kruskal(&mut grid, &mut rng).unwrap();
        spanning_tree_holds(&grid);
    }

    #[test]
    fn weave_kruskal_injects_crossings_and_still_spans() {
        let mut grid = Grid::new(Rect::new(8, 8), GridOptions::weaving());
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        kruskal(&mut grid, &mut rng).unwrap();

        let crossings: Vec<_> = grid
            .positions()
            .filter(|p| p.kind() == PositionKind::Link)
            .cloned()
            .collect();
        assert!(!crossings.is_empty(), "no crossings were injected");
        for link in &crossings {
            // Each lane of a crossing carries exactly two passages.
            assert_eq!(grid.cell(link).unwrap().link_count(), 2);
            assert_eq!(grid.cell(&link.as_cell()).unwrap().link_count(), 2);
        }
        // The tree covers the grown cell universe, crossings included.
        spanning_tree_holds(&grid);
    }

    #[test]
    fn groups_merge_keeps_the_smaller_id() {
        let mut grid = Grid::new(Rect::new(4, 1), GridOptions::default());
        let mut groups = Groups::new();
        let a = Position::cell([0, 0]);
        let b = Position::cell([1, 0]);
        let c = Position::cell([2, 0]);
        let d = Position::cell([3, 0]);
        groups.connect(&mut grid, &a, &b).unwrap();
        groups.connect(&mut grid, &c, &d).unwrap();
        assert_eq!(groups.ids(), vec![0, 1]);
        assert!(groups.connect(&mut grid, &b, &c).unwrap());
        assert_eq!(groups.ids(), vec![0]);
        assert_eq!(groups.members(0).unwrap().len(), 4);
        // Same group now; no further carving.
        assert!(!groups.connect(&mut grid, &a, &d).unwrap());
    }
}
