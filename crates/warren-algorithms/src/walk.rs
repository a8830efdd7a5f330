//! Random-walk spanning-tree algorithms: Aldous-Broder and Wilson.

use indexmap::IndexSet;
use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// Aldous-Broder: wander at random, carving a passage whenever the walk
/// steps into an unvisited cell.
///
/// Produces a uniform spanning tree, slowly — the tail of the walk
/// revisits carved territory a lot. Assumes a connected, non-weaving
/// grid; weaving grows the cell universe mid-walk and the walk would
/// chase it forever.
pub fn aldous_broder<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let Some(mut current) = grid.random_point(rng) else {
        return Ok(());
    };
    let mut visited: IndexSet<Position> = IndexSet::new();
    visited.insert(current.clone());
    while visited.len() < grid.len() {
        let neighbors = grid.pos_neighbors(&current);
        let Some(next) = neighbors.choose(rng).cloned() else {
            break;
        };
        if !visited.contains(&next) {
            grid.connect(&current, &next)?;
            visited.insert(next.clone());
        }
        current = next;
    }
    Ok(())
}

/// Wilson: loop-erased random walks from unvisited cells, spliced into
/// the visited set.
///
/// Also a uniform spanning tree, and much faster than Aldous-Broder once
/// some territory is carved. The walk-start choice is made from a sorted
/// snapshot so a fixed seed reproduces the maze exactly.
pub fn wilson<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let Some(start) = grid.random_point(rng) else {
        return Ok(());
    };
    let mut unvisited: IndexSet<Position> = grid.positions().cloned().collect();
    let mut visited: IndexSet<Position> = IndexSet::new();
    visited.insert(start.clone());
    unvisited.shift_remove(&start);

    'carve: while !unvisited.is_empty() {
        let walk_start = {
            let mut pool: Vec<&Position> = unvisited.iter().collect();
            pool.sort();
            let Some(chosen) = pool.choose(rng) else {
                break;
            };
            (*chosen).clone()
        };
        let mut current = walk_start.clone();
        let mut path = vec![walk_start];
        while path.last().is_some_and(|p| !visited.contains(p)) {
            let neighbors = grid.pos_neighbors(&current);
            let Some(next) = neighbors.choose(rng).cloned() else {
                // An isolated cell can never reach the visited set.
                break 'carve;
            };
            // Stepping onto the path chops out the loop just formed.
            if let Some(index) = path.iter().position(|p| *p == next) {
                path.truncate(index);
            }
            path.push(next.clone());
            current = next;
        }
        for i in 0..path.len().saturating_sub(1) {
            grid.connect(&path[i], &path[i + 1])?;
            visited.insert(path[i].clone());
            unvisited.shift_remove(&path[i]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use warren_grid::{GridOptions, Rect};

    fn spanning_tree_holds(grid: &Grid) {
        assert_eq!(grid.passage_count(), grid.len() - 1);
        let start = grid.positions().next().unwrap().clone();
        let reached: usize = grid.dijkstra(&start).iter().map(IndexSet::len).sum();
        assert_eq!(reached, grid.len());
    }

    #[test]
    fn aldous_broder_spans_the_grid() {
        let mut grid = Grid::new(Rect::new(6, 5), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        aldous_broder(&mut grid, &mut rng).unwrap();
        spanning_tree_holds(&grid);
    }

    #[test]
    fn wilson_spans_the_grid() {
        let mut grid = Grid::new(Rect::new(6, 5), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        wilson(&mut grid, &mut rng).unwrap();
        spanning_tree_holds(&grid);
    }

    #[test]
    fn single_cell_grid_is_a_no_op() {
        let mut grid = Grid::new(Rect::new(1, 1), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        aldous_broder(&mut grid, &mut rng).unwrap();
        wilson(&mut grid, &mut rng).unwrap();
        assert_eq!(grid.passage_count(), 0);
    }
}
