//! Depth-first carvers: the recursive backtracker and hunt-and-kill.

use indexmap::IndexSet;
use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// Recursive backtracker: a stack-based depth-first carve with random
/// unvisited-neighbor choice, popping on dead ends.
pub fn backtrack<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let Some(start) = grid.random_point(rng) else {
        return Ok(());
    };
    let mut stack = vec![start.clone()];
    let mut visited: IndexSet<Position> = IndexSet::new();
    visited.insert(start);
    while let Some(current) = stack.last().cloned() {
        let mut options: Vec<Position> = grid
            .pos_neighbors(&current)
            .into_iter()
            .filter(|p| !visited.contains(p))
            .collect();
        options.sort();
        match options.choose(rng).cloned() {
            Some(next) => {
                grid.connect(&current, &next)?;
                visited.insert(next.clone());
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}

/// Hunt-and-kill: random-walk carve until stuck, then scan all cells in
/// sorted order for the first unvisited cell adjacent to carved
/// territory and resume there.
///
/// The hunt scan is sorted by position so a fixed seed reproduces the
/// maze even though the cell map grows when weaving synthesizes link
/// cells.
pub fn hunt_kill<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let Some(mut current) = grid.random_point(rng) else {
        return Ok(());
    };
    let mut visited: IndexSet<Position> = IndexSet::new();
    visited.insert(current.clone());
    loop {
        // Kill: carve until painted into a corner.
        loop {
            let mut options: Vec<Position> = grid
                .pos_neighbors(&current)
                .into_iter()
                .filter(|p| !visited.contains(p))
                .collect();
            options.sort();
            let Some(next) = options.choose(rng).cloned() else {
                break;
            };
            grid.connect(&current, &next)?;
            visited.insert(next.clone());
            current = next;
        }
        if visited.len() == grid.len() {
            return Ok(());
        }
        // Hunt: deterministic sorted scan for a resumption point.
        let mut keys: Vec<Position> = grid.positions().cloned().collect();
        keys.sort();
        let mut resumed = false;
        for candidate in keys {
            if visited.contains(&candidate) {
                continue;
            }
            let mut connections: Vec<Position> = grid
                .pos_neighbors(&candidate)
                .into_iter()
                .filter(|p| visited.contains(p))
                .collect();
            connections.sort();
            if let Some(connection) = connections.choose(rng).cloned() {
                grid.connect(&connection, &candidate)?;
                visited.insert(candidate.clone());
                current = candidate;
                resumed = true;
                break;
            }
        }
        if !resumed {
            // Nothing unvisited touches carved territory; the rest of
            // the grid is unreachable.
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use warren_grid::{GridOptions, Rect, Tri};

    fn spanning_tree_holds(grid: &Grid) {
        assert_eq!(grid.passage_count(), grid.len() - 1);
        let start = grid.positions().next().unwrap().clone();
        let reached: usize = grid.dijkstra(&start).iter().map(IndexSet::len).sum();
        assert_eq!(reached, grid.len());
    }

    #[test]
    fn backtrack_spans_rect_and_tri() {
        for seed in [1, 2, 3] {
            let mut grid = Grid::new(Rect::new(5, 7), GridOptions::default());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            backtrack(&mut grid, &mut rng).unwrap();
            spanning_tree_holds(&grid);

            let mut grid = Grid::new(Tri::new(4), GridOptions::default());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            backtrack(&mut grid, &mut rng).unwrap();
            spanning_tree_holds(&grid);
        }
    }

    #[test]
    fn hunt_kill_spans_the_grid() {
        let mut grid = Grid::new(Rect::new(7, 4), GridOptions::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        hunt_kill(&mut grid, &mut rng).unwrap();
        spanning_tree_holds(&grid);
    }
}
