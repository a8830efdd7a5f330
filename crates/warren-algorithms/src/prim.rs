//! Frontier-growth algorithms: the growing-tree family and both Prim
//! variants.

use indexmap::{IndexMap, IndexSet};
use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// Which active cell the growing-tree loop expands next.
///
/// `Newest` reproduces the recursive backtracker's bias, `Random` is
/// simple Prim, and the others sit in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Always the most recently added cell.
    Newest,
    /// Always the oldest cell still active.
    Oldest,
    /// A uniformly random active cell.
    Random,
    /// The middle of the active list.
    Median,
    /// A coin flip between `Newest` and `Random`.
    NewestOrRandom,
}

/// Grow a spanning tree from one start, expanding the active cell chosen
/// by `policy` into a random unvisited neighbor; an active cell with no
/// unvisited neighbors is retired.
pub fn growing_tree<R: Rng>(
    grid: &mut Grid,
    policy: GrowthPolicy,
    rng: &mut R,
) -> Result<(), GridError> {
    let Some(start) = grid.random_point(rng) else {
        return Ok(());
    };
    let mut active = vec![start.clone()];
    let mut visited: IndexSet<Position> = IndexSet::new();
    visited.insert(start);
    while !active.is_empty() {
        let index = match policy {
            GrowthPolicy::Newest => active.len() - 1,
            GrowthPolicy::Oldest => 0,
            GrowthPolicy::Random => rng.random_range(0..active.len()),
            GrowthPolicy::Median => active.len() / 2,
            GrowthPolicy::NewestOrRandom => {
                if rng.random_range(0..2) == 0 {
                    active.len() - 1
                } else {
                    rng.random_range(0..active.len())
                }
            }
        };
        let source = active[index].clone();
        let neighbors: Vec<Position> = grid
            .pos_neighbors(&source)
            .into_iter()
            .filter(|p| !visited.contains(p))
            .collect();
        match neighbors.choose(rng).cloned() {
            Some(target) => {
                grid.connect(&source, &target)?;
                visited.insert(target.clone());
                active.push(target);
            }
            None => {
                active.remove(index);
            }
        }
    }
    Ok(())
}

/// Simple Prim: frontier growth with a uniformly random active pick.
pub fn simple_prim<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    growing_tree(grid, GrowthPolicy::Random, rng)
}

/// Weighted Prim: every cell gets a random cost up front; expansion
/// always takes the cheapest active cell into its cheapest unvisited
/// neighbor, ties broken at random.
pub fn true_prim<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let keys: Vec<Position> = grid.positions().cloned().collect();
    let mut cost: IndexMap<Position, i32> = IndexMap::new();
    for key in &keys {
        cost.insert(key.clone(), rng.random_range(0..100));
    }
    let Some(start) = grid.random_point(rng) else {
        return Ok(());
    };
    let mut active = vec![start.clone()];
    let mut visited: IndexSet<Position> = IndexSet::new();
    visited.insert(start);
    while !active.is_empty() {
        let Some(min_source_cost) = active.iter().filter_map(|p| cost.get(p)).min().copied()
        else {
            break;
        };
        let cheapest: Vec<Position> = active
            .iter()
            .filter(|p| cost.get(*p) == Some(&min_source_cost))
            .cloned()
            .collect();
        let Some(source) = cheapest.choose(rng).cloned() else {
            break;
        };
        let neighbors: Vec<Position> = grid
            .pos_neighbors(&source)
            .into_iter()
            .filter(|p| !visited.contains(p))
            .collect();
        if neighbors.is_empty() {
            active.retain(|p| *p != source);
            continue;
        }
        let Some(min_target_cost) = neighbors.iter().filter_map(|p| cost.get(p)).min().copied()
        else {
            break;
        };
        let targets: Vec<Position> = neighbors
            .into_iter()
            .filter(|p| cost.get(p) == Some(&min_target_cost))
            .collect();
        let Some(target) = targets.choose(rng).cloned() else {
            break;
        };
        grid.connect(&source, &target)?;
        visited.insert(target.clone());
        active.push(target);
    }
    Ok(())
}
