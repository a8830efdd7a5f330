//! Row-biased rectangular carves: the binary algorithm and sidewinder.
//!
//! Both lean on the 4-way adjacency convention that slot 0 is east and
//! slot 1 is north. They run on anything honoring that convention but
//! are at home on the rectangular lattice.

use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// The binary algorithm: every cell links to one random existing
/// neighbor among its first two adjacency slots (east or north).
///
/// Cells with neither — the far corner — link nowhere, which is what
/// makes the north row and east column come out as single corridors.
pub fn binary<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let keys: Vec<Position> = grid.positions().cloned().collect();
    for position in keys {
        let options: Vec<Position> = grid
            .pos_adjacents(&position)
            .into_iter()
            .take(2)
            .filter(|p| grid.contains(p))
            .collect();
        if let Some(choice) = options.choose(rng) {
            grid.connect(&position, choice)?;
        }
    }
    Ok(())
}

/// Sidewinder: run east along each row, closing each run with a coin
/// flip by carving north from a random member.
///
/// The top row, with no north available, becomes one long corridor.
/// Close-out candidates are filtered to run members that actually have a
/// north neighbor, so masked grids never force an invalid carve.
pub fn sidewinder<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let keys: Vec<Position> = grid.positions().cloned().collect();
    let mut rows: Vec<i32> = keys
        .iter()
        .map(|p| p.coords().get(1).copied().unwrap_or(0))
        .collect();
    rows.sort_unstable();
    rows.dedup();
    for &row in &rows {
        let mut row_cells: Vec<Position> = keys
            .iter()
            .filter(|p| p.coords().get(1).copied().unwrap_or(0) == row)
            .cloned()
            .collect();
        row_cells.sort();
        let mut run: Vec<Position> = Vec::new();
        for cell in row_cells {
            run.push(cell.clone());
            let adjacents = grid.pos_adjacents(&cell);
            let east = adjacents.first().filter(|p| grid.contains(p)).cloned();
            let north = adjacents.get(1).filter(|p| grid.contains(p)).cloned();
            match (east, north) {
                (Some(east), None) => grid.connect(&cell, &east)?,
                (Some(east), Some(_)) if rng.random_range(0..2) == 0 => {
                    grid.connect(&cell, &east)?;
                }
                (_, Some(_)) => {
                    let candidates: Vec<Position> = run
                        .iter()
                        .filter(|member| {
                            grid.pos_adjacents(member)
                                .get(1)
                                .is_some_and(|p| grid.contains(p))
                        })
                        .cloned()
                        .collect();
                    if let Some(member) = candidates.choose(rng) {
                        let north_of = grid.pos_adjacents(member)[1].clone();
                        grid.connect(member, &north_of)?;
                    }
                    run.clear();
                }
                (None, None) => {}
            }
        }
    }
    Ok(())
}
