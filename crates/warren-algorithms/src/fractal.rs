//! Recursive fractal partition: bisect, carve one door, recurse.

use indexmap::IndexSet;
use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// Carve a maze by recursive region bisection.
///
/// Each step asks the shape for candidate divisions of the region, picks
/// one at random, carves exactly one door across its border, and recurses
/// into both halves. Regions at or below the grid's configured room size
/// are fully connected into open rooms instead.
///
/// # Errors
///
/// [`GridError::EmptyBorder`] when the shape offers no divisions for a
/// multi-cell region or a division has no crossable border — both
/// violations of the shape's `region_divisions` contract.
pub fn fractal<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let region: IndexSet<Position> = grid.positions().cloned().collect();
    fractal_step(grid, region, rng)
}

fn fractal_step<R: Rng>(
    grid: &mut Grid,
    region: IndexSet<Position>,
    rng: &mut R,
) -> Result<(), GridError> {
    if region.len() <= grid.options().room_size {
        // Open room: connect every adjacent pair inside the region.
        let members: Vec<Position> = region.iter().cloned().collect();
        for position in &members {
            for adjacent in grid.pos_adjacents(position) {
                if region.contains(&adjacent) {
                    grid.connect(position, &adjacent)?;
                }
            }
        }
        return Ok(());
    }
    if region.len() <= 1 {
        return Ok(());
    }
    let divisions = grid.region_divisions(&region);
    let Some(division) = divisions.choose(rng) else {
        return Err(GridError::EmptyBorder {
            division: "no candidates offered".into(),
            region_size: region.len(),
        });
    };
    let border: Vec<(Position, Position)> = division.halves[0]
        .iter()
        .flat_map(|near| {
            grid.pos_neighbors(near)
                .into_iter()
                .filter(|far| division.halves[1].contains(far))
                .map(move |far| (near.clone(), far))
        })
        .collect();
    let Some((door_near, door_far)) = border.choose(rng).cloned() else {
        return Err(GridError::EmptyBorder {
            division: division.name.clone(),
            region_size: region.len(),
        });
    };
    grid.connect(&door_near, &door_far)?;
    let halves = division.halves.clone();
    for half in halves {
        fractal_step(grid, half, rng)?;
    }
    Ok(())
}
