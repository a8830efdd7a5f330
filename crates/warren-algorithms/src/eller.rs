//! Eller's algorithm, generalized to carve along the first coordinate
//! axis of any shape.

use crate::kruskal::Groups;
use indexmap::IndexSet;
use rand::prelude::*;
use warren_core::Position;
use warren_grid::{Grid, GridError};

/// Row-by-row union-find carve.
///
/// "Rows" are slices of equal first coordinate — columns on the
/// rectangular lattice, rings on the polar family. Within a row,
/// adjacent cells merge with a coin flip (always on the final row, which
/// guarantees full connectivity); before advancing, every group carves
/// at least one connection into the next row and a few extras at one in
/// four.
///
/// The within-row pass checks each cell against its predecessor with a
/// wrap-around, so a full polar ring also gets the chance to merge
/// across theta zero.
pub fn eller<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let keys: Vec<Position> = grid.positions().cloned().collect();
    let mut rows: Vec<i32> = keys.iter().map(|p| p.coords()[0]).collect();
    rows.sort_unstable();
    rows.dedup();
    let Some(&last_row) = rows.last() else {
        return Ok(());
    };

    let mut groups = Groups::new();
    for &row in &rows {
        let mut row_points: Vec<Position> = keys
            .iter()
            .filter(|p| p.coords()[0] == row)
            .cloned()
            .collect();
        row_points.sort();
        let count = row_points.len();
        for i in 0..count {
            let previous = row_points[(i + count - 1) % count].clone();
            let current = row_points[i].clone();
            if grid.pos_adjacents(&current).contains(&previous)
                && (row == last_row || rng.random_range(0..2) == 1)
            {
                groups.connect(grid, &previous, &current)?;
            }
            if !groups.contains(&current) {
                groups.start(vec![current.clone()]);
            }
        }

        let row_set: IndexSet<Position> = row_points.into_iter().collect();
        for id in groups.ids() {
            let east_points: Vec<Position> = match groups.members(id) {
                Some(members) => members
                    .iter()
                    .filter(|p| row_set.contains(*p))
                    .cloned()
                    .collect(),
                None => continue,
            };
            let mut connections: Vec<(Position, Position)> = Vec::new();
            for point in &east_points {
                for neighbor in grid.pos_adjacents(point) {
                    if neighbor.coords()[0] > row && grid.contains(&neighbor) {
                        connections.push((point.clone(), neighbor));
                    }
                }
            }
            connections.shuffle(rng);
            for (i, (from, to)) in connections.iter().enumerate() {
                if i == 0 || rng.random_range(0..4) == 0 {
                    groups.connect(grid, from, to)?;
                }
            }
        }
    }
    Ok(())
}
