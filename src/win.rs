//! Win detection.
//!
//! All checks work on a column-major grid (`grid[column][row]`) and only look
//! for runs of one disk, the disk of the player who just moved. Every
//! orientation is reduced to the same primitive, [`has_run`]:
//!
//! - vertical: each column of the grid
//! - horizontal: each column of the transposed grid
//! - diagonal: a 4-cell walk `(c + i, r + i)` from every disk
//! - anti-diagonal: the same walk on the mirrored grid

use crate::constants::WIN_LENGTH;
use crate::player::Disk;

/// Column-major cell matrix.
pub type Grid = [Vec<Option<Disk>>];

/// The orientation of a winning line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
    Diagonal,
    AntiDiagonal,
}

/// True if `line` contains at least [`WIN_LENGTH`] consecutive `disk` cells.
pub fn has_run(line: &[Option<Disk>], disk: Disk) -> bool {
    let mut run = 0;
    for cell in line {
        if *cell == Some(disk) {
            run += 1;
            if run >= WIN_LENGTH {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Swap rows and columns. Assumes every column has the same length.
pub fn transpose(grid: &Grid) -> Vec<Vec<Option<Disk>>> {
    let height = grid.first().map_or(0, Vec::len);
    (0..height)
        .map(|row| grid.iter().map(|column| column[row]).collect())
        .collect()
}

/// Reverse the order of the columns.
pub fn mirror(grid: &Grid) -> Vec<Vec<Option<Disk>>> {
    grid.iter().rev().cloned().collect()
}

/// The [`WIN_LENGTH`] cells `(column + i, row + i)`, or `None` if the walk
/// leaves the grid.
pub fn diagonal_from(grid: &Grid, column: usize, row: usize) -> Option<Vec<Option<Disk>>> {
    (0..WIN_LENGTH)
        .map(|i| grid.get(column + i)?.get(row + i).copied())
        .collect()
}

fn vertical(grid: &Grid, disk: Disk) -> bool {
    grid.iter().any(|column| has_run(column, disk))
}

fn diagonal(grid: &Grid, disk: Disk) -> bool {
    grid.iter().enumerate().any(|(c, column)| {
        column.iter().enumerate().any(|(r, cell)| {
            *cell == Some(disk)
                && diagonal_from(grid, c, r).is_some_and(|line| has_run(&line, disk))
        })
    })
}

/// Find a winning line for `disk`, checking vertical, horizontal, diagonal
/// and anti-diagonal lines in that order.
pub fn winning_line(grid: &Grid, disk: Disk) -> Option<Orientation> {
    if vertical(grid, disk) {
        Some(Orientation::Vertical)
    } else if vertical(&transpose(grid), disk) {
        Some(Orientation::Horizontal)
    } else if diagonal(grid, disk) {
        Some(Orientation::Diagonal)
    } else if diagonal(&mirror(grid), disk) {
        Some(Orientation::AntiDiagonal)
    } else {
        None
    }
}

pub fn is_win(grid: &Grid, disk: Disk) -> bool {
    winning_line(grid, disk).is_some()
}
