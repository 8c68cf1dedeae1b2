use super::MazeTarget;
use crate::pathing_grid::{NodeId, PathingGrid};
use itertools::Itertools;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Taller regions are split by a horizontal line, the rest vertically.
    fn for_region(height: isize, width: isize) -> Orientation {
        if height > width {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Walls off the outer border, then recursively partitions the interior
/// (rows `2..=rows-3`, cols `2..=cols-3`) with dividing lines on every other
/// row or column, leaving one passage in each line. Grids too small to hold an
/// interior are left untouched.
pub fn recursive_division<R: Rng>(
    grid: &mut PathingGrid,
    target: MazeTarget,
    rng: &mut R,
) -> Vec<NodeId> {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    let mut division = Division {
        grid,
        target,
        rng,
        changed: Vec::new(),
    };
    division.divide(2, rows - 3, 2, cols - 3, Orientation::Horizontal, false);
    division.changed
}

struct Division<'a, R> {
    grid: &'a mut PathingGrid,
    target: MazeTarget,
    rng: &'a mut R,
    changed: Vec<NodeId>,
}

impl<R: Rng> Division<'_, R> {
    fn convert(&mut self, row: isize, col: isize) {
        let id = row as usize * self.grid.cols() + col as usize;
        if self.target.apply(self.grid, id) {
            self.changed.push(id);
        }
    }

    fn surround(&mut self) {
        let last_row = self.grid.rows() as isize - 1;
        let last_col = self.grid.cols() as isize - 1;
        for col in 0..=last_col {
            self.convert(0, col);
        }
        for col in 0..=last_col {
            self.convert(last_row, col);
        }
        for row in 1..last_row {
            self.convert(row, 0);
        }
        for row in 1..last_row {
            self.convert(row, last_col);
        }
    }

    fn pick(&mut self, candidates: &[isize]) -> isize {
        candidates[self.rng.gen_range(0..candidates.len())]
    }

    fn divide(
        &mut self,
        row_start: isize,
        row_end: isize,
        col_start: isize,
        col_end: isize,
        orientation: Orientation,
        surrounding_walls: bool,
    ) {
        if row_end < row_start || col_end < col_start {
            return;
        }
        if !surrounding_walls {
            self.surround();
        }
        match orientation {
            Orientation::Horizontal => {
                let wall_rows = (row_start..=row_end).step_by(2).collect_vec();
                let passages = (col_start - 1..=col_end + 1).step_by(2).collect_vec();
                let wall_row = self.pick(&wall_rows);
                let passage = self.pick(&passages);
                for col in (col_start - 1..=col_end + 1).filter(|&c| c != passage) {
                    self.convert(wall_row, col);
                }
                let width = col_end - col_start;
                self.divide(
                    row_start,
                    wall_row - 2,
                    col_start,
                    col_end,
                    Orientation::for_region(wall_row - 2 - row_start, width),
                    true,
                );
                self.divide(
                    wall_row + 2,
                    row_end,
                    col_start,
                    col_end,
                    Orientation::for_region(row_end - (wall_row + 2), width),
                    true,
                );
            }
            Orientation::Vertical => {
                let wall_cols = (col_start..=col_end).step_by(2).collect_vec();
                let passages = (row_start - 1..=row_end + 1).step_by(2).collect_vec();
                let wall_col = self.pick(&wall_cols);
                let passage = self.pick(&passages);
                for row in (row_start - 1..=row_end + 1).filter(|&r| r != passage) {
                    self.convert(row, wall_col);
                }
                let height = row_end - row_start;
                self.divide(
                    row_start,
                    row_end,
                    col_start,
                    wall_col - 2,
                    Orientation::for_region(height, wall_col - 2 - col_start),
                    true,
                );
                self.divide(
                    row_start,
                    row_end,
                    wall_col + 2,
                    col_end,
                    Orientation::for_region(height, col_end - (wall_col + 2)),
                    true,
                );
            }
        }
    }
}
