use core::fmt;
use std::iter;

use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{GridError, Result};

/// A rectangular, 4-connected grid that owns its [Cell]s in row-major order.
///
/// Points use `x` for the column and `y` for the row.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<Cell>,
}

impl Grid {
    /// Creates a grid of `rows * cols` open cells with unreached search state.
    pub fn new(rows: usize, cols: usize) -> Result<Grid> {
        let invalid = GridError::InvalidDimension { rows, cols };
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(invalid);
        }
        rows.checked_mul(cols).ok_or(invalid)?;
        let mut cells: SimpleGrid<Cell> =
            SimpleGrid::new(cols, rows, Cell::new(Point::new(0, 0)));
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                let p = Point::new(x, y);
                cells.set_point(p, Cell::new(p));
            }
        }
        Ok(Grid { cells })
    }

    /// Parses a text map with one line per row, where `#`, `@` and `T` are walls and
    /// `.` is open ground. Leading and trailing blank lines are ignored.
    pub fn from_ascii(map: &str) -> Result<Grid> {
        let lines: Vec<&str> = map
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Grid::new(rows, cols)?;
        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::InvalidDimension { rows, cols });
            }
            for (x, c) in line.chars().enumerate() {
                let blocked = match c {
                    '#' | '@' | 'T' => true,
                    '.' => false,
                    other => {
                        return Err(GridError::InvalidArgument {
                            name: "map",
                            reason: format!("unexpected character {other:?} at row {y}"),
                        })
                    }
                };
                grid.set_wall(Point::new(x as i32, y as i32), blocked)?;
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }
    pub fn cols(&self) -> usize {
        self.cells.width()
    }
    /// Number of cells, never zero.
    pub fn len(&self) -> usize {
        self.cells.values.len()
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        self.cells.point_in_bounds(point)
    }

    /// Row-major index of `point`, checked against the grid extents.
    pub(crate) fn index(&self, point: Point) -> Result<usize> {
        if self.cells.point_in_bounds(point) {
            Ok(self.cells.get_ix_point(&point))
        } else {
            Err(GridError::OutOfBounds {
                point,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn cell(&self, point: Point) -> Result<&Cell> {
        let ix = self.index(point)?;
        Ok(&self.cells.values[ix])
    }
    pub(crate) fn cell_mut(&mut self, point: Point) -> Result<&mut Cell> {
        let ix = self.index(point)?;
        Ok(&mut self.cells.values[ix])
    }
    pub(crate) fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells.values[ix]
    }
    pub(crate) fn cell_at_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells.values[ix]
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values.iter()
    }

    pub fn is_wall(&self, point: Point) -> Result<bool> {
        Ok(self.cell(point)?.is_wall)
    }
    /// Marks a cell as blocked or open. Keeping start and goal open is up to the caller.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<()> {
        self.cell_mut(point)?.is_wall = blocked;
        Ok(())
    }
    pub fn clear_walls(&mut self) {
        self.cells
            .values
            .iter_mut()
            .for_each(|cell| cell.is_wall = false);
    }

    /// The in-bounds 4-neighbourhood of `point` in the order right, down, left, up.
    /// Walls are included.
    pub fn neighbors(&self, point: Point) -> Result<SmallVec<[Point; 4]>> {
        self.index(point)?;
        Ok(point
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.cells.point_in_bounds(*p))
            .collect())
    }

    /// Forgets all search state while keeping the walls, so the grid can be searched again.
    pub fn reset_search(&mut self) {
        self.cells.values.iter_mut().for_each(Cell::reset);
    }

    /// Follows parent links back from `end` and returns the route in start-to-end order.
    /// Returns an empty path if `end` was never reached.
    pub fn path_to(&self, end: Point) -> Result<Vec<Point>> {
        if !self.cell(end)?.is_reached() {
            return Ok(Vec::new());
        }
        // Bounded by the cell count so stale parent links can never loop forever.
        let mut path: Vec<Point> = iter::successors(Some(end), |p| {
            self.cell(*p).ok().and_then(|cell| cell.parent)
        })
        .take(self.len())
        .collect();
        path.reverse();
        Ok(path)
    }

    /// Groups open cells into connected components under 4-adjacency.
    pub fn components(&self) -> UnionFind<usize> {
        debug!(
            "Generating connected components for {}x{} grid",
            self.rows(),
            self.cols()
        );
        let mut components = UnionFind::new(self.len());
        for (ix, cell) in self.cells().enumerate() {
            if cell.is_wall {
                continue;
            }
            let p = cell.position();
            // Right and down suffice, the other two directions are covered by the neighbour.
            for q in [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)] {
                if let Ok(q_ix) = self.index(q) {
                    if !self.cell_at(q_ix).is_wall {
                        components.union(ix, q_ix);
                    }
                }
            }
        }
        components
    }

    /// Checks whether `goal` can be reached from `start` by any sequence of open cells.
    pub fn reachable(&self, start: Point, goal: Point) -> Result<bool> {
        let start_ix = self.index(start)?;
        let goal_ix = self.index(goal)?;
        if start_ix == goal_ix {
            return Ok(true);
        }
        if self.cell_at(start_ix).is_wall || self.cell_at(goal_ix).is_wall {
            return Ok(false);
        }
        Ok(self.components().equiv(start_ix, goal_ix))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.values.chunks(self.cols()) {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_wall { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
