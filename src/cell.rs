use grid_util::point::Point;

use crate::{Cost, INFINITE_COST};

/// A single grid position together with the search state A* keeps for it.
///
/// The position is fixed at construction. `g`, `h`, `f` and the parent link belong to the
/// most recent search and are only meaningful until [Grid::reset_search](crate::Grid::reset_search)
/// is called.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Point,
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    pub(crate) f: Cost,
    pub(crate) parent: Option<Point>,
    pub(crate) is_wall: bool,
}

impl Cell {
    pub(crate) fn new(position: Point) -> Cell {
        Cell {
            position,
            g: INFINITE_COST,
            h: 0,
            f: INFINITE_COST,
            parent: None,
            is_wall: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
    pub fn row(&self) -> usize {
        self.position.y as usize
    }
    pub fn col(&self) -> usize {
        self.position.x as usize
    }
    /// Best known cost from the start, [INFINITE_COST] if the cell was not reached.
    pub fn g(&self) -> Cost {
        self.g
    }
    pub fn h(&self) -> Cost {
        self.h
    }
    /// Estimated total cost `g + h`.
    pub fn f(&self) -> Cost {
        self.f
    }
    /// Predecessor on the best known route, if any.
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    pub fn is_reached(&self) -> bool {
        self.g != INFINITE_COST
    }

    /// Records a route of cost `g` through `parent` and refreshes `f`.
    pub(crate) fn relax(&mut self, g: Cost, h: Cost, parent: Option<Point>) {
        self.g = g;
        self.h = h;
        self.f = g.saturating_add(h);
        self.parent = parent;
    }

    pub(crate) fn reset(&mut self) {
        self.g = INFINITE_COST;
        self.h = 0;
        self.f = INFINITE_COST;
        self.parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_unreached() {
        let cell = Cell::new(Point::new(3, 1));
        assert_eq!(cell.row(), 1);
        assert_eq!(cell.col(), 3);
        assert_eq!(cell.g(), INFINITE_COST);
        assert_eq!(cell.f(), INFINITE_COST);
        assert_eq!(cell.h(), 0);
        assert!(cell.parent().is_none());
        assert!(!cell.is_wall());
        assert!(!cell.is_reached());
    }

    #[test]
    fn relax_keeps_f_consistent() {
        let mut cell = Cell::new(Point::new(0, 0));
        cell.relax(4, 3, Some(Point::new(1, 0)));
        assert_eq!(cell.f(), cell.g() + cell.h());
        assert_eq!(cell.parent(), Some(Point::new(1, 0)));
        cell.reset();
        assert!(!cell.is_reached());
        assert!(cell.parent().is_none());
    }
}
