//! Mapping between board cells and screen positions.

use pathviz_core::Pos;

use crate::messages::Point;

/// Default number of terminal columns per board cell. Terminal glyphs are
/// roughly twice as tall as they are wide, so two columns make a square.
pub const DEFAULT_CELL_WIDTH: i32 = 2;

/// Screen geometry: the board occupies the top-left corner, one terminal row
/// per board row and `cell_width` columns per board column, followed by a
/// one-row status line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    size: i32,
    cell_width: i32,
}

impl Layout {
    pub fn new(size: i32, cell_width: i32) -> Self {
        Self {
            size: size.max(0),
            cell_width: cell_width.max(1),
        }
    }

    /// Fit a `size`-cell board into `total_width` columns, never going below
    /// one column per cell.
    pub fn fit_width(size: i32, total_width: i32) -> Self {
        let cell_width = if size > 0 { total_width / size } else { 1 };
        Self::new(size, cell_width)
    }

    /// This layout if it fits a `width`×`height` screen, else the same board
    /// with cells narrowed until it fits. `None` if even one column per cell
    /// is too wide, or the board and status line are too tall.
    pub fn fit_to(&self, width: i32, height: i32) -> Option<Self> {
        let (w, h) = self.screen_size();
        if h > height {
            return None;
        }
        if w <= width {
            return Some(*self);
        }
        let narrowed = Self::fit_width(self.size, width);
        (narrowed.screen_size().0 <= width).then_some(narrowed)
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Screen row of the status line.
    #[inline]
    pub fn status_row(&self) -> i32 {
        self.size
    }

    /// Total `(width, height)` in terminal cells, status line included.
    pub fn screen_size(&self) -> (i32, i32) {
        (self.size * self.cell_width, self.size + 1)
    }

    /// The board cell under screen position `p`, if any.
    pub fn cell_at(&self, p: Point) -> Option<Pos> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let pos = Pos::new(p.y, p.x / self.cell_width);
        (pos.row < self.size && pos.col < self.size).then_some(pos)
    }

    /// Top-left screen position of board cell `pos`.
    pub fn origin_of(&self, pos: Pos) -> Point {
        Point::new(pos.col * self.cell_width, pos.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_columns_of_a_cell_map_to_it() {
        let l = Layout::new(5, 2);
        assert_eq!(l.cell_at(Point::new(0, 0)), Some(Pos::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(1, 0)), Some(Pos::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(8, 4)), Some(Pos::new(4, 4)));
        assert_eq!(l.cell_at(Point::new(9, 3)), Some(Pos::new(3, 4)));
    }

    #[test]
    fn outside_the_board_is_none() {
        let l = Layout::new(5, 2);
        assert_eq!(l.cell_at(Point::new(10, 0)), None);
        // Status line.
        assert_eq!(l.cell_at(Point::new(0, 5)), None);
        assert_eq!(l.cell_at(Point::new(-1, 0)), None);
    }

    #[test]
    fn origin_round_trips() {
        let l = Layout::new(7, 3);
        let p = Pos::new(4, 6);
        assert_eq!(l.cell_at(l.origin_of(p)), Some(p));
        assert_eq!(l.screen_size(), (21, 8));
    }

    #[test]
    fn fit_to_keeps_a_layout_that_fits() {
        let l = Layout::new(10, 2);
        assert_eq!(l.fit_to(20, 11), Some(l));
        assert_eq!(l.fit_to(200, 60), Some(l));
    }

    #[test]
    fn fit_to_narrows_cells() {
        let l = Layout::new(10, 3);
        assert_eq!(l.fit_to(25, 11), Some(Layout::new(10, 2)));
        assert_eq!(l.fit_to(10, 11), Some(Layout::new(10, 1)));
    }

    #[test]
    fn fit_to_gives_up_when_too_small() {
        let l = Layout::new(50, 2);
        // 80x24: too short for 50 rows plus the status line.
        assert_eq!(l.fit_to(80, 24), None);
        // Tall enough, but narrower than one column per cell.
        assert_eq!(l.fit_to(40, 60), None);
    }

    #[test]
    fn fit_width_divides_evenly() {
        assert_eq!(Layout::fit_width(50, 100).cell_width(), 2);
        assert_eq!(Layout::fit_width(50, 10).cell_width(), 1);
    }
}
