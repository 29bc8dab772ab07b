//! The [`Grid`] type, a square board of [`Cell`]s.
//!
//! Cells are stored row-major in a flat vector; `(row, col)` maps to
//! `row * size + col`. The search engine keys its per-run bookkeeping by the
//! same index.

use crate::cell::{Cell, CellState};
use crate::error::{Error, Result};
use crate::geom::Pos;

/// An N×N board. N is fixed at construction; a reset builds a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: i32,
}

impl Grid {
    /// Create a `size`×`size` grid with every cell [`CellState::Empty`].
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let mut cells = Vec::with_capacity((size * size) as usize);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(Pos::new(row, col)));
            }
        }
        log::debug!("built {size}x{size} grid");
        Self { cells, size }
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.size && p.col < self.size
    }

    /// Row-major index of `p`, or `None` if it is off the board.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.size + p.col) as usize)
    }

    /// Position of the cell at row-major index `idx`.
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn pos_at(&self, idx: usize) -> Pos {
        self.cells[idx].pos()
    }

    /// The cell at row-major index `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Mutable access to the cell at row-major index `idx`.
    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    /// Like [`index`](Grid::index), but reports an [`Error::OutOfRange`].
    pub fn checked_index(&self, p: Pos) -> Result<usize> {
        self.index(p).ok_or(Error::OutOfRange {
            row: p.row,
            col: p.col,
            size: self.size,
        })
    }

    /// The cell at `(row, col)`.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell> {
        self.cell(Pos::new(row, col))
    }

    /// The cell at `p`.
    pub fn cell(&self, p: Pos) -> Result<&Cell> {
        let i = self.checked_index(p)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    pub fn cell_mut(&mut self, p: Pos) -> Result<&mut Cell> {
        let i = self.checked_index(p)?;
        Ok(&mut self.cells[i])
    }

    /// Lifecycle state of the cell at `p`.
    pub fn state(&self, p: Pos) -> Result<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Overwrite the state of the cell at `p`.
    pub fn set_state(&mut self, p: Pos, state: CellState) -> Result<()> {
        self.cell_mut(p)?.set_state(state);
        Ok(())
    }

    /// All cells, row ascending then column ascending.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Append the in-bounds, traversable axis neighbours of `p` to `buf`,
    /// in [`Pos::neighbors_4`] order.
    pub fn traversable_neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if let Some(i) = self.index(n) {
                if self.cells[i].is_traversable() {
                    buf.push(n);
                }
            }
        }
    }

    /// The in-bounds, traversable axis neighbours of `p`.
    pub fn traversable_neighbors(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.traversable_neighbors_into(p, &mut buf);
        buf
    }

    /// Rebuild the neighbour cache of the cell at `p`.
    pub fn recompute_neighbors(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        let neighbors = self.traversable_neighbors(p);
        self.cells[i].set_neighbors(neighbors);
        Ok(())
    }

    /// Rebuild every cell's neighbour cache. Must run before each search.
    pub fn recompute_all_neighbors(&mut self) {
        let all: Vec<Vec<Pos>> = self
            .cells
            .iter()
            .map(|c| self.traversable_neighbors(c.pos()))
            .collect();
        for (cell, neighbors) in self.cells.iter_mut().zip(all) {
            cell.set_neighbors(neighbors);
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Whether any frontier/visited/path markers remain from a search.
    pub fn has_search_marks(&self) -> bool {
        self.cells.iter().any(|c| c.state().is_search_mark())
    }

    /// Return every frontier/visited/path cell to [`CellState::Empty`],
    /// leaving endpoints and barriers alone. Returns how many were cleared.
    pub fn clear_search_marks(&mut self) -> usize {
        let mut cleared = 0;
        for c in self.cells.iter_mut().filter(|c| c.state().is_search_mark()) {
            c.set_state(CellState::Empty);
            cleared += 1;
        }
        cleared
    }
}
