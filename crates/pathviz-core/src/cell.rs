//! The [`Cell`] type, one board square with its lifecycle state.

use crate::geom::Pos;
use crate::grid::Grid;

/// Lifecycle state of a cell.
///
/// This is a closed set: the front-end maps each state to a colour, but the
/// search only ever reasons about the state itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered, waiting in the frontier.
    Frontier,
    /// Expanded.
    Visited,
    /// On the reconstructed shortest path.
    Path,
}

impl CellState {
    /// Whether this state was written by a search run.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }
}

/// A board square: fixed coordinates, a mutable [`CellState`] and a cached
/// list of traversable neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    state: CellState,
    neighbors: Vec<Pos>,
}

impl Cell {
    /// Create an empty cell at `pos` with no cached neighbours.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Overwrite the lifecycle state.
    ///
    /// No check is made against the one-start/one-end rule; the session is
    /// responsible for that.
    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Whether a path may pass through this cell.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.state != CellState::Barrier
    }

    /// Cached traversable neighbours, as of the last recompute.
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    /// Rebuild the neighbour cache from `grid`.
    ///
    /// For cells owned by `grid` itself use
    /// [`Grid::recompute_neighbors`], which avoids borrowing the grid twice.
    pub fn recompute_neighbors(&mut self, grid: &Grid) {
        self.neighbors.clear();
        grid.traversable_neighbors_into(self.pos, &mut self.neighbors);
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Pos>) {
        self.neighbors = neighbors;
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_round_trip() {
        let json = serde_json::to_string(&CellState::Frontier).unwrap();
        assert_eq!(json, "\"Frontier\"");
        let back: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellState::Frontier);
    }
}
