//! The interactive session: owns the board and the current endpoints, and
//! turns user [`Command`]s into grid mutations and search runs.

use pathviz_core::{CellState, Context, Error, Grid, Pos, Precondition, Result};
use pathviz_search::{PathResult, SearchEngine};

/// A discrete user command, with coordinates already resolved to cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Place the next missing endpoint, or a barrier once both exist.
    Paint(Pos),
    /// Return a cell to empty.
    Erase(Pos),
    /// Search from start to end.
    Run,
    /// Discard the board and both endpoints.
    Reset,
    /// Remove frontier/visited/path markers, keeping endpoints and barriers.
    ClearSearch,
}

/// Which endpoints are currently placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    NoEndpoints,
    StartOnly,
    EndOnly,
    /// Both placed; painting adds barriers and a search may run.
    Ready,
}

/// What a [`Command::Paint`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaintOutcome {
    Start,
    End,
    Barrier,
    /// The target was not empty; nothing changed.
    Ignored,
}

/// What a [`Session::apply`] call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Painted(Pos, PaintOutcome),
    /// The cell was erased; carries the state it had before.
    Erased(Pos, CellState),
    Searched(PathResult),
    Reset,
    /// Search markers removed; carries how many cells were cleared.
    Cleared(usize),
}

/// A single user session over one board.
///
/// Invariant: `start` and `end`, when set, name the only
/// [`CellState::Start`] and [`CellState::End`] cells on the grid.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Session {
    /// A fresh session on an empty `size`×`size` board.
    pub fn new(size: i32) -> Self {
        Self {
            grid: Grid::new(size),
            start: None,
            end: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    pub fn phase(&self) -> Phase {
        match (self.start, self.end) {
            (None, None) => Phase::NoEndpoints,
            (Some(_), None) => Phase::StartOnly,
            (None, Some(_)) => Phase::EndOnly,
            (Some(_), Some(_)) => Phase::Ready,
        }
    }

    /// Paint an empty cell: the start if none is placed, else the end if
    /// none is placed, else a barrier. Any other target is left alone.
    pub fn paint(&mut self, pos: Pos) -> Result<PaintOutcome> {
        if self.grid.state(pos)? != CellState::Empty {
            return Ok(PaintOutcome::Ignored);
        }
        let outcome = if self.start.is_none() {
            self.start = Some(pos);
            PaintOutcome::Start
        } else if self.end.is_none() {
            self.end = Some(pos);
            PaintOutcome::End
        } else {
            PaintOutcome::Barrier
        };
        let state = match outcome {
            PaintOutcome::Start => CellState::Start,
            PaintOutcome::End => CellState::End,
            _ => CellState::Barrier,
        };
        self.grid.set_state(pos, state)?;
        log::trace!("painted {pos} as {state:?}");
        Ok(outcome)
    }

    /// Return the cell at `pos` to empty, forgetting it as an endpoint if it
    /// was one. Returns the state it had before.
    pub fn erase(&mut self, pos: Pos) -> Result<CellState> {
        let previous = self.grid.state(pos)?;
        self.grid.set_state(pos, CellState::Empty)?;
        if self.start == Some(pos) {
            self.start = None;
        } else if self.end == Some(pos) {
            self.end = None;
        }
        Ok(previous)
    }

    /// Replace the board with a fresh one of the same size and forget both
    /// endpoints.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.start = None;
        self.end = None;
        log::info!("board reset");
    }

    /// Remove the markers a previous search left behind.
    pub fn clear_search(&mut self) -> usize {
        self.grid.clear_search_marks()
    }

    /// The endpoints of the next search, or why it cannot run.
    pub fn check_runnable(&self) -> Result<(Pos, Pos)> {
        let start = self
            .start
            .ok_or(Error::InvalidRunPrecondition(Precondition::MissingStart))?;
        let end = self
            .end
            .ok_or(Error::InvalidRunPrecondition(Precondition::MissingEnd))?;
        if self.grid.has_search_marks() {
            return Err(Error::InvalidRunPrecondition(Precondition::StaleMarks));
        }
        Ok((start, end))
    }

    /// Recompute every neighbour cache, then search from start to end,
    /// calling `on_step` after each step. Fails without touching the board
    /// if [`check_runnable`](Self::check_runnable) does.
    pub fn run_search<F>(&mut self, ctx: &Context, on_step: F) -> Result<PathResult>
    where
        F: FnMut(&Grid),
    {
        let (start, end) = self.check_runnable()?;
        self.grid.recompute_all_neighbors();
        SearchEngine::with_context(ctx.clone()).run(&mut self.grid, start, end, on_step)
    }

    /// Execute `cmd`. `on_step` is only called for [`Command::Run`].
    pub fn apply<F>(&mut self, cmd: Command, ctx: &Context, on_step: F) -> Result<Event>
    where
        F: FnMut(&Grid),
    {
        match cmd {
            Command::Paint(pos) => self.paint(pos).map(|o| Event::Painted(pos, o)),
            Command::Erase(pos) => self.erase(pos).map(|s| Event::Erased(pos, s)),
            Command::Run => self.run_search(ctx, on_step).map(Event::Searched),
            Command::Reset => {
                self.reset();
                Ok(Event::Reset)
            }
            Command::ClearSearch => Ok(Event::Cleared(self.clear_search())),
        }
    }
}
