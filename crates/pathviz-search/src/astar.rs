use pathviz_core::{CellState, Context, Error, Grid, Pos, Precondition, Result};

use crate::distance::manhattan;
use crate::frontier::Frontier;

/// Sentinel score meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// How a search run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The end cell was reached and the path marked.
    Found,
    /// The frontier emptied without reaching the end cell.
    NoPath,
    /// Cancellation was requested through the engine's [`Context`].
    Aborted,
}

/// Result of [`SearchEngine::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    pub outcome: Outcome,
    /// Cells from the end back to the start, both inclusive. Empty unless
    /// the outcome is [`Outcome::Found`].
    pub path: Vec<Pos>,
    /// Cells in the order they were popped from the frontier.
    pub expanded: Vec<Pos>,
}

impl PathResult {
    #[inline]
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Bookkeeping for a single run, indexed by row-major cell index.
struct SearchRun {
    g: Vec<i32>,
    f: Vec<i32>,
    came_from: Vec<Option<usize>>,
    frontier: Frontier,
}

impl SearchRun {
    fn new(cells: usize) -> Self {
        Self {
            g: vec![UNREACHABLE; cells],
            f: vec![UNREACHABLE; cells],
            came_from: vec![None; cells],
            frontier: Frontier::new(cells),
        }
    }
}

/// A* over a [`Grid`], observable one expansion at a time.
///
/// The engine holds no per-run state; every call to [`run`](Self::run)
/// starts from scratch. Its only configuration is the [`Context`] it polls
/// for cancellation.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    ctx: Context,
}

impl SearchEngine {
    /// An engine with its own, never-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that stops as soon as `ctx` is cancelled.
    pub fn with_context(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Search from `start` to `end`.
    ///
    /// Neighbour caches must already be current
    /// ([`Grid::recompute_all_neighbors`]); the engine reads them as-is.
    ///
    /// While searching, newly discovered cells are marked
    /// [`CellState::Frontier`] and expanded cells (other than `start`)
    /// [`CellState::Visited`]; `on_step` is called after each expansion. On
    /// success every cell strictly between the endpoints is marked
    /// [`CellState::Path`], calling `on_step` after each one. The endpoint
    /// markers themselves are never overwritten: the end cell joins the
    /// frontier but keeps its [`CellState::End`] marker.
    ///
    /// Fails with [`Error::OutOfRange`] or
    /// [`Error::InvalidRunPrecondition`] before touching the grid. A board
    /// with no route is reported as [`Outcome::NoPath`], not as an error.
    pub fn run<F>(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        mut on_step: F,
    ) -> Result<PathResult>
    where
        F: FnMut(&Grid),
    {
        let start_idx = grid.checked_index(start)?;
        let goal_idx = grid.checked_index(end)?;
        if start_idx == goal_idx {
            return Err(Error::InvalidRunPrecondition(Precondition::StartIsEnd));
        }

        let n = grid.size();
        log::debug!("A* from {start} to {end} on a {n}x{n} grid");

        let mut run = SearchRun::new(grid.len());
        run.g[start_idx] = 0;
        run.f[start_idx] = manhattan(start, end);
        run.frontier.push(start_idx, run.f[start_idx]);

        let mut expanded = Vec::new();
        let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

        let outcome = loop {
            if self.ctx.is_done() {
                break Outcome::Aborted;
            }

            let Some(current) = run.frontier.pop() else {
                break Outcome::NoPath;
            };
            let ci = current.idx;
            let current_pos = grid.pos_at(ci);
            expanded.push(current_pos);

            if ci == goal_idx {
                break Outcome::Found;
            }

            let current_g = run.g[ci];
            nbuf.clear();
            if let Some(cell) = grid.get(ci) {
                nbuf.extend_from_slice(cell.neighbors());
            }

            for &np in nbuf.iter() {
                // A cache built for a different grid size may point off the board.
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;
                if tentative_g >= run.g[ni] {
                    continue;
                }

                run.came_from[ni] = Some(ci);
                run.g[ni] = tentative_g;
                run.f[ni] = tentative_g + manhattan(np, end);

                if !run.frontier.contains(ni) {
                    run.frontier.push(ni, run.f[ni]);
                    if ni != goal_idx {
                        mark(grid, ni, CellState::Frontier);
                    }
                }
            }

            on_step(&*grid);

            if ci != start_idx {
                mark(grid, ci, CellState::Visited);
            }
        };

        let path = if outcome == Outcome::Found {
            reconstruct_path(grid, &run.came_from, start_idx, goal_idx, &mut on_step)
        } else {
            Vec::new()
        };

        match outcome {
            Outcome::Found => log::info!(
                "path found: {} cells, {} expanded",
                path.len(),
                expanded.len()
            ),
            Outcome::NoPath => log::info!("no path: {} cells expanded", expanded.len()),
            Outcome::Aborted => log::info!("search aborted after {} expansions", expanded.len()),
        }

        Ok(PathResult {
            outcome,
            path,
            expanded,
        })
    }
}

fn mark(grid: &mut Grid, idx: usize, state: CellState) {
    if let Some(cell) = grid.get_mut(idx) {
        cell.set_state(state);
    }
}

/// Follow predecessors from the goal back to the start, marking the cells in
/// between as [`CellState::Path`] and calling `on_step` after each one.
fn reconstruct_path<F>(
    grid: &mut Grid,
    came_from: &[Option<usize>],
    start_idx: usize,
    goal_idx: usize,
    on_step: &mut F,
) -> Vec<Pos>
where
    F: FnMut(&Grid),
{
    let mut path = vec![grid.pos_at(goal_idx)];
    let mut ci = goal_idx;
    while let Some(prev) = came_from[ci] {
        ci = prev;
        path.push(grid.pos_at(ci));
        if ci == start_idx {
            break;
        }
        mark(grid, ci, CellState::Path);
        on_step(&*grid);
    }
    mark(grid, goal_idx, CellState::End);
    path
}
