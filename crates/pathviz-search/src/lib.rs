//! Step-observable A* search for the pathviz visualiser.
//!
//! [`SearchEngine::run`] searches a [`Grid`](pathviz_core::Grid) from a start
//! cell to an end cell on a 4-directional, unit-cost board, writing its
//! progress into the cells' lifecycle states and calling back after every
//! expansion so a front-end can animate it.
//!
//! Expansion order is fully deterministic: the frontier is ordered by
//! `(f-score, insertion sequence)`, and neighbours are relaxed in the order
//! cached on each cell.

mod astar;
mod distance;
mod frontier;

pub use astar::{Outcome, PathResult, SearchEngine, UNREACHABLE};
pub use distance::manhattan;
