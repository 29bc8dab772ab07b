//! **pathviz-core**: the board model of the pathviz A* visualiser.
//!
//! This crate provides the types shared by the search engine and the
//! interactive front-end: grid coordinates, cells with their lifecycle
//! state, the square grid that owns them, the error taxonomy, and a
//! cooperative cancellation token.

pub mod cell;
pub mod context;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use context::Context;
pub use error::{Error, Precondition, Result};
pub use geom::Pos;
pub use grid::Grid;
