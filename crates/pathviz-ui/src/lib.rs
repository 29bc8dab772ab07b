//! **pathviz-ui**: the interactive front-end of the pathviz visualiser,
//! independent of any particular terminal library.
//!
//! A [`Session`] owns the board and applies user [`Command`]s. Raw input
//! [`Msg`]s coming from a [`Driver`] are mapped to commands by
//! [`input::translate`], and the board is drawn to a [`Canvas`] whose changes
//! are flushed back to the driver as [`Frame`]s by the [`App`] loop.

pub mod app;
pub mod input;
pub mod layout;
pub mod messages;
pub mod render;
pub mod session;

pub use app::{App, AppConfig, Driver, FRAME_INTERVAL};
pub use input::Action;
pub use layout::{DEFAULT_CELL_WIDTH, Layout};
pub use messages::*;
pub use render::{Canvas, Color, Frame, FrameCell, Glyph, compute_frame, state_color};
pub use session::{Command, Event, PaintOutcome, Phase, Session};
