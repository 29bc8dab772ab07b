//! Error taxonomy shared by the grid, the search engine and the session.
//!
//! A search that finds no path is *not* an error; see the search crate's
//! `Outcome`.

use std::fmt;

/// Convenience alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by board and search operations.
///
/// Every variant is detected before any state is mutated, so a caller can
/// reject the offending command and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A coordinate lies outside `[0, size)` on either axis.
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfRange { row: i32, col: i32, size: i32 },
    /// A search was requested in a state that cannot support it.
    #[error("cannot run search: {0}")]
    InvalidRunPrecondition(Precondition),
}

/// The unmet requirement behind [`Error::InvalidRunPrecondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precondition {
    MissingStart,
    MissingEnd,
    /// Start and end are the same cell.
    StartIsEnd,
    /// Frontier/visited/path markers from an earlier run are still on the
    /// board.
    StaleMarks,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingStart => "no start cell placed",
            Self::MissingEnd => "no end cell placed",
            Self::StartIsEnd => "start and end are the same cell",
            Self::StaleMarks => "markers from the previous run are still shown",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_well() {
        let e = Error::OutOfRange {
            row: 5,
            col: -1,
            size: 5,
        };
        assert_eq!(e.to_string(), "cell (5, -1) is outside the 5x5 grid");

        let e = Error::InvalidRunPrecondition(Precondition::MissingEnd);
        assert_eq!(e.to_string(), "cannot run search: no end cell placed");
    }
}
