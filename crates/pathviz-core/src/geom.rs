//! Grid coordinates: [`Pos`].

use std::fmt;

/// A `(row, col)` coordinate on the board. Rows grow down, columns grow
/// right.
///
/// Coordinates are signed so that positions just outside the board (the
/// neighbours of an edge cell, or a stray mouse click) can be represented
/// and rejected instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by `(drow, dcol)`.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned neighbours in expansion order: down, up,
    /// right, left.
    ///
    /// The order is part of the search's determinism: among frontier entries
    /// with equal f-score, earlier neighbours get earlier sequence numbers.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }

    /// Whether `other` is one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_down_up_right_left() {
        let p = Pos::new(2, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Pos::new(3, 3),
                Pos::new(1, 3),
                Pos::new(2, 4),
                Pos::new(2, 2)
            ]
        );
        assert!(p.neighbors_4().iter().all(|&n| n.is_adjacent(p)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        assert!(!Pos::new(0, 0).is_adjacent(Pos::new(1, 1)));
        assert!(!Pos::new(0, 0).is_adjacent(Pos::new(0, 0)));
    }
}
