use pathviz_core::Pos;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-directional unit-cost movement, so A*
/// with this estimate never re-expands a finalised cell.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
