//! Drawing the board: [`Color`], [`Glyph`], [`Canvas`], and diff [`Frame`]s.

use pathviz_core::{CellState, Grid};

use crate::layout::Layout;
use crate::messages::Point;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB), or the terminal default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own default colour. Distinct from black.
    pub const DEFAULT: Self = Self(u32::MAX);

    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const ORANGE: Self = Self::from_rgb(255, 165, 0);
    pub const TURQUOISE: Self = Self::from_rgb(64, 224, 208);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const PURPLE: Self = Self::from_rgb(128, 0, 128);
    pub const GREY: Self = Self::from_rgb(128, 128, 128);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fill colour for a cell in `state`.
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::WHITE,
        CellState::Barrier => Color::BLACK,
        CellState::Start => Color::ORANGE,
        CellState::End => Color::TURQUOISE,
        CellState::Frontier => Color::GREEN,
        CellState::Visited => Color::RED,
        CellState::Path => Color::PURPLE,
    }
}

// ---------------------------------------------------------------------------
// Glyph / Canvas
// ---------------------------------------------------------------------------

/// One terminal cell: a character with foreground and background colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT,
            bg: Color::DEFAULT,
        }
    }
}

/// A full screen's worth of glyphs, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// A blank canvas.
    pub fn new(width: i32, height: i32) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        Self {
            glyphs: vec![Glyph::default(); (w * h) as usize],
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// The glyph at `p`, or the default glyph off-canvas.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op off-canvas.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Write `text` starting at `p`, clipped at the right edge.
    pub fn print(&mut self, p: Point, text: &str, fg: Color, bg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let x = p.x + i as i32;
            if x >= self.width {
                break;
            }
            self.set(Point::new(x, p.y), Glyph { ch, fg, bg });
        }
    }
}

/// Render `grid` and a status line according to `layout`.
pub fn draw(grid: &Grid, layout: &Layout, status: &str) -> Canvas {
    let (w, h) = layout.screen_size();
    let mut canvas = Canvas::new(w, h);
    for cell in grid.cells() {
        let origin = layout.origin_of(cell.pos());
        let glyph = Glyph {
            ch: ' ',
            fg: Color::BLACK,
            bg: state_color(cell.state()),
        };
        for dx in 0..layout.cell_width() {
            canvas.set(Point::new(origin.x + dx, origin.y), glyph);
        }
    }
    let status_row = Point::new(0, layout.status_row());
    canvas.print(status_row, status, Color::WHITE, Color::DEFAULT);
    canvas
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The glyphs of `curr` that differ from `prev`. If the canvases differ in
/// size every glyph of `curr` is included.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let full = prev.width != curr.width || prev.height != curr.height;
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let p = Point::new(x, y);
            let g = curr.at(p);
            if full || prev.at(p) != g {
                cells.push(FrameCell { glyph: g, pos: p });
            }
        }
    }
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Pos;

    #[test]
    fn color_round_trip() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!((c.r(), c.g(), c.b()), (0xAB, 0xCD, 0xEF));
        assert_ne!(Color::BLACK, Color::DEFAULT);
    }

    #[test]
    fn every_state_has_its_own_color() {
        let states = [
            CellState::Empty,
            CellState::Barrier,
            CellState::Start,
            CellState::End,
            CellState::Frontier,
            CellState::Visited,
            CellState::Path,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(state_color(*a), state_color(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn draw_fills_both_columns_of_a_cell() {
        let mut grid = Grid::new(3);
        grid.set_state(Pos::new(1, 2), CellState::Barrier).unwrap();
        let layout = Layout::new(3, 2);
        let canvas = draw(&grid, &layout, "hi");
        assert_eq!((canvas.width(), canvas.height()), (6, 4));
        assert_eq!(canvas.at(Point::new(4, 1)).bg, Color::BLACK);
        assert_eq!(canvas.at(Point::new(5, 1)).bg, Color::BLACK);
        assert_eq!(canvas.at(Point::new(3, 1)).bg, Color::WHITE);
        assert_eq!(canvas.at(Point::new(0, 3)).ch, 'h');
        assert_eq!(canvas.at(Point::new(1, 3)).ch, 'i');
    }

    #[test]
    fn status_is_clipped() {
        let layout = Layout::new(2, 1);
        let canvas = draw(&Grid::new(2), &layout, "toolong");
        assert_eq!(canvas.at(Point::new(1, 2)).ch, 'o');
        assert_eq!(canvas.at(Point::new(2, 2)), Glyph::default());
    }

    #[test]
    fn compute_frame_diff() {
        let layout = Layout::new(3, 2);
        let mut grid = Grid::new(3);
        let a = draw(&grid, &layout, "");
        grid.set_state(Pos::new(0, 0), CellState::Start).unwrap();
        let b = draw(&grid, &layout, "");
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 2);
        assert_eq!(frame.cells[0].pos, Point::new(0, 0));
        assert_eq!(frame.cells[1].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].glyph.bg, Color::ORANGE);
        assert!(compute_frame(&b, &b).is_empty());
    }

    #[test]
    fn size_change_forces_full_frame() {
        let a = Canvas::new(0, 0);
        let b = draw(&Grid::new(2), &Layout::new(2, 2), "");
        assert_eq!(compute_frame(&a, &b).cells.len(), (4 * 3) as usize);
    }
}
