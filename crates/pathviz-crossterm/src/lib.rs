//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_ui::Driver`],
//! drawing the board with true-colour backgrounds and turning terminal key
//! and mouse events into [`Msg`]s.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::Context;
use pathviz_ui::{Color, Driver, Frame, Key, ModMask, MouseAction, Msg, Point};

/// Maps a [`pathviz_ui::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps crossterm key modifiers to a [`ModMask`].
fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

/// Maps a crossterm [`KeyCode`] to a pathviz [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Maps a crossterm mouse event kind to a [`MouseAction`]. Drags keep track
/// of the held button so that painting and erasing can follow the pointer.
fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Main),
        MouseEventKind::Down(MouseButton::Right) => Some(MouseAction::Secondary),
        MouseEventKind::Drag(MouseButton::Left) => Some(MouseAction::MainDrag),
        MouseEventKind::Drag(MouseButton::Right) => Some(MouseAction::SecondaryDrag),
        MouseEventKind::Drag(MouseButton::Middle) | MouseEventKind::Moved => {
            Some(MouseAction::Move)
        }
        MouseEventKind::Up(_) => Some(MouseAction::Release),
        _ => None,
    }
}

/// Maps a terminal event to a [`Msg`], if it means anything to pathviz.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        // Only presses: some platforms report releases as well.
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(|key| Msg::key_with(key, to_mod_mask(modifiers))),
        Event::Key(_) => None,
        Event::Mouse(me) => {
            let action = to_mouse_action(me.kind)?;
            Some(Msg::Mouse {
                action,
                pos: Point::new(me.column as i32, me.row as i32),
            })
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end for pathviz using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        log::debug!("terminal initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg).ok();
            }
        }

        Ok(())
    }

    fn screen_size(&self) -> Option<(i32, i32)> {
        match terminal::size() {
            Ok((w, h)) => Some((w as i32, h as i32)),
            Err(e) => {
                log::warn!("cannot read the terminal size: {e}");
                None
            }
        }
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout().lock();

        for fc in &frame.cells {
            let p = fc.pos;
            let g = fc.glyph;
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(g.fg)),
                SetBackgroundColor(to_ct_color(g.bg)),
                Print(g.ch)
            )?;
        }
        queue!(stdout, ResetColor)?;

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};
    use pathviz_ui::{Action, Layout, input::translate};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::BLACK),
            CtColor::Rgb { r: 0, g: 0, b: 0 }
        );
        assert_eq!(
            to_ct_color(Color::ORANGE),
            CtColor::Rgb { r: 255, g: 165, b: 0 }
        );
    }

    #[test]
    fn space_is_its_own_key() {
        assert_eq!(to_key(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(to_key(KeyCode::Char('q')), Some(Key::Char('q')));
        assert_eq!(to_key(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(to_key(KeyCode::F(1)), None);
        assert_eq!(to_key(KeyCode::Enter), None);
    }

    #[test]
    fn modifiers_are_kept() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            to_msg(ctrl_c),
            Some(Msg::key_with(Key::Char('c'), ModMask::CTRL))
        );
        assert_eq!(
            to_mod_mask(KeyModifiers::SHIFT | KeyModifiers::ALT),
            ModMask::SHIFT | ModMask::ALT
        );
        assert_eq!(to_mod_mask(KeyModifiers::NONE), ModMask::NONE);
    }

    #[test]
    fn ctrl_c_quits_instead_of_resetting() {
        let layout = Layout::new(5, 2);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let msg = to_msg(ctrl_c).unwrap();
        assert_eq!(translate(&msg, &layout), Some(Action::Quit));

        let ctrl_x = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        let msg = to_msg(ctrl_x).unwrap();
        assert_eq!(translate(&msg, &layout), None);
    }

    #[test]
    fn drags_remember_the_button() {
        assert_eq!(
            to_msg(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 2)),
            Some(Msg::mouse(MouseAction::MainDrag, 4, 2))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Drag(MouseButton::Right), 0, 0)),
            Some(Msg::mouse(MouseAction::SecondaryDrag, 0, 0))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)),
            Some(Msg::mouse(MouseAction::Main, 1, 1))
        );
        assert_eq!(to_msg(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Middle), 0, 0)),
            None
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(to_msg(press), Some(Msg::key(Key::Char('c'))));

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_msg(release), None);
    }

    #[test]
    fn resize_becomes_screen() {
        assert_eq!(
            to_msg(Event::Resize(120, 40)),
            Some(Msg::Screen {
                width: 120,
                height: 40
            })
        );
    }
}
