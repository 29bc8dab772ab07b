//! Translation of raw input [`Msg`]s into session [`Command`]s.
//!
//! | Input | Action |
//! |---|---|
//! | left button press / drag on a cell | [`Command::Paint`] |
//! | right button press / drag on a cell | [`Command::Erase`] |
//! | `Space` | [`Command::Run`] |
//! | `c` | [`Command::Reset`] |
//! | `x` | [`Command::ClearSearch`] |
//! | `q`, `Esc`, `Ctrl-C`, [`Msg::Quit`] | [`Action::Quit`] |
//!
//! Any other key pressed together with `Ctrl` or `Alt` is ignored.

use crate::layout::Layout;
use crate::messages::{Key, ModMask, MouseAction, Msg};
use crate::session::Command;

/// What the application should do with an input message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Quit,
}

/// Map `msg` to an [`Action`], or `None` if it means nothing here (mouse
/// events off the board, unbound keys, resizes).
pub fn translate(msg: &Msg, layout: &Layout) -> Option<Action> {
    match msg {
        Msg::Quit => Some(Action::Quit),
        Msg::KeyDown { key, modifiers } => match key {
            Key::Char('c' | 'C') if modifiers.contains(ModMask::CTRL) => Some(Action::Quit),
            _ if modifiers.contains(ModMask::CTRL) || modifiers.contains(ModMask::ALT) => None,
            Key::Escape | Key::Char('q') | Key::Char('Q') => Some(Action::Quit),
            Key::Space => Some(Action::Command(Command::Run)),
            Key::Char('c') | Key::Char('C') => Some(Action::Command(Command::Reset)),
            Key::Char('x') | Key::Char('X') => Some(Action::Command(Command::ClearSearch)),
            _ => None,
        },
        Msg::Mouse { action, pos } => {
            let cell = layout.cell_at(*pos)?;
            match action {
                MouseAction::Main | MouseAction::MainDrag => {
                    Some(Action::Command(Command::Paint(cell)))
                }
                MouseAction::Secondary | MouseAction::SecondaryDrag => {
                    Some(Action::Command(Command::Erase(cell)))
                }
                _ => None,
            }
        }
        Msg::Screen { .. } | Msg::Init => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Pos;

    fn layout() -> Layout {
        Layout::new(5, 2)
    }

    #[test]
    fn keys() {
        let l = layout();
        assert_eq!(
            translate(&Msg::key(Key::Space), &l),
            Some(Action::Command(Command::Run))
        );
        assert_eq!(
            translate(&Msg::key(Key::Char('c')), &l),
            Some(Action::Command(Command::Reset))
        );
        assert_eq!(
            translate(&Msg::key(Key::Char('x')), &l),
            Some(Action::Command(Command::ClearSearch))
        );
        assert_eq!(translate(&Msg::key(Key::Escape), &l), Some(Action::Quit));
        assert_eq!(translate(&Msg::key(Key::Char('q')), &l), Some(Action::Quit));
        assert_eq!(translate(&Msg::Quit, &l), Some(Action::Quit));
        assert_eq!(translate(&Msg::key(Key::Char('z')), &l), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let l = layout();
        assert_eq!(
            translate(&Msg::key_with(Key::Char('c'), ModMask::CTRL), &l),
            Some(Action::Quit)
        );
        assert_eq!(
            translate(&Msg::key_with(Key::Char('x'), ModMask::CTRL), &l),
            None
        );
        assert_eq!(
            translate(&Msg::key_with(Key::Char('c'), ModMask::ALT), &l),
            None
        );
        assert_eq!(translate(&Msg::key_with(Key::Space, ModMask::CTRL), &l), None);
        // Shift alone still reaches the bindings.
        assert_eq!(
            translate(&Msg::key_with(Key::Char('C'), ModMask::SHIFT), &l),
            Some(Action::Command(Command::Reset))
        );
    }

    #[test]
    fn mouse_buttons_paint_and_erase() {
        let l = layout();
        assert_eq!(
            translate(&Msg::mouse(MouseAction::Main, 3, 1), &l),
            Some(Action::Command(Command::Paint(Pos::new(1, 1))))
        );
        assert_eq!(
            translate(&Msg::mouse(MouseAction::MainDrag, 4, 1), &l),
            Some(Action::Command(Command::Paint(Pos::new(1, 2))))
        );
        assert_eq!(
            translate(&Msg::mouse(MouseAction::SecondaryDrag, 0, 4), &l),
            Some(Action::Command(Command::Erase(Pos::new(4, 0))))
        );
        assert_eq!(translate(&Msg::mouse(MouseAction::Move, 0, 0), &l), None);
        assert_eq!(translate(&Msg::mouse(MouseAction::Release, 0, 0), &l), None);
    }

    #[test]
    fn clicks_off_the_board_are_dropped() {
        let l = layout();
        assert_eq!(translate(&Msg::mouse(MouseAction::Main, 10, 0), &l), None);
        assert_eq!(translate(&Msg::mouse(MouseAction::Main, 0, 5), &l), None);
    }
}
