use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::event::Event;
use crate::geom::Point;
use crate::ui::menu;
use crate::ui::shell::TermShell;

/// Keyboard gestures standing in for tray interactions: Space or Enter is
/// the primary activation, `m` or a right-click is the context one. While
/// the menu popup is open the same keys drive its rows instead; the popup
/// itself is surface state, so navigation never reaches the controller.
pub fn map_key(key: KeyEvent, shell: &mut TermShell) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        shell.close_menu();
        return Some(Event::MenuQuit);
    }

    if shell.menu_open() {
        return map_menu_key(key, shell);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Event::PrimaryActivate),
        KeyCode::Char('m') => Some(Event::ContextActivate),
        KeyCode::Char('l') => Some(Event::MenuToggleLock),
        KeyCode::Char('q') => Some(Event::MenuQuit),
        _ => None,
    }
}

fn map_menu_key(key: KeyEvent, shell: &mut TermShell) -> Option<Event> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            shell.close_menu();
            None
        }
        KeyCode::Up => {
            shell.menu_prev();
            None
        }
        KeyCode::Down => {
            shell.menu_next();
            None
        }
        KeyCode::Enter => {
            let selected = shell.menu_selected();
            shell.close_menu();
            selected.map(item_event)
        }
        KeyCode::Char(' ') => {
            shell.close_menu();
            Some(Event::PrimaryActivate)
        }
        KeyCode::Char('l') => {
            shell.close_menu();
            Some(Event::MenuToggleLock)
        }
        KeyCode::Char('q') => {
            shell.close_menu();
            Some(Event::MenuQuit)
        }
        _ => None,
    }
}

fn item_event(selected: usize) -> Event {
    match selected {
        menu::ITEM_VISIBILITY => Event::PrimaryActivate,
        menu::ITEM_LOCK => Event::MenuToggleLock,
        _ => Event::MenuQuit,
    }
}

/// Left presses are hit-tested against the drawn overlay before they become
/// drag input; presses on empty desktop stay in the surface. Right presses
/// open the menu wherever the pointer is.
pub fn map_mouse(mouse: MouseEvent, shell: &mut TermShell) -> Option<Event> {
    let at = Point::new(mouse.column as i32, mouse.row as i32);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => {
            shell.note_pointer(at);
            Some(Event::ContextActivate)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if shell.menu_open() {
                // Click-away dismissal; rows are driven by the keyboard.
                shell.close_menu();
                return None;
            }
            shell.note_pointer(at);
            if shell.overlay_hit(at) {
                Some(Event::MouseDown(at))
            } else {
                None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => Some(Event::MouseMove(at)),
        MouseEventKind::Up(MouseButton::Left) => Some(Event::MouseUp),
        _ => None,
    }
}
