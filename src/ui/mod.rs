pub mod input;
pub mod menu;
pub mod overlay_box;
pub mod pump;
pub mod shell;
pub mod statusbar;
pub mod theme;
pub mod tray_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::controller::TrayController;
use crate::metrics::MetricSource;
use crate::ui::shell::TermShell;
use crate::ui::theme::Theme;

/// Whole-frame composition: tray panel up top, hint bar along the bottom,
/// and the floating pieces painted last so they sit above everything.
pub fn draw<S: MetricSource>(
    frame: &mut Frame,
    controller: &TrayController<S>,
    shell: &TermShell,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    tray_panel::render(frame, chunks[0], shell.tooltip(), theme);
    statusbar::render(
        frame,
        chunks[2],
        shell.overlay_visible(),
        controller.overlay().locked(),
        shell.menu_open(),
        theme,
    );

    if shell.overlay_visible() {
        overlay_box::render(
            frame,
            shell.overlay_origin(),
            shell.fields(),
            controller.overlay().locked(),
            theme,
        );
    }
    if let Some(menu_state) = shell.menu() {
        menu::render(
            frame,
            menu_state,
            shell.overlay_visible(),
            controller.overlay().locked(),
            theme,
        );
    }
}
