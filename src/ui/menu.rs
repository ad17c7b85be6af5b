use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::shell::MenuState;
use crate::ui::theme::Theme;

pub const ITEM_COUNT: usize = 3;
pub const ITEM_VISIBILITY: usize = 0;
pub const ITEM_LOCK: usize = 1;
pub const ITEM_QUIT: usize = 2;

/// Row labels, top to bottom. The first two flip with the state they act
/// on, naming the action rather than the current value.
pub fn labels(overlay_visible: bool, locked: bool) -> [&'static str; ITEM_COUNT] {
    [
        if overlay_visible { "Hide overlay" } else { "Show overlay" },
        if locked { "Unlock" } else { "Lock" },
        "Quit",
    ]
}

/// Pops the menu at its invocation point, pulled inside the frame when it
/// would hang off an edge. A rule separates Quit from the toggles.
pub fn render(
    frame: &mut Frame,
    state: &MenuState,
    overlay_visible: bool,
    locked: bool,
    theme: &Theme,
) {
    let labels = labels(overlay_visible, locked);
    let inner = labels.iter().map(|l| l.width()).max().unwrap_or(0) + 2;
    let width = (inner + 2) as u16;
    let height = (ITEM_COUNT + 3) as u16;

    let frame_area = frame.area();
    let x = clamp_axis(state.at.x, width as i32, frame_area.width as i32);
    let y = clamp_axis(state.at.y, height as i32, frame_area.height as i32);
    let area = Rect::new(x as u16, y as u16, width, height).intersection(frame_area);
    if area.is_empty() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.menu_border))
        .style(Style::default().bg(theme.menu_bg));

    let mut lines = Vec::with_capacity(ITEM_COUNT + 1);
    for (idx, label) in labels.iter().enumerate() {
        if idx == ITEM_QUIT {
            lines.push(Line::from(Span::styled(
                "\u{2500}".repeat(inner),
                Style::default().fg(theme.menu_border),
            )));
        }
        let style = if idx == state.selected {
            Style::default()
                .fg(theme.menu_selected_fg)
                .bg(theme.menu_selected_bg)
        } else {
            Style::default().fg(theme.text_primary)
        };
        lines.push(Line::from(Span::styled(
            format!(" {label:<pad$} ", pad = inner - 2),
            style,
        )));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn clamp_axis(pos: i32, extent: i32, limit: i32) -> i32 {
    pos.min(limit - extent).max(0)
}
