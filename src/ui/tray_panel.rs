use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::ui::theme::Theme;

/// Stand-in for the tray icon: a fixed panel whose body is the current
/// tooltip text, error lines tinted. Hovering a real tray icon would show
/// the same thing.
pub fn render(frame: &mut Frame, area: Rect, tooltip: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.panel_border))
        .title(Span::styled(
            " trayhud ",
            Style::default()
                .fg(theme.panel_title_fg)
                .bg(theme.panel_title_bg)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = if tooltip.is_empty() {
        "collecting\u{2026}"
    } else {
        tooltip
    };
    let style = if body.starts_with("Error:") {
        Style::default().fg(theme.status_err).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_primary)
    };
    let lines: Vec<Line> = body
        .lines()
        .map(|l| Line::from(Span::styled(format!(" {l}"), style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
