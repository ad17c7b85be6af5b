use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    overlay_visible: bool,
    locked: bool,
    menu_open: bool,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    let mut spans = Vec::new();
    if menu_open {
        spans.extend(pill_spans("\u{2191}\u{2193}", "Navigate", theme));
        spans.extend(pill_spans("Enter", "Select", theme));
        spans.extend(pill_spans("Esc", "Close", theme));
    } else {
        spans.extend(pill_spans("Space", if overlay_visible { "Hide" } else { "Show" }, theme));
        spans.extend(pill_spans("m", "Menu", theme));
        spans.extend(pill_spans("l", if locked { "Unlock" } else { "Lock" }, theme));
        spans.extend(pill_spans("q", "Quit", theme));
        if overlay_visible {
            let state = if locked {
                " locked".to_string()
            } else {
                " unlocked \u{00b7} drag the box to move it".to_string()
            };
            spans.push(Span::styled(
                state,
                Style::default().fg(theme.text_secondary).add_modifier(Modifier::ITALIC),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
