use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::format::OverlayFields;
use crate::geom::{Point, Size};
use crate::ui::theme::Theme;

/// Floating readings box. Drawn to whatever size its current field strings
/// need, like a widget that re-fits itself after every update.
///
/// Row one pairs upload with CPU, row two pairs download with memory.
pub fn size_for(fields: &OverlayFields) -> Size {
    let [top, bottom] = plain_lines(fields);
    let inner = top.width().max(bottom.width()) as i32;
    // Side padding plus borders around two content rows.
    Size::new(inner + 4, 4)
}

pub fn render(
    frame: &mut Frame,
    origin: Point,
    fields: &OverlayFields,
    locked: bool,
    theme: &Theme,
) {
    let size = size_for(fields);
    let target = Rect::new(
        origin.x.max(0) as u16,
        origin.y.max(0) as u16,
        size.width as u16,
        size.height as u16,
    );
    let area = target.intersection(frame.area());
    if area.is_empty() {
        return;
    }

    let border = if locked {
        theme.overlay_border_locked
    } else {
        theme.overlay_border_unlocked
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.overlay_bg))
        .padding(Padding::horizontal(1));

    let value = Style::default().fg(theme.text_primary);
    let label = Style::default().fg(theme.text_secondary);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "\u{2191} ",
                Style::default()
                    .fg(theme.upload_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(fields.upload.clone(), value),
            Span::styled("  CPU ", label),
            Span::styled(fields.cpu.clone(), value),
        ]),
        Line::from(vec![
            Span::styled(
                "\u{2193} ",
                Style::default()
                    .fg(theme.download_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(fields.download.clone(), value),
            Span::styled("  MEM ", label),
            Span::styled(fields.mem.clone(), value),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The two rows as plain text, the source of truth for sizing.
fn plain_lines(fields: &OverlayFields) -> [String; 2] {
    [
        format!("\u{2191} {}  CPU {}", fields.upload, fields.cpu),
        format!("\u{2193} {}  MEM {}", fields.download, fields.mem),
    ]
}
