//! Field rendering for the contact form

use crate::state::ContactField;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one contact field. Empty inactive fields show their placeholder;
/// a locked field (send in flight) never shows the cursor.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: ContactField,
    value: &str,
    is_active: bool,
    locked: bool,
    palette: &Palette,
) {
    let show_cursor = is_active && !locked;
    let cursor = Span::styled(if show_cursor { "▌" } else { "" }, palette.accent());

    let value_style = if locked {
        palette.muted()
    } else {
        Style::default().fg(palette.fg)
    };

    let mut lines: Vec<Line> = if value.is_empty() && !show_cursor {
        vec![Line::from(Span::styled(
            field.placeholder(),
            palette.muted().add_modifier(Modifier::ITALIC),
        ))]
    } else if field.is_multiline() {
        // `lines()` drops a trailing newline; keep the empty last line for the cursor
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value.to_string(), value_style))]
    };

    if show_cursor {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(palette.border(is_active));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
