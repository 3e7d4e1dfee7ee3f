//! Toast overlay for notifications

use crate::state::Toast;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 48;
/// Rows below the top edge, clear of the nav bar
const TOP_OFFSET: u16 = 3;

/// Render the toast in the top-right corner; `queued` counts it and any older
/// toasts still waiting underneath
pub fn render_toast(frame: &mut Frame, toast: &Toast, queued: usize, palette: &Palette) {
    let area = frame.area();
    let width = MAX_WIDTH.min(area.width);
    let padding = 4u16;
    let max_line_width = width.saturating_sub(padding) as usize;

    let notification = &toast.notification;
    let accent = if notification.is_destructive() {
        palette.danger
    } else {
        palette.success
    };

    let wrapped_lines = wrap_text(&notification.description, max_line_width.max(1));

    // title + description + blank + hint + borders
    let height = (1 + wrapped_lines.len() as u16 + 2 + 2).min(area.height.saturating_sub(TOP_OFFSET));
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + TOP_OFFSET.min(area.height),
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let mut content = vec![Line::from(Span::styled(
        notification.title.as_str(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    for line in wrapped_lines {
        content.push(Line::from(line));
    }
    content.push(Line::from(""));
    let mut hint = vec![
        Span::styled("Esc", palette.accent().add_modifier(Modifier::BOLD)),
        Span::styled(" to dismiss", palette.muted()),
    ];
    if queued > 1 {
        hint.push(Span::styled(format!(" ({} more)", queued - 1), palette.muted()));
    }
    content.push(Line::from(hint));

    let block = Block::default()
        .title(format!(" {} ", toast.timestamp.format("%H:%M")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(palette.base());

    frame.render_widget(Paragraph::new(content).block(block), toast_area);
}

/// Terminal columns a string occupies
fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Word-wrap the toast description to `max_width` columns, keeping explicit
/// line breaks. Always yields at least one line.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);
            if line_width > 0 && line_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Please try again or contact me directly via email.", 20);
        assert!(lines.iter().all(|l| display_width(l) <= 20));
        assert_eq!(lines.join(" "), "Please try again or contact me directly via email.");
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_measures_columns_not_bytes() {
        let text = "café résumé naïve";
        assert_eq!(wrap_text(text, 17), vec![text]);
        assert_eq!(wrap_text(text, 12), vec!["café résumé", "naïve"]);
    }

    #[test]
    fn test_wrap_text_empty_input_yields_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
