//! Button component for TUI

use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button, highlighted when selected and dimmed when disabled
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    palette: &Palette,
) {
    let border_style = palette.border(is_selected);

    let text_style = if is_selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        palette.muted()
    } else {
        Style::default().fg(palette.fg)
    };

    let paragraph = Paragraph::new(content.to_string())
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
