//! Layout components (nav bar, status bar) and nav hit testing

use super::components::{render_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::content::OWNER_NAME;
use crate::platform::SEND_SHORTCUT;
use crate::state::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BRAND_WIDTH: u16 = 20;
const NAV_ITEM_WIDTH: u16 = 14;
const THEME_WIDTH: u16 = 11;

/// Something clickable in the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Section(Section),
    ThemeToggle,
}

/// Split the screen into nav bar and content, reserving the bottom line for
/// the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Nav bar
            Constraint::Min(0),                // Section content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

fn theme_rect(nav: Rect) -> Rect {
    let width = THEME_WIDTH.min(nav.width);
    Rect {
        x: nav.x + nav.width - width,
        width,
        ..nav
    }
}

/// Nav item slot, or None when the terminal is too narrow to show it
fn nav_item_rect(nav: Rect, index: usize) -> Option<Rect> {
    let x = nav.x + BRAND_WIDTH + index as u16 * NAV_ITEM_WIDTH;
    if x + NAV_ITEM_WIDTH > theme_rect(nav).x {
        return None;
    }
    Some(Rect {
        x,
        width: NAV_ITEM_WIDTH,
        ..nav
    })
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Map a click on the full screen to a nav bar target
pub fn nav_hit(screen: Rect, column: u16, row: u16) -> Option<NavTarget> {
    let (nav, _) = create_layout(screen);
    if !contains(nav, column, row) {
        return None;
    }
    if contains(theme_rect(nav), column, row) {
        return Some(NavTarget::ThemeToggle);
    }
    Section::ALL
        .into_iter()
        .enumerate()
        .find(|(i, _)| nav_item_rect(nav, *i).is_some_and(|r| contains(r, column, row)))
        .map(|(_, section)| NavTarget::Section(section))
}

/// Draw the nav bar: brand, one button per section, theme toggle
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let brand_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: BRAND_WIDTH.saturating_sub(1),
        height: 1,
    }
    .intersection(area);
    let brand = Paragraph::new(Line::from(vec![
        Span::styled("✦ ", Style::default().fg(palette.accent_alt)),
        Span::styled(OWNER_NAME, palette.heading()),
    ]));
    frame.render_widget(brand, brand_area);

    for (idx, section) in Section::ALL.into_iter().enumerate() {
        if let Some(rect) = nav_item_rect(area, idx) {
            let label = format!("{} {}", idx + 1, section.label());
            let is_selected = app.state.current_section == section;
            render_button(frame, rect, &label, is_selected, true, palette);
        }
    }

    render_button(
        frame,
        theme_rect(area),
        app.state.theme.toggle_icon(),
        false,
        true,
        palette,
    );
}

/// Key hints for where keystrokes currently go
fn focus_hints(app: &App) -> String {
    if app.state.is_form_focused() {
        format!(" Tab:next field  {SEND_SHORTCUT}:send  Esc:back")
    } else if app.state.current_section == Section::Contact {
        " Tab/←→:sections  Enter:write  y:copy email  t:theme".to_string()
    } else {
        " Tab/←→:sections  1-6:jump  c:contact  t:theme".to_string()
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let section = app.state.current_section;
    let mut spans = vec![
        Span::styled(
            format!(" {}/{} {} ", section.index() + 1, Section::ALL.len(), section.label()),
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(focus_hints(app), Style::default().fg(palette.fg)),
    ];

    let phase = app.state.submission.phase().label();
    if !phase.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(phase, palette.accent()));
    }

    if let Some(hint) = &app.state.status_hint {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(hint, Style::default().fg(palette.danger)));
    }

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bar_bg));
    frame.render_widget(status, status_area);

    let quit_hint = " q:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint).style(Style::default().bg(palette.bar_bg).fg(palette.fg));
    frame.render_widget(quit_widget, quit_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn test_create_layout_reserves_nav_and_status() {
        let (nav, content) = create_layout(SCREEN);
        assert_eq!(nav.height, BUTTON_HEIGHT);
        assert_eq!(content.y, BUTTON_HEIGHT);
        assert_eq!(content.height, SCREEN.height - BUTTON_HEIGHT - 1);
    }

    #[test]
    fn test_nav_hit_on_each_item() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let column = BRAND_WIDTH + i as u16 * NAV_ITEM_WIDTH + 1;
            assert_eq!(nav_hit(SCREEN, column, 1), Some(NavTarget::Section(section)));
        }
    }

    #[test]
    fn test_nav_hit_on_theme_toggle() {
        assert_eq!(nav_hit(SCREEN, 118, 1), Some(NavTarget::ThemeToggle));
    }

    #[test]
    fn test_nav_hit_misses_brand_and_content() {
        assert_eq!(nav_hit(SCREEN, 3, 1), None);
        assert_eq!(nav_hit(SCREEN, 40, 10), None);
    }

    #[test]
    fn test_narrow_terminal_hides_overflowing_items() {
        let narrow = Rect {
            width: 70,
            ..SCREEN
        };
        let (nav, _) = create_layout(narrow);
        assert!(nav_item_rect(nav, 0).is_some());
        assert!(nav_item_rect(nav, 5).is_none());
    }

    #[test]
    fn test_nav_rects_stay_inside_tiny_nav_bar() {
        for width in [1, 2, 5, 10, 19, 20] {
            let (nav, _) = create_layout(Rect::new(0, 0, width, 4));
            assert_eq!(theme_rect(nav).intersection(nav), theme_rect(nav));
            assert!((0..Section::ALL.len()).all(|i| nav_item_rect(nav, i).is_none()));
        }
    }
}
