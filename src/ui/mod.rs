//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod sections;
mod theme;

pub use layout::{nav_hit, NavTarget};

use crate::app::App;
use crate::state::{ScrollAnimation, ScrollDirection, Section};
use ratatui::{layout::Rect, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.theme);
    let area = frame.area();

    // Paint the theme background first
    frame.render_widget(Block::default().style(palette.base()), area);

    let (nav_area, content_area) = layout::create_layout(area);
    layout::draw_nav_bar(frame, nav_area, app, &palette);

    let content_area = scrolled_area(content_area, app.state.scroll.as_ref());
    if content_area.height > 0 {
        match app.state.current_section {
            Section::Home => sections::draw_home(frame, content_area, &palette),
            Section::About => sections::draw_about(frame, content_area, &palette),
            Section::Skills => sections::draw_skills(frame, content_area, &palette),
            Section::Experience => sections::draw_experience(frame, content_area, &palette),
            Section::Projects => sections::draw_projects(frame, content_area, &palette),
            Section::Contact => forms::draw_contact(frame, content_area, app, &palette),
        }
    }

    layout::draw_status_bar(frame, app, &palette);

    if let Some(toast) = app.state.notifications.current() {
        components::render_toast(frame, toast, app.state.notifications.len(), &palette);
    }
}

/// Portion of the content area the incoming section occupies mid-scroll.
///
/// Scrolling down, the section rises from the bottom edge; scrolling up, it
/// unrolls from the top edge.
fn scrolled_area(area: Rect, scroll: Option<&ScrollAnimation>) -> Rect {
    let Some(scroll) = scroll else {
        return area;
    };
    let offset = scroll.row_offset(area.height);
    match scroll.direction {
        ScrollDirection::Down => Rect {
            y: area.y + offset,
            height: area.height - offset,
            ..area
        },
        ScrollDirection::Up => Rect {
            height: area.height - offset,
            ..area
        },
    }
}
