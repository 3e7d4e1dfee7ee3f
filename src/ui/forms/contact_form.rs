//! Contact section: details panel and the message form

use super::field_renderer::draw_field;
use crate::app::App;
use crate::contact::SubmissionPhase;
use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, FOOTER};
use crate::platform::SEND_SHORTCUT;
use crate::state::{ContactField, Section};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(0),    // Details + form
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        Section::Contact.heading(),
        palette.heading(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    draw_details(frame, columns[0], palette);
    draw_form(frame, columns[1], app, palette);

    let footer = Paragraph::new(Span::styled(FOOTER, palette.muted())).alignment(Alignment::Center);
    frame.render_widget(footer, rows[2]);
}

fn draw_details(frame: &mut Frame, area: Rect, palette: &Palette) {
    let entry = |label: &'static str, value: &'static str| {
        [
            Line::from(Span::styled(label, palette.muted())),
            Line::from(Span::styled(value, palette.accent())),
            Line::from(""),
        ]
    };

    let mut lines = vec![
        Line::from("I'm always open to discussing new opportunities and interesting projects."),
        Line::from(""),
    ];
    lines.extend(entry("Email", CONTACT_EMAIL));
    lines.extend(entry("Phone", CONTACT_PHONE));
    lines.extend(entry("Location", CONTACT_LOCATION));
    lines.push(Line::from(vec![
        Span::styled("y", palette.accent().add_modifier(Modifier::BOLD)),
        Span::styled(" copies the email address", palette.muted()),
    ]));

    let block = Block::default()
        .title(" Get In Touch ")
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.state.is_form_focused();
    let sending = app.state.submission.is_sending();

    let block = Block::default()
        .title(" Send a Message ")
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name + Email
            Constraint::Length(3),             // Subject
            Constraint::Min(4),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send button
        ])
        .split(inner);

    let identity = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let slots = [identity[0], identity[1], rows[1], rows[2]];
    let draft = app.state.contact.current();
    let active = app.state.contact.active();

    for (field, slot) in ContactField::ALL.into_iter().zip(slots) {
        draw_field(
            frame,
            slot,
            field,
            draft.get(field),
            focused && field == active,
            sending,
            palette,
        );
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(rows[3]);

    let label = if sending {
        SubmissionPhase::Sending.label().to_string()
    } else {
        format!("Send Message {SEND_SHORTCUT}")
    };
    render_button(frame, button_row[0], &label, focused && !sending, !sending, palette);

    let help = if focused {
        "Tab moves between fields, Esc returns to the page"
    } else {
        "Press Enter to start writing"
    };
    let help_area = Rect {
        y: button_row[1].y + 1,
        height: button_row[1].height.saturating_sub(1).min(1),
        ..button_row[1]
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {help}"), palette.muted())),
        help_area,
    );
}
