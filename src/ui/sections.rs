//! Static portfolio sections

use super::theme::Palette;
use crate::content::{
    ABOUT_HEADLINE, ABOUT_PARAGRAPHS, AVAILABILITY, EXPERIENCE, GITHUB_URL, LINKEDIN_URL,
    OWNER_NAME, OWNER_TITLE, PROJECTS, SKILL_CATEGORIES, STATS, TAGLINE,
};
use crate::state::Section;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Heading line plus the remaining area for the section body
fn section_frame(frame: &mut Frame, area: Rect, section: Section, palette: &Palette) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(section.heading(), palette.heading())))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    chunks[1]
}

/// Split an area into a grid of `rows` x `cols` cells
fn grid(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Columns that fit the width: one on narrow terminals, up to three otherwise
fn columns_for(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

fn card(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(palette.border(false))
}

pub fn draw_home(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("● {AVAILABILITY}"),
            Style::default().fg(palette.success),
        )),
        Line::from(""),
        Line::from(Span::styled(
            OWNER_NAME,
            palette.heading().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            OWNER_TITLE,
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(TAGLINE),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c] ", palette.accent()),
            Span::raw("Let's Connect    "),
            Span::styled("[5] ", palette.accent()),
            Span::raw("View My Work"),
        ]),
        Line::from(""),
        Line::from(Span::styled(GITHUB_URL, palette.muted())),
        Line::from(Span::styled(LINKEDIN_URL, palette.muted())),
    ];

    let top_padding = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: area.y + top_padding,
        height: area.height - top_padding,
        ..area
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

pub fn draw_about(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = section_frame(frame, area, Section::About, palette);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);

    let mut lines = vec![
        Line::from(Span::styled(ABOUT_HEADLINE, palette.heading())),
        Line::from(""),
    ];
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::NONE)),
        chunks[0],
    );

    let stat_lines: Vec<Line> = STATS
        .iter()
        .flat_map(|stat| {
            [
                Line::from(Span::styled(stat.value, palette.heading())),
                Line::from(Span::styled(stat.label, palette.muted())),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(stat_lines)
            .alignment(Alignment::Center)
            .block(card("At a glance", palette)),
        chunks[1],
    );
}

pub fn draw_skills(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = section_frame(frame, area, Section::Skills, palette);
    let cols = columns_for(body.width);
    let rows = SKILL_CATEGORIES.len().div_ceil(cols);

    for (category, cell) in SKILL_CATEGORIES.iter().zip(grid(body, rows, cols)) {
        let skills = Line::from(
            category
                .skills
                .iter()
                .enumerate()
                .flat_map(|(i, skill)| {
                    let sep = if i == 0 { "" } else { " · " };
                    [Span::styled(sep, palette.muted()), Span::raw(*skill)]
                })
                .collect::<Vec<_>>(),
        );
        frame.render_widget(
            Paragraph::new(skills)
                .wrap(Wrap { trim: true })
                .block(card(category.title, palette)),
            cell,
        );
    }
}

pub fn draw_experience(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = section_frame(frame, area, Section::Experience, palette);

    let mut lines = Vec::new();
    for job in EXPERIENCE {
        lines.push(Line::from(vec![
            Span::styled(job.role, palette.heading()),
            Span::styled(format!("  {}", job.period), palette.muted()),
        ]));
        lines.push(Line::from(Span::styled(
            job.company,
            Style::default().fg(palette.accent_alt),
        )));
        lines.push(Line::from(""));
        for highlight in job.highlights {
            lines.push(Line::from(vec![
                Span::styled("  • ", palette.accent()),
                Span::raw(*highlight),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card("Work", palette)),
        body,
    );
}

pub fn draw_projects(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = section_frame(frame, area, Section::Projects, palette);
    let cols = columns_for(body.width);
    let rows = PROJECTS.len().div_ceil(cols);

    for (project, cell) in PROJECTS.iter().zip(grid(body, rows, cols)) {
        let lines = vec![
            Line::from(project.description),
            Line::from(""),
            Line::from(Span::styled(project.tech.join(" · "), palette.accent())),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(card(project.title, palette)),
            cell,
        );
    }
}
