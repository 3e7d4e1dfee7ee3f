//! Application state definitions

use super::forms::ContactForm;
use super::notification::NotificationCenter;
use super::scroll_state::{ScrollAnimation, ScrollDirection};
use crate::contact::{SubmissionController, SubmissionOutcome};

/// Page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Section for a number key (`1` is Home)
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Self::from_index)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Label in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the section
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Tharindu Herath",
            Self::About => "About Me",
            Self::Skills => "Skills & Technologies",
            Self::Experience => "Professional Experience",
            Self::Projects => "Featured Projects",
            Self::Contact => "Let's Work Together",
        }
    }
}

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon for the toggle button: the theme you would switch to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "☾ Dark",
            Self::Dark => "☀ Light",
        }
    }
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Section navigation
    #[default]
    Page,
    /// Contact form inputs
    Form,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_section: Section,
    pub theme: Theme,
    pub focus: Focus,
    pub contact: ContactForm,
    pub submission: SubmissionController,
    pub notifications: NotificationCenter,
    pub scroll: Option<ScrollAnimation>,
    /// One-line hint in the status bar (validation, guard messages)
    pub status_hint: Option<String>,
}

impl AppState {
    /// Scroll to a section, animating if it differs from the current one
    pub fn go_to_section(&mut self, section: Section) {
        if section == self.current_section {
            return;
        }
        let direction = if section.index() > self.current_section.index() {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        tracing::debug!(from = ?self.current_section, to = ?section, "Scrolling to section");
        self.current_section = section;
        self.scroll = Some(ScrollAnimation::new(direction));
        if section != Section::Contact {
            self.focus = Focus::Page;
        }
    }

    pub fn next_section(&mut self) {
        self.go_to_section(self.current_section.next());
    }

    pub fn prev_section(&mut self) {
        self.go_to_section(self.current_section.prev());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Land a running scroll animation at once
    pub fn finish_scroll(&mut self) {
        if let Some(ref mut scroll) = self.scroll {
            scroll.skip();
        }
        self.update_scroll();
    }

    /// Advance the scroll animation, dropping it once it lands
    pub fn update_scroll(&mut self) {
        if let Some(ref mut scroll) = self.scroll {
            scroll.update();
            if scroll.is_complete() {
                self.scroll = None;
            }
        }
    }

    /// Focus the contact form (only reachable from the Contact section)
    pub fn enter_form(&mut self) {
        self.go_to_section(Section::Contact);
        self.focus = Focus::Form;
    }

    pub fn leave_form(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn is_form_focused(&self) -> bool {
        self.focus == Focus::Form
    }

    /// Apply the result of a relay call to the form and notifications
    pub fn complete_submission(&mut self, outcome: SubmissionOutcome) {
        self.submission
            .finish(outcome, &mut self.contact, &mut self.notifications);
        self.status_hint = None;
    }
}
