//! Application state and core logic

use crate::config::{FolioConfig, RelayCredentials};
use crate::contact::{dispatch, SubmissionOutcome};
use crate::content::CONTACT_EMAIL;
use crate::relay::{EmailJsRelay, MailRelay, UnconfiguredRelay};
use crate::state::{AppState, ContactField, ContactForm, Form, NotificationCenter, Section};
use crate::ui::{nav_hit, NavTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// A relay call that has come back from its task
#[derive(Debug)]
struct CompletedSubmission {
    attempt_id: Uuid,
    outcome: SubmissionOutcome,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Mail relay used by the contact form
    relay: Arc<dyn MailRelay>,
    credentials: Arc<RelayCredentials>,
    relay_timeout: Duration,
    /// User preferences and where to persist them (None in tests)
    config: FolioConfig,
    config_path: Option<PathBuf>,
    completed_tx: mpsc::UnboundedSender<CompletedSubmission>,
    completed_rx: mpsc::UnboundedReceiver<CompletedSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Clipboard feedback message
    pub copy_message: Option<String>,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App from the user's config file and the environment
    pub fn new() -> Result<Self> {
        let config_path = FolioConfig::config_path();
        let config = match FolioConfig::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e}");
                FolioConfig::default()
            }
        };

        let (relay, credentials): (Arc<dyn MailRelay>, RelayCredentials) =
            match RelayCredentials::from_env() {
                Ok(credentials) => {
                    let relay = EmailJsRelay::new(config.relay_endpoint())
                        .with_access_token(credentials.access_token.clone());
                    tracing::info!(endpoint = relay.endpoint(), "Mail relay configured");
                    (Arc::new(relay), credentials)
                }
                Err(e) => {
                    tracing::warn!("{e}; the contact form will not be able to send");
                    (Arc::new(UnconfiguredRelay), RelayCredentials::default())
                }
            };

        Ok(Self::with_relay(config, config_path, relay, credentials))
    }

    /// Create an App around an explicit relay
    pub fn with_relay(
        config: FolioConfig,
        config_path: Option<PathBuf>,
        relay: Arc<dyn MailRelay>,
        credentials: RelayCredentials,
    ) -> Self {
        let state = AppState {
            theme: config.theme(),
            notifications: NotificationCenter::new(config.toast_duration()),
            ..Default::default()
        };
        let (completed_tx, completed_rx) = mpsc::unbounded_channel();

        Self {
            state,
            relay,
            credentials: Arc::new(credentials),
            relay_timeout: config.relay_timeout(),
            config,
            config_path,
            completed_tx,
            completed_rx,
            quit: false,
            copy_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping: finished sends, scroll animation, toast expiry
    pub fn tick(&mut self) {
        self.poll_submissions();
        self.state.update_scroll();
        self.state.notifications.prune_expired();
    }

    /// Apply any relay results that arrived since the last frame
    pub fn poll_submissions(&mut self) {
        while let Ok(completed) = self.completed_rx.try_recv() {
            self.apply_completed(completed);
        }
    }

    fn apply_completed(&mut self, completed: CompletedSubmission) {
        if self.state.submission.attempt_id() != Some(completed.attempt_id) {
            tracing::warn!(attempt_id = %completed.attempt_id, "Dropping result for unknown attempt");
            return;
        }
        let succeeded = completed.outcome.is_success();
        self.state.complete_submission(completed.outcome);
        if succeeded {
            // Fresh form, so start over from the first input
            self.state.contact.focus(ContactField::Name);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.copy_message = None;
        // Any key lands a running scroll before acting
        self.state.finish_scroll();

        if self.state.is_form_focused() {
            self.handle_form_key(key);
        } else {
            self.handle_page_key(key);
        }
        Ok(())
    }

    /// Keys while browsing sections
    fn handle_page_key(&mut self, key: KeyEvent) {
        let in_contact = self.state.current_section == Section::Contact;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('c') => self.state.go_to_section(Section::Contact),
            KeyCode::Char('y') if in_contact => self.copy_contact_email(),
            KeyCode::Enter | KeyCode::Char('i') if in_contact => self.state.enter_form(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(section) = Section::from_digit(c) {
                    self.state.go_to_section(section);
                }
            }
            KeyCode::Tab
            | KeyCode::Right
            | KeyCode::Down
            | KeyCode::PageDown
            | KeyCode::Char('j')
            | KeyCode::Char('l') => self.state.next_section(),
            KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Up
            | KeyCode::PageUp
            | KeyCode::Char('k')
            | KeyCode::Char('h') => self.state.prev_section(),
            KeyCode::Home => self.state.go_to_section(Section::Home),
            KeyCode::End => self.state.go_to_section(Section::Contact),
            KeyCode::Esc if !self.state.notifications.is_empty() => {
                self.state.notifications.dismiss();
            }
            _ => {}
        }
    }

    /// Keys while typing in the contact form
    fn handle_form_key(&mut self, key: KeyEvent) {
        if crate::platform::is_send_key(&key) {
            self.submit_contact();
            return;
        }

        let sending = self.state.submission.is_sending();
        match key.code {
            KeyCode::Esc => self.state.leave_form(),
            KeyCode::Tab => self.state.contact.next_field(),
            KeyCode::BackTab => self.state.contact.prev_field(),
            // The draft is read-only while a send is in flight
            KeyCode::Enter | KeyCode::Backspace | KeyCode::Char(_) if sending => {
                self.state.status_hint = Some("Sending… please wait".to_string());
            }
            KeyCode::Enter => {
                if self.state.contact.active() == ContactField::Message {
                    self.edit_contact(|form| form.push_char('\n'));
                } else {
                    self.state.contact.next_field();
                }
            }
            KeyCode::Backspace => self.edit_contact(|form| form.pop_char()),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_contact(|form| form.push_char(c));
            }
            _ => {}
        }
    }

    /// Apply a text edit; a stale validation hint goes with it
    fn edit_contact(&mut self, edit: impl FnOnce(&mut ContactForm)) {
        edit(&mut self.state.contact);
        self.state.status_hint = None;
    }

    /// Submit the contact form.
    ///
    /// All four fields must be filled before the controller is involved; the
    /// relay call runs on its own task and reports back through the channel.
    pub fn submit_contact(&mut self) {
        self.state.status_hint = None;

        if let Some(missing) = self.state.contact.current().first_missing() {
            tracing::debug!(field = missing.name(), "Submit blocked, required field empty");
            self.state.contact.focus(missing);
            self.state.status_hint = Some(format!("{}: Please fill out this field.", missing.label()));
            return;
        }

        let submission = match self.state.submission.begin(self.state.contact.current()) {
            Ok(submission) => submission,
            Err(e) => {
                self.state.status_hint = Some(e.to_string());
                return;
            }
        };

        let relay = Arc::clone(&self.relay);
        let credentials = Arc::clone(&self.credentials);
        let timeout = self.relay_timeout;
        let tx = self.completed_tx.clone();

        tokio::spawn(async move {
            let outcome = dispatch(relay.as_ref(), &credentials, &submission, timeout).await;
            let completed = CompletedSubmission {
                attempt_id: submission.attempt_id,
                outcome,
            };
            if tx.send(completed).is_err() {
                tracing::debug!("App closed before the submission finished");
            }
        });
    }

    /// Flip light/dark and remember the choice
    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        self.config.dark_mode = Some(self.state.theme.is_dark());

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!("Failed to save config: {e}");
            }
        }
    }

    fn copy_contact_email(&mut self) {
        match copy_to_clipboard(CONTACT_EMAIL) {
            Ok(()) => self.copy_message = Some(format!("Copied {CONTACT_EMAIL}")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((height, width)) = self.terminal_size else {
                    return Ok(());
                };
                let screen = Rect::new(0, 0, width, height);
                match nav_hit(screen, mouse.column, mouse.row) {
                    Some(NavTarget::Section(section)) => {
                        self.state.leave_form();
                        self.state.go_to_section(section);
                    }
                    Some(NavTarget::ThemeToggle) => self.toggle_theme(),
                    None => {}
                }
            }
            MouseEventKind::ScrollDown if !self.state.is_form_focused() => {
                self.state.next_section();
            }
            MouseEventKind::ScrollUp if !self.state.is_form_focused() => {
                self.state.prev_section();
            }
            _ => {}
        }
        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
