//! Platform-specific configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for the send shortcut
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for form help text
#[cfg(target_os = "macos")]
pub const SEND_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// True for the key combination that submits the contact form
pub fn is_send_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && (key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(SEND_MODIFIER))
}
