//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Table page navigation
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum PageAction {
    /// Go to the previous page
    Previous,
    /// Go to the next page
    Next,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⇧ for shift
/// - Others: Ctrl+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" => {
                if cfg!(target_os = "macos") {
                    "⌘".to_string()
                } else {
                    "Ctrl".to_string()
                }
            }
            "shift" => {
                if cfg!(target_os = "macos") {
                    "⇧".to_string()
                } else {
                    "Shift".to_string()
                }
            }
            "left" => "←".to_string(),
            "right" => "→".to_string(),
            c => c.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Table pages
        KeyBinding::new("left", PageAction::Previous, None),
        KeyBinding::new("right", PageAction::Next, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_arrows() {
        assert_eq!(humanize_keystroke("left"), "←");
        assert_eq!(humanize_keystroke("right"), "→");
    }

    #[test]
    fn test_humanize_quit() {
        let quit = humanize_keystroke("secondary-q");
        if cfg!(target_os = "macos") {
            assert_eq!(quit, "⌘Q");
        } else {
            assert_eq!(quit, "Ctrl+Q");
        }
    }
}
