//! Command registry for dispatching keyboard input to commands.
//!
//! Lookup order:
//! 1. Ctrl+C, which always quits
//! 2. The open modal, which takes all input
//! 3. Bindings of the visible section
//! 4. Global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to commands for the current [`InputContext`].
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Returns `None` when the key means nothing in this context.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            return self.dispatch_modal(key, combo, context.modal);
        }

        if let Some(cmd) = self.config.get_section(context.section, &combo) {
            return Some(cmd.clone());
        }

        self.config.get_global(&combo).cloned()
    }

    fn dispatch_modal(&self, key: KeyEvent, combo: KeyCombo, modal: ModalType) -> Option<Command> {
        if let Some(cmd) = self.config.get_modal(modal, &combo) {
            return Some(cmd.clone());
        }

        // The form captures every printable character, shifted or not
        if modal == ModalType::Form {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    return Some(Command::FormChar(c));
                }
            }
        }

        None
    }
}
