//! Default keybindings for the dashboard.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::view_state::{Section, Tab};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }
}

/// Keybinding configuration.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active whenever no modal is open
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type; an open modal takes all input
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per visible section
    pub section: HashMap<Section, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            section: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_section_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        for (key, tab) in ['1', '2', '3', '4', '5'].into_iter().zip(Tab::ALL) {
            self.global.insert(KeyCombo::char(key), Command::SelectTab(tab));
        }
        self.global
            .insert(KeyCombo::char('q'), Command::SelectTab(Tab::Logout));
        self.global.insert(KeyCombo::char('r'), Command::Reload);
        self.global.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        self.global
            .insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        self.global.insert(KeyCombo::char('k'), Command::MoveUp);
        self.global.insert(KeyCombo::char('j'), Command::MoveDown);
        self.global
            .insert(KeyCombo::char('d'), Command::DeleteSelected);
    }

    fn setup_modal_bindings(&mut self) {
        let mut alert = HashMap::new();
        alert.insert(KeyCombo::plain(KeyCode::Enter), Command::Dismiss);
        alert.insert(KeyCombo::plain(KeyCode::Esc), Command::Dismiss);
        self.modal.insert(ModalType::Alert, alert);

        let mut confirm = HashMap::new();
        confirm.insert(KeyCombo::char('y'), Command::Confirm);
        confirm.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
        confirm.insert(KeyCombo::char('n'), Command::Dismiss);
        confirm.insert(KeyCombo::plain(KeyCode::Esc), Command::Dismiss);
        self.modal.insert(ModalType::Confirm, confirm);

        // Printable characters are handled by the registry
        let mut form = HashMap::new();
        form.insert(KeyCombo::plain(KeyCode::Esc), Command::Dismiss);
        form.insert(KeyCombo::plain(KeyCode::Enter), Command::FormSubmit);
        form.insert(KeyCombo::plain(KeyCode::Tab), Command::FormNextField);
        form.insert(KeyCombo::shift(KeyCode::BackTab), Command::FormNextField);
        form.insert(KeyCombo::plain(KeyCode::Backspace), Command::FormBackspace);
        self.modal.insert(ModalType::Form, form);
    }

    fn setup_section_bindings(&mut self) {
        let mut employees = HashMap::new();
        employees.insert(KeyCombo::plain(KeyCode::Left), Command::PrevPage);
        employees.insert(KeyCombo::char('p'), Command::PrevPage);
        employees.insert(KeyCombo::plain(KeyCode::Right), Command::NextPage);
        employees.insert(KeyCombo::char('n'), Command::NextPage);
        self.section.insert(Section::Employees, employees);

        let mut club = HashMap::new();
        club.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected);
        club.insert(KeyCombo::plain(KeyCode::Tab), Command::ToggleListFocus);
        club.insert(KeyCombo::char('c'), Command::NewClub);
        club.insert(KeyCombo::char('e'), Command::EditSelected);
        self.section.insert(Section::Club, club);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|map| map.get(combo))
    }

    pub fn get_section(&self, section: Section, combo: &KeyCombo) -> Option<&Command> {
        self.section.get(&section).and_then(|map| map.get(combo))
    }
}
