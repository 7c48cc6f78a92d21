//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

use crate::view_state::Tab;

/// Every action a key press can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C)
    Quit,
    /// Select a tab (1-5, q for logout)
    SelectTab(Tab),
    /// Re-fetch the visible section (r)
    Reload,

    // =========================================================================
    // Lists
    // =========================================================================
    /// Previous employee page (Left, p)
    PrevPage,
    /// Next employee page (Right, n)
    NextPage,
    MoveUp,
    MoveDown,
    /// Show the members of the selected club (Enter)
    OpenSelected,
    /// Move the cursor between clubs and members (Tab)
    ToggleListFocus,
    /// Ask to delete the selected row (d)
    DeleteSelected,

    // =========================================================================
    // Forms
    // =========================================================================
    /// Open an empty club form (c)
    NewClub,
    /// Edit the selected club, or the selected member when the member list
    /// has the cursor (e)
    EditSelected,
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormSubmit,

    // =========================================================================
    // Modals
    // =========================================================================
    /// Accept a confirmation (y, Enter)
    Confirm,
    /// Close the topmost modal (Esc)
    Dismiss,
}
