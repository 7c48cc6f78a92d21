//! Color theme constants for the dashboard.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the active tab marker
pub const COLOR_ACCENT: Color = Color::White;

/// Header and dialog title text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info and disabled controls
pub const COLOR_DIM: Color = Color::DarkGray;

/// Row under the cursor
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 44, 60);

/// Loading indicators
pub const COLOR_LOADING: Color = Color::Gray;

/// Inline load errors and alert borders
pub const COLOR_ERROR: Color = Color::Red;

/// Enabled pagination controls and the focused form field
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
