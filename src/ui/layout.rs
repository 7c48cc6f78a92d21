//! Responsive layout helpers.
//!
//! `LayoutContext` carries the terminal size into every render function so
//! sizing decisions are made in one place.

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: labels and hints are condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Club and member lists stack instead of sitting side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Hide the URL column of the club table.
    pub fn should_show_club_urls(&self) -> bool {
        self.width >= breakpoints::SM_WIDTH
    }
}

impl Default for LayoutContext {
    /// A standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}
