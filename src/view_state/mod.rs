//! View state module.
//!
//! Plain data describing what the dashboard shows, kept apart from the
//! controller so it can be unit tested and drawn without an `App`.
//!
//! ```text
//! ┌─────────────────┐
//! │      App        │  PageState, TabState
//! │  (owns state)   │
//! └────────┬────────┘
//!          │ Renderer calls
//!          ▼
//! ┌─────────────────┐
//! │ DashboardView   │
//! └────────┬────────┘
//!          │ ui::render
//!          ▼
//! ┌─────────────────┐
//! │    terminal     │
//! └─────────────────┘
//! ```
//!
//! ## Components
//!
//! - [`PageState`]: pagination cursor over the employee collection
//! - [`TabState`]: which section is showing
//! - [`DashboardView`]: the terminal renderer's state

pub mod dashboard_view;
mod page_state;
mod tab_state;

pub use dashboard_view::{
    ClubFocus, ClubForm, Confirm, DashboardView, DeleteTarget, FormField, ListContent,
    MemberField, MemberForm, Modal,
};
pub use page_state::{PageDelta, PageState, PaginationView, PAGE_SIZE};
pub use tab_state::{DisplayState, Section, Tab, TabState, TabTarget};
