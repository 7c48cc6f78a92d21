//! Reusable UI components.
//!
//! - `TabSelector` - The row of dashboard tabs
//! - `InputField` - A labelled text field of the club form
//! - `DialogFrame` - Centered modal overlay with rounded borders

mod dialog_frame;
mod input_field;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{input_field_height, render_input_field, InputFieldConfig};
pub use tab_selector::render_tab_selector;
