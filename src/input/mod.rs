//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rollcall::input::{CommandRegistry, InputContext};
//!
//! let registry = CommandRegistry::new();
//! let context = InputContext::from_view(app.renderer());
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
