//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `HelpBar`: command list and loading status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: length-limited command input
//! - `OutputView`: scrollable output with keyword emphasis
//!
//! Components receive external data as props, never by reaching into the
//! session directly, so each can be rendered against a `TestBackend` alone.

pub mod help_bar;
pub mod input_box;
pub mod output_view;

pub use help_bar::HelpBar;
pub use input_box::{InputBox, InputEvent};
pub use output_view::{OutputView, OutputViewState};
