//! `ratatui-todo-core` is an in-memory to-do list widget for terminal UIs.
//!
//! The crate splits into a UI-free state machine and the ratatui presentation on top of it:
//!
//! - [`store::TodoStore`]: draft text, ordered items and the item being edited, with the six
//!   user operations (set draft, submit, delete, reset, begin edit, submit on key).
//! - [`focus::FocusController`]: returns focus to the text field after every mutation and on
//!   first display.
//! - [`todo_view::TodoView`]: the widget. Feed it [`input::InputEvent`]s and render it each frame.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime, no I/O: every action runs to completion on the caller's thread.
//! - Nothing fails: blank submissions and stale ids degrade to no-ops.
//!
//! Enable the `crossterm` feature for `crossterm_input` event conversion.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;

pub mod focus;
pub mod help;
pub mod input;
pub mod keymap;
pub mod store;
pub mod text_input;
pub mod todo_view;
