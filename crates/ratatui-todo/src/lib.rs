//! `ratatui-todo` is the batteries-included entry point for the to-do widget.
//!
//! It re-exports `ratatui-todo-core` (with crossterm event conversion enabled) and ships the
//! `ratatui-todo` binary, a full-screen terminal to-do list.
pub use ratatui_todo_core::crossterm_input;
pub use ratatui_todo_core::focus;
pub use ratatui_todo_core::help;
pub use ratatui_todo_core::input;
pub use ratatui_todo_core::keymap;
pub use ratatui_todo_core::render;
pub use ratatui_todo_core::store;
pub use ratatui_todo_core::text_input;
pub use ratatui_todo_core::theme;
pub use ratatui_todo_core::todo_view;
