use clap::Parser;
use ratatui_todo::store::Command;
use ratatui_todo::todo_view::TodoView;
use ratatui_todo::todo_view::TodoViewOptions;
use std::path::PathBuf;

/// A to-do list in your terminal.
#[derive(Debug, Parser)]
#[command(name = "ratatui-todo", version, about, long_about = None)]
pub struct Cli {
    /// Heading shown above the input
    #[arg(long)]
    pub title: Option<String>,

    /// Placeholder shown while the input is empty
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Start with this task already in the list (repeatable)
    #[arg(long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,

    /// Hide the key binding legend
    #[arg(long)]
    pub no_help: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn view_options(&self) -> TodoViewOptions {
        let defaults = TodoViewOptions::default();
        TodoViewOptions {
            title: self.title.clone().unwrap_or(defaults.title),
            placeholder: self.placeholder.clone().unwrap_or(defaults.placeholder),
            show_help: !self.no_help,
            ..TodoViewOptions::default()
        }
    }

    /// Adds the `--task` values to `view`. Blank values are skipped so no draft is left behind.
    pub fn seed(&self, view: &mut TodoView) -> usize {
        let mut added = 0;
        for task in &self.tasks {
            if task.trim().is_empty() {
                tracing::warn!("ignoring blank --task");
                continue;
            }
            view.dispatch(Command::SetDraft(task.clone()));
            view.dispatch(Command::Submit);
            added += 1;
        }
        added
    }
}
