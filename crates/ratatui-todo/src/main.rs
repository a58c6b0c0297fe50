mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui_todo::crossterm_input::input_event_from_crossterm;
use ratatui_todo::theme::Theme;
use ratatui_todo::todo_view::TodoView;
use ratatui_todo::todo_view::TodoViewAction;
use std::io;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let _log_guard = logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    let mut view = TodoView::with_options(cli.view_options());
    cli.seed(&mut view);
    tracing::info!(tasks = view.store().len(), "starting");

    let mut stdout = io::stdout();
    enable_raw_mode().context("enabling raw mode")?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
    .context("entering alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = run(&mut terminal, &mut view, &Theme::default());

    // Restore the terminal before reporting any error from the loop.
    disable_raw_mode().context("disabling raw mode")?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("leaving alternate screen")?;
    terminal.show_cursor().context("showing cursor")?;

    tracing::info!(tasks = view.store().len(), "exiting");
    res
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    view: &mut TodoView,
    theme: &Theme,
) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|f| {
                let area = f.area();
                view.render_ref(area, f.buffer_mut(), theme);
                if let Some((x, y)) = view.cursor_pos() {
                    f.set_cursor_position((x, y));
                }
            })
            .context("drawing frame")?;

        if !crossterm::event::poll(Duration::from_millis(250)).context("polling events")? {
            continue;
        }

        let ev = crossterm::event::read().context("reading event")?;
        if is_quit(&ev) {
            return Ok(());
        }
        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        if let TodoViewAction::Store(action) = view.handle_event(ev) {
            tracing::debug!(?action, "store action");
        }
    }
}

/// Ctrl-C / Ctrl-Q. Plain `q` stays typeable.
fn is_quit(ev: &Event) -> bool {
    let Event::Key(key) = ev else {
        return false;
    };
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
}
