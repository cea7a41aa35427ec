//! Terminal UI for tic-tac-toe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tictactoe::Position;
use tracing::info;

use app::App;

fn main() -> Result<()> {
    // Log to a file so tracing output does not corrupt the alternate screen.
    let log_file = std::fs::File::create("tictactoe_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if handle_key(&mut app, key) {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(&mut app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}

/// Handles one key press. Returns `true` when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            // Keys 1-9 map to cells in reading order; 0 does nothing.
            let pos = c
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(Position::from_index);
            if let Some(pos) = pos {
                app.play(pos);
            }
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => app.move_cursor(key.code),
        KeyCode::Enter | KeyCode::Char(' ') => app.play(app.cursor()),
        _ => {}
    }
    false
}

/// Routes a left click to the cell or control under it.
fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    match ui::hit_test(area, mouse.column, mouse.row) {
        Some(ui::Target::Cell(pos)) => app.play(pos),
        Some(ui::Target::Reset) => app.reset(),
        None => {}
    }
}
