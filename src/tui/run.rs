//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the state, update
//! and view layers to the real terminal via crossterm and ratatui.
//!
//! Everything runs on one thread: draw, block on the next key, apply it,
//! repeat. A submission is validated and settled inside a single `update`
//! call, so its reaction is drawn before the next key is read.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::application::JobApplication;

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        // Navigation
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),

        // Editing
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::DeleteChar),

        // Form
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Back),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the form until the user quits.
pub fn run(initial: JobApplication) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(initial);

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed, then report the loop's error first
    let restored = restore_terminal();
    result?;
    restored?;

    info!(
        "form closed with {} error(s) outstanding",
        app.form.errors().len()
    );
    Ok(())
}

fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let Event::Key(key) = event::read()? else {
            continue; // mouse, resize, focus: redraw only
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = map_key(key) else {
            continue;
        };

        let screen = std::mem::take(&mut app.screen);
        match update(screen, &action, &mut app.form) {
            Transition::Screen(next) => app.screen = next,
            Transition::Quit => app.should_quit = true,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
