//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each iteration draws (when something changed), polls for keys, and then
//! applies any fetch results that background tasks sent back. Fetches run
//! on the tokio runtime; the session itself is only ever touched here, on
//! the loop thread, and `update()` drops new commands while one is in
//! flight.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::commands::SessionConfig;
use crate::core::state::Session;
use crate::dict::Fetcher;
use crate::runner;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, OutputViewState};
pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the session)
pub struct TuiState {
    pub input_box: InputBox,
    pub output_view: OutputViewState,
}

impl TuiState {
    pub fn new(input_limit: usize) -> Self {
        Self {
            input_box: InputBox::new(input_limit),
            output_view: OutputViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Non-blinking: ratatui resets the blink timer on every draw
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Routes one terminal event. Returns the effect the runtime must carry out.
pub fn handle_event(
    tui: &mut TuiState,
    session: &mut Session,
    config: &SessionConfig,
    event: TuiEvent,
) -> Effect {
    match event {
        TuiEvent::ForceQuit => update(session, config, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.output_view.handle_event(&event);
            Effect::None
        }
        TuiEvent::InputChar(_) | TuiEvent::Backspace | TuiEvent::Submit => {
            match tui.input_box.handle_event(&event) {
                Some(InputEvent::Submit(text)) => {
                    let effect = update(session, config, Action::Submit(text));
                    tui.output_view.reset();
                    effect
                }
                Some(InputEvent::ContentChanged) | None => Effect::None,
            }
        }
    }
}

/// Runs the interactive session until the user quits.
pub fn run(session: Session, config: SessionConfig, fetcher: Arc<dyn Fetcher>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, session, &config, fetcher));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut session: Session,
    config: &SessionConfig,
    fetcher: Arc<dyn Fetcher>,
) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.input_limit);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    info!("Session started for word id {}", session.word_id);

    loop {
        // The spinner animates while loading
        if session.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, config, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if session.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        let mut pending = poll_event_timeout(timeout)?;
        while let Some(event) = pending {
            needs_redraw = true;
            match handle_event(&mut tui, &mut session, config, event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                effect => spawn_effect(effect, fetcher.clone(), tx.clone()),
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut session, config, action);
            tui.output_view.reset();
            match effect {
                Effect::Quit => should_quit = true,
                effect => spawn_effect(effect, fetcher.clone(), tx.clone()),
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Session ended");
    Ok(())
}

fn spawn_effect(effect: Effect, fetcher: Arc<dyn Fetcher>, tx: mpsc::Sender<Action>) {
    if effect == Effect::None {
        return;
    }
    info!("Spawning {:?}", effect);
    tokio::spawn(async move {
        if let Some(action) = runner::perform(fetcher.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
