//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The detail page arrives? That's `Action::DetailFetched { .. }`.
//!
//! `update()` applies an action to the session and returns an `Effect`:
//! a side effect (fetch, quit) for the runtime to carry out. Fetch results
//! come back as new actions. No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//!                                          │
//!                 runner::perform(effect) ─┘→ Action (fed back)
//! ```

use log::{debug, info, warn};

use crate::core::commands::{Command, SessionConfig};
use crate::core::state::{OutputKind, Session};
use crate::dict::{Category, DictError, ExamplePair, format_examples, parse_detail};

/// Output for input that matches no command.
pub const UNKNOWN_COMMAND: &str = "Error Occured";

#[derive(Debug)]
pub enum Action {
    /// The input line was submitted (Enter).
    Submit(String),
    /// Hard exit (Ctrl+C, Esc).
    Quit,
    DetailFetched {
        category: Category,
        result: Result<String, DictError>,
    },
    ExamplesFetched(Result<Vec<ExamplePair>, DictError>),
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchDetail { url: String, category: Category },
    FetchExamples { url: String },
}

pub fn update(session: &mut Session, config: &SessionConfig, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Submit(input) => submit(session, config, &input),
        Action::DetailFetched { category, result } => {
            session.is_loading = false;
            session.status.clear();
            match result {
                Ok(body) => {
                    session.cache_detail(body);
                    render_detail(session, category);
                }
                Err(e) => {
                    warn!("Detail fetch failed: {}", e);
                    session.set_output(format!("error detailed url: {e}"), OutputKind::Plain);
                }
            }
            Effect::None
        }
        Action::ExamplesFetched(result) => {
            session.is_loading = false;
            session.status.clear();
            match result {
                Ok(pairs) => {
                    info!("Received {} example pairs", pairs.len());
                    session.set_output(format_examples(&pairs), OutputKind::Examples);
                }
                Err(e) => {
                    warn!("Example fetch failed: {}", e);
                    session.set_output(format!("Error parsing example: {e}"), OutputKind::Plain);
                }
            }
            Effect::None
        }
    }
}

fn submit(session: &mut Session, config: &SessionConfig, input: &str) -> Effect {
    let command = config.classify(input);
    debug!("Input {:?} classified as {:?}", input, command);

    // One command in flight at a time; quitting is always allowed.
    if session.is_loading && command != Command::Quit {
        debug!("Dropping input {:?} while a fetch is in flight", input);
        return Effect::None;
    }

    match command {
        Command::Quit => Effect::Quit,
        Command::Antonym => request_detail(session, Category::Antonym),
        Command::Synonym => request_detail(session, Category::Synonym),
        Command::Example => {
            let url = session.example_url_override.clone().unwrap_or_else(|| {
                config
                    .endpoints
                    .example_url(&session.word_id, config.example_page)
            });
            session.is_loading = true;
            session.status = "Fetching example sentences...".to_string();
            Effect::FetchExamples { url }
        }
        Command::Unknown => {
            session.set_output(UNKNOWN_COMMAND.to_string(), OutputKind::Plain);
            Effect::None
        }
    }
}

/// Renders from the cached detail page, or asks for it on first use.
fn request_detail(session: &mut Session, category: Category) -> Effect {
    if session.detail().is_some() {
        render_detail(session, category);
        return Effect::None;
    }
    session.is_loading = true;
    session.status = format!("Fetching {}...", category.name());
    Effect::FetchDetail {
        url: session.detail_url.clone(),
        category,
    }
}

fn render_detail(session: &mut Session, category: Category) {
    let Some(detail) = session.detail() else {
        return;
    };
    let output = match parse_detail(detail, category.name()) {
        Ok(words) => format!("{}:\n{}", category.name(), words),
        Err(e) => format!("Error parsing detail: {e}"),
    };
    session.set_output(output, OutputKind::Plain);
}
