//! # Effect Runner
//!
//! Carries out the side effects `update()` asks for and turns their results
//! back into actions. The TUI spawns `perform` on the tokio runtime and
//! feeds the result through its channel. `drive` is the headless driver:
//! it runs a whole command to completion inline, with no terminal, and is
//! what the session tests go through.

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::commands::SessionConfig;
use crate::core::state::Session;
use crate::dict::{self, Fetcher};

/// Executes `effect`, returning the action that reports its outcome.
/// `None` and `Quit` need no I/O and produce nothing.
pub async fn perform(fetcher: &dyn Fetcher, effect: Effect) -> Option<Action> {
    match effect {
        Effect::None | Effect::Quit => None,
        Effect::FetchDetail { url, category } => {
            debug!("Fetching detail page for {}", category.name());
            let result = fetcher.fetch(&url).await;
            Some(Action::DetailFetched { category, result })
        }
        Effect::FetchExamples { url } => {
            let result = dict::fetch_examples(fetcher, &url).await;
            Some(Action::ExamplesFetched(result))
        }
    }
}

/// Applies `action` and every follow-up action until the session is idle.
///
/// Headless counterpart of the TUI event loop. Effects are awaited in place
/// instead of spawned, so there is never more than one outstanding.
///
/// Returns `false` once the session asked to quit.
pub async fn drive(
    session: &mut Session,
    config: &SessionConfig,
    fetcher: &dyn Fetcher,
    action: Action,
) -> bool {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        let effect = update(session, config, action);
        if effect == Effect::Quit {
            return false;
        }
        next = perform(fetcher, effect).await;
    }
    true
}
