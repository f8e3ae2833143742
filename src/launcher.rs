//! # Launcher
//!
//! Everything the binary does before the terminal is handed to the TUI:
//! logging, keyword check, one-shot lookup and the exit status that goes
//! with each outcome.

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::core::commands::SessionConfig;
use crate::core::config::ResolvedConfig;
use crate::core::state::Session;
use crate::dict::{self, Endpoints, Fetcher};

pub const USAGE: &str = "usage: cmdic <keyword>";

/// How a launch ended, and what the binary should print for it.
pub enum Launch {
    /// No keyword given.
    Usage,
    /// Fatal error before the session could start. Holds the stderr line.
    Failed(String),
    /// Lookup succeeded but there is no word to explore further.
    Done { meaning: String },
    /// Ready for the interactive session.
    Interactive {
        meaning: String,
        session: Session,
        config: SessionConfig,
    },
}

impl Launch {
    pub fn is_success(&self) -> bool {
        !matches!(self, Launch::Usage | Launch::Failed(_))
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Builds the logger config. html5ever and selectors trace every token at
/// debug, so they are filtered out.
pub fn log_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_ignore_str("html5ever")
        .add_filter_ignore_str("selectors")
        .build()
}

/// Initialize file logging. The terminal belongs to the TUI, so logs go to a file.
pub fn init_logging(path: &Path) {
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config(), log_file);
    }
}

/// Resolves `keyword` to its meaning and, when the word has an id, the
/// session that explores it. Stops short of touching the terminal.
pub async fn launch(keyword: Option<&str>, resolved: &ResolvedConfig, fetcher: &dyn Fetcher) -> Launch {
    let Some(keyword) = keyword else {
        return Launch::Usage;
    };
    info!("cmdic starting up, keyword {:?}", keyword);

    let endpoints = match Endpoints::new(&resolved.host, &resolved.language) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            error!("Invalid dictionary host: {}", e);
            return Launch::Failed(format!("Error: {e}"));
        }
    };

    let result = match dict::lookup(fetcher, &endpoints, keyword).await {
        Ok(result) => result,
        Err(e) => {
            error!("Lookup failed: {}", e);
            return Launch::Failed(format!("Error fetching search result: {e}"));
        }
    };

    let Some(word_id) = result.word_id else {
        info!("No word id for {:?}, not starting a session", keyword);
        return Launch::Done {
            meaning: result.meaning,
        };
    };

    let session = Session::new(word_id.clone(), endpoints.detail_url(&word_id))
        .with_example_url(resolved.example_url.clone());
    let config = SessionConfig::new(endpoints, resolved.highlight.clone(), resolved.example_page);
    Launch::Interactive {
        meaning: result.meaning,
        session,
        config,
    }
}
