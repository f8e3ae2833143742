//! # Command Table
//!
//! The single-letter commands the session understands, and the immutable
//! per-session settings built once at startup and handed to `update()`.

use crate::dict::Endpoints;

/// Maximum number of characters accepted by the input line.
pub const INPUT_LIMIT: usize = 10;

/// A classified line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Antonym,
    Synonym,
    Example,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandBinding {
    pub key: &'static str,
    pub label: &'static str,
    pub command: Command,
}

/// Help-line order.
pub const DEFAULT_BINDINGS: [CommandBinding; 4] = [
    CommandBinding { key: "a", label: "antonym", command: Command::Antonym },
    CommandBinding { key: "e", label: "example sentences", command: Command::Example },
    CommandBinding { key: "s", label: "synonym", command: Command::Synonym },
    CommandBinding { key: "q", label: "quit", command: Command::Quit },
];

#[derive(Debug, Clone)]
pub struct SessionConfig {
    bindings: Vec<CommandBinding>,
    help_line: String,
    pub endpoints: Endpoints,
    /// Term emphasized in example output. `None` disables highlighting.
    pub highlight: Option<String>,
    pub example_page: u32,
    pub input_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Endpoints::default(), None, 1)
    }
}

impl SessionConfig {
    pub fn new(endpoints: Endpoints, highlight: Option<String>, example_page: u32) -> Self {
        let bindings = DEFAULT_BINDINGS.to_vec();
        let help_line = format!(
            "more: {}",
            bindings
                .iter()
                .map(|b| format!("{}({})", b.label, b.key))
                .collect::<Vec<_>>()
                .join(" | ")
        );
        Self {
            bindings,
            help_line,
            endpoints,
            highlight: highlight.filter(|term| !term.is_empty()),
            example_page,
            input_limit: INPUT_LIMIT,
        }
    }

    pub fn help_line(&self) -> &str {
        &self.help_line
    }

    /// Maps raw input (trimmed, case-insensitive) to a command.
    pub fn classify(&self, input: &str) -> Command {
        let key = input.trim().to_lowercase();
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.command)
            .unwrap_or(Command::Unknown)
    }
}
