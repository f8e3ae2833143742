//! # Session State
//!
//! Everything one interactive lookup owns. Domain state only; presentation
//! state (input buffer, scroll offset) lives in the `tui` module.
//!
//! ```text
//! Session
//! ├── word_id: String                      // resolved by the launcher
//! ├── detail_url: String                   // detail page for word_id
//! ├── example_url_override: Option<String> // replaces the built examples URL
//! ├── detail: Option<String>               // detail page body, fetched once
//! ├── output: String                       // last rendered output
//! ├── output_kind: OutputKind              // which path produced output
//! ├── is_loading: bool                     // a fetch is in flight
//! └── status: String                       // status line text
//! ```
//!
//! State changes only happen through `update(session, config, action)` in
//! action.rs.

/// Which command path produced the current output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Plain,
    Examples,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub word_id: String,
    pub detail_url: String,
    pub example_url_override: Option<String>,
    detail: Option<String>,
    pub output: String,
    pub output_kind: OutputKind,
    pub is_loading: bool,
    pub status: String,
}

impl Session {
    pub fn new(word_id: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            word_id: word_id.into(),
            detail_url: detail_url.into(),
            example_url_override: None,
            detail: None,
            output: String::new(),
            output_kind: OutputKind::Plain,
            is_loading: false,
            status: String::new(),
        }
    }

    pub fn with_example_url(mut self, url: Option<String>) -> Self {
        self.example_url_override = url;
        self
    }

    /// The cached detail page, if it has been fetched.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Stores the detail page. The first body wins; later calls are ignored.
    pub fn cache_detail(&mut self, body: String) {
        if self.detail.is_none() {
            self.detail = Some(body);
        }
    }

    pub fn set_output(&mut self, output: String, kind: OutputKind) {
        self.output = output;
        self.output_kind = kind;
    }
}
