//! # HelpBar Component
//!
//! Top line listing the available commands, plus a spinner and status text
//! while a fetch is in flight.
//!
//! Stateless: everything it shows arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct HelpBar<'a> {
    /// e.g. "more: antonym(a) | example sentences(e) | synonym(s) | quit(q)"
    pub help_line: &'a str,
    /// Empty when idle.
    pub status: &'a str,
    pub spinner_frame: usize,
}

impl<'a> HelpBar<'a> {
    pub fn new(help_line: &'a str, status: &'a str, spinner_frame: usize) -> Self {
        Self {
            help_line,
            status,
            spinner_frame,
        }
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(self.help_line)];
        if !self.status.is_empty() {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{spinner} {}", self.status),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
