//! # InputBox Component
//!
//! Single-line command input.
//!
//! ## Responsibilities
//!
//! - Capture typed characters, up to a fixed character limit
//! - Handle backspace
//! - Emit `Submit` on Enter, clearing the buffer whatever it held
//!
//! The buffer is internal state; the session never sees partial input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "command (a/e/s/q)";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Maximum number of characters (Prop)
    pub limit: usize,
}

impl InputBox {
    pub fn new(limit: usize) -> Self {
        Self {
            buffer: String::new(),
            limit,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Command");

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str()).style(Style::default().fg(Color::Green))
        };
        frame.render_widget(input.block(block), area);

        let cursor_x = area.x + 1 + self.buffer.width() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if self.buffer.chars().count() >= self.limit {
                    return None;
                }
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| InputEvent::ContentChanged),
            TuiEvent::Submit => Some(InputEvent::Submit(std::mem::take(&mut self.buffer))),
            _ => None,
        }
    }
}
