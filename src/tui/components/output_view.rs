//! # OutputView Component
//!
//! Scrollable view of the last command's output.
//!
//! `OutputView` is created each frame and wraps `&mut OutputViewState`
//! (persistent scroll state) plus the output text (props). Example output
//! gets the highlight term emphasized; every other output renders verbatim.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::highlight::{Fragment, highlight};
use crate::core::state::OutputKind;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Style applied to highlighted occurrences.
pub fn emphasis_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct OutputViewState {
    pub scroll_state: ScrollViewState,
}

impl OutputViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the output is replaced.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for OutputViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

pub struct OutputView<'a> {
    pub state: &'a mut OutputViewState,
    pub output: &'a str,
    pub kind: OutputKind,
    pub highlight: Option<&'a str>,
}

/// Builds display text, emphasizing `term` paragraph by paragraph.
pub fn highlighted_text<'a>(output: &'a str, term: &str) -> Text<'a> {
    let mut lines: Vec<Line<'a>> = Vec::new();
    for (i, paragraph) in highlight(output, term).into_iter().enumerate() {
        if i > 0 {
            // The blank line that separated the paragraphs
            lines.push(Line::default());
        }
        let mut current: Vec<Span<'a>> = Vec::new();
        for fragment in paragraph {
            let (text, style) = match fragment {
                Fragment::Plain(s) => (s, Style::default()),
                Fragment::Emphasis(s) => (s, emphasis_style()),
            };
            let mut pieces = text.split('\n');
            if let Some(first) = pieces.next()
                && !first.is_empty()
            {
                current.push(Span::styled(first, style));
            }
            for piece in pieces {
                lines.push(Line::from(std::mem::take(&mut current)));
                if !piece.is_empty() {
                    current.push(Span::styled(piece, style));
                }
            }
        }
        lines.push(Line::from(current));
    }
    Text::from(lines)
}

impl<'a> OutputView<'a> {
    fn text(&self) -> Text<'a> {
        match (self.kind, self.highlight) {
            (OutputKind::Examples, Some(term)) => highlighted_text(self.output, term),
            _ => Text::raw(self.output),
        }
    }
}

impl Component for OutputView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.text()).wrap(Wrap { trim: false });
        let height = (paragraph.line_count(content_width) as u16).max(area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
