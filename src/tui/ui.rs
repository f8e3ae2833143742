use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::commands::SessionConfig;
use crate::core::state::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, OutputView};

/// Width of the command box, borders included.
const INPUT_WIDTH: u16 = 32;

pub fn draw_ui(
    frame: &mut Frame,
    session: &Session,
    config: &SessionConfig,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0)]);
    let [help_area, input_row, output_area] = layout.areas(frame.area());
    let [input_area, _] = Layout::horizontal([Length(INPUT_WIDTH), Min(0)]).areas(input_row);

    HelpBar::new(config.help_line(), &session.status, spinner_frame).render(frame, help_area);
    tui.input_box.render(frame, input_area);
    OutputView {
        state: &mut tui.output_view,
        output: &session.output,
        kind: session.output_kind,
        highlight: config.highlight.as_deref(),
    }
    .render(frame, output_area);
}
