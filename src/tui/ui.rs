use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::tui::TerminalView;
use crate::tui::component::Component;
use crate::tui::components::{DISPLAY_HEIGHT, DisplayPanel, HelpBar};

pub fn draw_ui(frame: &mut Frame, view: &mut TerminalView) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(DISPLAY_HEIGHT), Min(0), Length(1)]);
    let [display_area, keypad_area, help_area] = layout.areas(frame.area());

    DisplayPanel::new(view.display()).render(frame, display_area);
    view.keypad.render(frame, keypad_area);
    HelpBar::new(view.keypad.mouse).render(frame, help_area);
}
