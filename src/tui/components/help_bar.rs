//! # HelpBar Component
//!
//! Bottom line listing the keys. Stateless, like the title bar it grew out
//! of: everything it shows comes in as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct HelpBar {
    /// Whether keypad buttons can be clicked
    pub mouse: bool,
}

impl HelpBar {
    pub fn new(mouse: bool) -> Self {
        Self { mouse }
    }

    pub fn text(&self) -> String {
        let mut text = String::from("0-9 +-*/ | = Enter: equals | c Esc: clear | q: quit");
        if self.mouse {
            text.push_str(" | click keys");
        }
        text
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_mouse_hint_follows_prop() {
        assert!(HelpBar::new(true).text().ends_with("click keys"));
        assert!(!HelpBar::new(false).text().contains("click"));
    }

    #[test]
    fn test_render() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut help_bar = HelpBar::new(false);
        terminal.draw(|f| help_bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("q: quit"));
    }
}
