//! # DisplayPanel Component
//!
//! The calculator display: one right-aligned line inside a rounded border.
//! Stateless; the text is a prop owned by the terminal view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Height of the panel including its border.
pub const DISPLAY_HEIGHT: u16 = 3;

pub struct DisplayPanel<'a> {
    /// Text currently on the display (may be empty)
    pub text: &'a str,
}

impl<'a> DisplayPanel<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Component for DisplayPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Tally ");

        let display = Paragraph::new(self.text)
            .block(block)
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(display, area);
    }
}
