//! # Keypad Component
//!
//! The clickable button grid.
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ C ] [ 0 ] [ = ] [ + ]
//! ```
//!
//! ## State
//!
//! - `pressed`: the last activated button, drawn highlighted
//! - `button_areas`: where each button landed in the last render pass, used
//!   to turn mouse clicks back into buttons
//!
//! Typed keys and clicks both come out as a [`KeyPress`]; the parent view
//! decides what to do with it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::view::KeyPress;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ROWS: usize = 4;
const COLS: usize = 4;
const LAYOUT: [char; ROWS * COLS] = [
    '7', '8', '9', '/', //
    '4', '5', '6', '*', //
    '1', '2', '3', '-', //
    'C', '0', '=', '+',
];

pub struct Keypad {
    buttons: Vec<KeyPress>,
    pressed: Option<usize>,
    button_areas: Vec<Rect>,
    /// Whether clicks are turned into key presses.
    pub mouse: bool,
}

impl Keypad {
    pub fn new(mouse: bool) -> Self {
        let buttons = LAYOUT.iter().filter_map(|&c| KeyPress::from_char(c)).collect();
        Self {
            buttons,
            pressed: None,
            button_areas: Vec::new(),
            mouse,
        }
    }

    pub fn buttons(&self) -> &[KeyPress] {
        &self.buttons
    }

    /// Index of the highlighted button, if any.
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Button rectangles from the last render pass (empty before the first).
    pub fn button_areas(&self) -> &[Rect] {
        &self.button_areas
    }

    /// Finds the button under a screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.button_areas.iter().position(|area| area.contains(position))
    }

    fn highlight(&mut self, press: &KeyPress) {
        self.pressed = self.buttons.iter().position(|b| b == press);
    }

    fn button_style(press: &KeyPress, is_pressed: bool) -> Style {
        if is_pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match press {
            KeyPress::Digit(_) => Style::default().fg(Color::White),
            KeyPress::Operator(_) => Style::default().fg(Color::Yellow),
            KeyPress::Equal => Style::default().fg(Color::Green),
            KeyPress::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Keypad ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Ratio(1, ROWS as u32); ROWS]).split(inner);
        self.button_areas = rows
            .iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Ratio(1, COLS as u32); COLS])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        for (index, (press, cell)) in self.buttons.iter().zip(&self.button_areas).enumerate() {
            let style = Self::button_style(press, self.pressed == Some(index));
            let label = if cell.height >= 3 {
                let button = Block::bordered().border_style(style);
                let label_area = button.inner(*cell);
                frame.render_widget(button, *cell);
                label_area
            } else {
                *cell
            };
            if label.height == 0 {
                continue;
            }
            // Single centered line
            let line = Rect {
                y: label.y + label.height / 2,
                height: 1,
                ..label
            };
            frame.render_widget(
                Paragraph::new(press.label())
                    .style(style)
                    .alignment(Alignment::Center),
                line,
            );
        }
    }
}

impl EventHandler for Keypad {
    type Event = KeyPress;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<KeyPress> {
        let press = match event {
            TuiEvent::InputChar(c) => KeyPress::from_char(*c),
            TuiEvent::Submit => Some(KeyPress::Equal),
            TuiEvent::Clear => Some(KeyPress::Clear),
            TuiEvent::MouseClick(column, row) if self.mouse => self
                .hit_test(*column, *row)
                .map(|index| self.buttons[index].clone()),
            _ => None,
        }?;
        self.highlight(&press);
        Some(press)
    }
}
