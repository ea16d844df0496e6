//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the display and
//! keypad, and turns keyboard and mouse events into key presses for the
//! controller.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including a resize). All pending events are
//! drained before the next draw.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::controller::Controller;
use crate::core::view::{Bindings, TokenHandler, TriggerHandler, View};
use crate::tui::component::EventHandler;
use crate::tui::components::Keypad;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// The terminal implementation of [`View`].
///
/// Holds the display text and the keypad. Key presses coming out of the
/// keypad are handed to the bound handlers.
pub struct TerminalView {
    bindings: Bindings,
    display: String,
    pub keypad: Keypad,
}

impl TerminalView {
    pub fn new(mouse: bool) -> Self {
        Self {
            bindings: Bindings::new(),
            display: String::new(),
            keypad: Keypad::new(mouse),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Routes a terminal event through the keypad. Returns true if it
    /// produced a key press.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match self.keypad.handle_event(event) {
            Some(press) => {
                debug!("Key press {:?}", press);
                self.bindings.emit(&press);
                true
            }
            None => false,
        }
    }
}

impl View for TerminalView {
    fn display_message(&mut self, message: &str) {
        self.display = message.to_string();
    }

    fn clear_display(&mut self) {
        self.display.clear();
    }

    fn bind_digit(&mut self, handler: TokenHandler) {
        self.bindings.on_digit(handler);
    }

    fn bind_operator(&mut self, handler: TokenHandler) {
        self.bindings.on_operator(handler);
    }

    fn bind_equal(&mut self, handler: TriggerHandler) {
        self.bindings.on_equal(handler);
    }

    fn bind_clear(&mut self, handler: TriggerHandler) {
        self.bindings.on_clear(handler);
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        info!("Terminal modes enabled (mouse: {})", mouse);
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(stdout(), Show);
    }
}

/// Runs the interactive calculator until the user quits.
pub fn run(controller: &mut Controller<TerminalView>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, controller);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller<TerminalView>,
) -> io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new(controller.view().keypad.mouse)?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, controller.view_mut()))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            needs_redraw = true;
            if event == TuiEvent::Quit {
                info!("Quit requested");
                return Ok(());
            }
            if controller.view_mut().handle_event(&event) {
                controller.process_pending();
            }
            next = poll_event_immediate()?;
        }
    }
}
