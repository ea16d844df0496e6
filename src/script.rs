//! # Script Adapter
//!
//! Runs the calculator without a terminal: a string of keys goes in, the
//! display text comes out. Used by `tally --keys` and by integration tests.

use log::debug;

use crate::core::controller::Controller;
use crate::core::view::{Bindings, KeyPress, TokenHandler, TriggerHandler, View};

/// A headless view. Every display update is kept in a transcript.
#[derive(Default)]
pub struct ScriptView {
    bindings: Bindings,
    display: String,
    transcript: Vec<String>,
}

impl ScriptView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Display text after each update, oldest first. A cleared display
    /// shows up as an empty entry.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Activates the key for `c`. Returns false if `c` is not a calculator
    /// key.
    pub fn press(&mut self, c: char) -> bool {
        match KeyPress::from_char(c) {
            Some(press) => {
                self.bindings.emit(&press);
                true
            }
            None => false,
        }
    }
}

impl View for ScriptView {
    fn display_message(&mut self, message: &str) {
        self.display = message.to_string();
        self.transcript.push(self.display.clone());
    }

    fn clear_display(&mut self) {
        self.display.clear();
        self.transcript.push(String::new());
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

/// Presses each key in `keys` in order and returns the final display.
///
/// Whitespace and characters that aren't calculator keys are skipped.
pub fn run_script(controller: &mut Controller<ScriptView>, keys: &str) -> String {
    for c in keys.chars() {
        if !controller.view_mut().press(c) {
            if !c.is_whitespace() {
                debug!("Skipping non-calculator key {:?}", c);
            }
            continue;
        }
        controller.process_pending();
    }
    controller.view().display().to_string()
}
