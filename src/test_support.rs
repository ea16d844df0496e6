//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::controller::Controller;
use crate::core::model::CalculatorModel;
use crate::core::view::{Bindings, KeyPress, TokenHandler, TriggerHandler, View};

/// A view that remembers everything the controller told it.
#[derive(Default)]
pub struct RecordingView {
    bindings: Bindings,
    display: String,
    messages: Vec<String>,
    clears: usize,
    bound: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates a key press. Characters without a key are ignored.
    pub fn press(&mut self, c: char) {
        if let Some(press) = KeyPress::from_char(c) {
            self.bindings.emit(&press);
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn bound_handler_count(&self) -> usize {
        self.bound
    }
}

impl View for RecordingView {
    fn display_message(&mut self, message: &str) {
        self.display = message.to_string();
        self.messages.push(message.to_string());
    }

    fn clear_display(&mut self) {
        self.display.clear();
        self.clears += 1;
    }

    fn bind_digit(&mut self, handler: TokenHandler) {
        self.bound += 1;
        self.bindings.on_digit(handler);
    }

    fn bind_operator(&mut self, handler: TokenHandler) {
        self.bound += 1;
        self.bindings.on_operator(handler);
    }

    fn bind_equal(&mut self, handler: TriggerHandler) {
        self.bound += 1;
        self.bindings.on_equal(handler);
    }

    fn bind_clear(&mut self, handler: TriggerHandler) {
        self.bound += 1;
        self.bindings.on_clear(handler);
    }
}

/// Creates a controller over a fresh model and a recording view.
pub fn test_controller() -> Controller<RecordingView> {
    Controller::new(CalculatorModel::new(), RecordingView::new())
}
