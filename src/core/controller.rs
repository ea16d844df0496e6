//! # Controller
//!
//! Owns the model and the view, and decides what each key press means.
//!
//! On construction the controller binds a handler for every key kind on the
//! view. The handlers only queue an [`Input`]; the frontend calls
//! [`Controller::process_pending`] after handing an event to the view, and
//! the queued inputs are applied in order.
//!
//! ```text
//! Empty ──digit──► FirstEntering ──op──► OperatorSet ──digit──► Ready
//!   ▲                                                            │
//!   └────────────────────────── clear ◄──────────────────────────┘
//! ```
//!
//! Out-of-order keys (an operator before any digit, equal before the second
//! operand) are dropped without any message. Equal does not rewind the
//! phase, so digits typed after a result keep extending the second operand.

use log::{debug, info};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::model::CalculatorModel;
use crate::core::number::{append_digit, format_number};
use crate::core::operator::Operator;
use crate::core::view::View;

/// A key press queued by a view handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Digit(String),
    Operator(String),
    Equal,
    Clear,
}

/// Which input phases have happened since the last clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputProgress {
    pub first_entered: bool,
    pub operator_entered: bool,
    pub second_entered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    FirstEntering,
    OperatorSet,
    /// Second operand entered; equal will calculate.
    Ready,
}

impl InputProgress {
    pub fn phase(&self) -> Phase {
        match (self.first_entered, self.operator_entered, self.second_entered) {
            (true, true, true) => Phase::Ready,
            (true, true, false) => Phase::OperatorSet,
            (true, false, _) => Phase::FirstEntering,
            _ => Phase::Empty,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.first_entered && self.operator_entered && self.second_entered
    }
}

pub struct Controller<V: View> {
    model: CalculatorModel,
    view: V,
    progress: InputProgress,
    inputs: Receiver<Input>,
}

impl<V: View> Controller<V> {
    pub fn new(model: CalculatorModel, mut view: V) -> Self {
        let (tx, rx) = mpsc::channel();

        let digits = tx.clone();
        view.bind_digit(Box::new(move |token: &str| {
            forward(&digits, Input::Digit(token.to_string()))
        }));
        let operators = tx.clone();
        view.bind_operator(Box::new(move |token: &str| {
            forward(&operators, Input::Operator(token.to_string()))
        }));
        let equal = tx.clone();
        view.bind_equal(Box::new(move || forward(&equal, Input::Equal)));
        view.bind_clear(Box::new(move || forward(&tx, Input::Clear)));

        Self {
            model,
            view,
            progress: InputProgress::default(),
            inputs: rx,
        }
    }

    pub fn model(&self) -> &CalculatorModel {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access for the frontend loop, which feeds UI events into the
    /// view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn progress(&self) -> InputProgress {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.progress.phase()
    }

    /// Applies every input queued by the view's handlers. Returns how many
    /// were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(input) = self.inputs.try_recv() {
            self.handle(input);
            applied += 1;
        }
        applied
    }

    pub fn handle(&mut self, input: Input) {
        debug!("Controller received {:?} in phase {:?}", input, self.phase());
        match input {
            Input::Digit(token) => self.handle_digit(&token),
            Input::Operator(symbol) => self.handle_operator(&symbol),
            Input::Equal => self.handle_equal(),
            Input::Clear => self.handle_clear(),
        }
    }

    pub fn handle_digit(&mut self, digit: &str) {
        let shown = if !self.progress.operator_entered {
            let value = append_digit(self.model.first_operand(), digit);
            self.model.set_first_operand(value);
            self.progress.first_entered = true;
            value
        } else {
            let value = append_digit(self.model.second_operand(), digit);
            self.model.set_second_operand(value);
            self.progress.second_entered = true;
            value
        };
        self.view.display_message(&format_number(shown));
    }

    pub fn handle_operator(&mut self, symbol: &str) {
        if !self.progress.first_entered {
            debug!("Ignoring operator {:?}: no first operand yet", symbol);
            return;
        }
        let operator = Operator::from_symbol(symbol);
        if operator.is_none() {
            debug!("Unrecognised operator symbol {:?}, calculation will yield 0", symbol);
        }
        self.model.set_operator(operator);
        self.progress.operator_entered = true;
        self.view.display_message(symbol);
    }

    pub fn handle_equal(&mut self) {
        if !self.progress.is_ready() {
            debug!("Ignoring equal in phase {:?}", self.phase());
            return;
        }
        let result = self.model.calculate();
        info!(
            "Calculated {} {} {} = {}",
            format_number(self.model.first_operand()),
            self.model.operator().map_or("?", Operator::symbol),
            format_number(self.model.second_operand()),
            format_number(result)
        );
        self.view.display_message(&format_number(result));
    }

    pub fn handle_clear(&mut self) {
        self.model.reset();
        self.progress = InputProgress::default();
        self.view.clear_display();
    }
}

// The receiver lives in the same controller as the view holding `tx`, so
// the send can't fail while anyone is still pressing keys.
fn forward(tx: &Sender<Input>, input: Input) {
    let _ = tx.send(input);
}
