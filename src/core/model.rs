//! # Calculator Model
//!
//! Arithmetic state for one pending calculation:
//!
//! ```text
//! CalculatorModel
//! ├── first_operand: f64
//! ├── second_operand: f64
//! ├── operator: Option<Operator>
//! └── result: f64
//! ```
//!
//! The model does no validation. Sequencing rules (an operator needs a first
//! operand, equal needs everything) belong to the controller.

use crate::core::operator::Operator;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorModel {
    first_operand: f64,
    second_operand: f64,
    operator: Option<Operator>,
    result: f64,
}

impl CalculatorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn second_operand(&self) -> f64 {
        self.second_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn set_first_operand(&mut self, value: f64) {
        self.first_operand = value;
    }

    pub fn set_second_operand(&mut self, value: f64) {
        self.second_operand = value;
    }

    pub fn set_operator(&mut self, operator: Option<Operator>) {
        self.operator = operator;
    }

    /// Applies the stored operator to both operands, stores the result and
    /// returns it. With no operator the result is 0.
    pub fn calculate(&mut self) -> f64 {
        self.result = match self.operator {
            Some(op) => op.apply(self.first_operand, self.second_operand),
            None => 0.0,
        };
        self.result
    }

    /// Back to zero operands, no operator and a zero result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
