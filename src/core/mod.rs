//! # Core Application Logic
//!
//! The calculator itself. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Model (operands)     │
//!                    │  • Controller (phases)  │
//!                    │  • View (trait)         │
//!                    │                         │
//!                    │  No terminal. No I/O.   │
//!                    └───────────┬─────────────┘
//!                                │ impl View
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Script   │
//!             │  Adapter   │          │  Adapter   │
//!             │ (ratatui)  │          │ (headless) │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `CalculatorModel`, operands, operator and result
//! - [`operator`]: the four arithmetic operations
//! - [`controller`]: the input-sequencing state machine
//! - [`view`]: the `View` trait frontends implement
//! - [`number`]: decimal text form used for digit entry and display
//! - [`config`]: settings file and override resolution

pub mod config;
pub mod controller;
pub mod model;
pub mod number;
pub mod operator;
pub mod view;
