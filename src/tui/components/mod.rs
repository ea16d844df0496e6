//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `DisplayPanel`: the calculator display
//! - `HelpBar`: key hints along the bottom
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Keypad`: button grid that turns typed keys and clicks into key presses
//!
//! Components receive external data as props, never by reaching into the
//! calculator. The keypad does not know what a key press will do; the
//! terminal view forwards it to whatever handlers were bound.

pub mod display_panel;
pub mod help_bar;
pub mod keypad;

pub use display_panel::{DISPLAY_HEIGHT, DisplayPanel};
pub use help_bar::HelpBar;
pub use keypad::Keypad;
