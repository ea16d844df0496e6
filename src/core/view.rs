//! # View
//!
//! The boundary between the calculator and whatever shows it. A view can
//! render text and it emits semantic key presses to whoever bound a handler.
//! It never looks at the model or the controller.
//!
//! ```text
//!   user input ──► View ──► bound handler(token) ──► Controller
//!   Controller ──► View::display_message / clear_display ──► screen
//! ```
//!
//! Frontends keep a [`Bindings`] and call [`Bindings::emit`] once per
//! activated key.

/// Handler for keys that carry a token (digits and operators).
pub type TokenHandler = Box<dyn FnMut(&str)>;
/// Handler for single-purpose keys (equal, clear).
pub type TriggerHandler = Box<dyn FnMut()>;

pub trait View {
    /// Replaces the visible display content.
    fn display_message(&mut self, message: &str);

    /// Empties the visible display content.
    fn clear_display(&mut self);

    fn bind_digit(&mut self, handler: TokenHandler);
    fn bind_operator(&mut self, handler: TokenHandler);
    fn bind_equal(&mut self, handler: TriggerHandler);
    fn bind_clear(&mut self, handler: TriggerHandler);
}

/// A keypad activation, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    Digit(String),
    Operator(String),
    Equal,
    Clear,
}

impl KeyPress {
    /// Maps a typed character to its keypad key. Unknown characters have
    /// no key.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(KeyPress::Digit(c.to_string())),
            '+' | '-' | '*' | '/' => Some(KeyPress::Operator(c.to_string())),
            '=' => Some(KeyPress::Equal),
            'c' | 'C' => Some(KeyPress::Clear),
            _ => None,
        }
    }

    /// Label printed on the keypad button.
    pub fn label(&self) -> &str {
        match self {
            KeyPress::Digit(token) | KeyPress::Operator(token) => token,
            KeyPress::Equal => "=",
            KeyPress::Clear => "C",
        }
    }
}

/// Handlers registered through the `bind_*` methods of a view.
///
/// Several handlers may be bound to the same kind of key. They run in
/// registration order.
#[derive(Default)]
pub struct Bindings {
    digit: Vec<TokenHandler>,
    operator: Vec<TokenHandler>,
    equal: Vec<TriggerHandler>,
    clear: Vec<TriggerHandler>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_digit(&mut self, handler: TokenHandler) {
        self.digit.push(handler);
    }

    pub fn on_operator(&mut self, handler: TokenHandler) {
        self.operator.push(handler);
    }

    pub fn on_equal(&mut self, handler: TriggerHandler) {
        self.equal.push(handler);
    }

    pub fn on_clear(&mut self, handler: TriggerHandler) {
        self.clear.push(handler);
    }

    /// Invokes every handler bound to this kind of key.
    pub fn emit(&mut self, press: &KeyPress) {
        match press {
            KeyPress::Digit(token) => self.digit.iter_mut().for_each(|h| h(token.as_str())),
            KeyPress::Operator(token) => self.operator.iter_mut().for_each(|h| h(token.as_str())),
            KeyPress::Equal => self.equal.iter_mut().for_each(|h| h()),
            KeyPress::Clear => self.clear.iter_mut().for_each(|h| h()),
        }
    }
}
