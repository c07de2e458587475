//! Input state machine.
//!
//! A [`CalculatorState`] is advanced one [`Event`] at a time by [`transition`],
//! which returns the next state together with a [`Screen`] telling the caller
//! what the display should show. Nothing here touches a terminal or window.

use super::engine::{CalcError, Operator, evaluate};
use super::format::{FormatOptions, format_number};
use serde::Serialize;
use tracing::{debug, warn};

/// A discrete user action, whether it came from a key or a keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event {
    /// A digit 0-9. Larger values are ignored.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}

impl Event {
    /// Map a character from the calculator's own alphabet to an event.
    ///
    /// Only digits, `+ - * /`, `.` and `=` are recognised here; key aliases
    /// and named keys are handled by the input layer.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '+' | '-' | '*' | '/' => Operator::from_char(c).map(Self::Operator),
            _ => None,
        }
    }
}

/// What the display should show after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Leave whatever is currently displayed.
    Keep,
    /// Show the entry buffer.
    Entry,
    /// Show a formatted result.
    Value(String),
    /// Show an error. The state has already been reset.
    Error(CalcError),
}

/// The running calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Left-hand operand waiting for an operator to be applied.
    pub first_operand: Option<f64>,
    /// Operator waiting for its right-hand operand.
    pub current_operator: Option<Operator>,
    /// Number being typed, or the last result after `=`.
    pub entry: String,
    /// Set right after `=` until the next input overwrites the result.
    pub has_result: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            first_operand: None,
            current_operator: None,
            entry: "0".to_string(),
            has_result: false,
        }
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    pub screen: Screen,
}

/// Advance `state` by one event.
pub fn transition(mut state: CalculatorState, event: Event, options: &FormatOptions) -> Transition {
    let screen = state.apply(event, options);
    Transition { state, screen }
}

impl CalculatorState {
    /// Whether the state equals the freshly cleared state.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// The operator to highlight on the keypad, if any.
    pub fn active_operator(&self) -> Option<Operator> {
        self.current_operator
    }

    /// Apply `event` in place and report what to display.
    pub fn apply(&mut self, event: Event, options: &FormatOptions) -> Screen {
        debug!(?event, entry = %self.entry, "applying event");
        match event {
            Event::Digit(digit) => self.push_digit(digit),
            Event::Decimal => self.push_decimal(),
            Event::Operator(op) => self.press_operator(op, options),
            Event::Equals => self.press_equals(options),
            Event::Backspace => self.backspace(),
            Event::Clear => {
                self.reset();
                Screen::Entry
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn push_digit(&mut self, digit: u8) -> Screen {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            debug!(digit, "ignoring out of range digit");
            return Screen::Keep;
        };

        if self.has_result || self.entry == "0" {
            self.entry.clear();
            self.has_result = false;
        }
        self.entry.push(c);
        Screen::Entry
    }

    fn push_decimal(&mut self) -> Screen {
        if self.has_result {
            self.entry = "0.".to_string();
            self.has_result = false;
        } else if !self.entry.contains('.') {
            if self.entry.is_empty() || self.entry == "0" {
                self.entry = "0.".to_string();
            } else {
                self.entry.push('.');
            }
        }
        Screen::Entry
    }

    fn press_operator(&mut self, op: Operator, options: &FormatOptions) -> Screen {
        let Some(first) = self.first_operand else {
            self.first_operand = Some(parse_entry(&self.entry));
            self.current_operator = Some(op);
            self.entry.clear();
            self.has_result = false;
            return Screen::Keep;
        };

        match self.pending_operator() {
            // A second operand has been typed: fold the pair before moving on.
            Some(pending) => match evaluate(pending, first, parse_entry(&self.entry)) {
                Ok(value) => {
                    let text = format_number(value, options);
                    debug!(%pending, value, "chained evaluation");
                    self.first_operand = Some(value);
                    self.current_operator = Some(op);
                    self.entry.clear();
                    self.has_result = false;
                    Screen::Value(text)
                }
                Err(err) => self.fail(err),
            },
            None => {
                self.current_operator = Some(op);
                if self.has_result {
                    self.first_operand = Some(parse_entry(&self.entry));
                    self.entry.clear();
                    self.has_result = false;
                }
                Screen::Keep
            }
        }
    }

    fn press_equals(&mut self, options: &FormatOptions) -> Screen {
        let (Some(first), Some(pending)) = (self.first_operand, self.pending_operator()) else {
            return Screen::Keep;
        };

        match evaluate(pending, first, parse_entry(&self.entry)) {
            Ok(value) => {
                let text = format_number(value, options);
                self.entry = text.clone();
                self.first_operand = None;
                self.current_operator = None;
                self.has_result = true;
                Screen::Value(text)
            }
            Err(err) => self.fail(err),
        }
    }

    fn backspace(&mut self) -> Screen {
        if self.has_result {
            self.entry = "0".to_string();
            self.has_result = false;
        } else {
            self.entry.pop();
            if self.entry.is_empty() || self.entry == "-" {
                self.entry = "0".to_string();
            }
        }
        Screen::Entry
    }

    /// The operator, if a right-hand operand has been typed for it.
    fn pending_operator(&self) -> Option<Operator> {
        self.current_operator
            .filter(|_| !self.entry.is_empty() && !self.has_result)
    }

    fn fail(&mut self, err: CalcError) -> Screen {
        debug!(%err, "calculation failed, resetting");
        self.reset();
        Screen::Error(err)
    }
}

/// Parse the entry buffer as a number.
///
/// The buffer is only ever built from digits, one `.`, and formatted results,
/// so a parse failure means a bug elsewhere. It reads as zero.
fn parse_entry(entry: &str) -> f64 {
    entry.parse().unwrap_or_else(|_| {
        warn!(entry, "entry buffer is not a number");
        0.0
    })
}
