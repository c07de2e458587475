//! A calculator session: the state machine plus what is currently displayed.

use super::engine::{CalcError, Operator};
use super::format::{FormatOptions, format_number};
use super::state::{CalculatorState, Event, Screen, transition};
use serde::Serialize;

/// Default text shown when dividing by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

/// Snapshot of the display after an event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayFrame {
    /// The single line of text on the display.
    pub text: String,
    /// Operator to highlight on the keypad.
    pub active_operator: Option<Operator>,
    /// Whether `text` is an error message rather than a number.
    pub is_error: bool,
}

impl DisplayFrame {
    /// Get the text to copy to clipboard.
    pub fn clipboard_text(&self) -> &str {
        &self.text
    }
}

/// Owns the calculator state and renders it after every event.
pub struct Calculator {
    state: CalculatorState,
    display: String,
    is_error: bool,
    options: FormatOptions,
    division_by_zero_message: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(FormatOptions::default(), DIVISION_BY_ZERO_MESSAGE)
    }
}

impl Calculator {
    pub fn new(options: FormatOptions, division_by_zero_message: impl Into<String>) -> Self {
        let state = CalculatorState::default();
        Self {
            display: state.entry.clone(),
            state,
            is_error: false,
            options,
            division_by_zero_message: division_by_zero_message.into(),
        }
    }

    /// Handle one event and return the resulting display.
    pub fn dispatch(&mut self, event: Event) -> DisplayFrame {
        let previous = std::mem::take(&mut self.state);
        let showing_error = self.is_error;
        let next = transition(previous.clone(), event, &self.options);
        self.state = next.state;

        match next.screen {
            // Leaving an error behind: show the operand the calculation now
            // continues from instead of the stale message.
            Screen::Keep if showing_error && self.state != previous => {
                let text = match self.state.first_operand {
                    Some(value) => format_number(value, &self.options),
                    None => self.state.entry.clone(),
                };
                self.show(text, false);
            }
            Screen::Keep => {}
            Screen::Entry => self.show(self.state.entry.clone(), false),
            Screen::Value(text) => self.show(text, false),
            Screen::Error(err) => {
                let message = self.error_message(&err);
                self.show(message, true);
            }
        }

        self.frame()
    }

    /// Handle a sequence of events, returning the final display.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) -> DisplayFrame {
        for event in events {
            self.dispatch(event);
        }
        self.frame()
    }

    /// The current display.
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            text: self.display.clone(),
            active_operator: self.state.active_operator(),
            is_error: self.is_error,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    fn show(&mut self, text: String, is_error: bool) {
        self.display = text;
        self.is_error = is_error;
    }

    fn error_message(&self, err: &CalcError) -> String {
        match err {
            CalcError::DivisionByZero => self.division_by_zero_message.clone(),
            other => other.to_string(),
        }
    }
}
