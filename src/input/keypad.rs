//! On-screen keypad buttons.

use crate::calculator::{Event, Operator};

/// A keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

/// Keypad layout, top row first.
pub const KEYPAD: &[&[Button]] = &[
    &[
        Button::Clear,
        Button::Backspace,
        Button::Operator(Operator::Divide),
        Button::Operator(Operator::Multiply),
    ],
    &[
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Operator(Operator::Subtract),
    ],
    &[
        Button::Digit(4),
        Button::Digit(5),
        Button::Digit(6),
        Button::Operator(Operator::Add),
    ],
    &[
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Equals,
    ],
    &[Button::Digit(0), Button::Decimal],
];

impl Button {
    /// Text printed on the button.
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(Operator::Add) => "+".to_string(),
            Self::Operator(Operator::Subtract) => "−".to_string(),
            Self::Operator(Operator::Multiply) => "×".to_string(),
            Self::Operator(Operator::Divide) => "÷".to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// The event sent when the button is pressed.
    pub fn event(self) -> Event {
        match self {
            Self::Digit(d) => Event::Digit(d),
            Self::Decimal => Event::Decimal,
            Self::Operator(op) => Event::Operator(op),
            Self::Equals => Event::Equals,
            Self::Clear => Event::Clear,
            Self::Backspace => Event::Backspace,
        }
    }

    /// Whether this button should be drawn highlighted.
    pub fn is_active(self, active_operator: Option<Operator>) -> bool {
        matches!(self, Self::Operator(op) if Some(op) == active_operator)
    }

    /// Find a button by its label.
    ///
    /// The ASCII operator symbols `-`, `*` and `/` also name their buttons.
    pub fn from_label(label: &str) -> Option<Self> {
        KEYPAD
            .iter()
            .flat_map(|row| row.iter().copied())
            .find(|button| button.label() == label)
            .or_else(|| match label {
                "-" | "*" | "/" => label.parse().ok().map(Self::Operator),
                _ => None,
            })
    }
}
