//! Keyboard input.
//!
//! Key sequences are written as plain characters with named keys in angle
//! brackets, e.g. `12+7<Enter>` or `3.14<Backspace><Delete>`. A keypad label
//! in square brackets presses that button, e.g. `6[×]7[=]`.

use super::keypad::Button;
use crate::calculator::{Event, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Matches a named key like `<Enter>`, a button like `[÷]`, or any single
    /// non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"<([A-Za-z]+)>|\[([^\[\]\s]+)\]|\S").unwrap();
}

/// Keys that have a name rather than a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Enter,
    Backspace,
    Delete,
    Escape,
}

impl NamedKey {
    /// Look up a key name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Enter),
            "backspace" | "bs" => Some(Self::Backspace),
            "delete" | "del" => Some(Self::Delete),
            "escape" | "esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Named(NamedKey),
}

impl Key {
    /// The calculator event for this key, if it has one.
    pub fn event(self) -> Option<Event> {
        match self {
            Self::Char(c) => char_event(c),
            Self::Named(NamedKey::Enter) => Some(Event::Equals),
            Self::Named(NamedKey::Backspace) => Some(Event::Backspace),
            Self::Named(NamedKey::Delete | NamedKey::Escape) => Some(Event::Clear),
        }
    }
}

fn char_event(c: char) -> Option<Event> {
    if let Some(event) = Event::from_symbol(c) {
        return Some(event);
    }
    match c {
        'c' | 'C' => Some(Event::Clear),
        _ => Operator::from_char(c).map(Event::Operator),
    }
}

/// One input from either the keyboard or the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Button(Button),
}

impl Input {
    pub fn event(self) -> Option<Event> {
        match self {
            Self::Key(key) => key.event(),
            Self::Button(button) => Some(button.event()),
        }
    }
}

/// Split a key sequence into inputs.
///
/// Whitespace is dropped. Unknown names in angle or square brackets are
/// skipped.
pub fn parse_inputs(input: &str) -> Vec<Input> {
    KEY_TOKEN
        .captures_iter(input)
        .filter_map(|caps| {
            if let Some(name) = caps.get(1) {
                let key = NamedKey::from_name(name.as_str()).map(|k| Input::Key(Key::Named(k)));
                if key.is_none() {
                    debug!(name = name.as_str(), "unknown key name");
                }
                key
            } else if let Some(label) = caps.get(2) {
                let button = Button::from_label(label.as_str()).map(Input::Button);
                if button.is_none() {
                    debug!(label = label.as_str(), "unknown button");
                }
                button
            } else {
                caps[0].chars().next().map(|c| Input::Key(Key::Char(c)))
            }
        })
        .collect()
}

/// Turn a key sequence into calculator events, dropping inputs with no meaning.
pub fn parse_events(input: &str) -> Vec<Event> {
    parse_inputs(input)
        .into_iter()
        .filter_map(|input| {
            let event = input.event();
            if event.is_none() {
                debug!(?input, "ignoring input");
            }
            event
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        assert_eq!(
            parse_events("1+2="),
            vec![
                Event::Digit(1),
                Event::Operator(Operator::Add),
                Event::Digit(2),
                Event::Equals,
            ]
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            parse_inputs("<Enter><backspace><DEL><esc>"),
            vec![
                Input::Key(Key::Named(NamedKey::Enter)),
                Input::Key(Key::Named(NamedKey::Backspace)),
                Input::Key(Key::Named(NamedKey::Delete)),
                Input::Key(Key::Named(NamedKey::Escape)),
            ]
        );
        assert_eq!(
            parse_events("9<Enter><Backspace><Delete>"),
            vec![
                Event::Digit(9),
                Event::Equals,
                Event::Backspace,
                Event::Clear
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(parse_events(" 5 \t* 3 "), parse_events("5*3"));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            parse_events("x×÷c"),
            vec![
                Event::Operator(Operator::Multiply),
                Event::Operator(Operator::Multiply),
                Event::Operator(Operator::Divide),
                Event::Clear,
            ]
        );
    }

    #[test]
    fn test_buttons() {
        assert_eq!(
            parse_inputs("6[×]"),
            vec![
                Input::Key(Key::Char('6')),
                Input::Button(Button::Operator(Operator::Multiply)),
            ]
        );
        assert_eq!(
            parse_events("[C][7][⌫][=]"),
            vec![Event::Clear, Event::Digit(7), Event::Backspace, Event::Equals]
        );
        assert_eq!(
            parse_events("9[-]4[=]"),
            vec![
                Event::Digit(9),
                Event::Operator(Operator::Subtract),
                Event::Digit(4),
                Event::Equals,
            ]
        );
    }

    #[test]
    fn test_unknown_keys_dropped() {
        assert_eq!(parse_events("[AC]2"), vec![Event::Digit(2)]);
        assert_eq!(parse_events("a%<Tab>1"), vec![Event::Digit(1)]);
        // A stray bracket is just an ignored character.
        assert_eq!(parse_events("<1"), vec![Event::Digit(1)]);
    }
}
