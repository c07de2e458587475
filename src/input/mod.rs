//! Keyboard and keypad input, both funneled into calculator events.

mod keypad;
mod keys;

pub use keypad::{Button, KEYPAD};
pub use keys::{Input, Key, NamedKey, parse_events, parse_inputs};
