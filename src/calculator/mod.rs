//! Keypad calculator core.
//!
//! This module provides:
//! - Binary arithmetic on two operands with division-by-zero detection
//! - The input state machine that turns key presses into a running calculation
//! - Formatting of results for a fixed-width display
//! - Copying the display to the clipboard

mod clipboard;
mod engine;
mod format;
mod session;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{CalcError, Operator, evaluate};
pub use format::{FormatOptions, format_number};
pub use session::{Calculator, DIVISION_BY_ZERO_MESSAGE, DisplayFrame};
pub use state::{CalculatorState, Event, Screen, Transition, transition};
